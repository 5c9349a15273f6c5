use bstree::recursive::Tree;

fn main() {
    let values = [50, 30, 70, 20, 40, 60, 80];

    let mut tree = Tree::new();
    for value in values {
        tree.insert(value);
    }

    println!("Inorder:");
    tree.in_order(|value| print!("{} ", value));
    println!();
}
