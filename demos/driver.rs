//! Walks a tree through the life the library is built for: a balanced build, some inserts that
//! skew it, and a rebuild.
//!
//! Run with `cargo run --example driver`.

use ordered_tree::Tree;

fn print_orders(tree: &Tree<i32>) {
    println!("InOrder: {:?}", tree.in_order().collect::<Vec<_>>());
    println!("PreOrder: {:?}", tree.pre_order().collect::<Vec<_>>());
    println!("PostOrder: {:?}", tree.post_order().collect::<Vec<_>>());
    println!("LevelOrder: {:?}", tree.level_order().collect::<Vec<_>>());
}

fn main() {
    let mut tree = Tree::build([4, 5, 1]);
    print!("{}", tree);

    tree.insert(2);
    tree.insert(6);
    print!("{}", tree);

    // The right side is now two levels taller than the left below 5.
    tree.insert(7);
    println!("balanced: {}", tree.is_balanced());

    tree.insert(3);
    tree.rebalance();
    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());

    print_orders(&tree);
}
