use ordered_tree::{Node, Tree};

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebuilds we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                let inserted = bst.try_insert(x.clone()).is_ok();
                assert_eq!(inserted, set.insert(x.clone()));
            }
            Op::Delete(x) => {
                assert_eq!(bst.delete(x), set.take(x));
            }
            Op::Rebalance => {
                bst.rebalance();
            }
        }
        assert_eq!(bst.len(), set.len());
    }
}

/// Checks left < node < right for every node by carrying the bounds down.
fn ordered<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
    let Some(node) = node else {
        return true;
    };
    let value = node.value();
    low.map_or(true, |low| low < value)
        && high.map_or(true, |high| value < high)
        && ordered(node.left(), low, Some(value))
        && ordered(node.right(), Some(value), high)
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.in_order().eq(set.iter())
    }

    fn bst_invariant_after_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        xs.into_iter().all(|x| {
            tree.insert(x);
            ordered(tree.root(), None, None)
        })
    }

    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree = Tree::build(xs.clone());
        let len = tree.len();
        let before: Vec<_> = tree.level_order().copied().collect();

        for x in &xs {
            tree.insert(*x);
        }

        tree.len() == len && tree.level_order().copied().eq(before)
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }

    fn first_and_last(xs: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());

        tree.first() == xs.iter().min() && tree.last() == xs.iter().max()
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
            && ordered(tree.root(), None, None)
    }

    fn missing_delete_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree = Tree::build(xs.into_iter().filter(|x| *x != missing));
        let before = tree.clone();

        tree.delete(&missing).is_none() && tree == before && tree.len() == before.len()
    }

    fn rebalance_restores_balance(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let values: Vec<_> = tree.in_order().copied().collect();

        tree.rebalance();
        tree.is_balanced() && tree.in_order().copied().eq(values)
    }

    fn balanced_height_is_logarithmic(xs: Vec<i8>) -> bool {
        let tree = Tree::build(xs);
        // ceil(log2(n + 1)) - 1
        let expected = (usize::BITS - tree.len().leading_zeros()) as isize - 1;

        tree.height() == expected
    }
}

#[test]
fn scenario_from_three_values() {
    let mut tree = Tree::build([4, 5, 1]);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 4, 5]);
    assert_eq!(tree.root().map(Node::value), Some(&4));

    tree.insert(2);
    tree.insert(6);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 6]);

    tree.insert(7);
    assert!(!tree.is_balanced());

    tree.insert(3);
    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn scenario_seven_values() {
    let mut tree = Tree::build(1..=7);

    assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2, 5, 7, 6, 4]);

    assert_eq!(tree.delete(&4), Some(4));
    assert_eq!(tree.root().map(Node::value), Some(&5));
    assert_eq!(tree.len(), 6);
}
