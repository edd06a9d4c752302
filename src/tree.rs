//! A Binary Search Tree that is built balanced and can be rebuilt balanced on demand. Inserts and
//! deletes do not rotate, so a tree can drift out of balance; [`Tree::rebalance`] restores it by
//! rebuilding from the sorted values.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::build([4, 5, 1]);
//! assert_eq!(tree.root().map(|root| *root.value()), Some(4));
//!
//! tree.insert(2);
//! tree.insert(6);
//! tree.insert(7);
//!
//! // Skewed inserts leave the right side too tall.
//! assert!(!tree.is_balanced());
//!
//! tree.insert(3);
//! tree.rebalance();
//!
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::traversal::{InOrder, IntoIter, LevelOrder, PostOrder, PreOrder};
use crate::util;

/// A Binary Search Tree holding unique values in their natural order.
///
/// Two trees compare equal (and are ordered) by their level-order sequences, so the comparison
/// sees shape as well as content.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink children before their parents go so a long spine doesn't recurse.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Children come out of a post-order walk before their parent, so each node's copied
        // subtrees are on top of `built` when it is reached.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut nodes = PostOrder::new(self.root());
        while let Some(node) = nodes.next_node() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Node::boxed(node.value.clone(), left, right));
        }
        debug_assert!(built.len() <= 1);
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.level_order()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from `elements`. Duplicates are dropped and the rest sorted; each
    /// subtree is then rooted at the middle of its range, the lower middle for even ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(2));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        Self::from_sorted(util::sorted_unique(elements.into_iter().collect()))
    }

    /// Builds a balanced tree from values that are already sorted and unique.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let mut values = values.into_iter();
        let root = Self::build_range(&mut values, len);
        debug_assert!(values.next().is_none());
        Self { root, len }
    }

    /// Builds a balanced subtree out of the next `len` values of `values`, consuming them in
    /// order so the left subtree takes the smallest ones.
    fn build_range<I>(values: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let mid = util::lower_middle(len);
        let left = Self::build_range(values, mid);
        let value = values.next()?;
        let right = Self::build_range(values, len - mid - 1);
        Some(Node::boxed(value, left, right))
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf and returns the root. Inserting a value that is already
    /// present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let root = tree.insert(5);
    /// assert_eq!(root.value(), &5);
    ///
    /// tree.insert(3);
    /// tree.insert(3);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> &Node<T>
    where
        T: Ord,
    {
        if !self.insert_leaf(value) {
            trace!("ignored duplicate insert, len stays {}", self.len);
        }
        self.root().expect("Inserting leaves a root")
    }

    /// Like [`insert`](Self::insert) but reports a duplicate instead of ignoring it.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyExists`](Error::AlreadyExists) if `value` is already in the tree. The
    /// tree is left untouched.
    pub fn try_insert(&mut self, value: T) -> Result<&Node<T>>
    where
        T: Ord,
    {
        if self.insert_leaf(value) {
            Ok(self.root().expect("Inserting leaves a root"))
        } else {
            Err(Error::AlreadyExists)
        }
    }

    /// Walks down to the empty slot `value` belongs in and hangs a new leaf there. Returns
    /// `false` without touching the tree if `value` is already present.
    fn insert_leaf(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Box::new(Node::leaf(value)));
        self.len += 1;
        true
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.find(&6).map(|node| *node.value()), Some(6));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
                Ordering::Equal => return Some(n),
            };
        }
        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Deletes `value` from the tree and returns it. If the tree does not contain `value`,
    /// nothing happens and `None` is returned.
    ///
    /// A node with two children is not moved: it takes over its in-order successor's value and
    /// the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.delete(&4), Some(4));
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(5));
    /// assert_eq!(tree.len(), 6);
    ///
    /// assert_eq!(tree.delete(&4), None);
    /// assert_eq!(tree.len(), 6);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let Some(link) = Self::locate(&mut self.root, value) else {
            trace!("delete missed, len stays {}", self.len);
            return None;
        };
        let removed = Self::unlink(link)?;
        self.len -= 1;
        Some(removed)
    }

    /// Returns the slot holding the node with `value`, if any.
    fn locate<'a>(mut link: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        loop {
            let ordering = value.cmp(&link.as_ref()?.value);
            if ordering == Ordering::Equal {
                return Some(link);
            }
            let node = link.as_mut()?;
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Removes the node in `link` and returns its value, leaving `link` holding whatever
    /// replaces it.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => Some(node.value),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Some(node.value)
            }
            (Some(left), right @ Some(_)) => {
                node.left = Some(left);
                node.right = right;
                // The successor has no left child, so popping it only splices its right child.
                let successor =
                    Node::pop_leftmost(&mut node.right).expect("Right subtree is not empty");
                let removed = mem::replace(&mut node.value, successor);
                *link = Some(node);
                Some(removed)
            }
        }
    }

    /// The height of the tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> isize {
        Self::height_of(self.root())
    }

    /// The height of the subtree rooted at `node`, with an absent node counting as `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, Tree};
    ///
    /// let tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(Tree::height_of(tree.root().and_then(Node::left)), 1);
    /// assert_eq!(Tree::<i32>::height_of(None), -1);
    /// ```
    pub fn height_of(node: Option<&Node<T>>) -> isize {
        Self::checked_height(node, |_, _| true).unwrap_or(-1)
    }

    /// Whether every node's subtrees differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        Self::balanced_at(self.root())
    }

    /// Whether the subtree rooted at `node` is balanced. An absent node is.
    pub fn balanced_at(node: Option<&Node<T>>) -> bool {
        Self::checked_height(node, |left, right| left.abs_diff(right) <= 1).is_some()
    }

    /// Computes the height of the subtree at `root` bottom-up. Gives up with `None` as soon as
    /// `accept` rejects the child heights of some node.
    fn checked_height<F>(root: Option<&Node<T>>, accept: F) -> Option<isize>
    where
        F: Fn(isize, isize) -> bool,
    {
        // Post-order leaves a node's subtree heights on top of the stack, right above left.
        let mut heights = Vec::new();
        let mut nodes = PostOrder::new(root);
        while let Some(node) = nodes.next_node() {
            let right = if node.right.is_some() { heights.pop()? } else { -1 };
            let left = if node.left.is_some() { heights.pop()? } else { -1 };
            if !accept(left, right) {
                return None;
            }
            heights.push(1 + left.max(right));
        }
        Some(heights.pop().unwrap_or(-1))
    }

    /// Number of edges from the root down to `target`. See [`depth_from`](Self::depth_from).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.depth(tree.root()), Some(0));
    /// assert_eq!(tree.depth(tree.find(&3)), Some(2));
    /// assert_eq!(tree.depth(None), None);
    /// ```
    pub fn depth(&self, target: Option<&Node<T>>) -> Option<usize>
    where
        T: Ord,
    {
        Self::depth_from(target, self.root())
    }

    /// Number of edges from `from` down to `target`, or `None` if either is absent or `target`
    /// can't be reached. The walk steers by comparing `target`'s value with each node's value,
    /// so `target` is expected to be a node of the same tree.
    pub fn depth_from(target: Option<&Node<T>>, from: Option<&Node<T>>) -> Option<usize>
    where
        T: Ord,
    {
        let target = &target?.value;
        let mut current = from?;
        let mut depth = 0;
        loop {
            current = match target.cmp(&current.value) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => current.left()?,
                Ordering::Greater => current.right()?,
            };
            depth += 1;
        }
    }

    /// Rebuilds the tree from its sorted values if it's out of balance. A balanced tree is left
    /// exactly as it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=4 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 3);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    pub fn rebalance(&mut self) -> &mut Self {
        if self.is_balanced() {
            return self;
        }

        let before = self.height();
        let values: Vec<T> = mem::take(self).into_iter().collect();
        *self = Self::from_sorted(values);
        debug!(
            "rebuilt {} values, height {} -> {}",
            self.len,
            before,
            self.height()
        );

        if cfg!(debug_assertions) {
            assert!(self.is_balanced());
        }
        self
    }

    /// Checks the ordering and count invariants by walking the whole tree.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfOrder`](Error::OutOfOrder) if the in-order walk is not strictly increasing
    /// and [`SizeMismatch`](Error::SizeMismatch) if `len` disagrees with the nodes found.
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        let mut reachable = 0;
        let mut previous: Option<&T> = None;
        for (position, value) in self.in_order().enumerate() {
            if previous.map_or(false, |previous| previous >= value) {
                return Err(Error::OutOfOrder { position });
            }
            previous = Some(value);
            reachable += 1;
        }

        if reachable != self.len {
            return Err(Error::SizeMismatch {
                recorded: self.len,
                reachable,
            });
        }
        Ok(())
    }

    /// Values in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Values in post-order: left subtree, right subtree, node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Values breadth-first, top to bottom and left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Same as [`in_order`](Self::in_order).
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.level_order().eq(other.level_order())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> PartialOrd for Tree<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.level_order().partial_cmp(other.level_order())
    }
}

impl<T> Ord for Tree<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.level_order().cmp(other.level_order())
    }
}

/// Draws the tree on its side: the right subtree above a node, the left subtree below it.
///
/// ```text
/// │   ┌── 5
/// └── 4
///     └── 1
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_sideways(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_sideways<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_sideways(f, right, &prefix, false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, branch, node.value)?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_sideways(f, left, &prefix, true)?;
    }
    Ok(())
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_leaf(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
