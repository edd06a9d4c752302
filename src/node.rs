/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`Tree`](crate::Tree) together with the two subtrees hanging off it.
///
/// Every value in the left subtree is smaller than `value` and every value in the right subtree
/// is larger. A node owns its children outright; there are no parent pointers.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn boxed(value: T, left: Link<T>, right: Link<T>) -> Box<Self> {
        Box::new(Self { value, left, right })
    }

    /// The element stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Detaches the leftmost node below `link` and returns its value. That node's right child
    /// takes its place.
    pub(crate) fn pop_leftmost(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let Self { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }
}
