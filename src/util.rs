/// Sorts `values` and drops duplicates, which is the shape the balanced build expects.
pub(crate) fn sorted_unique<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort_unstable();
    values.dedup();
    values
}

/// Index of the element that roots a balanced subtree built from `len` sorted elements. Even
/// lengths take the lower of the two middles so rebuilds are reproducible.
pub(crate) fn lower_middle(len: usize) -> usize {
    len.saturating_sub(1) / 2
}
