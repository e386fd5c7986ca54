use super::itemset::ItemId;

/// Calls `callback` with every k-combination of `items`, in lexicographic
/// order of positions.
pub fn for_each_combination<F>(items: &[ItemId], k: usize, mut callback: F)
where
    F: FnMut(&[ItemId]),
{
    if k == 0 || k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    combinations_recursive(items, k, 0, &mut current, &mut callback);
}

fn combinations_recursive<F>(
    items: &[ItemId],
    k: usize,
    start: usize,
    current: &mut Vec<ItemId>,
    callback: &mut F,
) where
    F: FnMut(&[ItemId]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Leave room for the items still to be picked.
    let remaining = k - current.len();
    for i in start..=items.len() - remaining {
        current.push(items[i]);
        combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
