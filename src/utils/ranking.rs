/// Sorts by `views` descending. Stable, so ties keep provider order.
pub fn rank_by_views<T, F>(items: &mut [T], views: F)
where
    F: Fn(&T) -> u64,
{
    items.sort_by(|a, b| views(b).cmp(&views(a)));
}

#[cfg(test)]
pub fn is_ranked_by_views<T, F>(items: &[T], views: F) -> bool
where
    F: Fn(&T) -> u64,
{
    items.windows(2).all(|pair| views(&pair[0]) >= views(&pair[1]))
}
