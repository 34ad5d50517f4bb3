use std::{collections::HashSet, hash::Hash};

/// Drop repeated items, keeping the first occurrence of each in its original position.
pub fn unique_in_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();

    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
