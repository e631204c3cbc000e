//! Reductions used by the statistics engine.
//!
//! All reductions return `None` for empty input instead of a default value.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts each distinct value.
///
/// Ordered by descending count; values with equal counts keep the order in which they were first
/// seen in `values`.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match slots.get(&value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    // Stable sort: ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value; among equally frequent values, the first one seen wins.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Smallest of `values`, or `None` when there are none.
pub fn min<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    values.into_iter().min()
}

/// Largest of `values`, or `None` when there are none.
pub fn max<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    values.into_iter().max()
}

/// Sum of `values`, or `None` when there are none.
pub fn sum<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values
        .into_iter()
        .fold(None, |acc: Option<u64>, v| Some(acc.unwrap_or(0).saturating_add(v)))
}

/// Arithmetic mean of `values`, or `None` when there are none.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = u64>,
{
    let (total, count) = values
        .into_iter()
        .fold((0u128, 0u64), |(total, count), v| (total + u128::from(v), count + 1));
    (count > 0).then(|| total as f64 / count as f64)
}
