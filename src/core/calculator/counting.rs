//! Grouping and counting over in-memory columns.
//!
//! Mode tie-break: the first value to reach the final maximum count while
//! scanning in row order wins. `[B, A, A, B]` → `A`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Most frequent value, or `None` when `values` is empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut best: Option<(T, usize)> = None;

    for v in values {
        let count = counts.entry(v.clone()).or_insert(0);
        *count += 1;

        let leads = match &best {
            None => true,
            Some((_, best_count)) => *count > *best_count,
        };
        if leads {
            best = Some((v, *count));
        }
    }

    best.map(|(v, _)| v)
}

/// Count per distinct value, by descending count; equal counts keep the
/// order in which values first appeared.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut out: Vec<ValueCount<T>> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(v.clone(), out.len());
                out.push(ValueCount { value: v, count: 1 });
            }
        }
    }

    // sort_by is stable
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}
