//! Generic group-and-aggregate primitives.
//!
//! Every grouped view in the engine is built the same way: extract a key per
//! row, fold the row into that key's accumulator, then read the groups back in
//! key order. Rows whose key extractor returns `None` are left out, the way a
//! null grouping key is dropped.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use medal_model::EventRecord;

/// Groups `rows` by `key` and folds each group into an accumulator.
pub fn group_aggregate<'a, I, K, A, KF, Init, Fold>(
    rows: I,
    key: KF,
    init: Init,
    fold: Fold,
) -> BTreeMap<K, A>
where
    I: IntoIterator<Item = &'a EventRecord>,
    K: Ord,
    KF: Fn(&'a EventRecord) -> Option<K>,
    Init: Fn() -> A,
    Fold: Fn(&mut A, &'a EventRecord),
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for record in rows {
        let Some(group) = key(record) else {
            continue;
        };
        let acc = groups.entry(group).or_insert_with(&init);
        fold(acc, record);
    }
    groups
}

/// Number of rows per key.
pub fn count_by<'a, I, K, KF>(rows: I, key: KF) -> BTreeMap<K, usize>
where
    I: IntoIterator<Item = &'a EventRecord>,
    K: Ord,
    KF: Fn(&'a EventRecord) -> Option<K>,
{
    group_aggregate(rows, key, || 0usize, |count, _| *count += 1)
}

/// Number of rows per key, ordered by descending count.
///
/// Keys with equal counts keep the order in which they first appeared, which
/// makes rankings deterministic for a given dataset order.
pub fn ranked_counts<'a, I, K, KF>(rows: I, key: KF) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = &'a EventRecord>,
    K: Eq + Hash,
    KF: Fn(&'a EventRecord) -> K,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (position, record) in rows.into_iter().enumerate() {
        let entry = counts.entry(key(record)).or_insert((0, position));
        entry.0 += 1;
    }
    let mut ranked: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(group, (count, first))| (group, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .map(|(group, count, _)| (group, count))
        .collect()
}
