// File: crates/barchart-core/src/reconcile.rs
// Summary: Keyed enter/update/exit diff between the retained bar set and a new point list.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::model::DataPoint;

/// Identity of a bar across update cycles.
///
/// The category label alone is not unique when the host repeats a label, so
/// the key also carries how many earlier points had the same label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarKey {
    pub category: Option<String>,
    pub occurrence: usize,
}

impl BarKey {
    pub fn new(category: Option<String>, occurrence: usize) -> Self {
        Self { category, occurrence }
    }
}

/// Keys for `points`, in point order.
pub fn keys_for(points: &[DataPoint]) -> Vec<BarKey> {
    let mut seen: HashMap<Option<&str>, usize> = HashMap::new();
    points
        .iter()
        .map(|p| {
            let n = seen.entry(p.category.as_deref()).or_insert(0);
            let key = BarKey::new(p.category.clone(), *n);
            *n += 1;
            key
        })
        .collect()
}

/// What has to happen to the retained shapes to match a new point list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyedDiff {
    /// Indices into the new key list that have no shape yet.
    pub enter: Vec<usize>,
    /// Indices into the new key list whose shape survives.
    pub update: Vec<usize>,
    /// Retained keys absent from the new list, in their previous order.
    pub exit: Vec<BarKey>,
}

impl KeyedDiff {
    pub fn is_noop_structurally(&self) -> bool {
        self.enter.is_empty() && self.exit.is_empty()
    }
}

/// Compare the previous key sequence against the next one.
///
/// Deterministic: `enter` and `update` follow `next` order, `exit` follows
/// `previous` order.
pub fn diff<'a>(previous: impl IntoIterator<Item = &'a BarKey>, next: &[BarKey]) -> KeyedDiff {
    let previous = previous.into_iter().collect::<Vec<_>>();
    let before: HashSet<&BarKey> = previous.iter().copied().collect();
    let after: HashSet<&BarKey> = next.iter().collect();

    let mut out = KeyedDiff::default();
    for (i, key) in next.iter().enumerate() {
        if before.contains(key) {
            out.update.push(i);
        } else {
            out.enter.push(i);
        }
    }
    out.exit = previous.into_iter().filter(|k| !after.contains(k)).cloned().collect();
    out
}
