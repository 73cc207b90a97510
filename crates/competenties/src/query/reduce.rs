//! Ordered exact-match reduction of nested datasets.

use indexmap::IndexMap;

use crate::dataset::Record;

/// A nested mapping that can be narrowed one dimension at a time.
///
/// `selection[0]` constrains the outermost keys, `selection[1]` the next level
/// down, and so on. `None` keeps every key at that depth. A branch is dropped
/// only when a filter at or below its depth left it without children; a
/// mapping that nothing constrains is kept as is, even when it is empty.
pub trait Reduce: Sized {
    /// Number of keyed dimensions above the records.
    const DEPTH: usize;

    fn reduce(&self, selection: &[Option<String>]) -> Option<Self>;

    /// True when there is nothing to report.
    fn is_empty(&self) -> bool;
}

impl Reduce for Record {
    const DEPTH: usize = 0;

    fn reduce(&self, _selection: &[Option<String>]) -> Option<Self> {
        Some(self.clone())
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Reduce> Reduce for IndexMap<String, T> {
    const DEPTH: usize = T::DEPTH + 1;

    fn reduce(&self, selection: &[Option<String>]) -> Option<Self> {
        let (wanted, rest) = match selection.split_first() {
            Some((wanted, rest)) => (wanted.as_deref(), rest),
            None => (None, &[][..]),
        };

        let constrained = selection.iter().any(Option::is_some);
        let reduced: IndexMap<String, T> = self
            .iter()
            .filter(|(key, _)| wanted.is_none_or(|w| w == key.as_str()))
            .filter_map(|(key, child)| child.reduce(rest).map(|c| (key.clone(), c)))
            .collect();

        (!constrained || !reduced.is_empty()).then_some(reduced)
    }

    fn is_empty(&self) -> bool {
        IndexMap::is_empty(self)
    }
}
