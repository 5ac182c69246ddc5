use crate::iter::Labels;
use crate::label::Label;
use crate::position;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Position-addressable storage for labels.
///
/// Only occupied slots are stored, keyed by index, so a gap costs nothing
/// however wide it is. The highest key is always `len - 1`. Labels are
/// shared between stores through `Arc`; edits copy the index table and never
/// touch a label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Store {
    slots: BTreeMap<usize, Arc<Label>>,
    len: usize,
}

impl Store {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// One past the highest occupied index.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Label at `position` after canonicalization, if that slot is occupied.
    pub(crate) fn get(&self, position: isize) -> Option<&Label> {
        let index = position::canonical(position, self.len);
        self.slot(index)
    }

    /// Label at an already canonical index.
    pub(crate) fn slot(&self, index: usize) -> Option<&Label> {
        self.slots.get(&index).map(|label| &**label)
    }

    /// Label that a new label at canonical `index` inherits its options from.
    pub(crate) fn predecessor_of(&self, index: usize) -> Option<&Label> {
        self.slot(position::predecessor(index, self.len))
    }

    /// Returns a new store with `label` at canonical `index`.
    ///
    /// Slots at or after `index` shift one later. Inserting past the end
    /// leaves a gap in between.
    pub(crate) fn insert_at(&self, index: usize, label: Label) -> Self {
        let mut slots = self.slots.clone();
        let shifted = slots.split_off(&index);
        slots.extend(shifted.into_iter().map(|(i, label)| (i + 1, label)));
        slots.insert(index, Arc::new(label));

        let len = if index < self.len {
            self.len + 1
        } else {
            index + 1
        };

        Self { slots, len }
    }

    /// Returns a new store without the slot at canonical `index`.
    ///
    /// Later slots shift one earlier and trailing gaps are dropped. An index
    /// past the end is a no-op.
    pub(crate) fn remove_at(&self, index: usize) -> Self {
        if index >= self.len {
            return self.clone();
        }

        let mut slots = self.slots.clone();
        let mut shifted = slots.split_off(&index);
        shifted.remove(&index);
        slots.extend(shifted.into_iter().map(|(i, label)| (i - 1, label)));

        let len = slots.last_key_value().map_or(0, |(&i, _)| i + 1);
        Self { slots, len }
    }

    /// Occupied slots in ascending index order.
    pub(crate) fn iter(&self) -> Labels<'_> {
        Labels::new(self.slots.values())
    }

    /// The label at the highest occupied index.
    pub(crate) fn last(&self) -> Option<&Label> {
        self.slots.last_key_value().map(|(_, label)| &**label)
    }

    /// Densified copies of every occupied label.
    pub(crate) fn to_vec(&self) -> Vec<Label> {
        self.iter().cloned().collect()
    }
}
