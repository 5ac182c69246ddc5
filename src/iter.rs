use crate::label::Label;
use crate::maker::LabelMaker;
use std::collections::btree_map;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Iterator over the occupied slots of a label sequence, in index order.
///
/// Sparse gaps are skipped.
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    slots: btree_map::Values<'a, usize, Arc<Label>>,
}

impl<'a> Labels<'a> {
    pub(crate) fn new(slots: btree_map::Values<'a, usize, Arc<Label>>) -> Self {
        Self { slots }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|label| &**label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl DoubleEndedIterator for Labels<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|label| &**label)
    }
}

impl ExactSizeIterator for Labels<'_> {}

impl FusedIterator for Labels<'_> {}

impl<'a> IntoIterator for &'a LabelMaker {
    type Item = &'a Label;
    type IntoIter = Labels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
