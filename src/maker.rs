use crate::error::Result;
use crate::iter::Labels;
use crate::label::Label;
use crate::options::LabelOptions;
use crate::position;
use crate::render;
use crate::store::Store;
use std::fmt;

/// An immutable sequence of labels that renders to a delimited string.
///
/// Every edit returns a new `LabelMaker` and leaves `self` untouched, so
/// older values can be kept around and rendered independently.
///
/// Positions are signed: negative positions count back from the end and
/// positions past the end leave sparse gaps that render as nothing.
///
/// ```
/// use label_maker::{label_maker, LabelOptions};
///
/// let base = label_maker().push("foo", "+").push("bar", LabelOptions::new());
/// let labels = base.push("baz", "-").push("jaz", LabelOptions::new());
/// assert_eq!(labels.to_string(), "foo+bar+baz-jaz");
/// assert_eq!(base.to_string(), "foo+bar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMaker {
    store: Store,
}

/// Returns an empty label sequence.
pub fn label_maker() -> LabelMaker {
    LabelMaker::new()
}

impl LabelMaker {
    /// Creates an empty label sequence.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Appends a label after the last occupied slot.
    pub fn push(&self, text: impl Into<String>, options: impl Into<LabelOptions>) -> Self {
        self.place(self.store.len(), text.into(), &options.into())
    }

    /// Inserts a label at `position`.
    ///
    /// Labels at or after the resolved index shift one later.
    pub fn insert_at(
        &self,
        position: isize,
        text: impl Into<String>,
        options: impl Into<LabelOptions>,
    ) -> Self {
        let index = position::canonical(position, self.store.len());
        self.place(index, text.into(), &options.into())
    }

    /// Inserts a label in front of the label at `position`.
    ///
    /// Before the first slot wraps around to in front of the last one.
    pub fn insert_before(
        &self,
        position: isize,
        text: impl Into<String>,
        options: impl Into<LabelOptions>,
    ) -> Self {
        let index = position::before(position, self.store.len());
        self.place(index, text.into(), &options.into())
    }

    /// Inserts a label right after the label at `position`.
    pub fn insert_after(
        &self,
        position: isize,
        text: impl Into<String>,
        options: impl Into<LabelOptions>,
    ) -> Self {
        let index = position::after(position, self.store.len());
        self.place(index, text.into(), &options.into())
    }

    /// Replaces the label at `position`.
    ///
    /// The old label is removed first, so the replacement inherits from
    /// whatever precedes it once the old label is gone.
    pub fn replace_at(
        &self,
        position: isize,
        text: impl Into<String>,
        options: impl Into<LabelOptions>,
    ) -> Self {
        let index = position::canonical(position, self.store.len());
        let removed = Self {
            store: self.store.remove_at(index),
        };
        removed.place(index, text.into(), &options.into())
    }

    /// Removes the label at `position`; later labels shift one earlier.
    pub fn remove_at(&self, position: isize) -> Self {
        let index = position::canonical(position, self.store.len());
        let store = self.store.remove_at(index);
        log::trace!("removed slot {index}, {} slots remain", store.len());
        Self { store }
    }

    /// Appends a label with options taken from a dynamic payload.
    ///
    /// Fails when `options` is neither a string, a record nor `null`.
    pub fn try_push(&self, text: impl Into<String>, options: &serde_json::Value) -> Result<Self> {
        let options = LabelOptions::from_json(options)?;
        Ok(self.push(text, options))
    }

    /// Inserts a label at `position` with options taken from a dynamic payload.
    pub fn try_insert_at(
        &self,
        position: isize,
        text: impl Into<String>,
        options: &serde_json::Value,
    ) -> Result<Self> {
        let options = LabelOptions::from_json(options)?;
        Ok(self.insert_at(position, text, options))
    }

    /// Inserts a label in front of `position` with options taken from a dynamic payload.
    pub fn try_insert_before(
        &self,
        position: isize,
        text: impl Into<String>,
        options: &serde_json::Value,
    ) -> Result<Self> {
        let options = LabelOptions::from_json(options)?;
        Ok(self.insert_before(position, text, options))
    }

    /// Inserts a label after `position` with options taken from a dynamic payload.
    pub fn try_insert_after(
        &self,
        position: isize,
        text: impl Into<String>,
        options: &serde_json::Value,
    ) -> Result<Self> {
        let options = LabelOptions::from_json(options)?;
        Ok(self.insert_after(position, text, options))
    }

    /// Replaces the label at `position` with options taken from a dynamic payload.
    pub fn try_replace_at(
        &self,
        position: isize,
        text: impl Into<String>,
        options: &serde_json::Value,
    ) -> Result<Self> {
        let options = LabelOptions::from_json(options)?;
        Ok(self.replace_at(position, text, options))
    }

    /// The label at `position`, or `None` for gaps and out-of-range positions.
    pub fn get(&self, position: isize) -> Option<&Label> {
        self.store.get(position)
    }

    /// Copies of all labels in order, without gaps.
    pub fn labels(&self) -> Vec<Label> {
        self.store.to_vec()
    }

    /// Returns an empty label sequence.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Renders the sequence to its delimited string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// One past the highest occupied position.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates over the labels in order, skipping gaps.
    pub fn iter(&self) -> Labels<'_> {
        self.store.iter()
    }

    fn place(&self, index: usize, text: String, options: &LabelOptions) -> Self {
        let label = options.resolve(text, self.store.predecessor_of(index));
        let store = self.store.insert_at(index, label);
        log::trace!("placed label at slot {index}, {} slots", store.len());
        Self { store }
    }
}

impl fmt::Display for LabelMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::render_into(&self.store, f)
    }
}
