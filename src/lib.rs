//! # Label Maker - Delimited Label Sequences
//!
//! Builds delimited strings from an ordered sequence of labels. Each label
//! carries its own delimiter and end-of-sequence options, which are either set
//! explicitly or inherited from the label in front of it.
//!
//! Sequences are immutable: every edit returns a new [`LabelMaker`].
//!
//! ## Example
//!
//! ```
//! use label_maker::{label_maker, LabelOptions};
//!
//! let labels = label_maker()
//!     .push("foo", "+")
//!     .push("bar", LabelOptions::new())
//!     .push("baz", "-")
//!     .push("jaz", LabelOptions::new());
//! assert_eq!(labels.to_string(), "foo+bar+baz-jaz");
//!
//! // Negative positions count from the end
//! assert_eq!(labels.get(-1).map(|l| l.text()), Some("jaz"));
//! assert_eq!(labels.remove_at(-2).to_string(), "foo+bar+jaz");
//! ```
//!
//! ## Rendering rules
//!
//! - Every label but the last is followed by its delimiter.
//! - The last label is followed by its trailing marker (or its delimiter when
//!   the marker is empty) only if it includes a trailing delimiter.
//! - The whole string is prefixed by the last label's leading marker (or its
//!   delimiter) only if the last label includes a leading marker.
//! - Positions inserted past the end leave gaps that render as nothing.

mod error;
mod iter;
mod label;
mod maker;
mod options;
mod position;
mod render;
mod store;


pub use error::{Error, Result};
pub use iter::Labels;
pub use label::{Label, DEFAULT_DELIMITER};
pub use maker::{label_maker, LabelMaker};
pub use options::LabelOptions;
