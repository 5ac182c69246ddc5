use crate::store::Store;
use std::fmt;

/// Writes the delimited representation of `store` into `out`.
///
/// Every label but the last is followed by its delimiter. The last label
/// decides both the optional prefix for the whole sequence and the optional
/// trailing delimiter. Empty slots contribute nothing.
pub(crate) fn render_into<W: fmt::Write>(store: &Store, out: &mut W) -> fmt::Result {
    let Some(last) = store.last() else {
        return Ok(());
    };

    if let Some(prefix) = last.leading() {
        out.write_str(prefix)?;
    }

    let mut labels = store.iter().peekable();
    while let Some(label) = labels.next() {
        out.write_str(&label.text)?;

        if labels.peek().is_some() {
            out.write_str(&label.delimiter)?;
        } else if let Some(trailing) = label.trailing() {
            out.write_str(trailing)?;
        }
    }

    Ok(())
}
