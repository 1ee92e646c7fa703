//! Error types.

use std::{fmt, ops};

/// Error converting a Markdown source into a styled fragment.
///
/// Returned by [`markdown()`](crate::markdown()) when the source contains a construct
/// outside the supported inline subset. The error pinpoints the offending construct
/// and its location in the source.
#[derive(Debug)]
pub struct MarkdownError {
    construct: &'static str,
    pos: ops::Range<usize>,
}

impl MarkdownError {
    pub(crate) fn unsupported(construct: &'static str, pos: ops::Range<usize>) -> Self {
        Self { construct, pos }
    }

    /// Returns the name of the unsupported Markdown construct.
    pub fn construct(&self) -> &'static str {
        self.construct
    }

    /// Returns (byte) position in the source string that corresponds to this error.
    pub fn pos(&self) -> ops::Range<usize> {
        self.pos.clone()
    }
}

impl fmt::Display for MarkdownError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unsupported Markdown construct ({}) at {:?}",
            self.construct, self.pos
        )
    }
}

impl std::error::Error for MarkdownError {}
