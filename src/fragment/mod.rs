//! Styled text fragments.

use core::{fmt, num::NonZeroUsize, ops};

use anstyle::Style;


/// Continuous span of styled text.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StyledSpan {
    /// Style applied to the text.
    style: Style,
    /// Starting position of the span in text.
    start: usize,
    /// Length of text in bytes.
    len: NonZeroUsize,
}

impl StyledSpan {
    fn end(&self) -> usize {
        self.start + self.len.get()
    }

    fn extend_len(&mut self, add: usize) {
        self.len = self.len.checked_add(add).expect("length overflow");
    }
}

/// Text with a uniform [`Style`] attached to it. Returned by the [`Fragment::runs()`] iterator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<'a> {
    /// Unstyled text of the run.
    pub text: &'a str,
    /// Style applied to the text.
    pub style: Style,
}

/// Appendable styled text buffer.
///
/// A `Fragment` consists of two parts:
///
/// - The unstyled text (a `String`).
/// - A sequence of styled spans covering the text in its entirety.
///
/// Spans are maintained in a canonical form: adjacent spans with equal styles are merged
/// on every append. As a result, `Fragment` equality is structural — two fragments built
/// from different sequences of appends compare equal whenever their text and styling match.
///
/// `Fragment`s are usually produced by [rendering content](crate::Content::render()), but
/// can also be constructed directly, e.g. to include pre-styled text into a composition.
///
/// # Examples
///
/// ```
/// use anstyle::{AnsiColor, Style};
/// use styled_compose::Fragment;
///
/// let mut fragment = Fragment::styled("Hello, ", AnsiColor::Green.on_default());
/// fragment.push_styled("world", Style::new().italic());
/// fragment += &Fragment::plain("!");
///
/// assert_eq!(fragment.text(), "Hello, world!");
/// assert_eq!(fragment.runs().len(), 3);
/// println!("{fragment}"); // prints the text with embedded ANSI escapes
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Fragment {
    text: String,
    spans: Vec<StyledSpan>,
}

impl Fragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fragment from a plain string with the specified style applied
    /// to it uniformly.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        let spans = NonZeroUsize::new(text.len())
            .map(|len| StyledSpan {
                style,
                start: 0,
                len,
            })
            .into_iter()
            .collect();
        Self { text, spans }
    }

    /// Creates a fragment from a plain string with the default (empty) style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::new())
    }

    /// Returns the unstyled text of this fragment.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the unstyled text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Checks whether this fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over the styled runs of this fragment, in text order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = Run<'_>> + DoubleEndedIterator {
        self.spans.iter().map(|span| Run {
            text: &self.text[span.start..span.end()],
            style: span.style,
        })
    }

    /// Appends a plain string with the specified style at the end of this fragment.
    ///
    /// Appending an empty string is a no-op.
    pub fn push_styled(&mut self, text: &str, style: Style) {
        let Some(len) = NonZeroUsize::new(text.len()) else {
            return;
        };
        let start = self.text.len();
        self.text.push_str(text);
        self.push_span(StyledSpan { style, start, len });
    }

    fn push_span(&mut self, span: StyledSpan) {
        if let Some(last_span) = self.spans.last_mut() {
            if last_span.style == span.style {
                last_span.extend_len(span.len.get());
                return;
            }
        }
        self.spans.push(span);
    }

    /// Appends another fragment at the end of this one, preserving its styling.
    ///
    /// Also available via the `+=` operator.
    pub fn push(&mut self, other: &Self) {
        let mut copied_spans = other.spans.iter().copied();
        if let (Some(last), Some(next)) = (self.spans.last_mut(), other.spans.first()) {
            if last.style == next.style {
                last.extend_len(next.len.get());
                copied_spans.next(); // skip copying the first span
            }
        }

        // The newly added spans must be offset so that their start positions are correct.
        let offset = self.text.len();
        self.spans.extend(copied_spans.map(|mut span| {
            span.start += offset;
            span
        }));

        self.text.push_str(&other.text);
    }
}

impl ops::AddAssign<&Fragment> for Fragment {
    fn add_assign(&mut self, rhs: &Fragment) {
        self.push(rhs);
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, fragment| {
            acc.push(&fragment);
            acc
        })
    }
}

impl Extend<Fragment> for Fragment {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(&fragment);
        }
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.runs()).finish()
    }
}

/// Outputs the fragment with embedded ANSI escapes. Runs with the default style
/// are output as-is, without escapes.
impl fmt::Display for Fragment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.runs() {
            if run.style == Style::new() {
                formatter.write_str(run.text)?;
            } else {
                write!(
                    formatter,
                    "{style}{text}{style:#}",
                    style = run.style,
                    text = run.text
                )?;
            }
        }
        Ok(())
    }
}
