//! Converting Markdown into pre-styled fragments.

use anstyle::Style;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::{Fragment, MarkdownError};


/// Converts an inline subset of Markdown into a pre-styled [`Fragment`].
///
/// Parsing is delegated to the [`pulldown-cmark`](https://docs.rs/pulldown-cmark/) parser.
/// The supported subset is:
///
/// - paragraphs (separated by a blank line in the output);
/// - `*emphasis*`, rendered as italic;
/// - `**strong**`, rendered as bold;
/// - `~~strikethrough~~`;
/// - `` `inline code` ``, rendered as dimmed;
/// - soft line breaks (rendered as a space) and hard breaks (rendered as a newline).
///
/// The resulting fragment carries its own styling; when included into a composition,
/// the ambient [`Environment`](crate::Environment) does not affect it.
///
/// # Errors
///
/// Returns an error if the source contains any construct outside the subset
/// (headings, lists, block quotes, code blocks, links, images, HTML and so on).
/// Callers deciding to tolerate such input can substitute e.g. [`Fragment::plain()`]
/// instead of propagating the error.
///
/// # Examples
///
/// ```
/// use anstyle::Style;
/// use styled_compose::markdown;
///
/// # fn main() -> anyhow::Result<()> {
/// let fragment = markdown("Hello *world*")?;
/// assert_eq!(fragment.text(), "Hello world");
/// let runs: Vec<_> = fragment.runs().collect();
/// assert_eq!(runs[0].style, Style::new());
/// assert_eq!(runs[1].style, Style::new().italic());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", err))]
pub fn markdown(source: &str) -> Result<Fragment, MarkdownError> {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
    let mut fragment = Fragment::default();
    let mut style_stack = Vec::new();
    let mut current = Style::new();

    for (event, pos) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Paragraph) => {
                if !fragment.is_empty() {
                    fragment.push_styled("\n\n", Style::new());
                }
            }
            Event::End(TagEnd::Paragraph) => { /* nothing to do */ }

            Event::Start(Tag::Emphasis) => {
                style_stack.push(current);
                current = current.italic();
            }
            Event::Start(Tag::Strong) => {
                style_stack.push(current);
                current = current.bold();
            }
            Event::Start(Tag::Strikethrough) => {
                style_stack.push(current);
                current = current.strikethrough();
            }
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough) => {
                current = style_stack.pop().unwrap_or_default();
            }

            Event::Text(text) => fragment.push_styled(&text, current),
            Event::Code(code) => fragment.push_styled(&code, current.dimmed()),
            Event::SoftBreak => fragment.push_styled(" ", current),
            Event::HardBreak => fragment.push_styled("\n", current),

            other => return Err(MarkdownError::unsupported(construct_name(&other), pos)),
        }
    }
    Ok(fragment)
}

fn construct_name(event: &Event<'_>) -> &'static str {
    match event {
        Event::Start(tag) => tag_name(tag),
        Event::Html(_) | Event::InlineHtml(_) => "HTML",
        Event::FootnoteReference(_) => "footnote reference",
        Event::Rule => "thematic break",
        Event::TaskListMarker(_) => "task list marker",
        Event::InlineMath(_) | Event::DisplayMath(_) => "math",
        _ => "unsupported construct",
    }
}

fn tag_name(tag: &Tag<'_>) -> &'static str {
    match tag {
        Tag::Heading { .. } => "heading",
        Tag::BlockQuote(_) => "block quote",
        Tag::CodeBlock(_) => "code block",
        Tag::List(_) => "list",
        Tag::Item => "list item",
        Tag::Link { .. } => "link",
        Tag::Image { .. } => "image",
        Tag::Table(_) => "table",
        Tag::FootnoteDefinition(_) => "footnote definition",
        Tag::HtmlBlock => "HTML",
        _ => "unsupported construct",
    }
}
