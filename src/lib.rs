//! Declarative composition of styled text fragments.
//!
//! # What it does
//!
//! This crate allows to:
//!
//! - Describe styled text as a block of heterogeneous content: plain strings,
//!   pre-styled [`Fragment`]s and conditionally included pieces (see the [`compose!`]
//!   macro and the [`Composer`] builder).
//! - Render such a block any number of times against an ambient [`Environment`]
//!   supplying the base style for plain text. Styles reuse the model from [`anstyle`];
//!   i.e., a style is just a [`Style`](anstyle::Style).
//! - Convert a small inline subset of Markdown into pre-styled content via
//!   [`markdown()`].
//!
//! # Design decisions
//!
//! - **Eager evaluation, lazy rendering.** A block is evaluated once into an ordered
//!   sequence of [`Content`] units (conditional branches that are absent contribute
//!   nothing); rendering happens later, possibly repeatedly, each time against
//!   a caller-supplied [`Environment`].
//!
//! - **Total rendering.** [`Content::render()`] cannot fail, does not block and does not
//!   mutate its inputs. The only fallible operation is [`markdown()`], which surfaces
//!   unsupported constructs as a [`MarkdownError`] at block-evaluation time.
//!
//! - **Canonical fragments.** Adjacent runs with equal styles are merged on every append,
//!   so [`Fragment`] equality can be used directly in assertions.
//!
//! # Crate features
//!
//! ## `tracing`
//!
//! *(Off by default)*
//!
//! Uses [the eponymous facade](https://docs.rs/tracing/) to trace main operations
//! (composition and Markdown conversion), which could be useful for debugging.
//! Tracing is mostly performed on the `DEBUG` level.
//!
//! # Examples
//!
//! ```
//! use anstyle::AnsiColor;
//! use styled_compose::{compose, markdown, Content, Environment};
//!
//! # fn main() -> anyhow::Result<()> {
//! let verbose = false;
//! let block = compose! {
//!     "Hello, World!";
//!     if verbose => "\n";
//!     markdown("Hello *world*")?;
//! };
//!
//! let env = Environment::new(AnsiColor::Green.on_default());
//! let fragment = block.render(&env);
//! assert_eq!(fragment.text(), "Hello, World!Hello world");
//! println!("{fragment}"); // prints the text with embedded ANSI escapes
//! # Ok(())
//! # }
//! ```
//!
//! Assembling content programmatically, without the macro:
//!
//! ```
//! use anstyle::Style;
//! use styled_compose::{Composer, Content, Environment, Fragment};
//!
//! let block = Composer::new()
//!     .push("Hello, ")
//!     .push(Fragment::styled("world", Style::new().bold()))
//!     .build();
//! let fragment = block.render(&Environment::default());
//! assert_eq!(fragment.text(), "Hello, world");
//! ```

// Documentation settings.
#![doc(html_root_url = "https://docs.rs/styled-compose/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::{
    compose::{optional, sequence, Composer},
    content::{Content, Lazy},
    env::Environment,
    errors::MarkdownError,
    fragment::{Fragment, Run},
    markdown::markdown,
};

mod compose;
mod content;
mod env;
mod errors;
mod fragment;
mod markdown;

/// Evaluates a declarative block of content into a single [`Lazy`] content unit.
///
/// The block consists of semicolon-terminated items of two forms:
///
/// - `expr;` — any [`Content`] value: a string, a [`Fragment`], another composed unit etc.
///   The expression is evaluated eagerly, when the block is evaluated.
/// - `if cond => expr;` — conditionally included content. The expression is evaluated
///   only if the condition holds; otherwise, the item renders as a no-op.
///
/// Item order is preserved exactly in the rendered output. An empty block is allowed
/// and renders as the empty [`Fragment`].
///
/// # Examples
///
/// ```
/// use anstyle::{AnsiColor, Style};
/// use styled_compose::{compose, Content, Environment, Fragment};
///
/// let trailing_newline = true;
/// let block = compose! {
///     "Hi, ";
///     Fragment::styled("there", Style::new().underline());
///     if trailing_newline => "\n";
/// };
/// let fragment = block.render(&Environment::new(AnsiColor::Blue.on_default()));
/// assert_eq!(fragment.text(), "Hi, there\n");
/// ```
#[macro_export]
macro_rules! compose {
    (@step $composer:ident, ) => {};
    (@step $composer:ident, if $cond:expr => $unit:expr; $($rest:tt)*) => {
        $composer = $composer.push_opt(($cond).then(|| $unit));
        $crate::compose!(@step $composer, $($rest)*);
    };
    (@step $composer:ident, if $cond:expr => $unit:expr) => {
        $composer = $composer.push_opt(($cond).then(|| $unit));
    };
    (@step $composer:ident, $unit:expr; $($rest:tt)*) => {
        $composer = $composer.push($unit);
        $crate::compose!(@step $composer, $($rest)*);
    };
    (@step $composer:ident, $unit:expr) => {
        $composer = $composer.push($unit);
    };
    () => {
        $crate::Composer::new().build()
    };
    ($($content:tt)+) => {{
        let mut __composer = $crate::Composer::new();
        $crate::compose!(@step __composer, $($content)+);
        __composer.build()
    }};
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
