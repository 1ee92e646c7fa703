//! Ambient styling environment.

use anstyle::Style;

/// Ambient styling applied to plain text during rendering.
///
/// An `Environment` is supplied by the caller on each [`render()`](crate::Content::render())
/// call and threaded unchanged through every content unit of a composition. Plain text
/// picks up the environment's base style; [pre-styled fragments](crate::Fragment) ignore it.
///
/// # Examples
///
/// ```
/// use anstyle::AnsiColor;
/// use styled_compose::{Content, Environment};
///
/// let env = Environment::new(AnsiColor::Green.on_default());
/// let fragment = "Hello".render(&env);
/// assert_eq!(fragment.runs().next().unwrap().style, env.style());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    style: Style,
}

impl Environment {
    /// Creates an environment with the specified base style.
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    /// Returns the base style applied to plain text.
    pub const fn style(&self) -> Style {
        self.style
    }
}

impl From<Style> for Environment {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
