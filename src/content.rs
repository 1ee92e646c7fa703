//! Content units renderable against an [`Environment`].

use core::fmt;

use crate::{Environment, Fragment};

/// Content that can render itself into a styled [`Fragment`] given an [`Environment`].
///
/// Rendering is total and pure: it never fails, and neither the content nor the
/// environment is mutated. Rendering the same content twice against equal environments
/// yields equal fragments.
///
/// Three kinds of content are provided out of the box:
///
/// - Plain text (`&str` / `String`): the environment style is applied to it uniformly.
/// - Pre-styled [`Fragment`]s: returned as-is, the environment is ignored.
/// - [`Lazy`] units wrapping an arbitrary render function; produced by
///   [composition](crate::Composer).
pub trait Content {
    /// Renders this content against the provided environment.
    fn render(&self, env: &Environment) -> Fragment;
}

impl<C: Content + ?Sized> Content for &C {
    fn render(&self, env: &Environment) -> Fragment {
        (**self).render(env)
    }
}

impl<C: Content + ?Sized> Content for Box<C> {
    fn render(&self, env: &Environment) -> Fragment {
        (**self).render(env)
    }
}

/// Plain text; the environment style is applied to the entire string.
impl Content for str {
    fn render(&self, env: &Environment) -> Fragment {
        Fragment::styled(self, env.style())
    }
}

/// Plain text; the environment style is applied to the entire string.
impl Content for String {
    fn render(&self, env: &Environment) -> Fragment {
        Fragment::styled(self.as_str(), env.style())
    }
}

/// Pre-styled content; carries its own styling and ignores the environment.
impl Content for Fragment {
    fn render(&self, _env: &Environment) -> Fragment {
        self.clone()
    }
}

/// Content unit wrapping a render function.
///
/// `Lazy` represents content whose fragment is computed at render time, such as the
/// output of [`sequence()`](crate::sequence()) or [`optional()`](crate::optional()).
/// This way, a whole composition and a single unit share the [`Content`] interface.
pub struct Lazy {
    render_fn: Box<dyn Fn(&Environment) -> Fragment>,
}

impl Lazy {
    /// Creates a unit from the provided render function.
    pub fn new<F>(render_fn: F) -> Self
    where
        F: Fn(&Environment) -> Fragment + 'static,
    {
        Self {
            render_fn: Box::new(render_fn),
        }
    }
}

impl Content for Lazy {
    fn render(&self, env: &Environment) -> Fragment {
        (self.render_fn)(env)
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lazy").finish_non_exhaustive()
    }
}
