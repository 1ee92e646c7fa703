//! Composition of content units.

use core::fmt;

use crate::{Content, Fragment, Lazy};

/// Composes an ordered sequence of content units into a single [`Lazy`] unit.
///
/// Rendering the returned unit renders each input unit against the same environment
/// and appends the results in input order. An empty sequence renders as the empty
/// [`Fragment`].
pub fn sequence(units: Vec<Box<dyn Content>>) -> Lazy {
    #[cfg(feature = "tracing")]
    tracing::debug!(units = units.len(), "composed content sequence");

    Lazy::new(move |env| {
        #[cfg(feature = "tracing")]
        tracing::trace!(units = units.len(), "rendering composed sequence");

        let mut fragment = Fragment::default();
        for unit in &units {
            fragment.push(&unit.render(env));
        }
        fragment
    })
}

/// Wraps optional content into a [`Lazy`] unit.
///
/// An absent unit renders as a true no-op: the empty [`Fragment`], with zero text
/// and zero runs. This is how conditional inclusion (an `if` without an `else`)
/// is represented.
pub fn optional<C: Content + 'static>(unit: Option<C>) -> Lazy {
    Lazy::new(move |env| match &unit {
        Some(unit) => unit.render(env),
        None => Fragment::default(),
    })
}

/// Builder collecting an ordered sequence of content units.
///
/// This is the block-evaluation surface behind the [`compose!`](crate::compose!) macro;
/// it can also be used directly when the content is assembled programmatically.
/// Content units are evaluated once, when pushed; rendering the [built](Self::build())
/// unit can then happen any number of times, each time against a caller-supplied
/// [`Environment`].
///
/// # Examples
///
/// ```
/// use styled_compose::{Composer, Content, Environment};
///
/// let block = Composer::new()
///     .push("Hello")
///     .push_opt(true.then(|| ", world"))
///     .push_opt(false.then(|| " (unseen)"))
///     .build();
/// let fragment = block.render(&Environment::default());
/// assert_eq!(fragment.text(), "Hello, world");
/// ```
#[derive(Default)]
pub struct Composer {
    units: Vec<Box<dyn Content>>,
}

impl Composer {
    /// Creates an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a content unit to the sequence.
    #[must_use]
    pub fn push<C: Content + 'static>(mut self, unit: C) -> Self {
        self.units.push(Box::new(unit));
        self
    }

    /// Appends optional content to the sequence. `None` renders as a no-op.
    #[must_use]
    pub fn push_opt<C: Content + 'static>(self, unit: Option<C>) -> Self {
        self.push(optional(unit))
    }

    /// Returns the number of collected content units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Checks whether the composer has no content units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Finalizes the sequence into a single [`Lazy`] content unit.
    pub fn build(self) -> Lazy {
        sequence(self.units)
    }
}

impl fmt::Debug for Composer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composer")
            .field("units", &self.units.len())
            .finish()
    }
}
