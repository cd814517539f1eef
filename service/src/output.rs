//! [`Output`] sink definitions.

use std::sync::Arc;

use derive_more::Debug;

/// Sink for the human-readable progress and status lines the core emits.
///
/// The presentation layer decides whether the appended text ends up on a
/// console, in a panel, or nowhere; the core never depends on any rendering
/// mechanism.
#[derive(Clone, Debug)]
pub struct Output {
    /// Callback receiving every appended chunk of text.
    #[debug(skip)]
    sink: Arc<dyn Fn(&str) + Send + Sync>,
}

impl Output {
    /// Creates a new [`Output`] delivering appended text to the provided
    /// callback.
    #[must_use]
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Creates a new [`Output`] printing appended text to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(|text| print!("{text}"))
    }

    /// Creates a new [`Output`] discarding everything appended to it.
    #[must_use]
    pub fn ignored() -> Self {
        Self::new(|_| {})
    }

    /// Appends the provided `text` to this [`Output`].
    pub fn append(&self, text: impl AsRef<str>) {
        (self.sink)(text.as_ref());
    }
}
