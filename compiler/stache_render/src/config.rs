//! Render settings.

/// Knobs for a [`Renderer`](crate::Renderer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// How many partials may be open at once. A partial tag beyond this depth
    /// renders nothing, which bounds self-including partials.
    pub max_partial_depth: usize,
}

impl RenderConfig {
    pub const DEFAULT_MAX_PARTIAL_DEPTH: usize = 64;

    #[must_use]
    pub fn with_max_partial_depth(mut self, depth: usize) -> Self {
        self.max_partial_depth = depth;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_partial_depth: Self::DEFAULT_MAX_PARTIAL_DEPTH,
        }
    }
}
