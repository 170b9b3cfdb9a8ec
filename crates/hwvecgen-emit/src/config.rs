//! Rendering options.

/// Configuration for declaration rendering.
#[derive(Clone, Debug)]
pub struct Config {
    /// Emit `[MethodImpl(AggressiveInlining)]` on members of concrete types.
    pub(crate) inlining: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { inlining: true }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit inlining attributes.
    pub fn inlining(mut self, value: bool) -> Self {
        self.inlining = value;
        self
    }
}
