//! Theme preference state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dark-mode flag is resolved exactly once on mount, from a persisted
//! override when present and the system color-scheme otherwise. Until that
//! read completes the page renders nothing, so the first painted frame is
//! already in the right theme. Browser IO lives in `util::dark_mode`; this
//! module is pure and runs anywhere.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Stage of the one-time preference resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Mounted, sources not read yet. Nothing renders in this state.
    #[default]
    Unresolved,
    /// Sources read, `dark_mode` is authoritative.
    Resolved,
}

/// Theme preference shared through Leptos context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub resolution: Resolution,
    pub dark_mode: bool,
}

impl ThemeState {
    /// Resolve the effective preference from a stored override and the
    /// ambient system signal. A stored value always wins; with neither
    /// source available the result is the light default.
    pub fn resolve(stored: Option<bool>, ambient: bool) -> Self {
        Self {
            resolution: Resolution::Resolved,
            dark_mode: stored.unwrap_or(ambient),
        }
    }

    /// The state after the user flips the toggle. Resolution is not
    /// revisited; the caller persists the new value.
    pub fn toggled(&self) -> Self {
        Self {
            resolution: self.resolution,
            dark_mode: !self.dark_mode,
        }
    }

    /// Whether initial resolution has completed. Gates rendering.
    pub fn is_resolved(&self) -> bool {
        self.resolution == Resolution::Resolved
    }
}
