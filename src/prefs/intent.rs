use crate::store::Intent;

use super::state::ThemeMode;

/// Preference transitions.
#[derive(Debug, Clone, Copy)]
pub enum PrefsIntent {
    /// Result of the one-time startup read from the persistent store.
    ///
    /// `saved` is `None` when the stored value was missing, invalid, or
    /// the read failed; the current mode is kept in that case. `hydrated`
    /// becomes true either way.
    Hydrate { saved: Option<ThemeMode> },
    /// Replace the mode.
    SetMode(ThemeMode),
    /// Flip the mode.
    Toggle,
}

impl Intent for PrefsIntent {}
