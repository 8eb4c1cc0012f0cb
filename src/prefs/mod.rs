//! Theme preference slice.
//!
//! Holds the persisted UI preference (display mode), the pure
//! transitions over it, and the service that hydrates it from the
//! persistent store at startup and writes every change back through.

mod intent;
mod palette;
mod reducer;
mod service;
mod state;

pub use intent::PrefsIntent;
pub use palette::Palette;
pub use reducer::PrefsReducer;
pub use service::{ThemePreference, PREFERENCE_KEY};
pub use state::{PrefsState, ThemeMode};

use crate::store::Store;

/// Store specialization for the preference slice.
pub type PrefsStore = Store<PrefsReducer>;
