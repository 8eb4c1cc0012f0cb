//! Authentication session slice.
//!
//! Holds the in-memory session record (who is signed in, which tokens
//! are held) and the pure transitions over it. The slice performs no
//! network I/O itself; callers run the login request and dispatch the
//! outcome (see [`crate::api`]).

mod auth;
mod intent;
mod reducer;
mod state;

pub use auth::{build_auth_header, AuthHeader};
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::SessionState;

use crate::store::Store;

/// Store specialization for the session slice.
pub type SessionStore = Store<SessionReducer>;
