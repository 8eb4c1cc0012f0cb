//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use rosterly::guard::{Route, Router};
use rosterly::session::{SessionIntent, SessionState};

/// Router that records every replacement it is asked to perform.
#[derive(Default)]
pub struct RecordingRouter {
    replacements: Mutex<Vec<Route>>,
}

impl RecordingRouter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replacements(&self) -> Vec<Route> {
        self.replacements.lock().clone()
    }
}

impl Router for RecordingRouter {
    fn replace_current_view(&self, route: Route) {
        self.replacements.lock().push(route);
    }
}

/// A fully-populated authenticated session.
pub fn authenticated_session(user: &str) -> SessionState {
    SessionState {
        is_authenticated: true,
        user_name: user.to_string(),
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
    }
}

/// SetAuth intent with the default (absent) authenticated flag.
pub fn set_auth(user: &str, access: &str, refresh: &str) -> SessionIntent {
    SessionIntent::SetAuth {
        user_name: user.to_string(),
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        is_authenticated: None,
    }
}
