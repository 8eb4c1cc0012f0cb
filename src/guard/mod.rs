//! Navigation guard over session state.
//!
//! A derived-effect subscriber: it never authenticates anything itself,
//! it only watches the session slice and tells the router to replace a
//! protected view with the login view when the session is invalid.

mod route;

pub use route::Route;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::session::{SessionState, SessionStore};
use crate::store::Subscription;

/// Router collaborator, owned by the view layer.
pub trait Router: Send + Sync {
    /// Replace the current view with `route` (no history entry).
    fn replace_current_view(&self, route: Route);
}

/// Redirect bookkeeping for the current unauthenticated streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Session valid, or current view not protected.
    #[default]
    Allowed,
    /// Redirect decided but not yet handed to the router.
    RedirectPending,
    /// Redirect handed to the router; repeats are suppressed until the
    /// session becomes valid again.
    RedirectIssued,
}

/// Guard state machine subscribed to the session slice.
pub struct AuthGuard {
    router: Arc<dyn Router>,
    current_route: Route,
    state: GuardState,
}

impl AuthGuard {
    pub fn new(router: Arc<dyn Router>, initial_route: Route) -> Self {
        Self {
            router,
            current_route: initial_route,
            state: GuardState::default(),
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    /// Record a navigation performed by the view layer.
    pub fn set_current_route(&mut self, route: Route) {
        self.current_route = route;
    }

    /// Re-evaluate the session.
    ///
    /// Issues at most one redirect per unauthenticated streak: once a
    /// redirect was handed to the router, further unauthenticated
    /// notifications are ignored until an authenticated one re-arms the
    /// guard.
    pub fn evaluate(&mut self, session: &SessionState) {
        if session.is_authenticated {
            self.state = GuardState::Allowed;
            return;
        }

        if !self.current_route.is_protected() {
            return;
        }

        if self.state == GuardState::Allowed {
            self.state = GuardState::RedirectPending;
            self.router.replace_current_view(Route::Login);
            self.state = GuardState::RedirectIssued;
        }
    }

    /// Register the guard as a session store subscriber.
    ///
    /// The guard is shared because the view layer keeps mutating the
    /// current route while the store notifies from dispatch context.
    pub fn attach(guard: Arc<Mutex<AuthGuard>>, store: &SessionStore) -> Subscription {
        store.subscribe(move |session| guard.lock().evaluate(session))
    }
}
