use crate::store::StoreState;

/// In-memory session record.
///
/// Never persisted; the process always starts unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user_name: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl StoreState for SessionState {}
