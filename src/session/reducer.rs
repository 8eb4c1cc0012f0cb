use crate::session::intent::SessionIntent;
use crate::session::state::SessionState;
use crate::store::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetAuth {
                user_name,
                access_token,
                refresh_token,
                is_authenticated,
            } => SessionState {
                // Defaults to true even when both tokens are empty. Kept
                // compatible with the observed login flow; see DESIGN.md.
                is_authenticated: is_authenticated.unwrap_or(true),
                user_name,
                access_token,
                refresh_token,
            },
            SessionIntent::UpdateTokens {
                access_token,
                refresh_token,
            } => {
                let access_token = access_token.unwrap_or(state.access_token);
                let refresh_token = refresh_token.unwrap_or(state.refresh_token);
                let is_authenticated = if !access_token.is_empty() || !refresh_token.is_empty() {
                    true
                } else {
                    state.is_authenticated
                };
                SessionState {
                    is_authenticated,
                    user_name: state.user_name,
                    access_token,
                    refresh_token,
                }
            }
            SessionIntent::ClearAuth => SessionState::default(),
        }
    }
}
