use crate::prefs::intent::PrefsIntent;
use crate::prefs::state::PrefsState;
use crate::store::Reducer;

pub struct PrefsReducer;

impl Reducer for PrefsReducer {
    type State = PrefsState;
    type Intent = PrefsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PrefsIntent::Hydrate { saved } => PrefsState {
                mode: saved.unwrap_or(state.mode),
                hydrated: true,
            },
            PrefsIntent::SetMode(mode) => PrefsState { mode, ..state },
            PrefsIntent::Toggle => PrefsState {
                mode: state.mode.opposite(),
                ..state
            },
        }
    }
}
