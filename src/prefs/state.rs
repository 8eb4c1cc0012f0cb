use crate::store::StoreState;

/// Display mode preference.
///
/// The `as_str()` value is the persisted storage literal — once
/// published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Stable string form used as the persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse from the persisted literal. Anything else returns `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Preference slice state.
///
/// `hydrated` flips false→true exactly once, after the first read
/// attempt against the persistent store (success or failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefsState {
    pub mode: ThemeMode,
    pub hydrated: bool,
}

impl StoreState for PrefsState {}
