//! Per-mode color palettes consumed by the view layer.

use super::state::ThemeMode;

/// Color set derived from the current display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub success: &'static str,
}

const DARK: Palette = Palette {
    background: "#0b1220",
    card: "rgba(255,255,255,0.06)",
    border: "rgba(255,255,255,0.1)",
    text: "#e2e8f0",
    muted: "#94a3b8",
    accent: "#2563eb",
    accent_text: "#f8fafc",
    success: "#22c55e",
};

const LIGHT: Palette = Palette {
    background: "#f8fafc",
    card: "#ffffff",
    border: "rgba(15,23,42,0.08)",
    text: "#0f172a",
    muted: "#475569",
    accent: "#2563eb",
    accent_text: "#f8fafc",
    success: "#16a34a",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}
