#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shared UI state: the colour scheme the comment board renders with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

/// Colour scheme reported by `prefers-color-scheme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_prefers_light(light: bool) -> Self {
        if light { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}
