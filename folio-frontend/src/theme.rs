use gloo_storage::{LocalStorage, Storage};
use leptos::document;

/// LocalStorage key of the persisted theme.
pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Restores the persisted theme, defaulting to light.
    pub fn load() -> Self {
        LocalStorage::get::<String>(STORAGE_KEY)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Persists the theme across sessions.
    pub fn store(self) {
        if let Err(err) = LocalStorage::set(STORAGE_KEY, self.as_str()) {
            log::warn!("Unable to persist the theme: {err}");
        }
    }

    /// Applies the theme to the document root's class list.
    pub fn apply_to_document(self) {
        let Some(root) = document().document_element() else {
            return;
        };
        let class_list = root.class_list();
        let result = match self {
            Self::Dark => class_list.add_1("dark"),
            Self::Light => class_list.remove_1("dark"),
        };
        if let Err(err) = result {
            log::warn!("Unable to apply the theme: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_theme() {
        assert_eq!(Theme::from_str_or_default("dark"), Theme::Dark);
        assert_eq!(Theme::from_str_or_default("light"), Theme::Light);
        assert_eq!(Theme::from_str_or_default("garbage"), Theme::Light);
    }

    #[test]
    fn toggle_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn theme_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str_or_default(theme.as_str()), theme);
        }
    }
}
