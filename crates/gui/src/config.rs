//! Menu configuration constants and tunable defaults.
use std::env;

/// Menu configuration.
///
/// Constants mirror the limits of the server's chest windows. Runtime
/// fields only affect pages built through [`Page::from_config`].
///
/// [`Page::from_config`]: crate::Page::from_config
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuiConfig {
    /// Title given to pages that are not titled explicitly.
    pub default_title: String,

    /// Row count given to pages that are not sized explicitly.
    pub default_rows: usize,
}

impl GuiConfig {
    // ===== window limits =====
    pub const SLOTS_PER_ROW: usize = 9;
    pub const MAX_ROWS: usize = 6;
    pub const MAX_PAGE_SIZE: usize = Self::SLOTS_PER_ROW * Self::MAX_ROWS;
    pub const MAX_STACK_AMOUNT: u8 = 99;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TITLE: &'static str = "Menu";
    pub const DEFAULT_ROWS: usize = 3;

    pub fn new() -> Self {
        Self {
            default_title: Self::DEFAULT_TITLE.to_string(),
            default_rows: Self::DEFAULT_ROWS,
        }
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GUI_DEFAULT_TITLE` - Title for unnamed pages (default: "Menu")
    /// - `GUI_DEFAULT_ROWS` - Rows for unsized pages, clamped to 1..=6 (default: 3)
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(title) = env::var("GUI_DEFAULT_TITLE") {
            config.default_title = title;
        }
        if let Some(rows) = read_env::<usize>("GUI_DEFAULT_ROWS") {
            config.default_rows = rows.clamp(1, Self::MAX_ROWS);
        }

        config
    }

    /// Slot count of a page built from this config.
    pub fn default_size(&self) -> usize {
        self.default_rows.clamp(1, Self::MAX_ROWS) * Self::SLOTS_PER_ROW
    }

    /// Whether `size` is a valid chest window size.
    pub const fn is_valid_size(size: usize) -> bool {
        size > 0 && size <= Self::MAX_PAGE_SIZE && size % Self::SLOTS_PER_ROW == 0
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sizes_are_whole_rows() {
        assert!(GuiConfig::is_valid_size(9));
        assert!(GuiConfig::is_valid_size(54));
        assert!(!GuiConfig::is_valid_size(0));
        assert!(!GuiConfig::is_valid_size(10));
        assert!(!GuiConfig::is_valid_size(63));
    }

    #[test]
    fn default_size_clamps_rows() {
        let mut config = GuiConfig::default();
        assert_eq!(config.default_size(), 27);

        config.default_rows = 40;
        assert_eq!(config.default_size(), 54);

        config.default_rows = 0;
        assert_eq!(config.default_size(), 9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_plugin_json() {
        let config: GuiConfig =
            serde_json::from_str(r#"{ "default_title": "Warps", "default_rows": 6 }"#).unwrap();
        assert_eq!(config.default_title, "Warps");
        assert_eq!(config.default_size(), GuiConfig::MAX_PAGE_SIZE);
    }
}
