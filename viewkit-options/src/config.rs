//! # Options Presets
//!
//! Named [ViewOptions] and [ScrollOptions] values loaded from TOML, so an
//! application can keep its recurring appearance settings out of code.
//!
//! Presets are plain data. Nothing is inherited or cascaded between them: a
//! preset is a complete options value, with any key the file leaves out taking
//! the options default (and [Field](crate::field::Field) members staying unset).
//!
//! ## File format
//!
//! ```toml
//! [view.card]
//! background_color = "#ffffff"
//! corner_radius = 12.0
//! clips_to_bounds = true
//! interaction_enabled = true
//!
//! [view.card.layout_compression]
//! vertical_hugging = 750
//!
//! [view.overlay]
//! background_color = "none"
//! alpha = 0.6
//!
//! [scroll.pager]
//! paging_enabled = true
//! shows_horizontal_indicator = false
//! deceleration_rate = "fast"
//! content_inset = { top = 8.0, bottom = 8.0 }
//! ```
//!
//! Colors are `#rrggbb` or `#rrggbbaa`; `"none"` means "no color".
//!
//! ## Environment Variables
//!
//! - `VIEWKIT_OPTIONS_CONFIG`: path to a presets file, read by [OptionsConfig::from_env_or_default].

use crate::error::{OptionsError, OptionsResult};
use crate::scroll::ScrollOptions;
use crate::view::ViewOptions;
use indexmap::IndexMap;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// The environment variable naming the presets file.
pub const CONFIG_ENV_VAR: &str = "VIEWKIT_OPTIONS_CONFIG";

/// A set of named options presets.
///
/// # Examples
///
/// ```rust
/// use viewkit_options::config::OptionsConfig;
/// use viewkit_options::view::ViewOptions;
///
/// let config = OptionsConfig::new()
///     .with_view_preset("faded", ViewOptions::new().with_alpha(0.4));
///
/// assert_eq!(config.view_preset("faded").unwrap().alpha, 0.4);
/// assert!(config.view_preset("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    view: IndexMap<String, ViewOptions>,
    scroll: IndexMap<String, ScrollOptions>,
}

impl OptionsConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the file named by `VIEWKIT_OPTIONS_CONFIG`, or return an empty configuration.
    ///
    /// A file that cannot be loaded is logged and skipped.
    pub fn from_env_or_default() -> Self {
        let Ok(config_path) = env::var(CONFIG_ENV_VAR) else {
            return Self::new();
        };

        match Self::from_file(&config_path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring options presets from {}: {}", config_path, err);
                Self::new()
            },
        }
    }

    /// Load presets from a `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> OptionsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OptionsError::file_not_found(path));
        }
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(OptionsError::unsupported_format(path));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, &path.display().to_string())?;

        log::debug!(
            "Loaded {} view and {} scroll presets from {:?}",
            config.view.len(),
            config.scroll.len(),
            path
        );
        Ok(config)
    }

    /// Load presets from TOML content.
    pub fn from_toml(content: &str) -> OptionsResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> OptionsResult<Self> {
        toml::from_str(content).map_err(|err| OptionsError::parse_error(origin, err.to_string()))
    }

    /// Add or replace a view preset.
    pub fn with_view_preset(mut self, name: impl Into<String>, options: ViewOptions) -> Self {
        self.view.insert(name.into(), options);
        self
    }

    /// Add or replace a scroll preset.
    pub fn with_scroll_preset(mut self, name: impl Into<String>, options: ScrollOptions) -> Self {
        self.scroll.insert(name.into(), options);
        self
    }

    /// Merge another configuration into this one.
    ///
    /// Presets in `other` replace presets of the same name, so later files
    /// override earlier ones.
    pub fn merge(mut self, other: OptionsConfig) -> Self {
        self.view.extend(other.view);
        self.scroll.extend(other.scroll);
        self
    }

    /// Returns the view preset with the given name.
    pub fn view_preset(&self, name: &str) -> OptionsResult<&ViewOptions> {
        self.view
            .get(name)
            .ok_or_else(|| OptionsError::preset_not_found("view", name))
    }

    /// Returns the scroll preset with the given name.
    pub fn scroll_preset(&self, name: &str) -> OptionsResult<&ScrollOptions> {
        self.scroll
            .get(name)
            .ok_or_else(|| OptionsError::preset_not_found("scroll", name))
    }

    /// Returns the view preset names in the order they were defined.
    pub fn view_preset_names(&self) -> impl Iterator<Item = &str> {
        self.view.keys().map(String::as_str)
    }

    /// Returns the scroll preset names in the order they were defined.
    pub fn scroll_preset_names(&self) -> impl Iterator<Item = &str> {
        self.scroll.keys().map(String::as_str)
    }

    /// Returns `true` if there are no presets.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty() && self.scroll.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::view::LayoutCompressionOptions;
    use std::io::Write;
    use viewkit_core::appearance::ContentMode;
    use viewkit_core::geometry::EdgeInsets;
    use viewkit_core::layout::LayoutPriority;
    use viewkit_core::scroll::DecelerationRate;
    use viewkit_core::Color;

    const PRESETS: &str = r##"
[view.card]
background_color = "#ffffff"
content_mode = "scale_aspect_fit"
corner_radius = 12.0
interaction_enabled = true

[view.card.layout_compression]
vertical_hugging = 750

[view.overlay]
background_color = "none"
alpha = 0.6

[scroll.pager]
paging_enabled = true
deceleration_rate = "fast"
content_inset = { top = 8.0, bottom = 8.0 }
"##;

    #[test]
    fn test_parse_view_presets() {
        let config = OptionsConfig::from_toml(PRESETS).unwrap();

        let card = config.view_preset("card").unwrap();
        assert_eq!(card.background_color, Some(Color::from_rgb8(255, 255, 255)));
        assert_eq!(card.content_mode, ContentMode::ScaleAspectFit);
        assert_eq!(card.corner_radius, 12.0);
        assert_eq!(card.alpha, 1.0);
        assert_eq!(card.interaction_enabled, Field::Set(true));
        assert_eq!(
            card.layout_compression,
            Field::Set(
                LayoutCompressionOptions::new()
                    .with_vertical_hugging(LayoutPriority::DEFAULT_HIGH)
            )
        );

        let overlay = config.view_preset("overlay").unwrap();
        assert_eq!(overlay.background_color, None);
        assert_eq!(overlay.interaction_enabled, Field::Unset);
        assert_eq!(overlay.layout_compression, Field::Unset);
    }

    #[test]
    fn test_parse_scroll_presets() {
        let config = OptionsConfig::from_toml(PRESETS).unwrap();

        let pager = config.scroll_preset("pager").unwrap();
        let expected = ScrollOptions::new()
            .with_paging_enabled(true)
            .with_deceleration_rate(DecelerationRate::Fast)
            .with_content_inset(EdgeInsets::new(8.0, 0.0, 8.0, 0.0));
        assert_eq!(*pager, expected);
    }

    #[test]
    fn test_preset_names_keep_file_order() {
        let config = OptionsConfig::from_toml(PRESETS).unwrap();
        let names: Vec<&str> = config.view_preset_names().collect();
        assert_eq!(names, vec!["card", "overlay"]);
        let names: Vec<&str> = config.scroll_preset_names().collect();
        assert_eq!(names, vec!["pager"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(OptionsConfig::new().is_empty());
        assert!(OptionsConfig::from_toml("").unwrap().is_empty());
        assert!(!OptionsConfig::new()
            .with_scroll_preset("feed", ScrollOptions::new())
            .is_empty());
        assert!(!OptionsConfig::from_toml(PRESETS).unwrap().is_empty());
    }

    // One test owns the environment variable so parallel tests never race on it.
    #[test]
    fn test_from_env_or_default() {
        env::remove_var(CONFIG_ENV_VAR);
        assert!(OptionsConfig::from_env_or_default().is_empty());

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(PRESETS.as_bytes()).unwrap();
        env::set_var(CONFIG_ENV_VAR, file.path());
        assert_eq!(
            OptionsConfig::from_env_or_default(),
            OptionsConfig::from_toml(PRESETS).unwrap()
        );

        env::set_var(CONFIG_ENV_VAR, "/nonexistent/viewkit/presets.toml");
        assert!(OptionsConfig::from_env_or_default().is_empty());

        env::remove_var(CONFIG_ENV_VAR);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = OptionsConfig::from_toml("[view.card]\ncorner_radus = 4.0\n").unwrap_err();
        assert!(matches!(err, OptionsError::ConfigParseError { .. }));
    }

    #[test]
    fn test_missing_preset() {
        let config = OptionsConfig::new();
        let err = config.scroll_preset("feed").unwrap_err();
        assert_eq!(err.to_string(), "No scroll options preset named 'feed'");
    }

    #[test]
    fn test_merge_replaces_same_name() {
        let base = OptionsConfig::new()
            .with_view_preset("card", ViewOptions::new().with_corner_radius(4.0))
            .with_view_preset("badge", ViewOptions::new());
        let user = OptionsConfig::new()
            .with_view_preset("card", ViewOptions::new().with_corner_radius(16.0));

        let merged = base.merge(user);
        assert_eq!(merged.view_preset("card").unwrap().corner_radius, 16.0);
        assert!(merged.view_preset("badge").is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(PRESETS.as_bytes()).unwrap();

        let config = OptionsConfig::from_file(file.path()).unwrap();
        assert_eq!(config, OptionsConfig::from_toml(PRESETS).unwrap());
    }

    #[test]
    fn test_from_file_rejects_other_extensions() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = OptionsConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, OptionsError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = OptionsConfig::from_file("/nonexistent/viewkit/presets.toml").unwrap_err();
        assert!(matches!(err, OptionsError::ConfigFileNotFound { .. }));
    }
}
