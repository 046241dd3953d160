use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

/// Immutable carousel settings, fixed at construction.
///
/// Values are not validated: a zero delay or an empty selector is passed
/// through as-is and callers are responsible for sane values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    pub auto_slide_delay: Duration,
    pub slide_selector: String,
    pub dot_selector: String,
    pub active_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_slide_delay: DEFAULT_AUTO_SLIDE_DELAY,
            slide_selector: DEFAULT_SLIDE_SELECTOR.to_string(),
            dot_selector: DEFAULT_DOT_SELECTOR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
        }
    }
}

/// On-disk shape of the config; every field is optional.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    auto_slide_delay_ms: u64,
    slide_selector: String,
    dot_selector: String,
    active_class: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = CarouselConfig::default();
        Self {
            auto_slide_delay_ms: defaults.auto_slide_delay.as_millis() as u64,
            slide_selector: defaults.slide_selector,
            dot_selector: defaults.dot_selector,
            active_class: defaults.active_class,
        }
    }
}

impl From<ConfigFile> for CarouselConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            auto_slide_delay: Duration::from_millis(file.auto_slide_delay_ms),
            slide_selector: file.slide_selector,
            dot_selector: file.dot_selector,
            active_class: file.active_class,
        }
    }
}

impl CarouselConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.into())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded carousel config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.auto_slide_delay = delay;
        self
    }

    pub fn with_slide_selector(mut self, selector: impl Into<String>) -> Self {
        self.slide_selector = selector.into();
        self
    }

    pub fn with_dot_selector(mut self, selector: impl Into<String>) -> Self {
        self.dot_selector = selector.into();
        self
    }

    /// Class name slides are looked up by (selector without its leading `.`).
    pub fn slide_class(&self) -> &str {
        class_name(&self.slide_selector)
    }

    /// Class name dots are looked up by (selector without its leading `.`).
    pub fn dot_class(&self) -> &str {
        class_name(&self.dot_selector)
    }
}

fn class_name(selector: &str) -> &str {
    selector.strip_prefix('.').unwrap_or(selector)
}
