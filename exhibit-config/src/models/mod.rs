pub mod carousel;

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
use carousel::{CarouselOverrides, CarouselSettings};

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "EXHIBIT_CONFIG_PATH";
/// Environment variable carrying inline JSON config.
pub const CONFIG_JSON_VAR: &str = "EXHIBIT_CONFIG_JSON";
/// Quiet window applied to bursts of resize notifications.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Source that produced the exhibit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Page-level configuration: one settings block per carousel plus shared
/// layout timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExhibitConfig {
    /// Artwork gallery carousel.
    pub gallery: CarouselSettings,
    /// Workshop-week timeline carousel.
    pub workshop: CarouselSettings,
    /// Resize bursts collapse into one re-layout this long after the last
    /// event.
    #[serde(with = "crate::util::duration")]
    pub resize_debounce: Duration,
}

impl Default for ExhibitConfig {
    fn default() -> Self {
        Self {
            gallery: CarouselSettings::gallery(),
            workshop: CarouselSettings::workshop(),
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }
}

/// Raw configuration as written in a file. Missing sections keep the
/// per-carousel presets.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub gallery: Option<CarouselOverrides>,
    #[serde(default)]
    pub workshop: Option<CarouselOverrides>,
    #[serde(default, deserialize_with = "crate::util::duration_opt::deserialize")]
    pub resize_debounce: Option<Duration>,
}

impl From<FileConfig> for ExhibitConfig {
    fn from(file: FileConfig) -> Self {
        let mut config = ExhibitConfig::default();
        if let Some(gallery) = file.gallery {
            config.gallery.apply(gallery);
        }
        if let Some(workshop) = file.workshop {
            config.workshop.apply(workshop);
        }
        if let Some(debounce) = file.resize_debounce {
            config.resize_debounce = debounce;
        }
        config
    }
}

impl ExhibitConfig {
    /// Resolve the page config: `$EXHIBIT_CONFIG_PATH`, then
    /// `$EXHIBIT_CONFIG_JSON`, then the first default file on disk, then
    /// the built-in presets.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Some(path) = non_blank_var(CONFIG_PATH_VAR).map(PathBuf::from) {
            return Ok((Self::load_from_file(&path)?, ConfigSource::EnvPath(path)));
        }
        if let Some(raw) = non_blank_var(CONFIG_JSON_VAR) {
            let config = Self::parse_json(&raw)
                .with_context(|| format!("{CONFIG_JSON_VAR} is not a valid exhibit config"))?;
            return Ok((config, ConfigSource::EnvInline));
        }
        match Self::find_default_file() {
            Some(path) => Ok((Self::load_from_file(&path)?, ConfigSource::File(path))),
            None => Ok((Self::default(), ConfigSource::Default)),
        }
    }

    /// `.json` and `.toml` pick the format; any other extension is sniffed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).with_context(|| format!("reading {origin}"))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents),
            Some("toml") => Self::parse_toml(&contents),
            _ => Self::parse_from_str(&contents, &origin),
        }
        .with_context(|| format!("exhibit config {origin}"))
    }

    /// Sniff the format: TOML, else JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        match Self::parse_toml(contents) {
            Ok(config) => Ok(config),
            Err(toml_err) => Self::parse_json(contents).map_err(|json_err| {
                anyhow!("{origin} is neither TOML ({toml_err}) nor JSON ({json_err})")
            }),
        }
    }

    pub fn parse_toml(raw: &str) -> anyhow::Result<Self> {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(file.into())
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let file: FileConfig = serde_json::from_str(raw)?;
        Ok(file.into())
    }

    fn find_default_file() -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }

    /// Reject values the engine cannot honour and collect soft warnings for
    /// values that are legal but probably unintended.
    pub fn validate(&self) -> Result<ConfigWarnings, ConfigGuardRailError> {
        if self.resize_debounce.is_zero() {
            return Err(ConfigGuardRailError::ZeroResizeDebounce);
        }

        let mut warnings = ConfigWarnings::default();
        for (name, settings) in [("gallery", &self.gallery), ("workshop", &self.workshop)] {
            validate_carousel(name, settings, &mut warnings)?;
        }
        Ok(warnings)
    }
}

impl CarouselSettings {
    /// Guard rails for a single carousel, named `carousel` in errors and
    /// warnings.
    pub fn validate(&self, carousel: &'static str) -> Result<ConfigWarnings, ConfigGuardRailError> {
        let mut warnings = ConfigWarnings::default();
        validate_carousel(carousel, self, &mut warnings)?;
        Ok(warnings)
    }
}

const DEFAULT_FILES: [&str; 4] = [
    "exhibit.toml",
    "exhibit.json",
    "config/exhibit.toml",
    "config/exhibit.json",
];

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn validate_carousel(
    carousel: &'static str,
    settings: &CarouselSettings,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    if settings.transition.is_zero() {
        return Err(ConfigGuardRailError::ZeroTransition { carousel });
    }

    let threshold = settings.swipe_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigGuardRailError::InvalidSwipeThreshold {
            carousel,
            value: threshold,
        });
    }

    if let Some(autoplay) = settings.autoplay.as_ref().filter(|a| a.enabled) {
        if autoplay.interval.is_zero() {
            return Err(ConfigGuardRailError::ZeroAutoplayInterval { carousel });
        }
        // Every tick that lands inside the lock window is dropped.
        if autoplay.interval <= settings.transition {
            warnings.push(ConfigWarning::AutoplayWithinTransition {
                carousel,
                interval: autoplay.interval,
                transition: settings.transition,
            });
        }
    }

    if settings.indicator_label.trim().is_empty() {
        warnings.push(ConfigWarning::EmptyIndicatorLabel { carousel });
    }

    Ok(())
}
