use mondrian_recolor::{
    RecolorError, Reference, Rgb, Snapshot, Substitutes, Threshold, Transparency,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Substitute colors for the three reference hues
    pub substitutes: SubstitutesConfig,

    /// Classification threshold (clamped to 0..=150)
    pub threshold: i64,

    /// Source weight in the background blend (clamped to 0..=255)
    pub transparency: i64,

    /// Fixed background color; a random one is drawn when absent
    pub background: Option<String>,

    /// Seed for the random background
    pub seed: Option<u64>,

    /// Fit the source image to this height before recoloring
    pub resize_height: Option<u32>,

    /// Default output path of the `render` command
    pub output: PathBuf,
}

/// Hex colors for the red, yellow and blue substitutes
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SubstitutesConfig {
    pub red: String,
    pub yellow: String,
    pub blue: String,
}

impl Default for SubstitutesConfig {
    fn default() -> Self {
        let defaults = Substitutes::default();
        Self {
            red: defaults[Reference::Red].to_string(),
            yellow: defaults[Reference::Yellow].to_string(),
            blue: defaults[Reference::Blue].to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            substitutes: SubstitutesConfig::default(),
            threshold: Threshold::DEFAULT as i64,
            transparency: Transparency::DEFAULT as i64,
            background: None,
            seed: None,
            resize_height: None,
            output: PathBuf::from("neon-mondrian.png"),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// A missing path gives the defaults silently; an unreadable or invalid
    /// file gives the defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        threshold = config.threshold,
                        transparency = config.transparency,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// The configured fixed background, if any.
    pub fn fixed_background(&self) -> Result<Option<Rgb>, RecolorError> {
        match &self.background {
            Some(hex) => Ok(Some(hex.parse()?)),
            None => Ok(None),
        }
    }

    /// Build the starting snapshot around `background`.
    ///
    /// Out-of-range numbers are clamped; a bad hex color is an error.
    pub fn base_snapshot(&self, background: Rgb) -> Result<Snapshot, RecolorError> {
        let substitutes = Substitutes::from_hex(&[
            &self.substitutes.red,
            &self.substitutes.yellow,
            &self.substitutes.blue,
        ])?;
        Ok(Snapshot::new(background)
            .substitutes(substitutes)
            .threshold(self.threshold)
            .transparency(self.transparency))
    }
}
