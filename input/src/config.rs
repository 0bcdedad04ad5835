//! Tuning parameters of the drag gesture, loaded once at startup from a TOML file.
use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use derive_more::Constructor;
use serde::Deserialize;
use serde_tuple::{Deserialize_tuple, Serialize_tuple};

/// The min / max bounds consumers should clamp the drag signal to.
///
/// These are forwarded verbatim with every drag event, no ordering is enforced.
#[derive(
    Debug, Copy, Clone, PartialEq, Default, Constructor, Serialize_tuple, Deserialize_tuple,
)]
pub struct ClampValues {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Threshold and scale factor of horizontal pointer deltas. Always > 0.
    horizontal_input_speed: f64,
    clamp_values: ClampValues,
    /// Time constant of the damped return to zero. Always >= 0.
    clamp_speed: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    horizontal_input_speed: f64,
    clamp_values: ClampValues,
    clamp_speed: f64,
}

impl GestureConfig {
    pub fn new(
        horizontal_input_speed: f64,
        clamp_values: ClampValues,
        clamp_speed: f64,
    ) -> Result<Self> {
        if !horizontal_input_speed.is_finite() || horizontal_input_speed <= 0.0 {
            bail!(
                "`horizontal_input_speed` must be finite and positive, got {horizontal_input_speed}"
            );
        }
        if !clamp_speed.is_finite() || clamp_speed < 0.0 {
            bail!("`clamp_speed` must be finite and not negative, got {clamp_speed}");
        }

        Ok(Self {
            horizontal_input_speed,
            clamp_values,
            clamp_speed,
        })
    }

    pub fn from_toml(toml: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(toml).context("Failed to parse TOML gesture configuration")?;
        Self::new(
            file.horizontal_input_speed,
            file.clamp_values,
            file.clamp_speed,
        )
    }

    /// Load the configuration from a TOML file.
    ///
    /// There is no fallback: a missing or invalid file is an error the host must handle.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read gesture configuration {}", path.display()))?;
        Self::from_toml(&toml)
            .with_context(|| format!("Invalid gesture configuration {}", path.display()))
    }

    pub fn horizontal_input_speed(&self) -> f64 {
        self.horizontal_input_speed
    }

    pub fn clamp_values(&self) -> ClampValues {
        self.clamp_values
    }

    pub fn clamp_speed(&self) -> f64 {
        self.clamp_speed
    }
}
