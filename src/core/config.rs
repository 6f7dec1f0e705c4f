//! Persisted settings.
//!
//! [`Config`] is always a complete record. Everything arriving from the store
//! is a [`ConfigPatch`] and is merged over the previous record key by key, so a
//! notification carrying only `opacity` never resets the other four settings.

use crate::core::constants::*;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub enabled: bool,
    /// Nominal ripple size; the painted radius reaches twice this.
    #[serde(rename = "size")]
    pub max_radius_unit: f64,
    #[serde(rename = "duration")]
    pub duration_ms: f64,
    /// Opacity of the whole overlay element, not of individual ripples.
    #[serde(rename = "opacity")]
    pub base_opacity: f64,
    #[serde(rename = "color")]
    pub color_hex: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            max_radius_unit: DEFAULT_SIZE,
            duration_ms: DEFAULT_DURATION_MS,
            base_opacity: DEFAULT_OPACITY,
            color_hex: DEFAULT_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Overlay every key present in `patch`; absent keys keep their value.
    pub fn merge(&mut self, patch: &ConfigPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(size) = patch.max_radius_unit {
            self.max_radius_unit = size;
        }
        if let Some(duration) = patch.duration_ms {
            self.duration_ms = duration;
        }
        if let Some(opacity) = patch.base_opacity {
            self.base_opacity = opacity;
        }
        if let Some(color) = &patch.color_hex {
            self.color_hex.clone_from(color);
        }
    }
}

/// A partial settings record. Keys that are missing or hold a value of the
/// wrong shape deserialize to `None` instead of failing the whole record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ConfigPatch {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub enabled: Option<bool>,
    #[serde(rename = "size", default, deserialize_with = "lenient_number")]
    pub max_radius_unit: Option<f64>,
    #[serde(rename = "duration", default, deserialize_with = "lenient_number")]
    pub duration_ms: Option<f64>,
    #[serde(rename = "opacity", default, deserialize_with = "lenient_number")]
    pub base_opacity: Option<f64>,
    #[serde(rename = "color", default, deserialize_with = "lenient_string")]
    pub color_hex: Option<String>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.max_radius_unit.is_none()
            && self.duration_ms.is_none()
            && self.base_opacity.is_none()
            && self.color_hex.is_none()
    }
}

impl From<&Config> for ConfigPatch {
    fn from(config: &Config) -> Self {
        Self {
            enabled: Some(config.enabled),
            max_radius_unit: Some(config.max_radius_unit),
            duration_ms: Some(config.duration_ms),
            base_opacity: Some(config.base_opacity),
            color_hex: Some(config.color_hex.clone()),
        }
    }
}

/// The `{ key: { oldValue, newValue } }` mapping delivered by storage change
/// notifications. Unknown keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StorageChanges {
    #[serde(default)]
    enabled: Option<BoolChange>,
    #[serde(default)]
    size: Option<NumberChange>,
    #[serde(default)]
    duration: Option<NumberChange>,
    #[serde(default)]
    opacity: Option<NumberChange>,
    #[serde(default)]
    color: Option<TextChange>,
}

impl StorageChanges {
    /// Keep only the new values; a removed key (no `newValue`) is left alone.
    pub fn into_patch(self) -> ConfigPatch {
        ConfigPatch {
            enabled: self.enabled.and_then(|c| c.new_value),
            max_radius_unit: self.size.and_then(|c| c.new_value),
            duration_ms: self.duration.and_then(|c| c.new_value),
            base_opacity: self.opacity.and_then(|c| c.new_value),
            color_hex: self.color.and_then(|c| c.new_value),
        }
    }
}

/// Changes from any storage area other than [`SYNC_NAMESPACE`] are dropped.
pub fn patch_for_namespace(namespace: &str, changes: StorageChanges) -> Option<ConfigPatch> {
    (namespace == SYNC_NAMESPACE).then(|| changes.into_patch())
}

#[derive(Clone, Debug, Deserialize)]
struct BoolChange {
    #[serde(rename = "newValue", default, deserialize_with = "lenient_bool")]
    new_value: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
struct NumberChange {
    #[serde(rename = "newValue", default, deserialize_with = "lenient_number")]
    new_value: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
struct TextChange {
    #[serde(rename = "newValue", default, deserialize_with = "lenient_string")]
    new_value: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Lenient<T> {
    fn valid(self) -> Option<T> {
        match self {
            Lenient::Valid(v) => Some(v),
            Lenient::Invalid(_) => None,
        }
    }
}

// The settings form writes numbers, but a hand-edited or legacy record may
// hold numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Value(f64),
    Text(String),
}

impl Number {
    fn finite(self) -> Option<f64> {
        let v = match self {
            Number::Value(v) => v,
            Number::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<Lenient<bool>>::deserialize(d)?.and_then(Lenient::valid))
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Lenient<Number>>::deserialize(d)?
        .and_then(Lenient::valid)
        .and_then(Number::finite))
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Lenient<String>>::deserialize(d)?.and_then(Lenient::valid))
}
