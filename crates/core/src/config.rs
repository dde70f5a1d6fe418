//! Wheel configuration: size, band thickness, band count and the host's
//! initial value and display options.
//!
//! [`WheelConfig::from_json`] is lenient per key: a missing key or a value of
//! the wrong JSON type falls back to the default. Only the combined result is
//! checked, by [`WheelConfig::validate`].

use crate::error::WheelError;
use crate::geometry::{WheelSpec, DEFAULT_SEGMENTS};
use crate::picker::DEFAULT_VALUE;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_SIZE: f64 = 220.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 28.0;
/// Most bands a wheel may be split into (one per tenth of a degree).
pub const MAX_SEGMENTS: usize = 3600;

/// Parameters of a rendered wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Side of the square the wheel is drawn in.
    pub size: f64,
    /// Thickness of the hue band.
    pub stroke_width: f64,
    /// Number of hue bands.
    pub segments: usize,
    /// Initially selected color. Not validated: an unparsable value puts the
    /// marker at hue 0.
    pub value: String,
    pub show_preview: bool,
    pub show_hex_input: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            segments: DEFAULT_SEGMENTS,
            value: DEFAULT_VALUE.to_string(),
            show_preview: true,
            show_hex_input: false,
        }
    }
}

fn lookup<T>(params: &Value, key: &str, extract: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
    params.get(key).and_then(extract)
}

impl WheelConfig {
    /// Builds a config from a JSON object, then validates it.
    pub fn from_json(params: &Value) -> Result<Self, WheelError> {
        let d = Self::default();
        let config = Self {
            size: lookup(params, "size", Value::as_f64).unwrap_or(d.size),
            stroke_width: lookup(params, "stroke_width", Value::as_f64).unwrap_or(d.stroke_width),
            segments: lookup(params, "segments", Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(d.segments),
            value: lookup(params, "value", |v| v.as_str().map(String::from)).unwrap_or(d.value),
            show_preview: lookup(params, "show_preview", Value::as_bool).unwrap_or(d.show_preview),
            show_hex_input: lookup(params, "show_hex_input", Value::as_bool)
                .unwrap_or(d.show_hex_input),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the wheel is drawable: positive finite size, a band no
    /// thicker than half the size (so the hole radius is not negative), and
    /// between 1 and [`MAX_SEGMENTS`] bands.
    pub fn validate(&self) -> Result<(), WheelError> {
        let problem = if !self.size.is_finite() || self.size <= 0.0 {
            Some(format!("size must be a positive number, got {}", self.size))
        } else if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            Some(format!(
                "stroke_width must be a non-negative number, got {}",
                self.stroke_width
            ))
        } else if self.stroke_width > self.size / 2.0 {
            Some(format!(
                "stroke_width {} exceeds half of size {}",
                self.stroke_width, self.size
            ))
        } else if self.segments == 0 {
            Some("segments must be at least 1".to_string())
        } else if self.segments > MAX_SEGMENTS {
            Some(format!(
                "segments must be at most {MAX_SEGMENTS}, got {}",
                self.segments
            ))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                log::warn!("rejecting wheel config: {msg}");
                Err(WheelError::InvalidConfig(msg))
            }
            None => Ok(()),
        }
    }

    /// Ring placement for this config.
    pub fn spec(&self) -> WheelSpec {
        WheelSpec::from_size(self.size, self.stroke_width)
    }

    /// Current values as a JSON object.
    pub fn params(&self) -> Value {
        json!({
            "size": self.size,
            "stroke_width": self.stroke_width,
            "segments": self.segments,
            "value": self.value,
            "show_preview": self.show_preview,
            "show_hex_input": self.show_hex_input,
        })
    }

    /// Types, ranges and defaults of every key accepted by [`from_json`](Self::from_json).
    pub fn param_schema() -> Value {
        json!({
            "size": {
                "type": "number",
                "min": 0.0,
                "exclusive_min": true,
                "default": DEFAULT_SIZE,
                "description": "Side of the square the wheel is drawn in"
            },
            "stroke_width": {
                "type": "number",
                "min": 0.0,
                "max": "size / 2",
                "default": DEFAULT_STROKE_WIDTH,
                "description": "Thickness of the hue band"
            },
            "segments": {
                "type": "integer",
                "min": 1,
                "max": MAX_SEGMENTS,
                "default": DEFAULT_SEGMENTS,
                "description": "Number of hue bands"
            },
            "value": {
                "type": "string",
                "format": "#rrggbb",
                "default": DEFAULT_VALUE,
                "description": "Initially selected color"
            },
            "show_preview": {
                "type": "boolean",
                "default": true,
                "description": "Draw a swatch of the selected color below the wheel"
            },
            "show_hex_input": {
                "type": "boolean",
                "default": false,
                "description": "Print the selected hex value under the preview"
            }
        })
    }
}
