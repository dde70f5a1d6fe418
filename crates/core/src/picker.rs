//! Host-facing picker model.
//!
//! The selected color is a plain value: every interaction takes the current
//! [`PickerState`] and returns the next one. [`WheelModel`] gathers the data a
//! view needs to draw the wheel without the view knowing any color math.

use crate::color::{hsv_to_rgb, rgb_to_hex, HexColor, Hsv, Rgb};
use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::geometry::{
    arc_path, hit_test, point_for_angle, segments, ArcPath, Point, Segment, WheelSpec,
};
use serde::Serialize;

/// Selection used when the host supplies none.
pub const DEFAULT_VALUE: &str = "#ff0000";

/// Colors offered when the host cannot draw vector paths.
pub const FALLBACK_SWATCHES: [&str; 15] = [
    "#ff0000", "#ff8000", "#ffff00", "#80ff00", "#00ff00", "#00ff80", "#00ffff", "#0080ff",
    "#0000ff", "#8000ff", "#ff00ff", "#ff0080", "#ff4040", "#ff8040", "#ffff40",
];

/// Gap between the marker's edge and the band's edge.
const MARKER_INSET: f64 = 2.0;

/// Color the wheel shows at `angle`: full saturation and value.
pub fn color_at_angle(angle: f64) -> HexColor {
    rgb_to_hex(hsv_to_rgb(angle, 1.0, 1.0))
}

/// Hue the marker sits at for `value`, or 0 when `value` is not `#rrggbb`.
pub fn marker_angle(value: &str) -> f64 {
    match HexColor::parse(value) {
        Ok(c) => c.to_hsv().h,
        Err(e) => {
            log::debug!("placing marker at 0: {e}");
            0.0
        }
    }
}

/// The host's current selection.
///
/// Holds the raw value the host was given, which may not be a valid hex
/// color until the first pick replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerState {
    value: String,
}

/// Outcome of a press on the wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The press landed on the band at `angle`; carries the next state.
    Selected { state: PickerState, angle: f64 },
    /// The press missed the band; the state is unchanged.
    Ignored,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE)
    }
}

impl PickerState {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Raw selected value as supplied or last picked.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The selection as a color, if it parses.
    pub fn selected(&self) -> Option<HexColor> {
        HexColor::parse(&self.value).ok()
    }

    /// Uppercase form of the value for display.
    pub fn display_value(&self) -> String {
        self.value.to_uppercase()
    }

    pub fn marker_angle(&self) -> f64 {
        marker_angle(&self.value)
    }

    /// Handles a press at `point` in wheel-local coordinates.
    pub fn press(&self, spec: &WheelSpec, point: Point) -> PickOutcome {
        match hit_test(spec, point).angle() {
            Some(angle) => {
                let hex = color_at_angle(angle);
                log::debug!("picked {hex} at {angle:.2} degrees");
                PickOutcome::Selected {
                    state: Self::new(hex.as_str()),
                    angle,
                }
            }
            None => PickOutcome::Ignored,
        }
    }

    /// Selects a swatch from the fallback grid.
    ///
    /// Returns `WheelError::InvalidFormat` if `hex` is not `#rrggbb`.
    pub fn choose_swatch(&self, hex: &str) -> Result<PickerState, WheelError> {
        let color = HexColor::parse(hex)?;
        log::debug!("picked swatch {color}");
        Ok(Self::new(color.as_str()))
    }
}

/// Circle drawn over the band at the selected hue.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    /// `None` when the selection is not a valid color.
    pub fill: Option<HexColor>,
}

/// Marker for `state` on `spec`, sized to sit inside the band.
pub fn marker(spec: &WheelSpec, state: &PickerState) -> Marker {
    Marker {
        center: point_for_angle(spec, state.marker_angle()),
        radius: (spec.stroke_width / 2.0 - MARKER_INSET).max(0.0),
        fill: state.selected(),
    }
}

/// One drawable hue band.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub segment: Segment,
    pub path: ArcPath,
    /// Hue at the band's start angle.
    pub fill: Rgb,
}

/// Everything a view needs to draw the wheel for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelModel {
    pub size: f64,
    pub spec: WheelSpec,
    pub bands: Vec<Band>,
    pub marker: Marker,
    pub selected: Option<HexColor>,
    pub display_value: String,
    pub show_preview: bool,
    pub show_hex_input: bool,
}

impl WheelModel {
    /// Lays out bands and marker for `state` on a wheel described by `config`.
    ///
    /// Returns `WheelError::InvalidConfig` if `config` fails validation.
    pub fn build(config: &WheelConfig, state: &PickerState) -> Result<Self, WheelError> {
        config.validate()?;
        let spec = config.spec();
        let bands = segments(config.segments)
            .into_iter()
            .map(|segment| Band {
                path: arc_path(&spec, &segment),
                fill: Hsv::pure(segment.start_angle).to_rgb(),
                segment,
            })
            .collect();

        Ok(Self {
            size: config.size,
            spec,
            bands,
            marker: marker(&spec, state),
            selected: state.selected(),
            display_value: state.display_value(),
            show_preview: config.show_preview,
            show_hex_input: config.show_hex_input,
        })
    }
}
