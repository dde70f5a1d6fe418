#![deny(unsafe_code)]
//! Color-geometry engine for the hue wheel picker.
//!
//! Provides HSV/RGB/hex conversion (`color`), ring geometry and hit-testing
//! (`geometry`), wheel configuration (`config`), and the host-facing picker
//! model (`picker`). Everything is a pure function over value types; the
//! engine never draws.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod picker;

pub use color::{hex_to_hsv, hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, HexColor, Hsv, Rgb};
pub use config::{WheelConfig, MAX_SEGMENTS};
pub use error::WheelError;
pub use geometry::{
    arc_path, hit_test, point_for_angle, segments, ArcPath, HitTest, Point, Segment, WheelSpec,
};
pub use picker::{Marker, PickOutcome, PickerState, WheelModel};
