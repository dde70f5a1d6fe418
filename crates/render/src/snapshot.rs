//! PNG snapshot of a [`WheelModel`].
//!
//! Feature-gated behind `png` (default on) so hosts that only need SVG or a
//! raw buffer do not pull in the `image` crate. The raster itself comes from
//! [`crate::pixel`].

use hue_wheel_core::{WheelError, WheelModel};
use std::path::Path;

use crate::pixel::{raster_side, wheel_to_rgba};

/// Writes the wheel as a square RGBA PNG.
///
/// Returns `WheelError::InvalidDimensions` if the model size cannot be
/// rasterized, or `WheelError::Io` on write failure.
pub fn write_png(model: &WheelModel, path: &Path) -> Result<(), WheelError> {
    let rgba = wheel_to_rgba(model)?;
    let side = u32::try_from(raster_side(model)?).map_err(|_| WheelError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(side, side, rgba)
        .ok_or_else(|| WheelError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| WheelError::Io(e.to_string()))?;
    log::info!("wrote {side}x{side} wheel to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_wheel_core::{PickerState, WheelConfig};

    #[test]
    fn write_png_round_trip() {
        let config = WheelConfig {
            size: 64.0,
            stroke_width: 12.0,
            ..WheelConfig::default()
        };
        let model = WheelModel::build(&config, &PickerState::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wheel.png");

        write_png(&model, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
        // center of the hole stays transparent
        assert_eq!(img.get_pixel(32, 32).0[3], 0);
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let model = WheelModel::build(&WheelConfig::default(), &PickerState::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("wheel.png");
        assert!(matches!(write_png(&model, &path), Err(WheelError::Io(_))));
    }
}
