//! RGBA raster of a [`WheelModel`].
//!
//! The vector document from [`render_wheel`] is rasterized with `resvg`, so
//! the pixels are the antialiased image of the same SVG a vector host would
//! show. The raster is the `size` x `size` square of the wheel; a preview
//! drawn below the wheel falls outside it.

use hue_wheel_core::{WheelError, WheelModel};
use resvg::usvg::{Options, Tree};
use tiny_skia::{Pixmap, Transform};

use crate::svg::render_wheel;

/// Largest raster side accepted, in pixels.
pub const MAX_SIDE: usize = 8192;

/// Side in pixels of the raster for `model`: its size rounded up.
///
/// Returns `WheelError::InvalidDimensions` for a size below one pixel or
/// above [`MAX_SIDE`].
pub fn raster_side(model: &WheelModel) -> Result<usize, WheelError> {
    let side = model.size.ceil();
    if !(1.0..=MAX_SIDE as f64).contains(&side) {
        return Err(WheelError::InvalidDimensions);
    }
    Ok(side as usize)
}

/// Rasterizes ring, marker and marker outline into a square RGBA8 buffer.
///
/// The buffer is row-major, not premultiplied, with length `side * side * 4`
/// where `side` is [`raster_side`]. Pixels off the ring are fully
/// transparent.
pub fn wheel_to_rgba(model: &WheelModel) -> Result<Vec<u8>, WheelError> {
    let side = u32::try_from(raster_side(model)?).map_err(|_| WheelError::InvalidDimensions)?;
    let doc = render_wheel(model)?;
    let tree =
        Tree::from_str(&doc, &Options::default()).map_err(|e| WheelError::Render(e.to_string()))?;
    let mut pixmap = Pixmap::new(side, side).ok_or(WheelError::InvalidDimensions)?;

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    log::debug!("rasterized {} bands at {side}x{side}", model.bands.len());

    Ok(pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_wheel_core::{PickerState, WheelConfig};

    const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn model_with(value: &str) -> WheelModel {
        WheelModel::build(&WheelConfig::default(), &PickerState::new(value)).unwrap()
    }

    fn pixel(buf: &[u8], side: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * side + x) * 4;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn buffer_has_expected_length() {
        let model = model_with("#ff0000");
        let buf = wheel_to_rgba(&model).unwrap();
        assert_eq!(buf.len(), 220 * 220 * 4);
    }

    #[test]
    fn fractional_size_rounds_up() {
        let config = WheelConfig {
            size: 20.5,
            stroke_width: 4.0,
            ..WheelConfig::default()
        };
        let model = WheelModel::build(&config, &PickerState::default()).unwrap();
        assert_eq!(raster_side(&model).unwrap(), 21);
        assert_eq!(wheel_to_rgba(&model).unwrap().len(), 21 * 21 * 4);
    }

    #[test]
    fn oversized_model_is_rejected() {
        let mut model = model_with("#ff0000");
        model.size = (MAX_SIDE + 1) as f64;
        assert!(matches!(raster_side(&model), Err(WheelError::InvalidDimensions)));
        assert!(matches!(wheel_to_rgba(&model), Err(WheelError::InvalidDimensions)));
    }

    #[test]
    fn hole_and_corners_are_transparent() {
        let buf = wheel_to_rgba(&model_with("#ff0000")).unwrap();
        assert_eq!(pixel(&buf, 220, 110, 110), TRANSPARENT);
        assert_eq!(pixel(&buf, 220, 0, 0), TRANSPARENT);
        assert_eq!(pixel(&buf, 220, 219, 219), TRANSPARENT);
    }

    #[test]
    fn ring_pixels_take_band_colors() {
        // samples sit about 3 degrees into the bands at 90, 180 and 270
        let buf = wheel_to_rgba(&model_with("#ff0000")).unwrap();
        assert_eq!(pixel(&buf, 220, 205, 114), [128, 255, 0, 255]);
        assert_eq!(pixel(&buf, 220, 104, 205), [0, 255, 255, 255]);
        assert_eq!(pixel(&buf, 220, 14, 104), [128, 0, 255, 255]);
    }

    #[test]
    fn marker_is_drawn_with_outline() {
        let buf = wheel_to_rgba(&model_with("#00ffff")).unwrap();
        // marker center at (110, 206), radius 12, outline 3 wide
        assert_eq!(pixel(&buf, 220, 110, 205), [0, 255, 255, 255]);
        assert_eq!(pixel(&buf, 220, 122, 205), WHITE);
    }

    #[test]
    fn invalid_selection_leaves_marker_hollow() {
        let buf = wheel_to_rgba(&model_with("tomato")).unwrap();
        // marker at hue 0; the red band shows through its unfilled center
        assert_eq!(pixel(&buf, 220, 112, 16), [255, 0, 0, 255]);
    }

    #[test]
    fn marker_fill_covers_band() {
        // a blue marker placed over the red band at the top
        let mut model = model_with("#ff0000");
        model.marker.fill = "#0000ff".parse().ok();
        let buf = wheel_to_rgba(&model).unwrap();
        assert_eq!(pixel(&buf, 220, 110, 14), [0, 0, 255, 255]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn raster_is_square_with_clear_corners(
                size in 8.0_f64..48.0,
                stroke_frac in 0.0_f64..=0.5,
                segments in 1usize..24,
            ) {
                let config = WheelConfig {
                    size,
                    stroke_width: size * stroke_frac,
                    segments,
                    ..WheelConfig::default()
                };
                let model = WheelModel::build(&config, &PickerState::default()).unwrap();
                let side = raster_side(&model).unwrap();
                let buf = wheel_to_rgba(&model).unwrap();
                prop_assert_eq!(buf.len(), side * side * 4);
                prop_assert_eq!(pixel(&buf, side, 0, 0), TRANSPARENT);
            }
        }
    }
}
