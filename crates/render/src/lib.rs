#![deny(unsafe_code)]
//! Host-side output for the hue wheel: SVG documents, the swatch-grid
//! fallback, RGBA rasters and PNG snapshots.
//!
//! Everything here consumes a [`WheelModel`] built by `hue-wheel-core`; no
//! color math or geometry is repeated. Which output a host can display is a
//! runtime decision expressed as a [`Backend`].

pub mod fallback;
pub mod pixel;
pub mod svg;

#[cfg(feature = "png")]
pub mod snapshot;

use hue_wheel_core::picker::FALLBACK_SWATCHES;
use hue_wheel_core::{WheelError, WheelModel};

/// Drawing capability available to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Arc paths can be drawn: show the wheel.
    #[default]
    Vector,
    /// No vector drawing: show a grid of preset swatches instead.
    Swatches,
}

/// Renders `model` as an SVG document using what `backend` can display.
///
/// Returns `WheelError::InvalidFormat` if the preset swatch table is
/// malformed, or `WheelError::Render` if the XML writer fails.
pub fn render_document(backend: Backend, model: &WheelModel) -> Result<String, WheelError> {
    match backend {
        Backend::Vector => svg::render_wheel(model),
        Backend::Swatches => {
            let grid = fallback::SwatchGrid::layout(&FALLBACK_SWATCHES, model.selected.as_ref())?;
            fallback::render_swatches(&grid, model)
        }
    }
}
