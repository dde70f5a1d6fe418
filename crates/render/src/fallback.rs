//! Swatch grid shown when the host cannot draw arcs.
//!
//! Preset colors are laid out as circles in rows no wider than
//! [`MAX_ROW_WIDTH`]; the selected one gets a highlighted outline.

use crate::svg;
use hue_wheel_core::{HexColor, Point, WheelError, WheelModel};

pub const SWATCH_DIAMETER: f64 = 30.0;
pub const SWATCH_MARGIN: f64 = 4.0;
pub const MAX_ROW_WIDTH: f64 = 200.0;

const TITLE: &str = "Color Picker";
const TITLE_HEIGHT: f64 = 32.0;

/// One preset color and where it sits in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchCell {
    pub color: HexColor,
    pub center: Point,
    pub selected: bool,
}

/// Laid-out grid of preset swatches, origin at the top-left of the first cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchGrid {
    pub cells: Vec<SwatchCell>,
    pub columns: usize,
    pub width: f64,
    pub height: f64,
}

fn pitch() -> f64 {
    SWATCH_DIAMETER + 2.0 * SWATCH_MARGIN
}

impl SwatchGrid {
    /// Places `colors` row by row and marks the one equal to `selected`.
    ///
    /// Returns `WheelError::InvalidFormat` if any color is not `#rrggbb`.
    pub fn layout(colors: &[&str], selected: Option<&HexColor>) -> Result<Self, WheelError> {
        let columns = ((MAX_ROW_WIDTH / pitch()).floor() as usize).max(1);
        let cells = colors
            .iter()
            .enumerate()
            .map(|(i, hex)| -> Result<SwatchCell, WheelError> {
                let color = HexColor::parse(hex)?;
                let (row, col) = (i / columns, i % columns);
                Ok(SwatchCell {
                    selected: selected == Some(&color),
                    center: Point::new(
                        (col as f64 + 0.5) * pitch(),
                        (row as f64 + 0.5) * pitch(),
                    ),
                    color,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = cells.len().div_ceil(columns);
        Ok(Self {
            columns,
            width: columns.min(cells.len()) as f64 * pitch(),
            height: rows as f64 * pitch(),
            cells,
        })
    }

    /// The swatch under `point`, if any.
    pub fn swatch_at(&self, point: Point) -> Option<&HexColor> {
        self.cells
            .iter()
            .find(|cell| (point - cell.center).length() <= SWATCH_DIAMETER / 2.0)
            .map(|cell| &cell.color)
    }
}

/// Renders the grid with a title above it and the model's preview below.
///
/// Returns `WheelError::Render` if the XML writer fails.
pub fn render_swatches(grid: &SwatchGrid, model: &WheelModel) -> Result<String, WheelError> {
    let width = grid.width.max(MAX_ROW_WIDTH);
    let left = (width - grid.width) / 2.0;
    let preview_top = TITLE_HEIGHT + grid.height;
    let mut writer = svg::begin(width, preview_top + svg::preview_height(model))?;

    svg::text(
        &mut writer,
        &[
            ("x", (width / 2.0).to_string()),
            ("y", "20".to_string()),
            ("text-anchor", "middle".to_string()),
            ("font-size", "16".to_string()),
            ("font-weight", "bold".to_string()),
            ("fill", "#333".to_string()),
        ],
        TITLE,
    )?;
    for cell in &grid.cells {
        let (stroke, stroke_width) = if cell.selected {
            ("#007bff", 3)
        } else {
            ("#ddd", 2)
        };
        svg::empty(
            &mut writer,
            "circle",
            &[
                ("cx", (left + cell.center.x).to_string()),
                ("cy", (TITLE_HEIGHT + cell.center.y).to_string()),
                ("r", (SWATCH_DIAMETER / 2.0).to_string()),
                ("fill", cell.color.to_string()),
                ("stroke", stroke.to_string()),
                ("stroke-width", stroke_width.to_string()),
            ],
        )?;
    }
    svg::write_preview(&mut writer, model, preview_top, width)?;
    svg::finish(writer)
}
