//! SVG document for the vector wheel.
//!
//! One stroked arc per hue band, the selection marker on top, and an optional
//! preview swatch with the uppercase hex label underneath. Documents are
//! written as XML events, so text and attribute values are escaped by the
//! writer.

use hue_wheel_core::{WheelError, WheelModel};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const PREVIEW_GAP: f64 = 16.0;
const PREVIEW_RADIUS: f64 = 24.0;
const LABEL_GAP: f64 = 8.0;
const LABEL_SIZE: f64 = 14.0;
const MARKER_OUTLINE: f64 = 3.0;

pub(crate) type SvgWriter = Writer<Vec<u8>>;

fn xml_error(e: quick_xml::Error) -> WheelError {
    WheelError::Render(e.to_string())
}

fn element<'a>(name: &'a str, attrs: &[(&str, String)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in attrs {
        start.push_attribute((*key, value.as_str()));
    }
    start
}

/// Opens an `<svg>` root sized `width` by `height` user units.
pub(crate) fn begin(width: f64, height: f64) -> Result<SvgWriter, WheelError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let root = element(
        "svg",
        &[
            ("xmlns", SVG_NS.to_string()),
            ("width", width.to_string()),
            ("height", height.to_string()),
            ("viewBox", format!("0 0 {width} {height}")),
        ],
    );
    writer.write_event(Event::Start(root)).map_err(xml_error)?;
    Ok(writer)
}

/// Closes the root and returns the document text.
pub(crate) fn finish(mut writer: SvgWriter) -> Result<String, WheelError> {
    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(xml_error)?;
    let mut doc =
        String::from_utf8(writer.into_inner()).map_err(|e| WheelError::Render(e.to_string()))?;
    doc.push('\n');
    Ok(doc)
}

/// Writes a childless element such as `<path .../>`.
pub(crate) fn empty(
    writer: &mut SvgWriter,
    name: &str,
    attrs: &[(&str, String)],
) -> Result<(), WheelError> {
    writer
        .write_event(Event::Empty(element(name, attrs)))
        .map_err(xml_error)
}

/// Writes a `<text>` element holding `content`.
pub(crate) fn text(
    writer: &mut SvgWriter,
    attrs: &[(&str, String)],
    content: &str,
) -> Result<(), WheelError> {
    writer
        .write_event(Event::Start(element("text", attrs)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(content)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("text")))
        .map_err(xml_error)
}

/// Vertical space the preview takes below the content; 0 when turned off.
pub(crate) fn preview_height(model: &WheelModel) -> f64 {
    if !model.show_preview {
        return 0.0;
    }
    let mut height = PREVIEW_GAP + 2.0 * PREVIEW_RADIUS;
    if model.show_hex_input {
        height += LABEL_GAP + LABEL_SIZE + 2.0;
    }
    height
}

/// Preview swatch and label placed below `top`, centered in `width`.
pub(crate) fn write_preview(
    writer: &mut SvgWriter,
    model: &WheelModel,
    top: f64,
    width: f64,
) -> Result<(), WheelError> {
    if !model.show_preview {
        return Ok(());
    }
    let fill = model.selected.as_ref().map_or("none", |c| c.as_str());
    let cx = width / 2.0;
    empty(
        writer,
        "circle",
        &[
            ("cx", cx.to_string()),
            ("cy", (top + PREVIEW_GAP + PREVIEW_RADIUS).to_string()),
            ("r", PREVIEW_RADIUS.to_string()),
            ("fill", fill.to_string()),
            ("stroke", "#eee".to_string()),
            ("stroke-width", "2".to_string()),
        ],
    )?;

    if model.show_hex_input {
        let baseline = top + PREVIEW_GAP + 2.0 * PREVIEW_RADIUS + LABEL_GAP + LABEL_SIZE;
        text(
            writer,
            &[
                ("x", cx.to_string()),
                ("y", baseline.to_string()),
                ("text-anchor", "middle".to_string()),
                ("font-size", LABEL_SIZE.to_string()),
                ("font-weight", "bold".to_string()),
                ("fill", "#333".to_string()),
            ],
            &model.display_value,
        )?;
    }
    Ok(())
}

/// Renders the wheel, marker and preview as a standalone SVG document.
///
/// Returns `WheelError::Render` if the XML writer fails.
pub fn render_wheel(model: &WheelModel) -> Result<String, WheelError> {
    let size = model.size;
    let mut writer = begin(size, size + preview_height(model))?;

    writer
        .write_event(Event::Start(BytesStart::new("g")))
        .map_err(xml_error)?;
    let stroke_width = model.spec.stroke_width.to_string();
    for band in &model.bands {
        empty(
            &mut writer,
            "path",
            &[
                ("d", band.path.to_string()),
                ("stroke", band.fill.to_string()),
                ("stroke-width", stroke_width.clone()),
                ("fill", "none".to_string()),
                ("stroke-linecap", "butt".to_string()),
            ],
        )?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("g")))
        .map_err(xml_error)?;

    let marker = &model.marker;
    let fill = marker.fill.as_ref().map_or("none", |c| c.as_str());
    empty(
        &mut writer,
        "circle",
        &[
            ("cx", marker.center.x.to_string()),
            ("cy", marker.center.y.to_string()),
            ("r", marker.radius.to_string()),
            ("fill", fill.to_string()),
            ("stroke", "#fff".to_string()),
            ("stroke-width", MARKER_OUTLINE.to_string()),
        ],
    )?;
    write_preview(&mut writer, model, size, size)?;
    finish(writer)
}
