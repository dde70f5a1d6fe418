//! Error types for the hue-wheel core.

use thiserror::Error;

/// Errors produced by wheel operations.
///
/// A pointer outside the ring is not an error; see
/// [`HitTest::Miss`](crate::geometry::HitTest::Miss).
#[derive(Debug, Error)]
pub enum WheelError {
    /// A string did not match the strict `#rrggbb` hex pattern.
    #[error("invalid hex color format: {0}")]
    InvalidFormat(String),

    /// A wheel configuration value violated its constraints.
    #[error("invalid wheel config: {0}")]
    InvalidConfig(String),

    /// A raster size was zero or overflowed when computing the buffer length.
    #[error("invalid dimensions: size must be non-zero and fit in memory")]
    InvalidDimensions,

    /// Building or rasterizing a rendered document failed.
    #[error("render error: {0}")]
    Render(String),

    /// Writing rendered output failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_input() {
        let err = WheelError::InvalidFormat("\"#abc\"".into());
        let msg = format!("{err}");
        assert!(msg.contains("#abc"), "missing input in: {msg}");
        assert!(msg.contains("hex"), "expected mention of hex in: {msg}");
    }

    #[test]
    fn invalid_config_includes_message() {
        let err = WheelError::InvalidConfig("segments must be at least 1".into());
        let msg = format!("{err}");
        assert!(msg.contains("segments"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", WheelError::InvalidDimensions);
        assert!(msg.contains("size"), "expected mention of size, got: {msg}");
    }

    #[test]
    fn render_includes_message() {
        let err = WheelError::Render("unexpected end of stream".into());
        let msg = err.to_string();
        assert!(msg.starts_with("render error"), "{msg}");
        assert!(msg.contains("unexpected end"), "{msg}");
    }

    #[test]
    fn io_includes_message() {
        let err = WheelError::Io("disk full".into());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn wheel_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WheelError>();
    }

    #[test]
    fn wheel_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<WheelError>();
    }
}
