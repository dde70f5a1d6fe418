//! Polar geometry for the hue ring.
//!
//! Angles are in degrees with 0 pointing up (negative y from the center) and
//! increasing clockwise in screen space. [`point_for_angle`] and
//! [`hit_test`] share this convention, so a hit at angle `a` places the
//! marker back under the pointer.

use glam::DVec2;
use std::fmt;

/// Screen-space coordinate.
pub type Point = DVec2;

/// Default number of hue bands drawn around the ring.
pub const DEFAULT_SEGMENTS: usize = 60;

/// Placement of the ring: center, centerline radius and band thickness.
///
/// A usable ring needs `radius - stroke_width / 2 >= 0`. Geometry functions
/// do not check this; [`WheelConfig`](crate::config::WheelConfig) does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSpec {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
}

impl WheelSpec {
    pub fn new(center: Point, radius: f64, stroke_width: f64) -> Self {
        Self {
            center,
            radius,
            stroke_width,
        }
    }

    /// Ring centered in a `size` x `size` square with its band touching the edges.
    pub fn from_size(size: f64, stroke_width: f64) -> Self {
        let half = size / 2.0;
        Self {
            center: Point::new(half, half),
            radius: half - stroke_width / 2.0,
            stroke_width,
        }
    }

    /// Distance from the center to the inner edge of the band.
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.stroke_width / 2.0
    }

    /// Distance from the center to the outer edge of the band.
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.stroke_width / 2.0
    }
}

/// One hue band, `[start_angle, end_angle)` in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Segment {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// An arc along the ring centerline, drawn clockwise from `start` to `end`.
///
/// `Display` writes SVG path data: `M sx sy A r r 0 large sweep ex ey`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} A {} {} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y
        )
    }
}

/// Result of mapping a pointer onto the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTest {
    /// The pointer is on the band; `angle` is in [0, 360).
    Hit { angle: f64 },
    /// The pointer is inside the hole or outside the ring.
    Miss,
}

impl HitTest {
    pub fn angle(self) -> Option<f64> {
        match self {
            HitTest::Hit { angle } => Some(angle),
            HitTest::Miss => None,
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, HitTest::Hit { .. })
    }
}

/// Point on the ring centerline at `angle_deg`.
///
/// The angle is reduced modulo 360 first, so `a` and `a + 360k` agree.
pub fn point_for_angle(spec: &WheelSpec, angle_deg: f64) -> Point {
    let a = (angle_deg.rem_euclid(360.0) - 90.0).to_radians();
    spec.center + spec.radius * Point::new(a.cos(), a.sin())
}

/// Partitions [0, 360) into `n` equal bands in increasing-angle order.
///
/// Each boundary is computed as `i * 360 / n` so neighbouring bands share the
/// exact same edge value. `n == 0` yields no bands.
pub fn segments(n: usize) -> Vec<Segment> {
    let n_f = n as f64;
    (0..n)
        .map(|i| Segment {
            start_angle: i as f64 * 360.0 / n_f,
            end_angle: (i + 1) as f64 * 360.0 / n_f,
        })
        .collect()
}

/// Arc descriptor for drawing `segment` along the ring centerline.
pub fn arc_path(spec: &WheelSpec, segment: &Segment) -> ArcPath {
    ArcPath {
        start: point_for_angle(spec, segment.start_angle),
        end: point_for_angle(spec, segment.end_angle),
        radius: spec.radius,
        large_arc: segment.span() > 180.0,
        sweep: true,
    }
}

/// Maps a pointer to a hue angle, or `Miss` when it is off the band.
///
/// Both band edges count as hits. A non-finite pointer is always a miss.
pub fn hit_test(spec: &WheelSpec, point: Point) -> HitTest {
    let delta = point - spec.center;
    let dist = delta.length();
    if !(spec.inner_radius()..=spec.outer_radius()).contains(&dist) {
        log::trace!(
            "miss at ({}, {}): dist {dist} outside [{}, {}]",
            point.x,
            point.y,
            spec.inner_radius(),
            spec.outer_radius()
        );
        return HitTest::Miss;
    }

    let mut theta = delta.y.atan2(delta.x).to_degrees() + 90.0;
    if theta < 0.0 {
        theta += 360.0;
    }
    // a tiny negative theta can round up to exactly 360 after the shift
    if theta >= 360.0 {
        theta = 0.0;
    }
    HitTest::Hit { angle: theta }
}
