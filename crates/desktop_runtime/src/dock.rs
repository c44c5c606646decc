//! Proximity magnification for dock icons.

/// Resting dock icon edge length in pixels.
pub const DOCK_BASE_ICON_SIZE: f64 = 48.0;
/// Edge length of an icon directly under the pointer.
pub const DOCK_MAX_ICON_SIZE: f64 = 72.0;
/// Pointer distance beyond which icons stay at rest size.
pub const DOCK_INFLUENCE_RANGE: f64 = 150.0;
/// Glyph size as a fraction of the icon button size.
pub const DOCK_GLYPH_RATIO: f64 = 0.6;

const FALLOFF_STEEPNESS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockMetrics {
    pub base_size: f64,
    pub max_size: f64,
    pub range: f64,
}

impl Default for DockMetrics {
    fn default() -> Self {
        Self {
            base_size: DOCK_BASE_ICON_SIZE,
            max_size: DOCK_MAX_ICON_SIZE,
            range: DOCK_INFLUENCE_RANGE,
        }
    }
}

impl DockMetrics {
    /// Scale factor for an icon whose center is `distance` pixels from the pointer.
    ///
    /// Peaks at `max_size / base_size` and reaches exactly 1 at `range`.
    ///
    /// The plain Gaussian `e^(-3t²)` still sits near 5% of its peak at `t = 1`, so icons
    /// would snap from about 1.025 down to 1.0 as the pointer crosses `range`. The curve
    /// is rebased to remove that step, which lowers every in-range scale slightly: at half
    /// the range it gives 1.2224 where the plain curve gives 1.2362.
    pub fn magnification(&self, distance: f64) -> f64 {
        let peak_gain = self.max_size / self.base_size - 1.0;
        1.0 + falloff(distance / self.range) * peak_gain
    }

    /// Icon edge length for a given scale.
    pub fn icon_size(&self, scale: f64) -> f64 {
        self.base_size * scale
    }

    /// Upward shift keeping a grown icon's bottom edge on the dock baseline.
    pub fn icon_lift(&self, size: f64) -> f64 {
        (size - self.base_size) / 2.0
    }
}

/// Gaussian `e^(-3t²)` rebased so it is 1 at `t = 0` and exactly 0 at `t = 1`.
fn falloff(t: f64) -> f64 {
    if !t.is_finite() || t >= 1.0 {
        return 0.0;
    }
    let t = t.max(0.0);
    let floor = (-FALLOFF_STEEPNESS).exp();
    ((-FALLOFF_STEEPNESS * t * t).exp() - floor) / (1.0 - floor)
}

/// Euclidean distance between the pointer and an icon center.
pub fn pointer_distance(pointer: (f64, f64), center: (f64, f64)) -> f64 {
    (pointer.0 - center.0).hypot(pointer.1 - center.1)
}
