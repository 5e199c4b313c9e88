// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Marker colors and sizes.
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB).
//! The host draws the markers; these constants keep every host rendering
//! the same warning palette.

use peniko::Color;

// ============================================================================
// MARKER COLORS
// ============================================================================
/// Near-canonical handles: translucent red disc at the control point
const ANGLED_HANDLE: Color = Color::from_rgba8(0xff, 0x1a, 0x1a, 0x99);

/// Retracted (zero-length) handles: translucent purple disc
const ZERO_HANDLE: Color = Color::from_rgba8(0xb3, 0x1a, 0xe6, 0xb3);

/// Almost-straight line segments: orange, faded by the marker's opacity
const ALMOST_STRAIGHT_LINE: Color = Color::from_rgb8(0xff, 0x80, 0x00);

/// Crossed-handle arm beams
const CROSS_ARM: Color = Color::from_rgb8(0xff, 0xff, 0x00);

/// Crossed-handle X mark at the intersection
const CROSS_MARK: Color = Color::from_rgb8(0xff, 0xa5, 0x00);

/// Duplicate contours: two dashed strokes, purple over yellow
const DUPLICATE_PRIMARY: Color = Color::from_rgb8(0x80, 0x00, 0x80);
const DUPLICATE_SECONDARY: Color = Color::from_rgb8(0xff, 0xff, 0x00);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for overlay markers
pub mod marker {
    use super::Color;
    pub const ANGLED_HANDLE: Color = super::ANGLED_HANDLE;
    pub const ZERO_HANDLE: Color = super::ZERO_HANDLE;
    pub const ALMOST_STRAIGHT_LINE: Color = super::ALMOST_STRAIGHT_LINE;
    pub const CROSS_ARM: Color = super::CROSS_ARM;
    pub const CROSS_MARK: Color = super::CROSS_MARK;
    pub const DUPLICATE_PRIMARY: Color = super::DUPLICATE_PRIMARY;
    pub const DUPLICATE_SECONDARY: Color = super::DUPLICATE_SECONDARY;
}

/// Sizes and stroke patterns for overlay markers
pub mod size {
    /// Base marker diameters by host handle-size preference
    /// (small, regular, large)
    pub const MARKER_BASE_DIAMETERS: [f64; 3] = [5.0, 8.0, 12.0];

    /// Off-curve markers are drawn a little smaller
    pub const OFFCURVE_MARKER_FACTOR: f64 = 0.8;

    /// Zero-handle discs are drawn twice the scaled size
    pub const ZERO_HANDLE_FACTOR: f64 = 2.0;

    /// Half-length of the crossed-handle X mark, in screen units
    pub const CROSS_HALF_SIZE: f64 = 10.0;

    /// Stroke width of the crossed-handle arms and mark
    pub const CROSS_LINE_WIDTH: f64 = 1.0;

    /// Duplicate-contour dashed strokes: widths, dash arrays, phases
    pub const DUPLICATE_PRIMARY_WIDTH: f64 = 3.0;
    pub const DUPLICATE_PRIMARY_DASH: [f64; 2] = [7.0, 3.0];
    pub const DUPLICATE_PRIMARY_DASH_PHASE: f64 = 3.5;
    pub const DUPLICATE_SECONDARY_WIDTH: f64 = 2.0;
    pub const DUPLICATE_SECONDARY_DASH: [f64; 2] = [4.0, 6.0];
    pub const DUPLICATE_SECONDARY_DASH_PHASE: f64 = 2.0;
}

/// Marker diameter at the given zoom, slightly sub-linear so markers stay
/// legible without swallowing the outline at high zoom.
pub fn scaled_marker_diameter(base: f64, zoom: f64) -> f64 {
    base * zoom.powf(-0.9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_diameter_shrinks_as_zoom_grows() {
        let at_1x = scaled_marker_diameter(8.0, 1.0);
        let at_4x = scaled_marker_diameter(8.0, 4.0);
        assert_eq!(at_1x, 8.0);
        assert!(at_4x < at_1x);
        assert!(at_4x > 8.0 / 4.0, "sub-linear, not inverse-linear");
    }
}
