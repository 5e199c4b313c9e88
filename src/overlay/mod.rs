// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! The overlay builder.
//!
//! `build_overlay` walks every contour of the active glyph, runs the enabled
//! checks, and returns drawable markers in a stable order: the angled-handle
//! pass first (contour order, then point order), then each supplemental
//! check in a fixed sequence. Determinism keeps redraws visually stable and
//! the output testable. Markers are transient; nothing is cached between
//! passes.

mod angled;
mod crossings;
mod duplicates;
mod lines;
mod zero;

use kurbo::{BezPath, Line, Point};
use peniko::Color;

use crate::outline::Contour;
use crate::settings::OverlaySettings;
use crate::theme;

/// One drawable warning. The variant is the style tag; positions and angles
/// are in font-design units, ready for the host's view transform.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// A handle near, but not exactly on, a canonical angle
    AngledHandle {
        /// The off-curve control point
        pos: Point,
        /// The handle's actual direction, degrees in [0, 360)
        angle: f64,
        /// Signed degrees off the matched canonical angle
        deviation: f64,
        /// The canonical angle the handle is near
        matched: f64,
    },
    /// An off-curve point retracted exactly onto its anchor
    ZeroHandle { pos: Point },
    /// A straight segment that is nearly, but not quite, axis-aligned
    AlmostStraightLine {
        line: Line,
        /// Weight in (0, 1]: closer to straight draws more opaque
        opacity: f64,
    },
    /// A cubic segment whose control arms cross
    CrossedHandles {
        /// Where the extended arms intersect
        cross: Point,
        /// Beams from the intersection back to the two on-curve endpoints
        arms: [Line; 2],
    },
    /// A contour that exactly duplicates an earlier contour
    DuplicateContour { outline: BezPath },
}

impl Marker {
    /// The marker's primary theme color. Crossed handles and duplicate
    /// contours also use a secondary color; see `theme::marker`.
    pub fn color(&self) -> Color {
        match self {
            Marker::AngledHandle { .. } => theme::marker::ANGLED_HANDLE,
            Marker::ZeroHandle { .. } => theme::marker::ZERO_HANDLE,
            Marker::AlmostStraightLine { opacity, .. } => {
                theme::marker::ALMOST_STRAIGHT_LINE.with_alpha(*opacity as f32)
            }
            Marker::CrossedHandles { .. } => theme::marker::CROSS_MARK,
            Marker::DuplicateContour { .. } => theme::marker::DUPLICATE_PRIMARY,
        }
    }

    /// Signed angular deviation for markers that carry one
    pub fn deviation(&self) -> Option<f64> {
        match self {
            Marker::AngledHandle { deviation, .. } => Some(*deviation),
            _ => None,
        }
    }
}

/// Run all enabled checks over a glyph outline and collect markers.
///
/// An empty outline yields an empty list; malformed geometry is skipped by
/// the individual checks. Nothing here can fail the host's redraw.
pub fn build_overlay(contours: &[Contour], settings: &OverlaySettings) -> Vec<Marker> {
    let mut markers = Vec::new();

    angled::collect(contours, settings, &mut markers);
    if settings.zero_handles {
        zero::collect(contours, &mut markers);
    }
    if settings.almost_straight_lines {
        lines::collect(contours, &mut markers);
    }
    if settings.crossed_handles {
        crossings::collect(contours, &mut markers);
    }
    if settings.duplicate_contours {
        duplicates::collect(contours, &mut markers);
    }

    tracing::debug!(
        contours = contours.len(),
        markers = markers.len(),
        "overlay pass complete"
    );
    markers
}
