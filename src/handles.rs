// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle extraction from contours.
//!
//! A handle is the control arm from an on-curve point to an adjacent
//! off-curve point. Handles are derived on demand, once per redraw pass;
//! they are never stored. The anchor lookup follows the off-curve point's
//! neighbors: the previous point if it is on-curve, otherwise the next.

use kurbo::{Point, Vec2};

use crate::outline::Contour;

/// One Bezier control arm: anchor on-curve point, off-curve control point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub anchor: Point,
    pub control: Point,
}

impl Handle {
    pub fn new(anchor: Point, control: Point) -> Self {
        Self { anchor, control }
    }

    /// The handle vector, anchor to control
    pub fn vector(&self) -> Vec2 {
        self.control - self.anchor
    }

    /// The handle's direction in degrees, normalized to [0, 360).
    ///
    /// Returns 0.0 for a zero-length handle; callers that care must check
    /// `is_zero_length` first, since the angle is undefined there.
    pub fn angle(&self) -> f64 {
        let v = self.vector();
        let deg = v.y.atan2(v.x).to_degrees().rem_euclid(360.0);
        if deg >= 360.0 { 0.0 } else { deg }
    }

    /// Whether the control point is retracted exactly onto the anchor
    pub fn is_zero_length(&self) -> bool {
        self.anchor == self.control
    }
}

/// Collect all handles of a contour, in point order.
///
/// Each off-curve point yields at most one handle. An off-curve point with
/// no adjacent on-curve neighbor should not occur in well-formed outline
/// data; it is logged and skipped rather than treated as an error, since the
/// overlay is advisory.
pub fn contour_handles(contour: &Contour) -> Vec<Handle> {
    let mut handles = Vec::new();
    for (ix, pt) in contour.points.iter().enumerate() {
        if pt.typ.is_on_curve() {
            continue;
        }
        let prev = contour.neighbor(ix, -1).filter(|p| p.typ.is_on_curve());
        let next = contour.neighbor(ix, 1).filter(|p| p.typ.is_on_curve());
        match prev.or(next) {
            Some(anchor) => handles.push(Handle::new(anchor.point, pt.point)),
            None => {
                tracing::warn!(index = ix, "off-curve point has no adjacent anchor, skipping");
            }
        }
    }
    handles
}
