// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Duplicate contours: exact copies of an earlier contour in the outline.
//!
//! Point-for-point equality only; a shifted or reversed copy is a different
//! contour. Outlines are at most a few hundred points, so the quadratic
//! comparison is negligible next to the redraw itself.

use crate::outline::Contour;
use crate::overlay::Marker;

pub(super) fn collect(contours: &[Contour], out: &mut Vec<Marker>) {
    for (ix, contour) in contours.iter().enumerate().skip(1) {
        if contour.points.is_empty() {
            continue;
        }
        if contours[..ix].iter().any(|earlier| earlier == contour) {
            out.push(Marker::DuplicateContour {
                outline: contour.to_bezpath(),
            });
        }
    }
}
