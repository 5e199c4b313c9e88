// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Crossed handles: cubic segments whose control arms intersect.
//!
//! The two arms of a cubic segment should fan outward; when the lines
//! through (start, first control) and (end, second control) cross inside
//! either arm's bounding box, the curve almost certainly kinks. The marker
//! carries the intersection point plus beams back to both on-curve
//! endpoints so the host can draw the classic cross-and-arms warning.

use kurbo::{Line, Point, Rect};

use crate::outline::{Contour, Segment};
use crate::overlay::Marker;

pub(super) fn collect(contours: &[Contour], out: &mut Vec<Marker>) {
    for contour in contours {
        for segment in contour.segments() {
            let Segment::Cubic(cubic) = segment else {
                continue;
            };
            let entry_arm = Line::new(cubic.p0, cubic.p1);
            let exit_arm = Line::new(cubic.p3, cubic.p2);
            let Some(cross) = line_intersection(entry_arm, exit_arm) else {
                continue;
            };
            let in_entry = Rect::from_points(cubic.p0, cubic.p1).contains(cross);
            let in_exit = Rect::from_points(cubic.p3, cubic.p2).contains(cross);
            if in_entry || in_exit {
                out.push(Marker::CrossedHandles {
                    cross,
                    arms: [Line::new(cross, cubic.p0), Line::new(cross, cubic.p3)],
                });
            }
        }
    }
}

/// Intersection of the infinite lines through `a` and `b`, or `None` when
/// they are parallel (or either is degenerate).
fn line_intersection(a: Line, b: Line) -> Option<Point> {
    let da = a.p1 - a.p0;
    let db = b.p1 - b.p0;
    let det = da.cross(db);
    if det.abs() < 1e-12 {
        return None;
    }
    let t = (b.p0 - a.p0).cross(db) / det;
    Some(a.p0 + da * t)
}
