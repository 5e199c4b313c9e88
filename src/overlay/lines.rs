// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Almost-straight lines: straight segments a few units off horizontal or
//! vertical.
//!
//! The smaller axis offset decides: at or below `OFFSET_MIN` the segment
//! counts as straight, at or above `OFFSET_MAX` it counts as a deliberate
//! diagonal. In between, the marker's opacity weight fades as the segment
//! gets less straight, so the most suspicious lines draw loudest.

use kurbo::Line;

use crate::outline::Contour;
use crate::overlay::Marker;
use crate::settings::almost_straight;

/// Numerator for the opacity weight: full strength at 3 units off or less
const OPACITY_FACTOR: f64 = 3.0;

pub(super) fn collect(contours: &[Contour], out: &mut Vec<Marker>) {
    for contour in contours {
        for (ix, pt) in contour.points.iter().enumerate() {
            if !pt.typ.is_on_curve() {
                continue;
            }
            // A straight segment ends here iff the previous point is also
            // on-curve; open-contour start points have no incoming segment.
            let Some(prev) = contour.neighbor(ix, -1).filter(|p| p.typ.is_on_curve()) else {
                continue;
            };
            let line = Line::new(prev.point, pt.point);
            let off = (pt.point.x - prev.point.x)
                .abs()
                .min((pt.point.y - prev.point.y).abs());
            if off > almost_straight::OFFSET_MIN && off < almost_straight::OFFSET_MAX {
                let opacity = (OPACITY_FACTOR / off).min(1.0);
                out.push(Marker::AlmostStraightLine { line, opacity });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{ContourPoint, PointType};
    use kurbo::Point;

    fn quad(p1: (f64, f64)) -> Contour {
        Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(p1.0, p1.1, PointType::Line),
            ContourPoint::new(100.0, 100.0, PointType::Line),
            ContourPoint::new(0.0, 100.0, PointType::Line),
        ])
    }

    #[test]
    fn slightly_slanted_bottom_edge_is_flagged() {
        // Bottom edge rises by 3 units over its run
        let mut out = Vec::new();
        collect(&[quad((100.0, 3.0))], &mut out);
        assert_eq!(out.len(), 1);
        match &out[0] {
            Marker::AlmostStraightLine { line, opacity } => {
                assert_eq!(line.p0, Point::new(0.0, 0.0));
                assert_eq!(line.p1, Point::new(100.0, 3.0));
                assert!((opacity - 1.0).abs() < 1e-9);
            }
            other => panic!("expected AlmostStraightLine, got {other:?}"),
        }
    }

    #[test]
    fn opacity_fades_with_unstraightness() {
        let mut out = Vec::new();
        collect(&[quad((100.0, 12.0))], &mut out);
        assert_eq!(out.len(), 1);
        match &out[0] {
            Marker::AlmostStraightLine { opacity, .. } => {
                assert!((opacity - 0.25).abs() < 1e-9);
            }
            other => panic!("expected AlmostStraightLine, got {other:?}"),
        }
    }

    #[test]
    fn exactly_straight_edges_are_not_flagged() {
        let mut out = Vec::new();
        collect(&[quad((100.0, 0.0))], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn deliberate_diagonals_are_not_flagged() {
        // 40 units off: past OFFSET_MAX
        let mut out = Vec::new();
        collect(&[quad((100.0, 40.0))], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn curve_segments_are_ignored() {
        let contour = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(30.0, 1.0, PointType::OffCurve),
            ContourPoint::new(70.0, 2.0, PointType::OffCurve),
            ContourPoint::new(100.0, 3.0, PointType::Curve),
        ]);
        let mut out = Vec::new();
        collect(&[contour], &mut out);
        // The closing line (100,3) -> (0,0) is 3 units off horizontal
        assert_eq!(out.len(), 1);
        match &out[0] {
            Marker::AlmostStraightLine { line, .. } => {
                assert_eq!(line.p0, Point::new(100.0, 3.0));
            }
            other => panic!("expected AlmostStraightLine, got {other:?}"),
        }
    }

    #[test]
    fn open_contour_start_has_no_incoming_segment() {
        let contour = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Move),
            ContourPoint::new(100.0, 3.0, PointType::Line),
        ]);
        let mut out = Vec::new();
        collect(&[contour], &mut out);
        assert_eq!(out.len(), 1);
    }
}
