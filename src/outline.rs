// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Read-only glyph outline model.
//!
//! `Contour` owns a flat list of UFO-style points tagged on-curve or
//! off-curve. Outlines are pulled from the host once per redraw and never
//! mutated; the `norad` conversions at the bottom of this file are the
//! concrete host adapter. A contour is open iff its first point is `Move`.

use kurbo::{BezPath, CubicBez, Line, Point, QuadBez};

/// Point type classification, following the UFO point model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}

impl PointType {
    /// Whether a point of this type lies on the rendered outline
    pub fn is_on_curve(self) -> bool {
        !matches!(self, PointType::OffCurve)
    }
}

/// A point in a contour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourPoint {
    pub point: Point,
    pub typ: PointType,
}

impl ContourPoint {
    pub fn new(x: f64, y: f64, typ: PointType) -> Self {
        Self {
            point: Point::new(x, y),
            typ,
        }
    }
}

/// One contour of a glyph outline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub points: Vec<ContourPoint>,
}

/// One segment of a contour, between two adjacent on-curve points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Line),
    Quad(QuadBez),
    Cubic(CubicBez),
}

impl Contour {
    pub fn new(points: Vec<ContourPoint>) -> Self {
        Self { points }
    }

    /// A contour is closed unless it starts with a `Move` point
    pub fn is_closed(&self) -> bool {
        !matches!(self.points.first().map(|p| p.typ), Some(PointType::Move))
    }

    /// The neighbor of point `ix` at the given offset, wrapping only on
    /// closed contours. Returns `None` when an open contour runs out of
    /// points in that direction.
    pub fn neighbor(&self, ix: usize, offset: isize) -> Option<&ContourPoint> {
        let len = self.points.len() as isize;
        if len == 0 {
            return None;
        }
        let raw = ix as isize + offset;
        if self.is_closed() {
            self.points.get(raw.rem_euclid(len) as usize)
        } else if (0..len).contains(&raw) {
            self.points.get(raw as usize)
        } else {
            None
        }
    }

    /// Break the contour into segments between adjacent on-curve points.
    ///
    /// UFO closed contours may start mid-segment (trailing off-curves of the
    /// final segment stored at the front), so iteration is rotated to begin
    /// at the first on-curve point. A run of more than two off-curves between
    /// on-curve points is malformed and that segment is skipped.
    pub fn segments(&self) -> Vec<Segment> {
        let Some(first_on) = self.points.iter().position(|p| p.typ.is_on_curve()) else {
            if !self.points.is_empty() {
                tracing::warn!(
                    points = self.points.len(),
                    "contour has no on-curve points, skipping"
                );
            }
            return Vec::new();
        };

        let closed = self.is_closed();
        let n = self.points.len();
        if n == 1 {
            return Vec::new();
        }
        // Walk once around, starting just past the first on-curve point. For
        // open contours the walk stops at the last point instead of wrapping.
        let span = if closed { n } else { n - 1 - first_on };

        let mut segments = Vec::new();
        let mut start = self.points[first_on].point;
        let mut off_curves: Vec<Point> = Vec::new();

        for step in 1..=span {
            let pt = &self.points[(first_on + step) % n];
            if !pt.typ.is_on_curve() {
                off_curves.push(pt.point);
                continue;
            }
            match off_curves.as_slice() {
                [] => segments.push(Segment::Line(Line::new(start, pt.point))),
                [c] => segments.push(Segment::Quad(QuadBez::new(start, *c, pt.point))),
                [c1, c2] => {
                    segments.push(Segment::Cubic(CubicBez::new(start, *c1, *c2, pt.point)))
                }
                _ => {
                    tracing::warn!(
                        off_curves = off_curves.len(),
                        "segment has too many off-curve points, skipping"
                    );
                }
            }
            off_curves.clear();
            start = pt.point;
        }

        if !off_curves.is_empty() {
            tracing::warn!(
                off_curves = off_curves.len(),
                "trailing off-curve points without an on-curve anchor, skipping"
            );
        }

        segments
    }

    /// Convert this contour to a kurbo `BezPath` for stroking
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first_on) = self.points.iter().find(|p| p.typ.is_on_curve()) else {
            return path;
        };

        path.move_to(first_on.point);
        for segment in self.segments() {
            match segment {
                Segment::Line(line) => path.line_to(line.p1),
                Segment::Quad(quad) => path.quad_to(quad.p1, quad.p2),
                Segment::Cubic(cubic) => path.curve_to(cubic.p1, cubic.p2, cubic.p3),
            }
        }
        if self.is_closed() {
            path.close_path();
        }
        path
    }

    /// Convert a norad contour to our internal representation
    pub fn from_norad(contour: &norad::Contour) -> Self {
        let points = contour
            .points
            .iter()
            .map(|pt| ContourPoint::new(pt.x, pt.y, point_type_from_norad(&pt.typ)))
            .collect();
        Self { points }
    }
}

/// Extract the outline of a norad glyph as internal contours
pub fn outline_from_glyph(glyph: &norad::Glyph) -> Vec<Contour> {
    glyph.contours.iter().map(Contour::from_norad).collect()
}

fn point_type_from_norad(typ: &norad::PointType) -> PointType {
    match typ {
        norad::PointType::Move => PointType::Move,
        norad::PointType::Line => PointType::Line,
        norad::PointType::OffCurve => PointType::OffCurve,
        norad::PointType::Curve => PointType::Curve,
        norad::PointType::QCurve => PointType::QCurve,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_square() -> Contour {
        Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(100.0, 0.0, PointType::Line),
            ContourPoint::new(100.0, 100.0, PointType::Line),
            ContourPoint::new(0.0, 100.0, PointType::Line),
        ])
    }

    #[test]
    fn closed_unless_first_point_is_move() {
        assert!(closed_square().is_closed());

        let open = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Move),
            ContourPoint::new(100.0, 0.0, PointType::Line),
        ]);
        assert!(!open.is_closed());
    }

    #[test]
    fn neighbor_wraps_only_when_closed() {
        let closed = closed_square();
        assert_eq!(
            closed.neighbor(0, -1).unwrap().point,
            Point::new(0.0, 100.0)
        );
        assert_eq!(closed.neighbor(3, 1).unwrap().point, Point::new(0.0, 0.0));

        let open = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Move),
            ContourPoint::new(100.0, 0.0, PointType::Line),
        ]);
        assert!(open.neighbor(0, -1).is_none());
        assert!(open.neighbor(1, 1).is_none());
    }

    #[test]
    fn square_has_four_line_segments() {
        let segments = closed_square().segments();
        assert_eq!(segments.len(), 4);
        assert!(matches!(segments[0], Segment::Line(_)));
        // Closing segment returns to the start point
        match segments[3] {
            Segment::Line(line) => assert_eq!(line.p1, Point::new(0.0, 0.0)),
            _ => panic!("expected line"),
        }
    }

    #[test]
    fn cubic_segment_from_offcurve_pair() {
        let contour = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(0.0, 55.0, PointType::OffCurve),
            ContourPoint::new(45.0, 100.0, PointType::OffCurve),
            ContourPoint::new(100.0, 100.0, PointType::Curve),
        ]);
        let segments = contour.segments();
        assert_eq!(segments.len(), 2);
        match segments[0] {
            Segment::Cubic(cubic) => {
                assert_eq!(cubic.p0, Point::new(0.0, 0.0));
                assert_eq!(cubic.p1, Point::new(0.0, 55.0));
                assert_eq!(cubic.p2, Point::new(45.0, 100.0));
                assert_eq!(cubic.p3, Point::new(100.0, 100.0));
            }
            _ => panic!("expected cubic"),
        }
        // Closing line back to the start
        assert!(matches!(segments[1], Segment::Line(_)));
    }

    #[test]
    fn rotated_start_still_yields_full_segment() {
        // Closed contour stored with its trailing off-curves at the front,
        // as UFO allows.
        let contour = Contour::new(vec![
            ContourPoint::new(45.0, 100.0, PointType::OffCurve),
            ContourPoint::new(100.0, 100.0, PointType::Curve),
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(0.0, 55.0, PointType::OffCurve),
        ]);
        let segments = contour.segments();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().any(|s| matches!(s, Segment::Cubic(_))));
    }

    #[test]
    fn all_offcurve_contour_yields_no_segments() {
        let contour = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::OffCurve),
            ContourPoint::new(50.0, 50.0, PointType::OffCurve),
        ]);
        assert!(contour.segments().is_empty());
        assert_eq!(contour.to_bezpath().elements().len(), 0);
    }

    #[test]
    fn empty_contour_is_harmless() {
        let contour = Contour::default();
        assert!(contour.segments().is_empty());
        assert!(contour.to_bezpath().elements().is_empty());
    }

    #[test]
    fn bezpath_of_closed_square_is_closed() {
        let path = closed_square().to_bezpath();
        assert!(matches!(
            path.elements().last(),
            Some(kurbo::PathEl::ClosePath)
        ));
    }

    #[test]
    fn from_norad_preserves_points() {
        let norad_contour = norad::Contour::new(
            vec![
                norad::ContourPoint::new(
                    10.0,
                    20.0,
                    norad::PointType::Line,
                    false,
                    None,
                    None,
                    None,
                ),
                norad::ContourPoint::new(
                    30.0,
                    40.0,
                    norad::PointType::OffCurve,
                    false,
                    None,
                    None,
                    None,
                ),
            ],
            None,
            None,
        );
        let contour = Contour::from_norad(&norad_contour);
        assert_eq!(contour.points.len(), 2);
        assert_eq!(contour.points[0].point, Point::new(10.0, 20.0));
        assert_eq!(contour.points[0].typ, PointType::Line);
        assert_eq!(contour.points[1].typ, PointType::OffCurve);
    }
}
