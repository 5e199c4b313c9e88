// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Zero handles: off-curve points retracted exactly onto their anchor.
//!
//! A retracted handle degrades a cubic segment toward a quadratic and is
//! usually an editing accident; it can also break interpolation.

use crate::handles::contour_handles;
use crate::outline::Contour;
use crate::overlay::Marker;

pub(super) fn collect(contours: &[Contour], out: &mut Vec<Marker>) {
    for contour in contours {
        for handle in contour_handles(contour) {
            if handle.is_zero_length() {
                out.push(Marker::ZeroHandle {
                    pos: handle.control,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{ContourPoint, PointType};
    use kurbo::Point;

    #[test]
    fn retracted_offcurve_is_flagged() {
        let contour = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(0.0, 0.0, PointType::OffCurve),
            ContourPoint::new(45.0, 100.0, PointType::OffCurve),
            ContourPoint::new(100.0, 100.0, PointType::Curve),
        ]);
        let mut out = Vec::new();
        collect(&[contour], &mut out);
        assert_eq!(out, vec![Marker::ZeroHandle { pos: Point::ZERO }]);
    }

    #[test]
    fn healthy_handles_are_not_flagged() {
        let contour = Contour::new(vec![
            ContourPoint::new(0.0, 0.0, PointType::Line),
            ContourPoint::new(0.0, 55.0, PointType::OffCurve),
            ContourPoint::new(45.0, 100.0, PointType::OffCurve),
            ContourPoint::new(100.0, 100.0, PointType::Curve),
        ]);
        let mut out = Vec::new();
        collect(&[contour], &mut out);
        assert!(out.is_empty());
    }
}
