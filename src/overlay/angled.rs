// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! The core check: handles near, but not exactly on, a canonical angle.

use crate::classify::{Classification, classify};
use crate::handles::contour_handles;
use crate::outline::Contour;
use crate::overlay::Marker;
use crate::settings::OverlaySettings;

pub(super) fn collect(contours: &[Contour], settings: &OverlaySettings, out: &mut Vec<Marker>) {
    for contour in contours {
        for handle in contour_handles(contour) {
            match classify(handle, &settings.canonical_angles, settings.tolerance) {
                Classification::NearMiss { deviation, matched } => {
                    out.push(Marker::AngledHandle {
                        pos: handle.control,
                        angle: handle.angle(),
                        deviation,
                        matched,
                    });
                }
                Classification::NotNear
                    if settings.mark_all_angled && !handle.is_zero_length() =>
                {
                    let (matched, deviation) =
                        settings.canonical_angles.nearest(handle.angle());
                    out.push(Marker::AngledHandle {
                        pos: handle.control,
                        angle: handle.angle(),
                        deviation,
                        matched,
                    });
                }
                _ => {}
            }
        }
    }
}
