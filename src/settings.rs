// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Overlay configuration and non-visual constants.
//!
//! `OverlaySettings` is the per-pass configuration snapshot: the host reads
//! its preference store once per redraw, hands the snapshot in by reference,
//! and the whole pass sees one consistent view. Visual styling (colors,
//! sizes) belongs in `theme.rs`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{CanonicalAngles, Tolerance};

// ============================================================================
// TOLERANCE SETTINGS
// ============================================================================
/// Default near-miss window: 8 degrees off a canonical angle
const TOLERANCE_DEFAULT_DEG: f64 = 8.0;

/// Smallest accepted tolerance (degrees); the valid range is open at 0
const TOLERANCE_MIN_DEG: f64 = 0.001;

/// Largest accepted tolerance (degrees); at 45 the neighborhoods of two
/// adjacent canonical angles would overlap
const TOLERANCE_MAX_DEG: f64 = 44.999;

/// Angular distance below which a handle counts as exactly canonical
const EXACT_EPSILON_DEG: f64 = 1e-6;

// ============================================================================
// ALMOST-STRAIGHT LINE SETTINGS
// ============================================================================
/// Axis offsets at or below this are taken as intentional (font units)
const LINE_OFFSET_MIN: f64 = 0.1;

/// Axis offsets at or above this are taken as deliberate diagonals
const LINE_OFFSET_MAX: f64 = 20.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Tolerance bounds and defaults (degrees)
pub mod tolerance {
    pub const DEFAULT: f64 = super::TOLERANCE_DEFAULT_DEG;
    pub const MIN: f64 = super::TOLERANCE_MIN_DEG;
    pub const MAX: f64 = super::TOLERANCE_MAX_DEG;
    pub const EXACT_EPSILON: f64 = super::EXACT_EPSILON_DEG;
}

/// Thresholds for the almost-straight line check (font units)
pub mod almost_straight {
    pub const OFFSET_MIN: f64 = super::LINE_OFFSET_MIN;
    pub const OFFSET_MAX: f64 = super::LINE_OFFSET_MAX;
}

/// A configuration value the host handed us is unusable.
///
/// Only surfaced by the strict `try_new` constructors; the overlay pass
/// itself clamps or falls back instead, since a broken overlay is worse
/// than a slightly-wrong tolerance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("tolerance {0} degrees is outside the valid range (0, 45)")]
    InvalidTolerance(f64),
    #[error("canonical angle set is empty")]
    EmptyAngleSet,
    #[error("canonical angle {0} is not finite")]
    NonFiniteAngle(f64),
}

/// Configuration snapshot for one overlay pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Near-miss window in degrees
    pub tolerance: Tolerance,
    /// Reference directions handles are measured against
    pub canonical_angles: CanonicalAngles,
    /// Flag every handle that is not exactly canonical, not just near
    /// misses
    pub mark_all_angled: bool,
    /// Mark off-curve points retracted onto their anchor
    pub zero_handles: bool,
    /// Mark straight segments that are nearly, but not quite, axis-aligned
    pub almost_straight_lines: bool,
    /// Mark cubic segments whose control arms cross
    pub crossed_handles: bool,
    /// Mark contours that duplicate an earlier contour
    pub duplicate_contours: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            canonical_angles: CanonicalAngles::default(),
            mark_all_angled: false,
            zero_handles: true,
            almost_straight_lines: true,
            crossed_handles: true,
            duplicate_contours: true,
        }
    }
}
