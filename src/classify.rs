// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! The angle classifier.
//!
//! `classify` is a pure function from a handle vector to one of `Exact`,
//! `NearMiss`, or `NotNear`, measured against a configurable set of
//! canonical angles. No state, no I/O; safe to call from any thread.

use serde::{Deserialize, Serialize};

use crate::handles::Handle;
use crate::settings::{self, SettingsError};

/// Result of evaluating a handle against the canonical angle set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Exactly on a canonical angle (within epsilon)
    Exact,
    /// Within tolerance of a canonical angle, but not exactly on it
    NearMiss {
        /// Signed circular distance in degrees, handle angle minus matched
        deviation: f64,
        /// The canonical angle the handle is near, in degrees
        matched: f64,
    },
    /// Not close to any canonical angle, or a zero-length handle
    NotNear,
}

/// Tolerance in degrees for the near-miss window.
///
/// The invariant `0 < tolerance < 45` keeps the neighborhoods of adjacent
/// canonical angles from overlapping. Out-of-range values are clamped to the
/// nearest bound rather than failing the draw; `try_new` is the strict
/// alternative for hosts that want to surface a bad preference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Create a tolerance, clamping into the valid range
    pub fn new(degrees: f64) -> Self {
        let degrees = if degrees.is_finite() {
            degrees.clamp(settings::tolerance::MIN, settings::tolerance::MAX)
        } else {
            settings::tolerance::DEFAULT
        };
        Self(degrees)
    }

    /// Create a tolerance, rejecting out-of-range values
    pub fn try_new(degrees: f64) -> Result<Self, SettingsError> {
        if !degrees.is_finite() || degrees <= 0.0 || degrees >= 45.0 {
            return Err(SettingsError::InvalidTolerance(degrees));
        }
        Ok(Self(degrees))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(settings::tolerance::DEFAULT)
    }
}

impl From<f64> for Tolerance {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> f64 {
        tolerance.0
    }
}

/// The set of reference directions handles are measured against.
///
/// Defaults to the eight multiples of 45 degrees. Angles are normalized to
/// [0, 360) and sorted; ties in `nearest` go to the lower angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct CanonicalAngles {
    angles: Vec<f64>,
}

/// Horizontal, vertical, and the four standard diagonals
pub const AXES_AND_DIAGONALS: [f64; 8] =
    [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

impl CanonicalAngles {
    /// Create an angle set, rejecting empty or non-finite input
    pub fn try_new(angles: Vec<f64>) -> Result<Self, SettingsError> {
        if angles.is_empty() {
            return Err(SettingsError::EmptyAngleSet);
        }
        if let Some(&bad) = angles.iter().find(|a| !a.is_finite()) {
            return Err(SettingsError::NonFiniteAngle(bad));
        }
        let mut angles: Vec<f64> = angles.iter().map(|a| a.rem_euclid(360.0)).collect();
        angles.sort_by(|a, b| a.total_cmp(b));
        angles.dedup();
        Ok(Self { angles })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    /// The nearest canonical angle to `theta` and the signed deviation
    /// (theta minus matched) in degrees, in (-180, 180].
    pub fn nearest(&self, theta: f64) -> (f64, f64) {
        debug_assert!(!self.angles.is_empty());
        let mut best = (self.angles[0], signed_delta(theta, self.angles[0]));
        for &angle in &self.angles[1..] {
            let delta = signed_delta(theta, angle);
            if delta.abs() < best.1.abs() {
                best = (angle, delta);
            }
        }
        best
    }
}

impl Default for CanonicalAngles {
    fn default() -> Self {
        Self {
            angles: AXES_AND_DIAGONALS.to_vec(),
        }
    }
}

impl From<Vec<f64>> for CanonicalAngles {
    fn from(angles: Vec<f64>) -> Self {
        // Degrade to the default set rather than fail the draw
        Self::try_new(angles).unwrap_or_default()
    }
}

impl From<CanonicalAngles> for Vec<f64> {
    fn from(angles: CanonicalAngles) -> Vec<f64> {
        angles.angles
    }
}

/// Classify a handle against the canonical angle set.
///
/// Zero-length handles have no defined angle and are never flagged.
pub fn classify(handle: Handle, angles: &CanonicalAngles, tolerance: Tolerance) -> Classification {
    if handle.is_zero_length() {
        return Classification::NotNear;
    }
    let (matched, deviation) = angles.nearest(handle.angle());
    if deviation.abs() < settings::tolerance::EXACT_EPSILON {
        Classification::Exact
    } else if deviation.abs() < tolerance.degrees() {
        Classification::NearMiss { deviation, matched }
    } else {
        Classification::NotNear
    }
}

/// Signed circular difference `theta - canonical`, wrapped into (-180, 180]
fn signed_delta(theta: f64, canonical: f64) -> f64 {
    let delta = (theta - canonical).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}
