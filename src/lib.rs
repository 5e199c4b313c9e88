// Copyright 2025 the Angled Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Angled Handles: an outline-inspection overlay core for glyph editors.
//!
//! Scans the active glyph's contours and produces drawable markers for
//! Bezier handles that are nearly, but not exactly, on a canonical angle
//! (horizontal, vertical, or a standard diagonal), plus a small family of
//! related outline-hygiene checks: retracted handles, almost-straight
//! lines, crossed handles, and duplicate contours.
//!
//! The crate computes geometry and style data only. The host editor owns
//! the document model, the redraw loop, preference persistence, and the
//! actual drawing; it hands in a read-only outline and a configuration
//! snapshot, and gets back an ordered list of markers:
//!
//! ```
//! use angled_handles::{build_overlay, outline::{Contour, ContourPoint, PointType}, OverlaySettings};
//!
//! let contour = Contour::new(vec![
//!     ContourPoint::new(0.0, 0.0, PointType::Line),
//!     ContourPoint::new(100.0, 96.0, PointType::OffCurve),
//!     ContourPoint::new(200.0, 100.0, PointType::OffCurve),
//!     ContourPoint::new(300.0, 100.0, PointType::Curve),
//! ]);
//! let markers = build_overlay(&[contour], &OverlaySettings::default());
//! assert!(!markers.is_empty());
//! ```
//!
//! Everything is pure and synchronous: one pass per redraw, O(points), no
//! I/O, no shared state. Install a `tracing` subscriber to see skipped
//! malformed geometry at warn level.

pub mod classify;
pub mod handles;
pub mod outline;
pub mod overlay;
pub mod settings;
pub mod theme;

pub use classify::{CanonicalAngles, Classification, Tolerance, classify};
pub use handles::{Handle, contour_handles};
pub use outline::{Contour, outline_from_glyph};
pub use overlay::{Marker, build_overlay};
pub use settings::{OverlaySettings, SettingsError};
