// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tipwire Placement: anchor-relative placement for a tooltip panel.
//!
//! ## Overview
//!
//! This crate computes where a floating panel goes relative to an anchor
//! rectangle. It does not draw and it does not track hover state.
//! Feed it the anchor, a requested [`Placement`](crate::types::Placement), the panel size, and the
//! viewport, and it returns the panel rectangle.
//!
//! ## Semantics
//!
//! - The panel sits on the requested side of the anchor, separated by the
//!   configured main-axis offset.
//! - Base placements center-align on the cross axis; `*Start`/`*End`
//!   variants align the corresponding edges.
//! - Overflow avoidance runs against the viewport inset by the configured
//!   padding: the panel flips to the opposite side when the requested side
//!   lacks room and the opposite side has it, then shifts along the cross
//!   axis to stay inside. When neither side fits, the requested side wins.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use tipwire_placement::{Anchored, Placement};
//!
//! let mut handle = Anchored::new(Rect::new(100.0, 100.0, 140.0, 120.0), Placement::Top);
//! let panel = handle.compute(Size::new(60.0, 24.0), Rect::new(0.0, 0.0, 800.0, 600.0));
//! // Centered above the anchor, 8px away.
//! assert_eq!(panel, Rect::new(90.0, 68.0, 150.0, 92.0));
//! ```

pub mod anchored;
pub mod types;

pub use anchored::Anchored;
pub use types::{Placement, PlacementConfig};
