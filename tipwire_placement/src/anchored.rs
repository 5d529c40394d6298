// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The positioning handle: one anchor, one requested placement, computed
//! panel rectangles.

use kurbo::{Point, Rect, Size};

use crate::types::{Align, Placement, PlacementConfig, Side};

/// A live positioning handle tied to a single anchor rectangle.
///
/// The hover controller creates one of these per tooltip session and
/// destroys it (drops it) when the session ends; at most one exists at a
/// time. [`Anchored::compute`] places the panel and records the result so
/// later reposition requests can compare against it.
///
/// ## Usage
///
/// - Construct with [`Anchored::new`] (default 8px offset and padding) or
///   [`Anchored::with_config`].
/// - Call [`Anchored::compute`] whenever the panel is (re)shown or its
///   measured size changes.
/// - [`Anchored::resolved`] reports the placement actually used, which
///   differs from the request after a flip.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchored {
    anchor: Rect,
    requested: Placement,
    config: PlacementConfig,
    resolved: Placement,
    last: Option<Rect>,
}

impl Anchored {
    /// Create a handle for `anchor` with the default config.
    pub fn new(anchor: Rect, placement: Placement) -> Self {
        Self::with_config(anchor, placement, PlacementConfig::default())
    }

    /// Create a handle with explicit offset/padding tuning.
    pub fn with_config(anchor: Rect, placement: Placement, config: PlacementConfig) -> Self {
        Self {
            anchor,
            requested: placement,
            config,
            resolved: placement,
            last: None,
        }
    }

    /// The anchor rectangle this handle is tied to.
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    /// The placement the trigger asked for.
    pub fn requested(&self) -> Placement {
        self.requested
    }

    /// The placement used by the most recent [`Anchored::compute`].
    ///
    /// Equal to the request until a compute flips to the opposite side.
    pub fn resolved(&self) -> Placement {
        self.resolved
    }

    /// The panel rectangle from the most recent [`Anchored::compute`].
    pub fn last(&self) -> Option<Rect> {
        self.last
    }

    /// Place a panel of `panel_size` against the anchor within `viewport`.
    ///
    /// Flips to the opposite side when the requested side lacks room inside
    /// the padded viewport and the opposite side has it, then shifts along
    /// the cross axis to stay inside. The result is recorded.
    pub fn compute(&mut self, panel_size: Size, viewport: Rect) -> Rect {
        let bounds = viewport.inset(-self.config.padding);

        let mut placement = self.requested;
        if !fits(placement.side(), self.anchor, panel_size, bounds, self.config.offset)
            && fits(
                placement.side().opposite(),
                self.anchor,
                panel_size,
                bounds,
                self.config.offset,
            )
        {
            placement = placement.flipped();
        }

        let origin = origin_for(placement, self.anchor, panel_size, self.config.offset);
        let shifted = shift_cross_axis(placement.side(), origin, panel_size, bounds);
        let rect = Rect::from_origin_size(shifted, panel_size);

        self.resolved = placement;
        self.last = Some(rect);
        rect
    }
}

/// Whether a panel fits on `side` of the anchor inside `bounds`.
fn fits(side: Side, anchor: Rect, size: Size, bounds: Rect, offset: f64) -> bool {
    match side {
        Side::Top => anchor.y0 - offset - size.height >= bounds.y0,
        Side::Bottom => anchor.y1 + offset + size.height <= bounds.y1,
        Side::Left => anchor.x0 - offset - size.width >= bounds.x0,
        Side::Right => anchor.x1 + offset + size.width <= bounds.x1,
    }
}

/// Panel origin before overflow shifting.
fn origin_for(placement: Placement, anchor: Rect, size: Size, offset: f64) -> Point {
    let main = match placement.side() {
        Side::Top => anchor.y0 - offset - size.height,
        Side::Bottom => anchor.y1 + offset,
        Side::Left => anchor.x0 - offset - size.width,
        Side::Right => anchor.x1 + offset,
    };
    match placement.side() {
        Side::Top | Side::Bottom => {
            let x = match placement.align() {
                Align::Center => anchor.center().x - size.width / 2.0,
                Align::Start => anchor.x0,
                Align::End => anchor.x1 - size.width,
            };
            Point::new(x, main)
        }
        Side::Left | Side::Right => {
            let y = match placement.align() {
                Align::Center => anchor.center().y - size.height / 2.0,
                Align::Start => anchor.y0,
                Align::End => anchor.y1 - size.height,
            };
            Point::new(main, y)
        }
    }
}

/// Clamp the cross-axis coordinate so the panel stays inside `bounds`.
fn shift_cross_axis(side: Side, origin: Point, size: Size, bounds: Rect) -> Point {
    match side {
        Side::Top | Side::Bottom => Point::new(
            clamp_span(origin.x, size.width, bounds.x0, bounds.x1),
            origin.y,
        ),
        Side::Left | Side::Right => Point::new(
            origin.x,
            clamp_span(origin.y, size.height, bounds.y0, bounds.y1),
        ),
    }
}

/// Clamp a `len`-long span starting at `pos` into `[min, max]`.
///
/// A span longer than the region pins to `min`.
fn clamp_span(pos: f64, len: f64, min: f64, max: f64) -> f64 {
    if len >= max - min {
        min
    } else {
        pos.max(min).min(max - len)
    }
}
