// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: the placement set and tuning knobs.

/// Which side of the anchor the panel is requested on, and how it aligns
/// along that side's cross axis.
///
/// These are the twelve standard placements of the usual positioning
/// libraries. Markup passes them as kebab-case hints (`"bottom-end"`);
/// see [`Placement::parse`]. The default is [`Placement::Top`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Placement {
    /// Above the anchor, centered.
    #[default]
    Top,
    /// Above the anchor, leading edges aligned.
    TopStart,
    /// Above the anchor, trailing edges aligned.
    TopEnd,
    /// Below the anchor, centered.
    Bottom,
    /// Below the anchor, leading edges aligned.
    BottomStart,
    /// Below the anchor, trailing edges aligned.
    BottomEnd,
    /// Left of the anchor, centered.
    Left,
    /// Left of the anchor, top edges aligned.
    LeftStart,
    /// Left of the anchor, bottom edges aligned.
    LeftEnd,
    /// Right of the anchor, centered.
    Right,
    /// Right of the anchor, top edges aligned.
    RightStart,
    /// Right of the anchor, bottom edges aligned.
    RightEnd,
}

/// The anchor side of a placement, ignoring alignment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Cross-axis alignment of a placement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Align {
    Center,
    Start,
    End,
}

impl Placement {
    /// Parse a kebab-case placement hint.
    ///
    /// Returns `None` for anything that is not one of the twelve standard
    /// placements; callers fall back to the default.
    ///
    /// ```
    /// use tipwire_placement::Placement;
    /// assert_eq!(Placement::parse("bottom-end"), Some(Placement::BottomEnd));
    /// assert_eq!(Placement::parse("diagonal"), None);
    /// ```
    pub fn parse(hint: &str) -> Option<Self> {
        Some(match hint {
            "top" => Self::Top,
            "top-start" => Self::TopStart,
            "top-end" => Self::TopEnd,
            "bottom" => Self::Bottom,
            "bottom-start" => Self::BottomStart,
            "bottom-end" => Self::BottomEnd,
            "left" => Self::Left,
            "left-start" => Self::LeftStart,
            "left-end" => Self::LeftEnd,
            "right" => Self::Right,
            "right-start" => Self::RightStart,
            "right-end" => Self::RightEnd,
            _ => return None,
        })
    }

    /// The kebab-case hint form of this placement.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }

    pub(crate) fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
        }
    }

    pub(crate) fn align(self) -> Align {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => Align::Center,
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => Align::Start,
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Align::End,
        }
    }

    /// This placement moved to the opposite side, keeping its alignment.
    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopStart => Self::BottomStart,
            Self::TopEnd => Self::BottomEnd,
            Self::Bottom => Self::Top,
            Self::BottomStart => Self::TopStart,
            Self::BottomEnd => Self::TopEnd,
            Self::Left => Self::Right,
            Self::LeftStart => Self::RightStart,
            Self::LeftEnd => Self::RightEnd,
            Self::Right => Self::Left,
            Self::RightStart => Self::LeftStart,
            Self::RightEnd => Self::LeftEnd,
        }
    }
}

impl core::fmt::Display for Placement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement tuning: main-axis gap and viewport overflow padding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Gap between the anchor edge and the panel, in the main axis.
    pub offset: f64,
    /// Inset from the viewport edges the panel must stay within.
    pub padding: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            offset: 8.0,
            padding: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_all_placements() {
        let all = [
            Placement::Top,
            Placement::TopStart,
            Placement::TopEnd,
            Placement::Bottom,
            Placement::BottomStart,
            Placement::BottomEnd,
            Placement::Left,
            Placement::LeftStart,
            Placement::LeftEnd,
            Placement::Right,
            Placement::RightStart,
            Placement::RightEnd,
        ];
        for p in all {
            assert_eq!(Placement::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn parse_rejects_unknown_hints() {
        assert_eq!(Placement::parse(""), None);
        assert_eq!(Placement::parse("auto"), None);
        assert_eq!(Placement::parse("TOP"), None);
        assert_eq!(Placement::parse("top "), None);
    }

    #[test]
    fn default_is_top() {
        assert_eq!(Placement::default(), Placement::Top);
    }

    #[test]
    fn flipped_swaps_side_and_keeps_alignment() {
        assert_eq!(Placement::Top.flipped(), Placement::Bottom);
        assert_eq!(Placement::BottomEnd.flipped(), Placement::TopEnd);
        assert_eq!(Placement::LeftStart.flipped(), Placement::RightStart);
        assert_eq!(Placement::RightStart.flipped().flipped(), Placement::RightStart);
    }

    #[test]
    fn default_config_is_eight_by_eight() {
        let c = PlacementConfig::default();
        assert_eq!(c.offset, 8.0);
        assert_eq!(c.padding, 8.0);
    }
}
