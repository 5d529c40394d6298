// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip panel model: display flags and the content slot.

bitflags::bitflags! {
    /// Panel display state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PanelFlags: u8 {
        /// Panel is shown.
        const VISIBLE = 0b0000_0001;
        /// Awaiting resolved content; hosts render a loading indicator.
        const LOADING = 0b0000_0010;
    }
}

/// The single tooltip panel of a page.
///
/// Owned and mutated by the [`Controller`](crate::controller::Controller);
/// hosts read it when rendering. Content is plain display text/markup, set
/// synchronously for literal triggers and asynchronously via resolved
/// content updates for dynamic ones.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Panel {
    flags: PanelFlags,
    content: String,
}

impl Panel {
    /// Current display flags.
    pub fn flags(&self) -> PanelFlags {
        self.flags
    }

    /// Current display content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(PanelFlags::VISIBLE)
    }

    /// Whether a loading indicator should render.
    pub fn is_loading(&self) -> bool {
        self.flags.contains(PanelFlags::LOADING)
    }

    /// Enter the awaiting-content state for a fresh dynamic session.
    pub(crate) fn begin_loading(&mut self) {
        self.content.clear();
        self.flags.insert(PanelFlags::LOADING);
    }

    /// Resolved content arrived for the live session.
    pub(crate) fn finish_loading(&mut self, content: String) {
        self.flags.remove(PanelFlags::LOADING);
        self.content = content;
    }

    /// Drop the loading state without touching content.
    pub(crate) fn cancel_loading(&mut self) {
        self.flags.remove(PanelFlags::LOADING);
    }

    /// Set literal content.
    pub(crate) fn set_content(&mut self, content: String) {
        self.flags.remove(PanelFlags::LOADING);
        self.content = content;
    }

    /// Mark the panel shown.
    pub(crate) fn show(&mut self) {
        self.flags.insert(PanelFlags::VISIBLE);
    }

    /// Hide the panel and drop its content.
    pub(crate) fn hide(&mut self) {
        self.flags = PanelFlags::empty();
        self.content.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel_is_hidden_and_empty() {
        let p = Panel::default();
        assert!(!p.is_visible());
        assert!(!p.is_loading());
        assert_eq!(p.content(), "");
    }

    #[test]
    fn loading_cycle() {
        let mut p = Panel::default();
        p.begin_loading();
        assert!(p.is_loading());
        p.show();
        p.finish_loading("resolved".to_owned());
        assert!(!p.is_loading());
        assert!(p.is_visible());
        assert_eq!(p.content(), "resolved");
    }

    #[test]
    fn hide_clears_everything() {
        let mut p = Panel::default();
        p.set_content("text".to_owned());
        p.show();
        p.hide();
        assert_eq!(p, Panel::default());
    }
}
