// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-page resolver state: the registry plus the live content slot.

use tracing::debug;

use crate::registry::Registry;
use crate::wire::{ContentUpdate, Notice, Parameters, SessionId};

/// The server-side half of a tooltip pair: owns the allow-list registry
/// and the single content slot for the page's tooltip panel.
///
/// Content is written by resolving a `tooltip-mouseover` and erased by
/// `tooltip-mouseout`; it is never carried across sessions. Updates are
/// tagged with the session they were resolved for, so a slow resolution
/// cannot masquerade as content for a newer hover.
#[derive(Debug, Default)]
pub struct Resolver {
    registry: Registry,
    content: String,
}

impl Resolver {
    /// Wrap a populated registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            content: String::new(),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access to the registry (startup-time registration).
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The currently held content; empty outside a resolved session.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Apply a client notification.
    ///
    /// `tooltip-mouseover` resolves and stores content, returning the
    /// session-tagged update for the client; `tooltip-mouseout` clears the
    /// slot and returns nothing.
    pub fn apply(&mut self, notice: &Notice) -> Option<ContentUpdate> {
        match notice {
            Notice::TooltipMouseover {
                session,
                reference,
                parameters,
            } => Some(self.fetch_content(*session, reference, parameters)),
            Notice::TooltipMouseout => {
                self.clear();
                None
            }
        }
    }

    /// Resolve `reference` for `session`, storing and returning the result.
    pub fn fetch_content(
        &mut self,
        session: SessionId,
        reference: &str,
        parameters: &Parameters,
    ) -> ContentUpdate {
        self.content = self.registry.resolve(reference, parameters);
        ContentUpdate {
            session,
            content: self.content.clone(),
        }
    }

    /// Reset the content slot. No error conditions.
    pub fn clear(&mut self) {
        debug!("clear tooltip content");
        self.content.clear();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::registry::{ContentHandler, HandlerError};

    struct Echo;

    impl ContentHandler for Echo {
        fn invoke(&self, method: &str, args: &[String]) -> Result<Value, HandlerError> {
            match method {
                "echo" => Ok(Value::String(args.join(" "))),
                other => Err(format!("unknown method `{other}`").into()),
            }
        }
    }

    fn resolver() -> Resolver {
        let mut registry = Registry::new();
        registry.register("app.echo", Echo);
        Resolver::new(registry)
    }

    #[test]
    fn mouseover_resolves_and_tags_the_session() {
        let mut r = resolver();
        let notice = Notice::TooltipMouseover {
            session: SessionId::new(5),
            reference: "app.echo@echo".to_owned(),
            parameters: [("a", "hello"), ("b", "world")].into_iter().collect(),
        };
        let update = r.apply(&notice).unwrap();
        assert_eq!(update.session, SessionId::new(5));
        assert_eq!(update.content, "hello world");
        assert_eq!(r.content(), "hello world");
    }

    #[test]
    fn mouseout_clears_the_slot() {
        let mut r = resolver();
        let params = Parameters::new();
        r.fetch_content(SessionId::new(1), "app.echo@echo", &params);
        assert!(r.apply(&Notice::TooltipMouseout).is_none());
        assert_eq!(r.content(), "");
    }

    #[test]
    fn failed_resolution_stores_empty_content() {
        let mut r = resolver();
        let update = r.fetch_content(SessionId::new(2), "app.missing@echo", &Parameters::new());
        assert_eq!(update.content, "");
        assert_eq!(r.content(), "");
    }

    // A second session never observes the first session's content.
    #[test]
    fn content_is_not_cached_across_sessions() {
        let mut r = resolver();
        let params: Parameters = [("a", "first")].into_iter().collect();
        r.fetch_content(SessionId::new(1), "app.echo@echo", &params);
        r.clear();
        let update = r.fetch_content(SessionId::new(2), "app.echo@boom", &Parameters::new());
        assert_eq!(update.content, "");
        assert_eq!(r.content(), "");
    }
}
