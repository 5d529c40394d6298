// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger markup: the attributes an element opts in with, parsed into a
//! validated [`Trigger`].

use thiserror::Error;
use tracing::{debug, warn};

use tipwire_placement::Placement;
use tipwire_resolver::Parameters;

/// Attribute carrying literal display text.
pub const ATTR_TEXT: &str = "data-tooltip";
/// Attribute carrying a dynamic content reference (`handler@method`).
pub const ATTR_METHOD: &str = "tooltip-method";
/// Attribute carrying the placement hint (kebab-case, default `top`).
pub const ATTR_PLACEMENT: &str = "data-placement";
/// Prefix marking parameter attributes; the suffix is the parameter name.
pub const ATTR_PARAM_PREFIX: &str = "data-param";

/// What a trigger displays: exactly one of literal text or a reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TriggerContent {
    /// Literal display text, shown with no server round trip.
    Literal(String),
    /// A content reference resolved server-side per hover.
    Dynamic {
        /// Raw reference string (`handler@method` or a bare method).
        reference: String,
        /// Parameters in attribute declaration order.
        parameters: Parameters,
    },
}

/// Why element attributes did not form a valid trigger.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TriggerError {
    /// Neither literal text nor a content reference was present.
    #[error("trigger has neither literal text nor a content reference")]
    NoContent,
}

/// A validated tooltip trigger.
///
/// Invalid markup is unrepresentable here: construction requires content.
/// [`Trigger::from_attrs`] enforces the markup contract and logs a warning
/// for markup that opts in but carries nothing to display — the hover is
/// then simply ignored by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trigger {
    placement: Placement,
    content: TriggerContent,
}

impl Trigger {
    /// A literal-text trigger with the default placement.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            placement: Placement::default(),
            content: TriggerContent::Literal(text.into()),
        }
    }

    /// A dynamic trigger with the default placement.
    pub fn dynamic(reference: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            placement: Placement::default(),
            content: TriggerContent::Dynamic {
                reference: reference.into(),
                parameters,
            },
        }
    }

    /// Override the placement.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Requested panel placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// What this trigger displays.
    pub fn content(&self) -> &TriggerContent {
        &self.content
    }

    /// Parse a trigger from element attributes, in document order.
    ///
    /// Literal text wins when both `data-tooltip` and `tooltip-method` are
    /// present. Parameter attributes keep their declaration order; their
    /// names are the case-folded suffixes after `data-param`. An unknown
    /// placement hint falls back to the default with a warning.
    pub fn from_attrs<'a, I>(attrs: I) -> Result<Self, TriggerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut text = None;
        let mut reference = None;
        let mut hint = None;
        let mut parameters = Parameters::new();

        for (name, value) in attrs {
            match name {
                ATTR_TEXT => text = Some(value),
                ATTR_METHOD => reference = Some(value),
                ATTR_PLACEMENT => hint = Some(value),
                _ => {
                    if let Some(suffix) = name.strip_prefix(ATTR_PARAM_PREFIX) {
                        if suffix.is_empty() {
                            debug!(name, "parameter attribute with empty name ignored");
                        } else {
                            parameters.insert(suffix, value);
                        }
                    }
                }
            }
        }

        let placement = match hint {
            None => Placement::default(),
            Some(hint) => Placement::parse(hint).unwrap_or_else(|| {
                warn!(hint, "unknown placement hint, falling back to `top`");
                Placement::default()
            }),
        };

        let content = match (text, reference) {
            (Some(text), _) => TriggerContent::Literal(text.to_owned()),
            (None, Some(reference)) => TriggerContent::Dynamic {
                reference: reference.to_owned(),
                parameters,
            },
            (None, None) => {
                warn!("invalid tooltip trigger: no literal text and no content reference");
                return Err(TriggerError::NoContent);
            }
        };

        Ok(Self { placement, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_trigger_from_attrs() {
        let t = Trigger::from_attrs([("data-tooltip", "Hello"), ("data-placement", "bottom")])
            .unwrap();
        assert_eq!(t.placement(), Placement::Bottom);
        assert_eq!(t.content(), &TriggerContent::Literal("Hello".to_owned()));
    }

    #[test]
    fn dynamic_trigger_collects_parameters_in_order() {
        let t = Trigger::from_attrs([
            ("tooltip-method", "app.users@card"),
            ("data-paramZeta", "z"),
            ("data-paramAlpha", "a"),
        ])
        .unwrap();
        let TriggerContent::Dynamic {
            reference,
            parameters,
        } = t.content()
        else {
            panic!("expected a dynamic trigger");
        };
        assert_eq!(reference, "app.users@card");
        let pairs: Vec<(&str, &str)> = parameters.iter().collect();
        assert_eq!(pairs, [("zeta", "z"), ("alpha", "a")]);
    }

    #[test]
    fn literal_wins_over_reference() {
        let t = Trigger::from_attrs([
            ("tooltip-method", "app.users@card"),
            ("data-tooltip", "Hello"),
        ])
        .unwrap();
        assert_eq!(t.content(), &TriggerContent::Literal("Hello".to_owned()));
    }

    #[test]
    fn missing_content_is_rejected() {
        let err = Trigger::from_attrs([("data-placement", "top"), ("class", "tooltip-link")]);
        assert_eq!(err, Err(TriggerError::NoContent));
    }

    #[test]
    fn unknown_placement_falls_back_to_top() {
        let t = Trigger::from_attrs([("data-tooltip", "x"), ("data-placement", "sideways")])
            .unwrap();
        assert_eq!(t.placement(), Placement::Top);
    }

    #[test]
    fn missing_placement_defaults_to_top() {
        let t = Trigger::from_attrs([("data-tooltip", "x")]).unwrap();
        assert_eq!(t.placement(), Placement::Top);
    }

    #[test]
    fn empty_parameter_suffix_is_ignored() {
        let t = Trigger::from_attrs([
            ("tooltip-method", "app.users@card"),
            ("data-param", "dropped"),
            ("data-paramId", "42"),
        ])
        .unwrap();
        let TriggerContent::Dynamic { parameters, .. } = t.content() else {
            panic!("expected a dynamic trigger");
        };
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get("id"), Some("42"));
    }
}
