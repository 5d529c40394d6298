// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The client↔server event contract: session ids, parameter mappings, and
//! the two tooltip notifications.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of one tooltip session, from Opening back to Idle.
///
/// Minted by the hover controller, carried on the `tooltip-mouseover`
/// notification, and echoed on the [`ContentUpdate`] so the client can
/// discard responses whose session has already closed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    /// Wrap a raw session number.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw session number.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered parameter mapping.
///
/// Parameter names come from trigger attribute suffixes and are case-folded
/// to lower case on insertion. Declaration order is preserved everywhere:
/// iteration, [`Parameters::values`] (which feeds the handler's positional
/// arguments), and the JSON representation (an object whose keys appear in
/// declaration order).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters(Vec<(String, String)>);

impl Parameters {
    /// An empty mapping.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a parameter, case-folding its name.
    ///
    /// Re-inserting an existing name replaces the value but keeps the
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_lowercase();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look a parameter up by (case-folded) name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Values in declaration order — the handler's positional arguments.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParametersVisitor;

        impl<'de> Visitor<'de> for ParametersVisitor {
            type Value = Parameters;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Parameters, A::Error> {
                let mut params = Parameters::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    params.insert(name, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParametersVisitor)
    }
}

/// A notification from the hover controller to the resolver.
///
/// The serialized form is adjacently tagged with the contract's event
/// names:
///
/// ```
/// use tipwire_resolver::{Notice, Parameters, SessionId};
///
/// let notice = Notice::TooltipMouseover {
///     session: SessionId::new(1),
///     reference: "app.users@card".to_owned(),
///     parameters: Parameters::new(),
/// };
/// let json = serde_json::to_string(&notice).unwrap();
/// assert!(json.starts_with(r#"{"event":"tooltip-mouseover""#));
///
/// let json = serde_json::to_string(&Notice::TooltipMouseout).unwrap();
/// assert_eq!(json, r#"{"event":"tooltip-mouseout"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum Notice {
    /// A dynamic trigger is hovered: resolve content for this session.
    TooltipMouseover {
        /// Session the eventual [`ContentUpdate`] must be tagged with.
        session: SessionId,
        /// Raw reference string from the trigger markup.
        reference: String,
        /// Trigger parameters in declaration order.
        parameters: Parameters,
    },
    /// The pointer left the trigger: clear held content.
    TooltipMouseout,
}

/// The resolver's answer to a `tooltip-mouseover` notification.
///
/// Tagged with the originating session; the controller drops updates whose
/// session is no longer live.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentUpdate {
    /// Session the content was resolved for.
    pub session: SessionId,
    /// Resolved display content; empty when resolution degraded.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_preserve_declaration_order() {
        let params: Parameters = [("zeta", "1"), ("alpha", "2"), ("mid", "3")]
            .into_iter()
            .collect();
        let values: Vec<&str> = params.values().collect();
        assert_eq!(values, ["1", "2", "3"]);
        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn parameter_names_are_case_folded() {
        let mut params = Parameters::new();
        params.insert("UserId", "42");
        assert_eq!(params.get("userid"), Some("42"));
        assert_eq!(params.get("USERID"), Some("42"));
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut params = Parameters::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("A", "9");
        assert_eq!(params.len(), 2);
        let values: Vec<&str> = params.values().collect();
        assert_eq!(values, ["9", "2"]);
    }

    #[test]
    fn parameters_json_keeps_order() {
        let params: Parameters = [("zeta", "1"), ("alpha", "2")].into_iter().collect();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);

        let back: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
        let names: Vec<&str> = back.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn mouseover_notice_json_shape() {
        let notice = Notice::TooltipMouseover {
            session: SessionId::new(7),
            reference: "app.users@card".to_owned(),
            parameters: [("id", "42")].into_iter().collect(),
        };
        let json = serde_json::to_string(&notice).unwrap();
        assert_eq!(
            json,
            r#"{"event":"tooltip-mouseover","payload":{"session":7,"reference":"app.users@card","parameters":{"id":"42"}}}"#
        );
        assert_eq!(serde_json::from_str::<Notice>(&json).unwrap(), notice);
    }

    #[test]
    fn mouseout_notice_has_no_payload() {
        let json = serde_json::to_string(&Notice::TooltipMouseout).unwrap();
        assert_eq!(json, r#"{"event":"tooltip-mouseout"}"#);
        assert_eq!(
            serde_json::from_str::<Notice>(&json).unwrap(),
            Notice::TooltipMouseout
        );
    }

    #[test]
    fn content_update_roundtrip() {
        let update = ContentUpdate {
            session: SessionId::new(3),
            content: "<b>hi</b>".to_owned(),
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(serde_json::from_str::<ContentUpdate>(&json).unwrap(), update);
    }
}
