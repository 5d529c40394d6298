// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The handler allow-list and reference resolution.
//!
//! ## Overview
//!
//! Handler identities are registered up front; a reference can only ever
//! reach a registered handler. This replaces open "resolve any string into
//! a call" dispatch — client markup chooses among permitted handlers, it
//! cannot name arbitrary server code.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::reference::{Reference, ReferenceError};
use crate::wire::Parameters;

/// Boxed error type handlers may fail with.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A server-side content producer.
///
/// Implementations expose one or more methods by name and take the
/// trigger's parameter values as positional string arguments, in
/// declaration order. Return a [`Value::String`] to display it; any other
/// value is coerced to empty content. Unknown methods should return an
/// error — like every other invocation failure it degrades to an absent
/// tooltip, never a fault.
pub trait ContentHandler: Send + Sync {
    /// Invoke `method` with positional arguments.
    fn invoke(&self, method: &str, args: &[String]) -> Result<Value, HandlerError>;
}

/// Why resolution failed, before degrading to empty content.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The reference string itself was malformed.
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    /// The parsed handler identity is not in the allow-list.
    #[error("handler `{0}` is not registered")]
    UnknownHandler(String),
    /// The handler ran and failed.
    #[error("handler `{handler}` method `{method}` failed: {source}")]
    Invocation {
        /// Handler identity that was invoked.
        handler: String,
        /// Method that failed.
        method: String,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },
}

/// Allow-list from handler identity to handler implementation.
///
/// ## Usage
///
/// - Populate at startup with [`Registry::register`].
/// - Optionally inject a default identity (for bare-method references) via
///   [`Registry::with_config`] or [`Registry::set_default_handler`].
/// - Call [`Registry::resolve`] per `tooltip-mouseover`; it never fails,
///   it returns empty content and logs instead.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Box<dyn ContentHandler>>,
    default_handler: Option<String>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identities: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        identities.sort_unstable();
        f.debug_struct("Registry")
            .field("handlers", &identities)
            .field("default_handler", &self.default_handler)
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// An empty registry with no default handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry taking its default handler identity from config.
    pub fn with_config(config: &ResolverConfig) -> Self {
        Self {
            handlers: HashMap::new(),
            default_handler: config.default_handler.clone(),
        }
    }

    /// Register a handler under `identity`, replacing any previous one.
    pub fn register(&mut self, identity: impl Into<String>, handler: impl ContentHandler + 'static) {
        self.handlers.insert(identity.into(), Box::new(handler));
    }

    /// Whether `identity` is in the allow-list.
    pub fn contains(&self, identity: &str) -> bool {
        self.handlers.contains_key(identity)
    }

    /// The identity bare-method references resolve against, if configured.
    pub fn default_handler(&self) -> Option<&str> {
        self.default_handler.as_deref()
    }

    /// Set or clear the default handler identity.
    pub fn set_default_handler(&mut self, identity: Option<String>) {
        self.default_handler = identity;
    }

    /// Resolve a reference into display content, degrading every failure
    /// to empty content with a logged warning.
    pub fn resolve(&self, reference: &str, parameters: &Parameters) -> String {
        debug!(reference, parameter_count = parameters.len(), "fetch tooltip content");
        match self.try_resolve(reference, parameters) {
            Ok(content) => content,
            Err(err) => {
                warn!(reference, error = %err, "tooltip content resolution failed");
                String::new()
            }
        }
    }

    /// Resolve a reference into display content, reporting failures.
    ///
    /// A successful invocation whose result is not text yields empty
    /// content (only strings are display content).
    pub fn try_resolve(
        &self,
        reference: &str,
        parameters: &Parameters,
    ) -> Result<String, ResolveError> {
        let target = Reference::parse(reference, self.default_handler())?;
        let handler = self
            .handlers
            .get(&target.handler)
            .ok_or_else(|| ResolveError::UnknownHandler(target.handler.clone()))?;

        let args: Vec<String> = parameters.values().map(str::to_owned).collect();
        let result = handler
            .invoke(&target.method, &args)
            .map_err(|source| ResolveError::Invocation {
                handler: target.handler.clone(),
                method: target.method.clone(),
                source,
            })?;

        match result {
            Value::String(content) => Ok(content),
            other => {
                debug!(
                    handler = %target.handler,
                    method = %target.method,
                    kind = value_kind(&other),
                    "non-text handler result coerced to empty content"
                );
                Ok(String::new())
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Users;

    impl ContentHandler for Users {
        fn invoke(&self, method: &str, args: &[String]) -> Result<Value, HandlerError> {
            match method {
                "card" => Ok(Value::String(format!("user {}", args.join("/")))),
                "count" => Ok(Value::Number(42.into())),
                "boom" => Err("database offline".into()),
                other => Err(format!("unknown method `{other}`").into()),
            }
        }
    }

    fn registry() -> Registry {
        let mut r = Registry::new();
        r.register("app.users", Users);
        r
    }

    #[test]
    fn resolves_registered_handler_and_method() {
        let params: Parameters = [("id", "42")].into_iter().collect();
        assert_eq!(registry().resolve("app.users@card", &params), "user 42");
    }

    #[test]
    fn arguments_arrive_in_declaration_order() {
        let params: Parameters = [("zeta", "z"), ("alpha", "a")].into_iter().collect();
        assert_eq!(registry().resolve("app.users@card", &params), "user z/a");
    }

    #[test]
    fn bare_method_targets_default_handler() {
        let mut r = registry();
        r.set_default_handler(Some("app.users".to_owned()));
        assert_eq!(r.resolve("card", &Parameters::new()), "user ");
    }

    #[test]
    fn bare_method_without_default_degrades() {
        let r = registry();
        assert_eq!(r.resolve("card", &Parameters::new()), "");
        assert!(matches!(
            r.try_resolve("card", &Parameters::new()),
            Err(ResolveError::Reference(ReferenceError::NoDefault(_)))
        ));
    }

    #[test]
    fn unregistered_handler_degrades() {
        let r = registry();
        assert_eq!(r.resolve("app.orders@card", &Parameters::new()), "");
        assert!(matches!(
            r.try_resolve("app.orders@card", &Parameters::new()),
            Err(ResolveError::UnknownHandler(identity)) if identity == "app.orders"
        ));
    }

    #[test]
    fn handler_failure_degrades_without_panicking() {
        let r = registry();
        assert_eq!(r.resolve("app.users@boom", &Parameters::new()), "");
        assert_eq!(r.resolve("app.users@missing", &Parameters::new()), "");
    }

    #[test]
    fn non_text_result_coerces_to_empty() {
        let r = registry();
        assert_eq!(r.resolve("app.users@count", &Parameters::new()), "");
    }

    #[test]
    fn malformed_references_degrade() {
        let r = registry();
        assert_eq!(r.resolve("", &Parameters::new()), "");
        assert_eq!(r.resolve("@card", &Parameters::new()), "");
        assert_eq!(r.resolve("app.users@", &Parameters::new()), "");
    }

    #[test]
    fn config_injects_default_handler() {
        let config = ResolverConfig {
            default_handler: Some("app.users".to_owned()),
        };
        let mut r = Registry::with_config(&config);
        r.register("app.users", Users);
        assert_eq!(r.default_handler(), Some("app.users"));
        assert_eq!(r.resolve("card", &Parameters::new()), "user ");
    }
}
