// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver configuration.
//!
//! The published config file carries the default handler identity for
//! bare-method references; there is deliberately no compiled-in fallback.

use serde::Deserialize;

/// Deserialized resolver configuration.
///
/// ```
/// use tipwire_resolver::ResolverConfig;
///
/// let config = ResolverConfig::from_toml_str(r#"default_handler = "app.users""#).unwrap();
/// assert_eq!(config.default_handler.as_deref(), Some("app.users"));
///
/// // An empty document means no default: bare-method references degrade.
/// let config = ResolverConfig::from_toml_str("").unwrap();
/// assert_eq!(config.default_handler, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Handler identity bare-method references resolve against.
    #[serde(default)]
    pub default_handler: Option<String>,
}

impl ResolverConfig {
    /// Parse from TOML.
    pub fn from_toml_str(doc: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(doc)
    }
}
