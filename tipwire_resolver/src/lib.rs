// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tipwire Resolver: server-side content resolution for tooltip sessions.
//!
//! ## Overview
//!
//! A hovered trigger may carry a reference string of the shape
//! `handler@method` instead of literal text. This crate turns that string
//! into display content: it parses the reference, looks the handler
//! identity up in an explicit allow-list [`Registry`], invokes the named
//! method with the trigger's parameters as positional string arguments, and
//! accepts only a text result.
//!
//! Every failure — empty or malformed reference, unregistered handler,
//! invocation error, non-text result — degrades to empty content with a
//! logged diagnostic. A missing tooltip is never a fault.
//!
//! ## Wire contract
//!
//! The client notifies the resolver with two named events,
//! `tooltip-mouseover` (carrying the session id, reference, and parameter
//! mapping) and `tooltip-mouseout` (no payload); the resolver answers the
//! former with a [`ContentUpdate`](crate::wire::ContentUpdate) tagged with the originating session so
//! the client can drop responses that outlive their session. See
//! [`wire`] for the serde types.
//!
//! ## Minimal example
//!
//! ```
//! use tipwire_resolver::{ContentHandler, HandlerError, Parameters, Registry};
//!
//! struct Echo;
//! impl ContentHandler for Echo {
//!     fn invoke(&self, method: &str, args: &[String]) -> Result<serde_json::Value, HandlerError> {
//!         match method {
//!             "echo" => Ok(serde_json::Value::String(args.join(" "))),
//!             other => Err(format!("unknown method `{other}`").into()),
//!         }
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register("app.echo", Echo);
//!
//! let params: Parameters = [("word", "hi")].into_iter().collect();
//! assert_eq!(registry.resolve("app.echo@echo", &params), "hi");
//! // Unregistered handlers degrade to empty content.
//! assert_eq!(registry.resolve("app.other@echo", &params), "");
//! ```

pub mod config;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod wire;

pub use config::ResolverConfig;
pub use reference::{Reference, ReferenceError};
pub use registry::{ContentHandler, HandlerError, Registry, ResolveError};
pub use resolver::Resolver;
pub use wire::{ContentUpdate, Notice, Parameters, SessionId};
