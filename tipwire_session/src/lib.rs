// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tipwire Session: the client-side hover lifecycle for one tooltip.
//!
//! ## Overview
//!
//! A page has a single tooltip panel, a single positioning handle, and a
//! single live session. This crate owns all three: it parses trigger
//! markup into a [`Trigger`](crate::trigger::Trigger), runs the
//! Idle → Opening → Shown → Closing lifecycle with 100 ms debounce in each
//! direction, and tells the host what to do next through
//! [`Command`](crate::controller::Command) sequences — schedule a timer,
//! forward a notification to the content resolver, recompute placement.
//!
//! The controller is deterministic and host-driven: it never sleeps, never
//! spawns, and suspends on nothing. Timers are requested from the host and
//! come back through [`Controller::timer_fired`](crate::controller::Controller::timer_fired);
//! resolved content comes back through
//! [`Controller::content_resolved`](crate::controller::Controller::content_resolved),
//! which drops anything not tagged with the live session.
//!
//! ## Workflow
//!
//! 1) Parse the hovered element's attributes with
//!    [`Trigger::from_attrs`](crate::trigger::Trigger::from_attrs); invalid
//!    markup logs a warning and the hover is ignored.
//! 2) Feed [`Controller::hover_over`](crate::controller::Controller::hover_over) /
//!    [`Controller::hover_out`](crate::controller::Controller::hover_out) /
//!    [`Controller::timer_fired`](crate::controller::Controller::timer_fired)
//!    and execute the returned commands.
//! 3) Render from [`Controller::panel`](crate::controller::Controller::panel)
//!    and [`Controller::position`](crate::controller::Controller::position).

pub mod controller;
pub mod panel;
pub mod trigger;

pub use controller::{CLOSE_DELAY, Command, Controller, OPEN_DELAY, Phase, TimerToken};
pub use panel::{Panel, PanelFlags};
pub use trigger::{Trigger, TriggerContent, TriggerError};
