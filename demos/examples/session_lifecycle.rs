// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover lifecycle for a literal-text trigger.
//!
//! Drives a controller through hover, debounce, show, flicker, and close,
//! executing its commands by hand the way a host event loop would.
//!
//! Run:
//! - `cargo run -p tipwire_demos --example session_lifecycle`

use kurbo::{Rect, Size};
use tipwire_session::{Command, Controller, Phase, TimerToken, Trigger};

/// Collect the requested timer from a command batch, if any.
fn pending_timer(commands: &[Command]) -> Option<TimerToken> {
    commands.iter().find_map(|c| match c {
        Command::StartTimer { token, .. } => Some(*token),
        _ => None,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut ctl = Controller::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let trigger = Trigger::from_attrs([
        ("data-tooltip", "Save your changes"),
        ("data-placement", "bottom"),
    ])
    .expect("valid trigger markup");
    let anchor = Rect::new(100.0, 100.0, 140.0, 120.0);

    // Hover in: the open debounce starts, nothing is visible yet.
    let commands = ctl.hover_over(&trigger, anchor);
    println!("hover-over  -> {:?}, {} command(s)", ctl.phase(), commands.len());
    assert_eq!(ctl.phase(), Phase::Opening);
    assert!(!ctl.panel().is_visible());

    // A quick flick out and back in cancels and restarts the debounce.
    let stale = pending_timer(&commands).unwrap();
    ctl.hover_out();
    let commands = ctl.hover_over(&trigger, anchor);
    assert!(ctl.timer_fired(stale).is_empty(), "flicker timer must be inert");

    // The live debounce fires: the panel shows below the anchor.
    ctl.timer_fired(pending_timer(&commands).unwrap());
    println!("open timer  -> {:?}, content {:?}", ctl.phase(), ctl.panel().content());
    assert_eq!(ctl.phase(), Phase::Shown);
    assert_eq!(ctl.panel().content(), "Save your changes");

    let rect = ctl.position(Size::new(160.0, 28.0)).unwrap();
    println!("panel rect  -> {rect:?}");
    assert_eq!(rect.y0, 128.0);

    // Hover out and wait out the close debounce.
    let commands = ctl.hover_out();
    assert_eq!(ctl.phase(), Phase::Closing);
    ctl.timer_fired(pending_timer(&commands).unwrap());
    println!("close timer -> {:?}", ctl.phase());
    assert_eq!(ctl.phase(), Phase::Idle);
    assert!(ctl.handle().is_none());
}
