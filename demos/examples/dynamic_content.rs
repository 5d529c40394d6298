// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end dynamic content: controller and resolver wired together.
//!
//! A dynamic trigger dispatches `tooltip-mouseover` to a resolver whose
//! registry knows one handler; the tagged response replaces the loading
//! placeholder. A second hover then demonstrates the stale-response guard.
//!
//! Run:
//! - `cargo run -p tipwire_demos --example dynamic_content`

use kurbo::Rect;
use serde_json::Value;
use tipwire_resolver::{
    ContentHandler, ContentUpdate, HandlerError, Notice, Registry, Resolver, ResolverConfig,
};
use tipwire_session::{Command, Controller, Trigger};

struct Appointments;

impl ContentHandler for Appointments {
    fn invoke(&self, method: &str, args: &[String]) -> Result<Value, HandlerError> {
        match method {
            "summary" => Ok(Value::String(format!(
                "{} appointment(s) on {}",
                args.first().map_or("0", String::as_str),
                args.get(1).map_or("today", String::as_str),
            ))),
            other => Err(format!("unknown method `{other}`").into()),
        }
    }
}

/// Forward a command batch's notifications, returning any tagged updates.
fn run_notifications(resolver: &mut Resolver, commands: &[Command]) -> Vec<ContentUpdate> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Notify(notice) => resolver.apply(notice),
            _ => None,
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ResolverConfig::from_toml_str(r#"default_handler = "app.appointments""#)
        .expect("valid config");
    let mut registry = Registry::with_config(&config);
    registry.register("app.appointments", Appointments);
    let mut resolver = Resolver::new(registry);

    let mut ctl = Controller::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let trigger = Trigger::from_attrs([
        ("tooltip-method", "app.appointments@summary"),
        ("data-paramCount", "3"),
        ("data-paramDay", "Tuesday"),
    ])
    .expect("valid trigger markup");

    // Hover dispatches the mouseover notification right away.
    let commands = ctl.hover_over(&trigger, Rect::new(100.0, 100.0, 140.0, 120.0));
    assert!(ctl.panel().is_loading());
    let updates = run_notifications(&mut resolver, &commands);
    println!("resolved    -> {:?}", updates[0].content);
    assert_eq!(updates[0].content, "3 appointment(s) on Tuesday");

    // The round trip lands on the live session.
    assert!(ctl.content_resolved(&updates[0]));
    assert_eq!(ctl.panel().content(), "3 appointment(s) on Tuesday");
    assert!(!ctl.panel().is_loading());

    // Bare method names resolve through the configured default handler.
    let bare = Trigger::from_attrs([
        ("tooltip-method", "summary"),
        ("data-paramCount", "1"),
    ])
    .expect("valid trigger markup");
    let commands = ctl.hover_over(&bare, Rect::new(300.0, 100.0, 340.0, 120.0));
    let stale = updates.into_iter().next().unwrap();
    let updates = run_notifications(&mut resolver, &commands);
    assert_eq!(updates[0].content, "1 appointment(s) on today");

    // The first session's update is stale now and must not apply.
    assert!(!ctl.content_resolved(&stale));
    assert!(ctl.content_resolved(&updates[0]));
    println!("panel       -> {:?}", ctl.panel().content());
    assert_eq!(ctl.panel().content(), "1 appointment(s) on today");

    // Hover out clears the server-side slot too.
    for update in run_notifications(&mut resolver, &ctl.hover_out()) {
        ctl.content_resolved(&update);
    }
    assert_eq!(resolver.content(), "");
    println!("mouse out   -> resolver slot cleared");
}
