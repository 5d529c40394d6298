// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover lifecycle controller.
//!
//! ## Overview
//!
//! One [`Controller`] exists per page context. Hosts feed it hover entry,
//! hover exit, fired timers, and resolved content updates; each input runs
//! to completion and returns the [`Command`]s the host must execute
//! (schedule a timer, forward a notification to the resolver, recompute
//! the panel placement). Nothing here blocks: the resolver round trip is
//! fire-and-forget and its result re-enters through
//! [`Controller::content_resolved`].
//!
//! ## Lifecycle
//!
//! Idle → Opening (hover over a valid trigger, debounce running) → Shown
//! (debounce fired) → Closing (hover out, debounce running) → Idle. Both
//! debounce directions share one pending timer slot, so starting either
//! cancels the other; a fired timer whose token is no longer pending is
//! ignored.
//!
//! ## Invariants
//!
//! - At most one positioning handle is ever live; a new session destroys
//!   the previous handle before creating its own.
//! - Only the live session's [`ContentUpdate`] may touch the panel; hover
//!   exit retires the session id, so late responses are dropped.

use std::time::Duration;

use kurbo::{Rect, Size};
use tracing::debug;

use tipwire_placement::{Anchored, PlacementConfig};
use tipwire_resolver::{ContentUpdate, Notice, SessionId};

use crate::panel::Panel;
use crate::trigger::{Trigger, TriggerContent};

/// Debounce before a hovered tooltip becomes visible.
pub const OPEN_DELAY: Duration = Duration::from_millis(100);
/// Debounce before a left tooltip hides.
pub const CLOSE_DELAY: Duration = Duration::from_millis(100);

/// Lifecycle phase of the page's tooltip session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No trigger hovered, no handle, panel hidden.
    Idle,
    /// Hovered; waiting out the open debounce.
    Opening,
    /// Panel visible.
    Shown,
    /// Hover left; waiting out the close debounce.
    Closing,
}

/// Handle for one requested debounce timer.
///
/// Tokens are single-use: the controller mints a fresh one per request and
/// only the most recently minted token is live.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// The raw token number.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Which debounce a pending timer drives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum TimerKind {
    Open,
    Close,
}

/// Host work requested by a controller transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Call [`Controller::timer_fired`] with `token` after `delay`.
    StartTimer {
        /// Token to echo back.
        token: TimerToken,
        /// How long to wait.
        delay: Duration,
    },
    /// Forward to the content resolver, fire-and-forget.
    Notify(Notice),
    /// The panel just became visible; recompute its placement (the anchor
    /// or viewport may have shifted during the debounce).
    Reposition,
}

/// The per-page tooltip session owner.
///
/// ## Usage
///
/// ```
/// use kurbo::{Rect, Size};
/// use tipwire_session::{Command, Controller, Phase, Trigger};
///
/// let mut ctl = Controller::new(Rect::new(0.0, 0.0, 800.0, 600.0));
/// let trigger = Trigger::literal("Hello");
///
/// let commands = ctl.hover_over(&trigger, Rect::new(100.0, 100.0, 140.0, 120.0));
/// let [Command::StartTimer { token, .. }] = commands.as_slice() else {
///     panic!("expected a single timer request");
/// };
/// assert_eq!(ctl.phase(), Phase::Opening);
///
/// ctl.timer_fired(*token);
/// assert_eq!(ctl.phase(), Phase::Shown);
/// assert_eq!(ctl.panel().content(), "Hello");
/// let panel = ctl.position(Size::new(60.0, 24.0)).unwrap();
/// assert_eq!(panel, Rect::new(90.0, 68.0, 150.0, 92.0));
/// ```
#[derive(Debug)]
pub struct Controller {
    phase: Phase,
    viewport: Rect,
    config: PlacementConfig,
    handle: Option<Anchored>,
    trigger: Option<Trigger>,
    pending: Option<(TimerToken, TimerKind)>,
    next_timer: u64,
    next_session: u64,
    session: Option<SessionId>,
    panel: Panel,
}

impl Controller {
    /// A controller for the given viewport with default placement tuning.
    pub fn new(viewport: Rect) -> Self {
        Self::with_config(viewport, PlacementConfig::default())
    }

    /// A controller with explicit placement tuning.
    pub fn with_config(viewport: Rect, config: PlacementConfig) -> Self {
        Self {
            phase: Phase::Idle,
            viewport,
            config,
            handle: None,
            trigger: None,
            pending: None,
            next_timer: 0,
            next_session: 0,
            session: None,
            panel: Panel::default(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The panel model hosts render from.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// The live positioning handle, while a session has one.
    pub fn handle(&self) -> Option<&Anchored> {
        self.handle.as_ref()
    }

    /// The live session id; `None` once the session has been retired.
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// The viewport placements are computed against.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Update the viewport (resize/scroll).
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Compute the panel rectangle for `panel_size`, if a handle is live.
    pub fn position(&mut self, panel_size: Size) -> Option<Rect> {
        let viewport = self.viewport;
        self.handle.as_mut().map(|h| h.compute(panel_size, viewport))
    }

    /// The pointer entered a valid trigger.
    pub fn hover_over(&mut self, trigger: &Trigger, anchor: Rect) -> Vec<Command> {
        // Re-entering the shown trigger is a no-op; anything else replaces
        // the session.
        if self.phase == Phase::Shown
            && self.trigger.as_ref() == Some(trigger)
            && self.handle.as_ref().map(Anchored::anchor) == Some(anchor)
        {
            return Vec::new();
        }
        self.begin_session(trigger, anchor)
    }

    /// The pointer left the current trigger.
    pub fn hover_out(&mut self) -> Vec<Command> {
        match self.phase {
            Phase::Idle => Vec::new(),
            Phase::Opening => {
                // Never shown: no hide debounce to wait out.
                self.reset_to_idle();
                vec![Command::Notify(Notice::TooltipMouseout)]
            }
            Phase::Shown => {
                self.session = None;
                self.phase = Phase::Closing;
                let token = self.start_timer(TimerKind::Close);
                debug!("tooltip session closing");
                vec![
                    Command::StartTimer {
                        token,
                        delay: CLOSE_DELAY,
                    },
                    Command::Notify(Notice::TooltipMouseout),
                ]
            }
            Phase::Closing => {
                let token = self.start_timer(TimerKind::Close);
                vec![
                    Command::StartTimer {
                        token,
                        delay: CLOSE_DELAY,
                    },
                    Command::Notify(Notice::TooltipMouseout),
                ]
            }
        }
    }

    /// A previously requested timer fired.
    pub fn timer_fired(&mut self, token: TimerToken) -> Vec<Command> {
        let kind = match self.pending {
            Some((pending, kind)) if pending == token => kind,
            _ => {
                debug!(token = token.raw(), "ignoring stale timer");
                return Vec::new();
            }
        };
        self.pending = None;

        match kind {
            TimerKind::Open if self.phase == Phase::Opening => {
                if let Some(TriggerContent::Literal(text)) =
                    self.trigger.as_ref().map(Trigger::content)
                {
                    let text = text.clone();
                    self.panel.set_content(text);
                }
                self.panel.show();
                self.phase = Phase::Shown;
                debug!(session = ?self.session, "tooltip shown");
                vec![Command::Reposition]
            }
            TimerKind::Close if self.phase == Phase::Closing => {
                self.reset_to_idle();
                Vec::new()
            }
            _ => {
                debug!(?kind, phase = ?self.phase, "timer fired in unexpected phase");
                Vec::new()
            }
        }
    }

    /// Resolved content arrived from the resolver.
    ///
    /// Applies only when the update is tagged with the live session;
    /// anything else is dropped and `false` is returned.
    pub fn content_resolved(&mut self, update: &ContentUpdate) -> bool {
        if self.session != Some(update.session) {
            debug!(session = %update.session, "dropping stale content update");
            return false;
        }
        self.panel.finish_loading(update.content.clone());
        true
    }

    /// Start a new session for `trigger`, tearing down any previous one.
    fn begin_session(&mut self, trigger: &Trigger, anchor: Rect) -> Vec<Command> {
        if self.handle.take().is_some() {
            debug!("destroying previous positioning handle");
        }
        self.handle = Some(Anchored::with_config(
            anchor,
            trigger.placement(),
            self.config,
        ));
        self.trigger = Some(trigger.clone());

        self.next_session += 1;
        let session = SessionId::new(self.next_session);
        self.session = Some(session);
        self.phase = Phase::Opening;

        let token = self.start_timer(TimerKind::Open);
        let mut commands = vec![Command::StartTimer {
            token,
            delay: OPEN_DELAY,
        }];

        match trigger.content() {
            TriggerContent::Literal(_) => {
                // Text is applied once the open debounce fires; only stale
                // loading state from a replaced dynamic session goes now.
                self.panel.cancel_loading();
            }
            TriggerContent::Dynamic {
                reference,
                parameters,
            } => {
                self.panel.begin_loading();
                commands.push(Command::Notify(Notice::TooltipMouseover {
                    session,
                    reference: reference.clone(),
                    parameters: parameters.clone(),
                }));
            }
        }

        debug!(
            session = %session,
            placement = %trigger.placement(),
            "tooltip session opening"
        );
        commands
    }

    /// Tear everything down: hide the panel, destroy the handle, retire
    /// the session, drop any pending timer.
    fn reset_to_idle(&mut self) {
        self.phase = Phase::Idle;
        self.pending = None;
        self.session = None;
        self.trigger = None;
        if self.handle.take().is_some() {
            debug!("destroying positioning handle");
        }
        self.panel.hide();
    }

    /// Mint a fresh timer token; the previous pending timer (either
    /// direction) stops being live.
    fn start_timer(&mut self, kind: TimerKind) -> TimerToken {
        self.next_timer += 1;
        let token = TimerToken(self.next_timer);
        self.pending = Some((token, kind));
        token
    }
}
