//! # Practice Session
//!
//! [`Trainer`] is the state machine behind the typing screen:
//!
//! ```text
//!            start(mode)                    input reaches target length
//!   Idle  ───────────────▶  Active  ◀──────────────────────────────────┐
//!     ▲                       │  └──────────── promote ─────────────────┘
//!     └────── back() ─────────┘
//! ```
//!
//! While active it owns a [`Session`]: the mode, the current/next [`TargetQueue`], the
//! digits typed so far and the bounded history. The trainer holds no global state, so
//! any number of independent trainers can run side by side.
//!
//! Every transition finishes by pushing the new texts through a [`Surface`].

use crate::format;
use crate::generator::Generator;
use crate::history::History;
use crate::model::{Mode, Target};
use crate::queue::TargetQueue;
use crate::surface::{Screen, Surface};
use rand::Rng;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    queue: TargetQueue,
    typed: String,
    history: History,
    region: Option<String>,
}

impl Session {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current(&self) -> &Target {
        self.queue.current()
    }

    pub fn next(&self) -> &Target {
        self.queue.next()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Region of the current target; only set in phone mode.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// What happened when a typed value completed the current target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub completed: Target,
    pub typed: String,
    pub entry: String,
}

impl Promotion {
    pub fn is_exact(&self) -> bool {
        self.completed.digits == self.typed
    }
}

pub struct Trainer<R = StdRng> {
    generator: Generator<R>,
    history_limit: usize,
    session: Option<Session>,
}

impl<R: Rng> Trainer<R> {
    pub fn new(generator: Generator<R>, history_limit: usize) -> Self {
        Self {
            generator,
            history_limit,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn generator(&self) -> &Generator<R> {
        &self.generator
    }

    /// Selects a mode: resets the log and input, fills both slots and shows the typing
    /// screen. Starting while already active replaces the running session.
    pub fn start<S: Surface + ?Sized>(&mut self, mode: Mode, surface: &mut S) {
        let current = self.generator.generate(mode);
        let next = self.generator.generate(mode);
        let region = self.region_for(mode, &current);

        tracing::debug!(%mode, current = %current.digits, next = %next.digits, "session started");

        self.session = Some(Session {
            mode,
            queue: TargetQueue::new(current, next),
            typed: String::new(),
            history: History::new(self.history_limit),
            region,
        });

        surface.clear_log();
        surface.set_input_display("");
        surface.set_mode_label(mode.label());
        if let Some(session) = &self.session {
            render_targets(session, surface);
        }
        surface.show_screen(Screen::Typing);
    }

    /// Drops the session and returns to mode selection.
    pub fn back<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(session) = self.session.take() {
            tracing::debug!(mode = %session.mode, completed = session.history.len(), "session ended");
        }
        surface.set_region_note(None);
        surface.show_screen(Screen::Select);
    }

    /// Handles one input event carrying the full contents of the input field.
    ///
    /// Non-digits are stripped. Once the digits reach the length of the current target
    /// the target is promoted with exactly that many digits; any surplus is discarded.
    pub fn input<S: Surface + ?Sized>(&mut self, raw: &str, surface: &mut S) -> Option<Promotion> {
        let Some(session) = self.session.as_mut() else {
            tracing::trace!("input ignored, no active session");
            return None;
        };

        let digits = format::digits_only(raw);
        let mode = session.mode;
        let target_len = session.current().len();
        surface.set_input_display(&format::input_display(
            mode,
            &digits,
            session.current().area_code_len,
        ));

        if digits.len() < target_len {
            session.typed = digits;
            return None;
        }

        let typed = digits[..target_len].to_string();
        let entry = format::history_entry(mode, &typed, session.current().area_code_len);
        session.history.push(entry.clone());
        surface.append_log(&entry);

        let fresh = self.generator.generate(mode);
        let completed = session.queue.promote(fresh);
        session.typed.clear();
        session.region = match mode {
            Mode::Phone => Some(
                self.generator
                    .table()
                    .resolve_region(&session.queue.current().digits)
                    .to_string(),
            ),
            Mode::Number | Mode::Birthday => None,
        };

        tracing::debug!(
            target_digits = %completed.digits,
            typed = %typed,
            next = %session.current().digits,
            "target completed"
        );

        render_targets(session, surface);
        surface.set_input_display("");

        Some(Promotion {
            completed,
            typed,
            entry,
        })
    }

    fn region_for(&self, mode: Mode, target: &Target) -> Option<String> {
        match mode {
            Mode::Phone => Some(
                self.generator
                    .table()
                    .resolve_region(&target.digits)
                    .to_string(),
            ),
            Mode::Number | Mode::Birthday => None,
        }
    }
}

fn render_targets<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    surface.set_now_value(&format::display(session.mode, session.current()));
    surface.set_next_value(&format::display(session.mode, session.next()));
    surface.set_region_note(session.region());
}
