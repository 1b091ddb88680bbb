//! The interactive typing screen.
//!
//! [`TermScreen`] is the terminal's [`Surface`]: the session writes into its
//! [`ScreenBuffer`] and the loop redraws the whole screen from that buffer after every
//! key.

use super::styles::PALETTE;
use console::{Key, Term};
use std::io;
use tenkey::api::TenkeyApi;
use tenkey::error::{Result, TenkeyError};
use tenkey::keys::{self, InputLine, KeyAction, KeyPress};
use tenkey::model::Mode;
use tenkey::session::{Promotion, Trainer};
use tenkey::surface::{Screen, ScreenBuffer, Surface};
use unicode_width::UnicodeWidthStr;

const LOG_LINES: usize = 8;
const SLOT_LABEL_WIDTH: usize = 6;

struct TermScreen {
    term: Term,
    buffer: ScreenBuffer,
    tally: Tally,
}

/// Targets completed since the mode was chosen, and how many of them were mistyped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    done: usize,
    missed: usize,
}

impl Tally {
    fn record(&mut self, promotion: &Promotion) {
        self.done += 1;
        if !promotion.is_exact() {
            self.missed += 1;
        }
    }
}

impl Surface for TermScreen {
    fn show_screen(&mut self, screen: Screen) {
        self.buffer.show_screen(screen);
    }

    fn set_mode_label(&mut self, label: &str) {
        self.buffer.set_mode_label(label);
    }

    fn set_now_value(&mut self, text: &str) {
        self.buffer.set_now_value(text);
    }

    fn set_next_value(&mut self, text: &str) {
        self.buffer.set_next_value(text);
    }

    fn set_input_display(&mut self, text: &str) {
        self.buffer.set_input_display(text);
    }

    fn set_region_note(&mut self, note: Option<&str>) {
        self.buffer.set_region_note(note);
    }

    fn append_log(&mut self, entry: &str) {
        self.buffer.append_log(entry);
    }

    fn clear_log(&mut self) {
        self.buffer.clear_log();
        self.tally = Tally::default();
    }
}

impl TermScreen {
    fn draw(&self) -> io::Result<()> {
        self.term.clear_screen()?;
        match self.buffer.screen {
            Screen::Select => self.draw_select(),
            Screen::Typing => self.draw_typing(),
        }
    }

    fn draw_select(&self) -> io::Result<()> {
        let p = &*PALETTE;
        self.term.write_line("")?;
        self.term
            .write_line(&format!("  {}", p.title.apply_to("tenkey")))?;
        self.term.write_line("")?;
        for (i, mode) in Mode::all().iter().enumerate() {
            self.term.write_line(&format!(
                "  {}  {}",
                p.input.apply_to(i + 1),
                mode.label()
            ))?;
        }
        self.term.write_line("")?;
        self.term
            .write_line(&format!("  {}", p.hint.apply_to("1-3 choose a mode, q quits")))
    }

    fn draw_typing(&self) -> io::Result<()> {
        let p = &*PALETTE;
        let b = &self.buffer;
        let width = self.term.size().1 as usize;

        self.term.write_line("")?;
        self.term.write_line(&format!(
            "  {} {}  {}",
            p.title.apply_to("tenkey"),
            p.label.apply_to(format!("· {}", b.mode_label)),
            p.hint
                .apply_to(format!("done {} · missed {}", self.tally.done, self.tally.missed))
        ))?;
        self.term.write_line("")?;
        self.term
            .write_line(&slot("NOW", &p.now.apply_to(&b.now_value).to_string()))?;
        self.term
            .write_line(&slot("NEXT", &p.next.apply_to(&b.next_value).to_string()))?;
        if let Some(note) = &b.region_note {
            self.term.write_line(&slot(
                "",
                &p.region.apply_to(fit(note, width.saturating_sub(SLOT_LABEL_WIDTH + 4))).to_string(),
            ))?;
        }
        self.term.write_line("")?;
        self.term.write_line(&format!(
            "  {} {}_",
            p.label.apply_to(">"),
            p.input.apply_to(&b.input_display)
        ))?;
        self.term.write_line("")?;

        let skip = b.log.len().saturating_sub(LOG_LINES);
        for entry in b.log.iter().skip(skip) {
            self.term
                .write_line(&format!("    {}", p.log.apply_to(entry)))?;
        }
        self.term.write_line("")?;
        self.term
            .write_line(&format!("  {}", p.hint.apply_to("Esc returns to mode select")))
    }
}

fn slot(label: &str, value: &str) -> String {
    format!("  {:<width$}{}", label, value, width = SLOT_LABEL_WIDTH)
}

/// Cuts `text` to at most `max` display columns.
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        let next = format!("{}{}", out, c);
        if next.width() + 1 > max {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}

fn key_press(key: Key) -> KeyPress {
    match key {
        Key::Char(c) => KeyPress::Char(c),
        Key::Enter => KeyPress::Enter,
        Key::Backspace => KeyPress::Backspace,
        Key::Del => KeyPress::Delete,
        Key::Tab => KeyPress::Tab,
        Key::ArrowLeft => KeyPress::Left,
        Key::ArrowRight => KeyPress::Right,
        Key::ArrowUp => KeyPress::Up,
        Key::ArrowDown => KeyPress::Down,
        Key::Escape => KeyPress::Escape,
        _ => KeyPress::Other,
    }
}

fn select_mode(key: &Key) -> Option<Mode> {
    match key {
        Key::Char('1') => Some(Mode::Number),
        Key::Char('2') => Some(Mode::Birthday),
        Key::Char('3') => Some(Mode::Phone),
        _ => None,
    }
}

pub(super) fn run(api: &TenkeyApi, mode: Option<Mode>) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(TenkeyError::Api(
            "The typing screen needs an interactive terminal".into(),
        ));
    }

    let mut screen = TermScreen {
        term,
        buffer: ScreenBuffer::new(api.settings().history_limit),
        tally: Tally::default(),
    };
    let mut trainer = api.trainer();
    let mut line = InputLine::new();

    if let Some(mode) = mode {
        trainer.start(mode, &mut screen);
    }

    screen.term.hide_cursor()?;
    let outcome = event_loop(&mut screen, &mut trainer, &mut line);
    screen.term.clear_screen()?;
    screen.term.show_cursor()?;
    outcome
}

fn event_loop(
    screen: &mut TermScreen,
    trainer: &mut Trainer,
    line: &mut InputLine,
) -> Result<()> {
    loop {
        screen.draw()?;
        let key = match screen.term.read_key() {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        if !trainer.is_active() {
            if let Some(mode) = select_mode(&key) {
                line.clear();
                trainer.start(mode, screen);
            } else if matches!(key, Key::Char('q') | Key::Escape) {
                return Ok(());
            }
            continue;
        }

        let press = key_press(key);
        match keys::classify(press) {
            KeyAction::Back => {
                line.clear();
                trainer.back(screen);
            }
            KeyAction::Suppress => {}
            KeyAction::Accept => {
                if !line.apply(press) {
                    continue;
                }
                if let Some(promotion) = trainer.input(&line.text(), screen) {
                    screen.tally.record(&promotion);
                    line.clear();
                }
            }
        }
    }
}
