//! # Presentation Surface
//!
//! The session never draws anything itself. After every transition it pushes the new
//! texts through the [`Surface`] hooks, synchronously, and the UI decides how to show
//! them. [`ScreenBuffer`] is the in-memory implementation: it simply records the latest
//! value of every slot, which is what the terminal client redraws from and what tests
//! assert against.

use crate::history::History;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Select,
    Typing,
}

pub trait Surface {
    fn show_screen(&mut self, screen: Screen);
    fn set_mode_label(&mut self, label: &str);
    fn set_now_value(&mut self, text: &str);
    fn set_next_value(&mut self, text: &str);
    fn set_input_display(&mut self, text: &str);
    /// `None` hides the note; it is only shown in phone mode.
    fn set_region_note(&mut self, note: Option<&str>);
    fn append_log(&mut self, entry: &str);
    fn clear_log(&mut self);
}

#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    pub screen: Screen,
    pub mode_label: String,
    pub now_value: String,
    pub next_value: String,
    pub input_display: String,
    pub region_note: Option<String>,
    pub log: History,
}

impl ScreenBuffer {
    pub fn new(log_limit: usize) -> Self {
        Self {
            screen: Screen::Select,
            mode_label: String::new(),
            now_value: String::new(),
            next_value: String::new(),
            input_display: String::new(),
            region_note: None,
            log: History::new(log_limit),
        }
    }
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self {
            log: History::default(),
            ..Self::new(1)
        }
    }
}

impl Surface for ScreenBuffer {
    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn set_mode_label(&mut self, label: &str) {
        self.mode_label = label.to_string();
    }

    fn set_now_value(&mut self, text: &str) {
        self.now_value = text.to_string();
    }

    fn set_next_value(&mut self, text: &str) {
        self.next_value = text.to_string();
    }

    fn set_input_display(&mut self, text: &str) {
        self.input_display = text.to_string();
    }

    fn set_region_note(&mut self, note: Option<&str>) {
        self.region_note = note.map(str::to_string);
    }

    fn append_log(&mut self, entry: &str) {
        self.log.push(entry);
    }

    fn clear_log(&mut self) {
        self.log.clear();
    }
}
