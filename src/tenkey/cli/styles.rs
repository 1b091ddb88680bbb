use console::Style;
use once_cell::sync::Lazy;

pub struct Palette {
    pub title: Style,
    pub label: Style,
    pub now: Style,
    pub next: Style,
    pub region: Style,
    pub input: Style,
    pub log: Style,
    pub hint: Style,
}

pub static PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    title: Style::new().bold().cyan(),
    label: Style::new().dim(),
    now: Style::new().bold().white(),
    next: Style::new().color256(245),
    region: Style::new().yellow(),
    input: Style::new().green().bold(),
    log: Style::new().color256(250),
    hint: Style::new().dim().italic(),
});
