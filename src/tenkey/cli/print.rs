use colored::Colorize;
use tenkey::api::{CmdMessage, GeneratedTarget, MessageLevel, RegionMatch};
use tenkey::area_codes::AreaCodeEntry;
use tenkey::config::{KEYS, TenkeyConfig};
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_targets(targets: &[GeneratedTarget]) {
    let width = targets
        .iter()
        .map(|t| t.display.width())
        .max()
        .unwrap_or(0);

    for t in targets {
        match &t.region {
            Some(region) => println!(
                "{}{}  {}",
                t.display,
                " ".repeat(width - t.display.width()),
                region.dimmed()
            ),
            None => println!("{}", t.display),
        }
    }
}

pub(super) fn print_region(region: &RegionMatch) {
    let code = region.code.as_deref().unwrap_or("-");
    println!(
        "{}  {}  {}",
        region.display.bold(),
        code.yellow(),
        region.region
    );
}

pub(super) fn print_area_codes(entries: &[AreaCodeEntry]) {
    if entries.is_empty() {
        println!("No area codes loaded.");
        return;
    }
    let width = entries.iter().map(|e| e.code.width()).max().unwrap_or(0);
    for entry in entries {
        println!(
            "{}{}  {}",
            entry.code.yellow(),
            " ".repeat(width - entry.code.width()),
            entry.name
        );
    }
}

pub(super) fn print_config(config: &TenkeyConfig) {
    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        let value = if value.is_empty() {
            "(unset)".dimmed().to_string()
        } else {
            value
        };
        println!("{} = {}", key, value);
    }
}
