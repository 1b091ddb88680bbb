use crate::commands::{CmdMessage, CmdResult, GeneratedTarget};
use crate::error::Result;
use crate::format;
use crate::generator::Generator;
use crate::model::Mode;
use rand::Rng;

pub fn run<R: Rng>(generator: &mut Generator<R>, mode: Mode, count: usize) -> Result<CmdResult> {
    let targets: Vec<GeneratedTarget> = (0..count)
        .map(|_| {
            let target = generator.generate(mode);
            let region = match mode {
                Mode::Phone => Some(generator.table().resolve_region(&target.digits).to_string()),
                Mode::Number | Mode::Birthday => None,
            };
            GeneratedTarget {
                display: format::display(mode, &target),
                target,
                region,
            }
        })
        .collect();

    let mut result = CmdResult::default().with_targets(targets);
    if count == 0 {
        result.add_message(CmdMessage::warning("Nothing to generate (count is 0)"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area_codes::{AreaCodeEntry, AreaCodeTable};

    #[test]
    fn generates_requested_count() {
        let mut g = Generator::seeded(AreaCodeTable::fallback(), 3);
        let result = run(&mut g, Mode::Number, 25).unwrap();
        assert_eq!(result.targets.len(), 25);
        assert!(result.messages.is_empty());
        for t in &result.targets {
            assert_eq!(t.display, t.target.digits);
            assert!(t.region.is_none());
        }
    }

    #[test]
    fn phone_targets_carry_region() {
        let table = AreaCodeTable::from_entries(vec![AreaCodeEntry::new("03", "Tokyo")]);
        let mut g = Generator::seeded(table, 3);
        let result = run(&mut g, Mode::Phone, 5).unwrap();
        for t in &result.targets {
            assert_eq!(t.region.as_deref(), Some("Tokyo"));
            assert_eq!(t.display.len(), 12);
            assert!(t.display.starts_with("03-"));
        }
    }

    #[test]
    fn birthday_targets_are_spaced() {
        let mut g = Generator::seeded(AreaCodeTable::fallback(), 3).with_years(1999, 1999);
        let result = run(&mut g, Mode::Birthday, 3).unwrap();
        for t in &result.targets {
            assert!(t.display.starts_with("1999 "));
            assert_eq!(format::digits_only(&t.display), t.target.digits);
        }
    }

    #[test]
    fn zero_count_warns() {
        let mut g = Generator::seeded(AreaCodeTable::fallback(), 3);
        let result = run(&mut g, Mode::Number, 0).unwrap();
        assert!(result.targets.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
