//! Display formatting for targets and in-progress input.
//!
//! All functions are pure; stripping the separators they insert always gives the raw
//! digits back.

use crate::model::{Mode, PHONE_LEN, SUBSCRIBER_LEN, Target};

/// Position of the hyphen in front of the subscriber part.
const SUBSCRIBER_START: usize = PHONE_LEN - SUBSCRIBER_LEN;

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `YYYYMMDD` → `YYYY MM DD`. Anything that isn't exactly 8 digits is returned as is.
pub fn birthday(digits: &str) -> String {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    format!("{} {} {}", &digits[..4], &digits[4..6], &digits[6..])
}

/// Full phone format: `area-middle-subscriber`.
///
/// Input without room for a middle part is formatted like partial input.
pub fn phone(digits: &str, area_code_len: usize) -> String {
    if area_code_len == 0 || digits.len() <= area_code_len + SUBSCRIBER_LEN {
        return phone_partial(digits, area_code_len);
    }
    let subscriber_start = digits.len() - SUBSCRIBER_LEN;
    format!(
        "{}-{}-{}",
        &digits[..area_code_len],
        &digits[area_code_len..subscriber_start],
        &digits[subscriber_start..]
    )
}

/// Live phone format for input that is still being typed.
///
/// A hyphen goes in front of the digit at the area-code boundary and in front of the
/// subscriber part, as soon as the input reaches those positions.
pub fn phone_partial(raw: &str, area_code_len: usize) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (i == area_code_len || i == SUBSCRIBER_START) {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// How a target is shown in the now/next slots.
pub fn display(mode: Mode, target: &Target) -> String {
    match mode {
        Mode::Number => target.digits.clone(),
        Mode::Birthday => birthday(&target.digits),
        Mode::Phone => phone(&target.digits, target.area_code_len),
    }
}

/// How the user's digits are echoed while typing.
pub fn input_display(mode: Mode, raw: &str, area_code_len: usize) -> String {
    match mode {
        Mode::Phone => phone_partial(raw, area_code_len),
        Mode::Number | Mode::Birthday => raw.to_string(),
    }
}

/// How a completed entry is written to the history log.
pub fn history_entry(mode: Mode, typed: &str, area_code_len: usize) -> String {
    match mode {
        Mode::Number => typed.to_string(),
        Mode::Birthday => birthday(typed),
        Mode::Phone => phone_partial(typed, area_code_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area_codes::AreaCodeTable;
    use crate::generator::Generator;

    #[test]
    fn birthday_spaces_eight_digits() {
        assert_eq!(birthday("19991231"), "1999 12 31");
    }

    #[test]
    fn birthday_leaves_other_lengths_alone() {
        assert_eq!(birthday("1999123"), "1999123");
        assert_eq!(birthday("199912311"), "199912311");
        assert_eq!(birthday(""), "");
    }

    #[test]
    fn phone_full_format() {
        assert_eq!(phone("0312345678", 2), "03-1234-5678");
        assert_eq!(phone("0422123456", 4), "0422-12-3456");
        assert_eq!(phone("0499212345", 5), "04992-1-2345");
    }

    #[test]
    fn phone_partial_inserts_hyphens_as_typed() {
        assert_eq!(phone_partial("", 2), "");
        assert_eq!(phone_partial("0", 2), "0");
        assert_eq!(phone_partial("03", 2), "03");
        assert_eq!(phone_partial("031", 2), "03-1");
        assert_eq!(phone_partial("031234", 2), "03-1234");
        assert_eq!(phone_partial("0312345", 2), "03-1234-5");
        assert_eq!(phone_partial("0312345678", 2), "03-1234-5678");
    }

    #[test]
    fn phone_partial_matches_full_when_complete() {
        for (digits, len) in [("0312345678", 2), ("0422123456", 4), ("0499212345", 5)] {
            assert_eq!(phone_partial(digits, len), phone(digits, len));
        }
    }

    #[test]
    fn phone_partial_merges_coinciding_boundaries() {
        assert_eq!(phone_partial("0123456789", 6), "012345-6789");
    }

    #[test]
    fn short_phone_falls_back_to_partial() {
        assert_eq!(phone("031", 2), "03-1");
        assert_eq!(phone("031234", 2), "03-1234");
    }

    #[test]
    fn display_strips_back_to_digits() {
        let cases = [
            (Mode::Birthday, Target::plain("20240229")),
            (Mode::Phone, Target::phone("0312345678", 2)),
            (Mode::Phone, Target::phone("0499212345", 5)),
            (Mode::Number, Target::plain("90210")),
        ];
        for (mode, target) in cases {
            assert_eq!(digits_only(&display(mode, &target)), target.digits);
        }
    }

    #[test]
    fn generated_targets_strip_back_to_digits() {
        let table = AreaCodeTable::parse(include_str!("../../data/area-codes.json")).unwrap();
        let mut generator = Generator::seeded(table, 2024);
        for _ in 0..500 {
            for mode in [Mode::Birthday, Mode::Phone] {
                let target = generator.generate(mode);
                let shown = display(mode, &target);
                assert_eq!(digits_only(&shown), target.digits, "{}", shown);
                let typed = input_display(mode, &target.digits, target.area_code_len);
                assert_eq!(digits_only(&typed), target.digits, "{}", typed);
            }
        }
    }

    #[test]
    fn input_display_only_formats_phone() {
        assert_eq!(input_display(Mode::Birthday, "1999", 0), "1999");
        assert_eq!(input_display(Mode::Number, "12345", 0), "12345");
        assert_eq!(input_display(Mode::Phone, "03123", 2), "03-123");
    }

    #[test]
    fn history_entry_per_mode() {
        assert_eq!(history_entry(Mode::Birthday, "19991231", 0), "1999 12 31");
        assert_eq!(history_entry(Mode::Phone, "0312345678", 2), "03-1234-5678");
        assert_eq!(history_entry(Mode::Number, "42", 0), "42");
    }

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("03-1234 abc 5678"), "0312345678");
        assert_eq!(digits_only("１２３"), "");
    }
}
