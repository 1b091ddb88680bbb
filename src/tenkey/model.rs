use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total length of a generated landline number.
pub const PHONE_LEN: usize = 10;

/// Length of the subscriber part that closes every landline number.
pub const SUBSCRIBER_LEN: usize = 4;

/// Longest area code that still leaves room for the subscriber part.
pub const MAX_AREA_CODE_LEN: usize = PHONE_LEN - SUBSCRIBER_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Number,
    Birthday,
    Phone,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Number, Mode::Birthday, Mode::Phone]
    }

    /// Human label shown above the targets.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Number => "無限数値タイピング",
            Mode::Birthday => "生年月日タイピング",
            Mode::Phone => "電話番号タイピング",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Number => "number",
            Mode::Birthday => "birthday",
            Mode::Phone => "phone",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" | "n" => Ok(Mode::Number),
            "birthday" | "date" | "b" => Ok(Mode::Birthday),
            "phone" | "p" => Ok(Mode::Phone),
            other => Err(format!(
                "unknown mode '{}' (expected number, birthday or phone)",
                other
            )),
        }
    }
}

/// A value the user is asked to type.
///
/// `area_code_len` is only non-zero for phone targets, where it marks the
/// boundary used both for hyphenation and for region lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub digits: String,
    pub area_code_len: usize,
}

impl Target {
    pub fn plain(digits: impl Into<String>) -> Self {
        Self {
            digits: digits.into(),
            area_code_len: 0,
        }
    }

    pub fn phone(digits: impl Into<String>, area_code_len: usize) -> Self {
        Self {
            digits: digits.into(),
            area_code_len,
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn area_code(&self) -> &str {
        &self.digits[..self.area_code_len.min(self.digits.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_names_and_shorthands() {
        assert_eq!("number".parse::<Mode>(), Ok(Mode::Number));
        assert_eq!("Birthday".parse::<Mode>(), Ok(Mode::Birthday));
        assert_eq!("p".parse::<Mode>(), Ok(Mode::Phone));
        assert!("fax".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_display_matches_parse() {
        for mode in Mode::all() {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(*mode));
        }
    }

    #[test]
    fn labels_are_distinct_and_in_japanese() {
        assert_eq!(Mode::Phone.label(), "電話番号タイピング");
        let labels: std::collections::HashSet<_> = Mode::all().iter().map(Mode::label).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|l| !l.is_ascii()));
    }

    #[test]
    fn area_code_slices_prefix() {
        let target = Target::phone("0312345678", 2);
        assert_eq!(target.area_code(), "03");
        assert_eq!(Target::plain("123").area_code(), "");
    }
}
