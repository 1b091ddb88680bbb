//! # Area-Code Table
//!
//! Japanese landline area codes are variable-length prefixes (2 to 5 digits), and a
//! shorter code can be a prefix of a longer one (`03` vs `0399`). Lookups therefore scan
//! the codes longest-first and stop at the first prefix match.
//!
//! ## Source Format
//!
//! The table is read from a JSON array:
//!
//! ```json
//! [
//!   { "code": "03", "areaName": "東京都（23区）" },
//!   { "code": "0422", "note": "武蔵野・三鷹" }
//! ]
//! ```
//!
//! The region name is `areaName`, falling back to `note`, falling back to
//! [`UNKNOWN_REGION`]. Codes may be given as strings or numbers.
//!
//! ## Failing Open
//!
//! Loading never fails from the caller's point of view: a missing, unreadable or
//! malformed source (or one without a single usable entry) yields the built-in
//! [`AreaCodeTable::fallback`] table, so phone generation always has a code to pick.
//! A missing file is the usual case outside a checkout and is only logged at debug
//! level; a file that exists but can't be used is logged as a warning.

use crate::error::{Result, TenkeyError};
use crate::model::MAX_AREA_CODE_LEN;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Region name used when no code matches (or an entry carries no name).
pub const UNKNOWN_REGION: &str = "地域不明";

const FALLBACK_ENTRIES: [(&str, &str); 3] = [
    ("03", "東京都（23区）"),
    ("06", "大阪府（大阪市）"),
    ("04992", "東京都（小笠原諸島）"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCodeEntry {
    pub code: String,
    pub name: String,
}

impl AreaCodeEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Text(String),
    Number(u64),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    code: RawCode,
    #[serde(default)]
    area_name: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

impl From<RawEntry> for AreaCodeEntry {
    fn from(raw: RawEntry) -> Self {
        let code = match raw.code {
            RawCode::Text(s) => s.trim().to_string(),
            RawCode::Number(n) => n.to_string(),
        };
        let name = [raw.area_name, raw.note]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());
        AreaCodeEntry { code, name }
    }
}

#[derive(Debug, Clone)]
pub struct AreaCodeTable {
    entries: Vec<AreaCodeEntry>,
    // Indexes into `entries`, longest code first.
    by_length: Vec<usize>,
    fallback: bool,
}

impl AreaCodeTable {
    /// The built-in table used whenever the real source can't be used.
    pub fn fallback() -> Self {
        let entries = FALLBACK_ENTRIES
            .iter()
            .map(|(code, name)| AreaCodeEntry::new(*code, *name))
            .collect();
        let mut table = Self::build(entries);
        table.fallback = true;
        table
    }

    /// Builds a table from already-parsed entries.
    ///
    /// Duplicate codes keep their first occurrence. Codes that are empty, contain
    /// anything but digits, or are too long to fit a landline number are skipped.
    /// Returns the fallback table when nothing usable remains.
    pub fn from_entries(entries: impl IntoIterator<Item = AreaCodeEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for entry in entries {
            if !is_valid_code(&entry.code) {
                tracing::warn!(code = %entry.code, "skipping unusable area code");
                continue;
            }
            if seen.insert(entry.code.clone()) {
                kept.push(entry);
            }
        }

        if kept.is_empty() {
            tracing::warn!("no usable area codes, using built-in table");
            return Self::fallback();
        }
        Self::build(kept)
    }

    /// Parses the JSON source. Unlike [`AreaCodeTable::load`] this reports failures.
    pub fn parse(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(TenkeyError::AreaCodes("area code list is empty".into()));
        }
        let table = Self::from_entries(raw.into_iter().map(AreaCodeEntry::from));
        if table.is_fallback() {
            return Err(TenkeyError::AreaCodes(
                "area code list has no usable entries".into(),
            ));
        }
        Ok(table)
    }

    /// Reads and parses the source at `path`, falling back to the built-in table on
    /// any failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let loaded = fs::read_to_string(path)
            .map_err(TenkeyError::Io)
            .and_then(|content| Self::parse(&content));

        match loaded {
            Ok(table) => {
                tracing::debug!(path = %path.display(), codes = table.len(), "loaded area codes");
                table
            }
            Err(TenkeyError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no area code file, using built-in table");
                Self::fallback()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using built-in area codes");
                Self::fallback()
            }
        }
    }

    fn build(entries: Vec<AreaCodeEntry>) -> Self {
        let mut by_length: Vec<usize> = (0..entries.len()).collect();
        // Stable, so equal-length codes keep their load order.
        by_length.sort_by(|a, b| entries[*b].code.len().cmp(&entries[*a].code.len()));
        Self {
            entries,
            by_length,
            fallback: false,
        }
    }

    /// Returns the region of the longest known code that prefixes `phone_digits`.
    pub fn resolve_region(&self, phone_digits: &str) -> &str {
        self.find(phone_digits)
            .map(|entry| entry.name.as_str())
            .unwrap_or(UNKNOWN_REGION)
    }

    /// Returns the entry of the longest known code that prefixes `phone_digits`.
    pub fn find(&self, phone_digits: &str) -> Option<&AreaCodeEntry> {
        self.by_length
            .iter()
            .map(|i| &self.entries[*i])
            .find(|entry| phone_digits.starts_with(entry.code.as_str()))
    }

    /// Picks a code uniformly from the deduplicated code set.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.entries
            .choose(rng)
            .map(|e| e.code.as_str())
            .unwrap_or(FALLBACK_ENTRIES[0].0)
    }

    pub fn entries(&self) -> &[AreaCodeEntry] {
        &self.entries
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when this is the built-in table rather than a loaded source.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl Default for AreaCodeTable {
    fn default() -> Self {
        Self::fallback()
    }
}

fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_AREA_CODE_LEN
        && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table(entries: &[(&str, &str)]) -> AreaCodeTable {
        AreaCodeTable::from_entries(entries.iter().map(|(c, n)| AreaCodeEntry::new(*c, *n)))
    }

    #[test]
    fn longest_prefix_wins() {
        let t = table(&[("03", "Tokyo"), ("0399", "Somewhere")]);
        assert_eq!(t.resolve_region("0399123456"), "Somewhere");
        assert_eq!(t.resolve_region("0312345678"), "Tokyo");
    }

    #[test]
    fn longest_prefix_wins_regardless_of_load_order() {
        let t = table(&[("0399", "Somewhere"), ("03", "Tokyo")]);
        assert_eq!(t.resolve_region("0399123456"), "Somewhere");
    }

    #[test]
    fn unknown_prefix_resolves_to_sentinel() {
        let t = table(&[("03", "Tokyo")]);
        assert_eq!(t.resolve_region("0612345678"), UNKNOWN_REGION);
    }

    #[test]
    fn duplicates_keep_first_entry() {
        let t = table(&[("03", "Tokyo"), ("03", "Edo")]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.resolve_region("0312345678"), "Tokyo");
    }

    #[test]
    fn invalid_codes_are_skipped() {
        let t = table(&[("03", "Tokyo"), ("", "Empty"), ("0a", "Letters"), ("0123456", "Long")]);
        assert_eq!(t.entries(), &[AreaCodeEntry::new("03", "Tokyo")]);
        assert!(!t.is_fallback());
    }

    #[test]
    fn empty_entries_fall_back() {
        let t = AreaCodeTable::from_entries(Vec::new());
        assert!(t.is_fallback());
        assert!(t.contains("03"));
        assert!(t.contains("06"));
        assert!(t.contains("04992"));
        assert_eq!(t.resolve_region("0499212345"), "東京都（小笠原諸島）");
    }

    #[test]
    fn parse_reads_area_name_then_note() {
        let json = r#"[
            {"code": "03", "areaName": "Tokyo"},
            {"code": "0422", "note": "Musashino"},
            {"code": "011"},
            {"code": "092", "areaName": "", "note": "Fukuoka"}
        ]"#;
        let t = AreaCodeTable::parse(json).unwrap();
        assert_eq!(t.resolve_region("0312345678"), "Tokyo");
        assert_eq!(t.resolve_region("0422123456"), "Musashino");
        assert_eq!(t.resolve_region("0111234567"), UNKNOWN_REGION);
        assert_eq!(t.resolve_region("0921234567"), "Fukuoka");
    }

    #[test]
    fn parse_accepts_numeric_codes() {
        let t = AreaCodeTable::parse(r#"[{"code": 99, "areaName": "Numeric"}]"#).unwrap();
        assert!(t.contains("99"));
    }

    #[test]
    fn parse_rejects_non_arrays_and_empty_lists() {
        assert!(AreaCodeTable::parse(r#"{"code": "03"}"#).is_err());
        assert!(matches!(
            AreaCodeTable::parse("[]"),
            Err(TenkeyError::AreaCodes(_))
        ));
        assert!(matches!(
            AreaCodeTable::parse(r#"[{"code": "abc"}]"#),
            Err(TenkeyError::AreaCodes(_))
        ));
        assert!(AreaCodeTable::parse("not json").is_err());
    }

    #[test]
    fn load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let t = AreaCodeTable::load(dir.path().join("missing.json"));
        assert!(t.is_fallback());
    }

    #[test]
    fn load_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"code\": ").unwrap();
        let t = AreaCodeTable::load(file.path());
        assert!(t.is_fallback());
    }

    #[test]
    fn load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"code":"03","areaName":"Tokyo"}}]"#).unwrap();
        let t = AreaCodeTable::load(file.path());
        assert!(!t.is_fallback());
        assert_eq!(t.resolve_region("0312345678"), "Tokyo");
    }
}
