//! Random target generation for the three practice modes.
//!
//! The free functions take any [`Rng`] so they can be driven by a seeded generator in
//! tests; [`Generator`] bundles an RNG with the area-code table and year bounds a
//! session needs.

use crate::area_codes::AreaCodeTable;
use crate::model::{Mode, PHONE_LEN, SUBSCRIBER_LEN, Target};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const DEFAULT_YEAR_MIN: i32 = 1900;

/// Fixed ceiling for birthday years. Deliberately not derived from the clock.
pub const DEFAULT_YEAR_MAX: i32 = 2026;

pub const MAX_NUMBER_LEN: usize = 12;

fn digit<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u8>) -> char {
    char::from(b'0' + rng.random_range(range))
}

/// A number of 1 to 12 digits with no leading zero (a lone `0` is allowed).
pub fn number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(1..=MAX_NUMBER_LEN);
    (0..len)
        .map(|i| {
            if i == 0 && len > 1 {
                digit(rng, 1..=9)
            } else {
                digit(rng, 0..=9)
            }
        })
        .collect()
}

/// A real calendar date within `years`, encoded as `YYYYMMDD`.
///
/// Day and month are drawn independently and rejected until they form a valid date.
pub fn birthday<R: Rng + ?Sized>(rng: &mut R, years: &RangeInclusive<i32>) -> String {
    loop {
        let y = rng.random_range(years.clone());
        let m = rng.random_range(1..=12u32);
        let d = rng.random_range(1..=31u32);
        if NaiveDate::from_ymd_opt(y, m, d).is_some() {
            return format!("{:04}{:02}{:02}", y, m, d);
        }
    }
}

/// A 10-digit landline number starting with one of the table's codes.
pub fn phone<R: Rng + ?Sized>(rng: &mut R, table: &AreaCodeTable) -> Target {
    let code = table.pick(rng);
    let middle_len = PHONE_LEN - code.len() - SUBSCRIBER_LEN;

    let mut digits = String::with_capacity(PHONE_LEN);
    digits.push_str(code);
    for _ in 0..middle_len + SUBSCRIBER_LEN {
        digits.push(digit(rng, 0..=9));
    }
    Target::phone(digits, code.len())
}

pub struct Generator<R = StdRng> {
    rng: R,
    table: AreaCodeTable,
    years: RangeInclusive<i32>,
}

impl Generator<StdRng> {
    pub fn from_os_rng(table: AreaCodeTable) -> Self {
        Self::new(StdRng::from_os_rng(), table)
    }

    pub fn seeded(table: AreaCodeTable, seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), table)
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, table: AreaCodeTable) -> Self {
        Self {
            rng,
            table,
            years: DEFAULT_YEAR_MIN..=DEFAULT_YEAR_MAX,
        }
    }

    /// Sets the birthday year bounds. Reversed bounds are swapped.
    pub fn with_years(mut self, min: i32, max: i32) -> Self {
        self.years = if min <= max { min..=max } else { max..=min };
        self
    }

    pub fn generate(&mut self, mode: Mode) -> Target {
        match mode {
            Mode::Number => Target::plain(number(&mut self.rng)),
            Mode::Birthday => Target::plain(birthday(&mut self.rng, &self.years)),
            Mode::Phone => phone(&mut self.rng, &self.table),
        }
    }

    pub fn table(&self) -> &AreaCodeTable {
        &self.table
    }
}
