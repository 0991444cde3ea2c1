//! Conversion between human-readable size strings and byte counts.
//!
//! Accepts `"<number>[.<fraction>][ ][unit][i]B"`; a unit letter without the
//! `i` infix is decimal (powers of 1000), with it binary (powers of 1024).

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static SIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9]+)(?:\.([0-9]+))?\s*(?:([KkMmGgTtPpEeZzYy])(i)?)?[Bb]?\s*$")
        .expect("size pattern compiles")
});

const BINARY_UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

#[derive(Error, Debug, PartialEq)]
pub enum UnitsError {
    #[error("could not parse {0:?} as a number with units")]
    Unparseable(String),
}

/// Parses a size string like `"1.5GiB"`, `"512 MB"` or `"1024"` into bytes.
pub fn parse(input: &str) -> Result<f64, UnitsError> {
    let caps = SIZE_RE
        .captures(input)
        .ok_or_else(|| UnitsError::Unparseable(input.to_string()))?;

    let num: f64 = match caps.get(2) {
        Some(frac) => format!("{}.{}", &caps[1], frac.as_str()).parse(),
        None => caps[1].parse(),
    }
    .map_err(|_| UnitsError::Unparseable(input.to_string()))?;

    let base = if caps.get(4).is_some() { 1024.0 } else { 1000.0 };
    let unit = caps.get(3).and_then(|m| m.as_str().chars().next());

    Ok(num * multiplier(base, unit))
}

fn multiplier(base: f64, unit: Option<char>) -> f64 {
    let exponent = match unit.map(|u| u.to_ascii_lowercase()) {
        None => 0,
        Some('k') => 1,
        Some('m') => 2,
        Some('g') => 3,
        Some('t') => 4,
        Some('p') => 5,
        Some('e') => 6,
        Some('z') => 7,
        Some('y') => 8,
        Some(_) => 0, // not reachable: the pattern restricts the unit set
    };
    base.powi(exponent)
}

/// Formats a byte count with binary prefixes and one decimal place.
pub fn format(bytes: f64) -> String {
    let mut num = bytes;
    for unit in &BINARY_UNITS[..BINARY_UNITS.len() - 1] {
        if num < 1024.0 {
            return format!("{num:.1} {unit}");
        }
        num /= 1024.0;
    }
    format!("{:.1} {}", num, BINARY_UNITS[BINARY_UNITS.len() - 1])
}
