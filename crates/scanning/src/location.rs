use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

static SHELF_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z])-(\d+)-(\d+)$").unwrap());

/// A parsed three-part shelf code (`A-1-5`: zone, row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShelfCode {
    pub zone: char,
    pub row: u32,
    pub col: u32,
}

impl ShelfCode {
    /// Parse a shelf code, `None` for anything that is not three-part.
    pub fn parse(code: &str) -> Option<Self> {
        let captures = SHELF_CODE.captures(code)?;
        Some(Self {
            zone: captures.get(1)?.as_str().chars().next()?,
            row: captures.get(2)?.as_str().parse().ok()?,
            col: captures.get(3)?.as_str().parse().ok()?,
        })
    }
}

/// Ordering for walk-order lists: zone, then row, then column.
///
/// Codes that do not parse sort after parseable ones, lexically among
/// themselves, so a picking list stays stable when legacy free-text
/// locations are mixed in.
pub fn compare_locations(a: &str, b: &str) -> Ordering {
    match (ShelfCode::parse(a), ShelfCode::parse(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
