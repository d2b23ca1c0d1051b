//! Recipe entity and its derived display values.

use serde::{Deserialize, Serialize};

/// A recipe as delivered by the recipe endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Energy, e.g. `"458 kcal"`.
    pub calories: String,
    /// Carbohydrates, e.g. `"29 g"`.
    pub carbos: String,
    /// Long description shown when a row is expanded.
    pub description: String,
    /// Difficulty level, 0 to 3.
    pub difficulty: i32,
    /// Fats, e.g. `"6 g"`.
    pub fats: String,
    /// Subtitle shown under the name.
    pub headline: String,
    /// Unique recipe id.
    pub id: String,
    /// Full-size image URL.
    pub image: String,
    /// Recipe name.
    pub name: String,
    /// Proteins, e.g. `"29 g"`.
    pub proteins: String,
    /// Thumbnail image URL.
    pub thumb: String,
    /// Preparation time as an ISO-8601 duration, e.g. `"PT35M"`.
    pub time: String,
}

impl Recipe {
    /// Returns the difficulty as a labelled level.
    #[must_use]
    pub const fn difficulty_level(&self) -> Difficulty {
        Difficulty::from_level(self.difficulty)
    }

    /// Returns the preparation time in whole minutes, if `time` parses.
    #[must_use]
    pub fn preparation_minutes(&self) -> Option<i64> {
        parse_duration_minutes(&self.time)
    }
}

/// Difficulty label derived from the numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Level 0.
    Easy,
    /// Level 1.
    Medium,
    /// Level 2.
    Hard,
    /// Level 3.
    Extreme,
    /// Any other value.
    Unknown,
}

impl Difficulty {
    /// Maps a numeric level to its label.
    #[must_use]
    pub const fn from_level(level: i32) -> Self {
        match level {
            0 => Self::Easy,
            1 => Self::Medium,
            2 => Self::Hard,
            3 => Self::Extreme,
            _ => Self::Unknown,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const NANOS_PER_MINUTE: u128 = 60_000_000_000;

const ISO_DATE_UNITS: &[(&str, u128)] = &[("D", 86_400_000_000_000)];
const ISO_TIME_UNITS: &[(&str, u128)] = &[
    ("H", 3_600_000_000_000),
    ("M", 60_000_000_000),
    ("S", 1_000_000_000),
];
const SHORT_UNITS: &[(&str, u128)] = &[
    ("d", 86_400_000_000_000),
    ("h", 3_600_000_000_000),
    ("m", 60_000_000_000),
    ("s", 1_000_000_000),
    ("ms", 1_000_000),
    ("us", 1_000),
    ("ns", 1),
];

/// Parses a duration into whole minutes, truncated toward zero.
///
/// Accepts ISO-8601 (`PT1H5M`, `P1DT2H`, `PT1.5H`) and the short
/// form (`1h 5m`, `2m 30.5s`), either one optionally signed (`-PT5M`,
/// `-(1h 5m)`). Units must appear largest first and only the last one
/// may carry a fraction. Returns `None` for anything else.
#[must_use]
pub fn parse_duration_minutes(value: &str) -> Option<i64> {
    let (negative, body) = if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else {
        (false, value.strip_prefix('+').unwrap_or(value))
    };

    let nanos = if let Some(iso) = body.strip_prefix('P') {
        iso_nanos(iso)?
    } else {
        let body = if negative {
            body.strip_prefix('(')
                .and_then(|b| b.strip_suffix(')'))
                .unwrap_or(body)
        } else {
            body
        };
        short_nanos(body)?
    };

    let minutes = i64::try_from(nanos / NANOS_PER_MINUTE).ok()?;
    Some(if negative { -minutes } else { minutes })
}

fn iso_nanos(iso: &str) -> Option<u128> {
    let (date, time) = match iso.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (iso, None),
    };
    if time == Some("") {
        return None;
    }

    let mut components = iso_components(date, ISO_DATE_UNITS)?;
    if let Some(time) = time {
        components.extend(iso_components(time, ISO_TIME_UNITS)?);
    }
    sum_components(&components)
}

fn iso_components<'a>(part: &'a str, units: &[(&str, u128)]) -> Option<Vec<(&'a str, u128)>> {
    let mut components = Vec::new();
    let mut start = 0;

    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        let unit = lookup_unit(units, &part[i..i + c.len_utf8()])?;
        components.push((&part[start..i], unit));
        start = i + c.len_utf8();
    }

    (start == part.len()).then_some(components)
}

fn short_nanos(body: &str) -> Option<u128> {
    let components = body
        .split_whitespace()
        .map(|token| {
            let split = token.find(|c: char| c.is_ascii_alphabetic())?;
            let unit = lookup_unit(SHORT_UNITS, &token[split..])?;
            Some((&token[..split], unit))
        })
        .collect::<Option<Vec<_>>>()?;
    sum_components(&components)
}

fn lookup_unit(units: &[(&str, u128)], name: &str) -> Option<u128> {
    units
        .iter()
        .find_map(|&(unit, nanos)| (unit == name).then_some(nanos))
}

fn sum_components(components: &[(&str, u128)]) -> Option<u128> {
    if components.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    let mut previous_unit = u128::MAX;

    for (index, &(number, unit)) in components.iter().enumerate() {
        if unit >= previous_unit {
            return None;
        }
        previous_unit = unit;

        let is_last = index + 1 == components.len();
        total = total.checked_add(component_nanos(number, unit, is_last)?)?;
    }

    Some(total)
}

fn component_nanos(number: &str, unit: u128, allow_fraction: bool) -> Option<u128> {
    let (whole, fraction) = match number.split_once('.') {
        Some(_) if !allow_fraction => return None,
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if number.contains('.') && (fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let mut nanos = whole.parse::<u128>().ok()?.checked_mul(unit)?;
    // Nine digits already resolve below one nanosecond for every unit.
    let digits = &fraction[..fraction.len().min(9)];
    if !digits.is_empty() {
        let scale = 10u128.pow(u32::try_from(digits.len()).ok()?);
        nanos = nanos.checked_add(digits.parse::<u128>().ok()? * unit / scale)?;
    }
    Some(nanos)
}
