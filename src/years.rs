use chrono::Datelike;
use std::ops::RangeInclusive;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Inclusive span of years appended to candidates, always within
/// [`MIN_YEAR`]..=[`MAX_YEAR`] with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        Self {
            start: start.clamp(MIN_YEAR, MAX_YEAR),
            end: end.clamp(MIN_YEAR, MAX_YEAR),
        }
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl From<YearRange> for (i32, i32) {
    fn from(range: YearRange) -> Self {
        (range.start, range.end)
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Parses `"1990"`, `"1990-2025"` or `"1990:2025"`.
pub fn parse_year_range(text: &str) -> Option<YearRange> {
    parse_year_range_at(text, current_year())
}

/// Like [`parse_year_range`], with an explicit year for open-ended input.
pub fn parse_year_range_at(text: &str, current_year: i32) -> Option<YearRange> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (start, end) = match text.split_once('-').or_else(|| text.split_once(':')) {
        Some((start, end)) => (start, Some(end)),
        None => (text, None),
    };

    let start = parse_year(start)?;
    let end = end.and_then(parse_year).unwrap_or(current_year);

    Some(YearRange::new(start, end))
}

fn parse_year(text: &str) -> Option<i32> {
    let value: i64 = text.trim().parse().ok()?;
    Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;

    fn range(start: i32, end: i32) -> Option<YearRange> {
        Some(YearRange { start, end })
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_year_range_at("", NOW), None);
        assert_eq!(parse_year_range_at("   \t", NOW), None);
        assert_eq!(parse_year_range(""), None);
    }

    #[test]
    fn test_hyphen_and_colon() {
        assert_eq!(parse_year_range_at("1990-2025", NOW), range(1990, 2025));
        assert_eq!(parse_year_range_at("1990:2025", NOW), range(1990, 2025));
        assert_eq!(parse_year_range_at(" 1990 - 2025 ", NOW), range(1990, 2025));
    }

    #[test]
    fn test_swapped() {
        assert_eq!(parse_year_range_at("2030-1990", NOW), range(1990, 2030));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(parse_year_range_at("1800-1900", NOW), range(1900, 1900));
        assert_eq!(parse_year_range_at("2000-2500", NOW), range(2000, 2100));
        assert_eq!(parse_year_range_at("1700-1800", NOW), range(1900, 1900));
    }

    #[test]
    fn test_single_year_is_open_ended() {
        assert_eq!(parse_year_range_at("2020", NOW), range(2020, NOW));
        assert_eq!(parse_year_range_at("2030", NOW), range(NOW, 2030));
    }

    #[test]
    fn test_bad_start_fails() {
        assert_eq!(parse_year_range_at("abc", NOW), None);
        assert_eq!(parse_year_range_at("abc-2000", NOW), None);
        assert_eq!(parse_year_range_at("-2000", NOW), None);
    }

    #[test]
    fn test_bad_end_defaults_to_current_year() {
        assert_eq!(parse_year_range_at("2000-xyz", NOW), range(2000, NOW));
        assert_eq!(parse_year_range_at("2000-", NOW), range(2000, NOW));
        assert_eq!(parse_year_range_at("2000:", NOW), range(2000, NOW));
    }

    #[test]
    fn test_hyphen_tried_first() {
        assert_eq!(parse_year_range_at("1990-2000:2010", NOW), range(1990, NOW));
    }

    #[test]
    fn test_years_iterates_inclusive() {
        let r = YearRange::new(1999, 2001);
        assert_eq!(r.years().collect::<Vec<_>>(), vec![1999, 2000, 2001]);
        assert_eq!(<(i32, i32)>::from(r), (1999, 2001));
    }
}
