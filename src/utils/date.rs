//! Front-matter date handling.
//!
//! Dates are written as `YYYY-MM-DD` in front matter, sorted as
//! zero-padded `YYYY/MM/DD` strings in navigation lists, and shown as
//! `D Mon, YYYY` on rendered pages.

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` front-matter date.
pub fn parse(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

/// Zero-padded `YYYY/MM/DD`, lexicographically sortable.
pub fn nav_key(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Human-readable `D Mon, YYYY` (day unpadded).
pub fn display(date: NaiveDate) -> String {
    date.format("%-d %b, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = parse("2024-03-01").unwrap();
        assert_eq!(nav_key(date), "2024/03/01");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(parse("2024-13-01").is_err());
        assert!(parse("2024-02-30").is_err());
        assert!(parse("yesterday").is_err());
        assert!(parse("2024/03/01").is_err());
    }

    #[test]
    fn test_nav_key_is_sortable() {
        let a = nav_key(parse("2023-06-15").unwrap());
        let b = nav_key(parse("2023-01-01").unwrap());
        let c = nav_key(parse("2022-12-31").unwrap());

        let mut keys = vec![c.clone(), a.clone(), b.clone()];
        keys.sort_by(|x, y| y.cmp(x));
        assert_eq!(keys, vec![a, b, c]);
    }

    #[test]
    fn test_display_unpadded_day() {
        assert_eq!(display(parse("2024-03-01").unwrap()), "1 Mar, 2024");
        assert_eq!(display(parse("2023-12-25").unwrap()), "25 Dec, 2023");
    }
}
