//! Moment-style date patterns (`MM/DD/YYYY`, `MMMM DD, YY`, ...).
//!
//! Patterns are split into tokens once per call. Formatting always writes
//! every token; parsing is forgiving about separators, accepts one or two
//! digits where two are expected and maps two-digit years with the same
//! pivot as moment (00-68 -> 20xx, 69-99 -> 19xx).

use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Tokens ordered longest first so that `MMMM` wins over `MM`.
const TOKENS: &[(&str, Token<'static>)] = &[
    ("YYYY", Token::Year4),
    ("MMMM", Token::MonthName),
    ("dddd", Token::WeekdayName),
    ("MMM", Token::MonthShort),
    ("ddd", Token::WeekdayShort),
    ("YY", Token::Year2),
    ("MM", Token::Month2),
    ("DD", Token::Day2),
    ("Do", Token::DayOrdinal),
    ("M", Token::Month),
    ("D", Token::Day),
];

const TWO_DIGIT_YEAR_PIVOT: i32 = 68;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Year4,
    Year2,
    MonthName,
    MonthShort,
    Month2,
    Month,
    Day2,
    Day,
    DayOrdinal,
    WeekdayName,
    WeekdayShort,
    Literal(&'a str),
}

impl Token<'_> {
    fn is_date_part(&self) -> bool {
        !matches!(
            self,
            Token::Literal(_) | Token::WeekdayName | Token::WeekdayShort
        )
    }
}

pub(crate) fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    let mut literal_start: Option<usize> = None;

    while !rest.is_empty() {
        let offset = pattern.len() - rest.len();
        let matched = TOKENS
            .iter()
            .find(|(text, _)| rest.starts_with(text))
            .map(|(text, token)| (text.len(), *token));

        match matched {
            Some((len, token)) => {
                if let Some(start) = literal_start.take() {
                    tokens.push(Token::Literal(&pattern[start..offset]));
                }
                tokens.push(token);
                rest = &rest[len..];
            }
            None => {
                literal_start.get_or_insert(offset);
                let ch_len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                rest = &rest[ch_len..];
            }
        }
    }

    if let Some(start) = literal_start {
        tokens.push(Token::Literal(&pattern[start..]));
    }
    tokens
}

/// True when the pattern renders at least one of year, month or day.
pub fn has_date_token(pattern: &str) -> bool {
    tokenize(pattern).iter().any(Token::is_date_part)
}

pub(crate) fn format(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    for token in tokenize(pattern) {
        match token {
            Token::Year4 => out.push_str(&format!("{:04}", date.year())),
            Token::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            Token::MonthName => out.push_str(month_name(date.month())),
            Token::MonthShort => out.push_str(&month_name(date.month())[..3]),
            Token::Month2 => out.push_str(&format!("{:02}", date.month())),
            Token::Month => out.push_str(&date.month().to_string()),
            Token::Day2 => out.push_str(&format!("{:02}", date.day())),
            Token::Day => out.push_str(&date.day().to_string()),
            Token::DayOrdinal => {
                out.push_str(&date.day().to_string());
                out.push_str(ordinal_suffix(date.day()));
            }
            Token::WeekdayName => out.push_str(weekday_name(date.weekday())),
            Token::WeekdayShort => out.push_str(&weekday_name(date.weekday())[..3]),
            Token::Literal(text) => out.push_str(text),
        }
    }
    out
}

#[derive(Default)]
struct Parsed {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
}

pub(crate) fn parse(text: &str, pattern: &str) -> Option<NaiveDate> {
    let mut input = text.trim();
    let mut parsed = Parsed::default();

    for token in tokenize(pattern) {
        match token {
            Token::Literal(literal) => {
                input = input.trim_start_matches(|c: char| !c.is_ascii_alphanumeric());
                let word: String = literal
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .collect();
                if !word.is_empty() {
                    input = strip_prefix_ignore_case(input, &word)?;
                }
            }
            Token::Year4 => {
                let (digits, value) = take_digits(&mut input, 4)?;
                parsed.year = Some(if digits == 2 {
                    expand_two_digit_year(value)
                } else {
                    value
                });
            }
            Token::Year2 => {
                let (_, value) = take_digits(&mut input, 2)?;
                parsed.year = Some(expand_two_digit_year(value));
            }
            Token::Month2 | Token::Month => {
                let (_, value) = take_digits(&mut input, 2)?;
                parsed.month = Some(u32::try_from(value).ok()?);
            }
            Token::MonthName | Token::MonthShort => {
                let word = take_word(&mut input)?;
                parsed.month = Some(month_from_name(word)?);
            }
            Token::Day2 | Token::Day => {
                let (_, value) = take_digits(&mut input, 2)?;
                parsed.day = Some(u32::try_from(value).ok()?);
            }
            Token::DayOrdinal => {
                let (_, value) = take_digits(&mut input, 2)?;
                parsed.day = Some(u32::try_from(value).ok()?);
                let suffix_len = input
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(input.len());
                input = &input[suffix_len..];
            }
            Token::WeekdayName | Token::WeekdayShort => {
                let word = take_word(&mut input)?;
                weekday_from_name(word)?;
            }
        }
    }

    if !input.trim().is_empty() {
        return None;
    }

    NaiveDate::from_ymd_opt(parsed.year?, parsed.month?, parsed.day?)
}

fn take_digits(input: &mut &str, max: usize) -> Option<(usize, i32)> {
    let len = input
        .char_indices()
        .take(max)
        .take_while(|(_, c)| c.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    let value = input[..len].parse().ok()?;
    *input = &input[len..];
    Some((len, value))
}

fn take_word<'a>(input: &mut &'a str) -> Option<&'a str> {
    let len = input
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    if len == 0 {
        return None;
    }
    let word = &input[..len];
    *input = &input[len..];
    Some(word)
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &input[prefix.len()..])
}

fn expand_two_digit_year(value: i32) -> i32 {
    if value > TWO_DIGIT_YEAR_PIVOT {
        1900 + value
    } else {
        2000 + value
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

fn month_from_name(word: &str) -> Option<u32> {
    if word.len() < 3 {
        return None;
    }
    (1..=12).find(|&m| {
        let name = month_name(m);
        name.eq_ignore_ascii_case(word) || name[..3].eq_ignore_ascii_case(word)
    })
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn weekday_from_name(word: &str) -> Option<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .find(|&day| {
        let name = weekday_name(day);
        name.eq_ignore_ascii_case(word) || name[..3].eq_ignore_ascii_case(word)
    })
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn tokenize_prefers_longest_token() {
        assert_eq!(
            tokenize("MMMM DD, YY"),
            vec![
                Token::MonthName,
                Token::Literal(" "),
                Token::Day2,
                Token::Literal(", "),
                Token::Year2,
            ]
        );
    }

    #[test]
    fn tokenize_keeps_unknown_letters_as_literal() {
        assert_eq!(
            tokenize("YYYY-MM-DDTxx"),
            vec![
                Token::Year4,
                Token::Literal("-"),
                Token::Month2,
                Token::Literal("-"),
                Token::Day2,
                Token::Literal("Txx"),
            ]
        );
    }

    #[test]
    fn format_display_pattern() {
        assert_eq!(format(d(2024, 3, 15), "MMMM DD, YY"), "March 15, 24");
        assert_eq!(format(d(2024, 3, 5), "MM/DD/YYYY"), "03/05/2024");
        assert_eq!(format(d(2024, 3, 5), "ddd, MMM Do"), "Tue, Mar 5th");
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn parse_canonical_full_year() {
        assert_eq!(parse("03/15/2024", "MM/DD/YYYY"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn parse_two_digit_year_uses_pivot() {
        assert_eq!(parse("03/15/24", "MM/DD/YYYY"), Some(d(2024, 3, 15)));
        assert_eq!(parse("03/15/68", "MM/DD/YYYY"), Some(d(2068, 3, 15)));
        assert_eq!(parse("03/15/69", "MM/DD/YYYY"), Some(d(1969, 3, 15)));
    }

    #[test]
    fn parse_full_year_keeps_short_years_other_than_two_digits() {
        assert_eq!(parse("3/15/5", "MM/DD/YYYY"), Some(d(5, 3, 15)));
        assert_eq!(parse("3/15/205", "MM/DD/YYYY"), Some(d(205, 3, 15)));
    }

    #[test]
    fn parse_accepts_single_digits_and_other_separators() {
        assert_eq!(parse("3-5-2024", "MM/DD/YYYY"), Some(d(2024, 3, 5)));
        assert_eq!(parse(" 3.5.2024 ", "MM/DD/YYYY"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn parse_month_names() {
        assert_eq!(parse("march 15, 24", "MMMM DD, YY"), Some(d(2024, 3, 15)));
        assert_eq!(parse("Mar 15, 24", "MMMM DD, YY"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn parse_rejects_garbage_and_partial_input() {
        assert_eq!(parse("hello", "MM/DD/YYYY"), None);
        assert_eq!(parse("", "MM/DD/YYYY"), None);
        assert_eq!(parse("03/15", "MM/DD/YYYY"), None);
        assert_eq!(parse("03/15/2024 extra", "MM/DD/YYYY"), None);
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert_eq!(parse("02/30/2024", "MM/DD/YYYY"), None);
        assert_eq!(parse("13/01/2024", "MM/DD/YYYY"), None);
        assert_eq!(parse("00/10/2024", "MM/DD/YYYY"), None);
    }

    #[test]
    fn has_date_token_checks_for_date_parts() {
        assert!(has_date_token("MM/DD/YYYY"));
        assert!(has_date_token("YY"));
        assert!(!has_date_token("dddd"));
        assert!(!has_date_token("hello"));
        assert!(!has_date_token(""));
    }
}
