//! French month names as they appear in Calendar exports, mapped to the English
//! abbreviations `chrono`'s `%b` understands.

/// French month token (lowercase) → English abbreviation.
const FRENCH_MONTHS: &[(&str, &str)] = &[
    ("janv.", "Jan"),
    ("janv", "Jan"),
    ("janvier", "Jan"),
    ("févr.", "Feb"),
    ("févr", "Feb"),
    ("fevr.", "Feb"),
    ("février", "Feb"),
    ("fevrier", "Feb"),
    ("mars", "Mar"),
    ("avr.", "Apr"),
    ("avr", "Apr"),
    ("avril", "Apr"),
    ("mai", "May"),
    ("juin", "Jun"),
    ("juil.", "Jul"),
    ("juil", "Jul"),
    ("juillet", "Jul"),
    ("août", "Aug"),
    ("aout", "Aug"),
    ("sept.", "Sep"),
    ("sept", "Sep"),
    ("septembre", "Sep"),
    ("oct.", "Oct"),
    ("oct", "Oct"),
    ("octobre", "Oct"),
    ("nov.", "Nov"),
    ("nov", "Nov"),
    ("novembre", "Nov"),
    ("déc.", "Dec"),
    ("déc", "Dec"),
    ("dec.", "Dec"),
    ("décembre", "Dec"),
    ("decembre", "Dec"),
];

const FRENCH_WEEKDAYS: &[&str] = &[
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// Returns the English abbreviation for a French month token, if it is one.
pub fn english_month(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();
    FRENCH_MONTHS
        .iter()
        .find(|(fr, _)| *fr == lower)
        .map(|(_, en)| *en)
}

fn is_weekday(token: &str) -> bool {
    let lower = token.trim_end_matches(',').to_lowercase();
    FRENCH_WEEKDAYS.contains(&lower.as_str())
}

/// Rewrites a French date such as `lundi 28 avr. 2025` into `28 Apr 2025`.
///
/// Month tokens are replaced, weekday tokens are dropped, everything else is kept as is.
pub fn normalize_french_date(date: &str) -> String {
    date.split_whitespace()
        .filter(|token| !is_weekday(token))
        .map(|token| english_month(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_abbreviations_map_to_english() {
        assert_eq!(english_month("avr."), Some("Apr"));
        assert_eq!(english_month("févr."), Some("Feb"));
        assert_eq!(english_month("août"), Some("Aug"));
        assert_eq!(english_month("déc."), Some("Dec"));
        assert_eq!(english_month("mai"), Some("May"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(english_month("AVR."), Some("Apr"));
        assert_eq!(english_month("Juillet"), Some("Jul"));
    }

    #[test]
    fn numbers_are_not_months() {
        assert_eq!(english_month("28"), None);
        assert_eq!(english_month("2025"), None);
    }

    #[test]
    fn normalize_replaces_month_only() {
        assert_eq!(normalize_french_date("28 avr. 2025"), "28 Apr 2025");
        assert_eq!(normalize_french_date("1  juin   2025"), "1 Jun 2025");
    }

    #[test]
    fn normalize_drops_weekday() {
        assert_eq!(normalize_french_date("lundi 28 avr. 2025"), "28 Apr 2025");
        assert_eq!(normalize_french_date("Mardi, 3 sept. 2024"), "3 Sep 2024");
    }

    #[test]
    fn mai_inside_a_word_is_left_alone() {
        assert_eq!(normalize_french_date("maison"), "maison");
    }
}
