//! Client URL slugs.
//!
//! A client's public URL is its business name reduced to lowercase ASCII
//! with the numeric client ID appended, e.g. "Dr. Juan García" with ID 43
//! becomes "drjuangarcia43". Parsing splits the trailing digit run back
//! off so the ID can be looked up without storing the slug anywhere.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static URL_SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)(\d+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClientUrl {
    pub client_id: Option<i32>,
    pub slug: String,
}

/// Lowercases the business name, decomposes accented characters and keeps
/// only ASCII letters and digits. Spaces and punctuation disappear.
pub fn generate_client_slug(business_name: &str) -> String {
    business_name
        .to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn generate_client_url(business_name: &str, client_id: i32) -> String {
    format!("{}{}", generate_client_slug(business_name), client_id)
}

/// Splits a URL into its name part and trailing client ID. The name part
/// matches lazily, so an all-digit URL still yields an ID from its tail.
/// A URL with no trailing digits (or an ID too large for i32) parses with
/// `client_id: None`.
pub fn parse_client_url(url_slug: &str) -> ParsedClientUrl {
    if let Some(caps) = URL_SLUG_RE.captures(url_slug) {
        if let Ok(client_id) = caps[2].parse::<i32>() {
            return ParsedClientUrl {
                client_id: Some(client_id),
                slug: caps[1].to_string(),
            };
        }
    }

    ParsedClientUrl {
        client_id: None,
        slug: url_slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_diacritics_and_punctuation() {
        assert_eq!(generate_client_slug("Dr. Juan García"), "drjuangarcia");
        assert_eq!(generate_client_slug("Peña & Hijos"), "penahijos");
        assert_eq!(generate_client_slug("Café México 7"), "cafemexico7");
    }

    #[test]
    fn url_appends_client_id_to_slug() {
        assert_eq!(generate_client_url("Dr. Juan García", 43), "drjuangarcia43");
        assert_eq!(generate_client_url("Taquería", 7), "taqueria7");
    }

    #[test]
    fn parse_splits_trailing_digits() {
        let parsed = parse_client_url("drjuangarcia43");
        assert_eq!(parsed.client_id, Some(43));
        assert_eq!(parsed.slug, "drjuangarcia");
    }

    #[test]
    fn parse_without_trailing_digits_yields_no_id() {
        let parsed = parse_client_url("drjuangarcia");
        assert_eq!(parsed.client_id, None);
        assert_eq!(parsed.slug, "drjuangarcia");
    }

    #[test]
    fn parse_all_digit_url_keeps_one_leading_digit_as_name() {
        // The name part is non-empty and lazy, so "123" splits as "1" + 23.
        let parsed = parse_client_url("123");
        assert_eq!(parsed.client_id, Some(23));
        assert_eq!(parsed.slug, "1");
    }

    #[test]
    fn generated_url_round_trips_through_parse() {
        let url = generate_client_url("Hotel Miramar", 512);
        let parsed = parse_client_url(&url);
        assert_eq!(parsed.client_id, Some(512));
        assert_eq!(parsed.slug, "hotelmiramar");
    }
}
