//! `Cookie` request header parsing.
//!
//! Splitting and trimming is delegated to the `cookie` crate; values are then
//! percent-decoded. A value with a malformed escape, or one that does not decode
//! to UTF-8, is kept as sent.

use std::collections::HashMap;

use cookie::Cookie;
use percent_encoding::percent_decode_str;

/// Parse a `Cookie` header (`a=1; b=2`) into a name → value map.
///
/// - pairs without `=` or with an empty name are skipped
/// - surrounding double quotes are removed from values
/// - the first occurrence of a name wins
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    let mut jar = HashMap::new();

    for cookie in Cookie::split_parse(header).filter_map(Result::ok) {
        let raw = cookie.value_trimmed();
        let value = decode_value(raw).unwrap_or_else(|| raw.to_string());

        jar.entry(cookie.name().to_string()).or_insert(value);
    }

    jar
}

// All-or-nothing: any bad escape or invalid UTF-8 rejects the whole value.
fn decode_value(raw: &str) -> Option<String> {
    if has_malformed_escape(raw) {
        return None;
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

// `%` not followed by two hex digits
fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let jar = parse_cookies("token=xyz; other=1");
        assert_eq!(jar.get("token").map(String::as_str), Some("xyz"));
        assert_eq!(jar.get("other").map(String::as_str), Some("1"));
        assert_eq!(jar.len(), 2);
    }

    #[test]
    fn trims_whitespace_and_quotes() {
        let jar = parse_cookies("  a = \"quoted value\" ;b=plain");
        assert_eq!(jar.get("a").map(String::as_str), Some("quoted value"));
        assert_eq!(jar.get("b").map(String::as_str), Some("plain"));
    }

    #[test]
    fn percent_decodes_values() {
        let jar = parse_cookies("token=eyJ%3Dtoken%20x");
        assert_eq!(jar.get("token").map(String::as_str), Some("eyJ=token x"));
    }

    #[test]
    fn keeps_undecodable_values_raw() {
        let jar = parse_cookies("token=%FF%FE");
        assert_eq!(jar.get("token").map(String::as_str), Some("%FF%FE"));

        let jar = parse_cookies("token=%41%zz; other=%41%2");
        assert_eq!(jar.get("token").map(String::as_str), Some("%41%zz"));
        assert_eq!(jar.get("other").map(String::as_str), Some("%41%2"));
    }

    #[test]
    fn first_occurrence_wins() {
        let jar = parse_cookies("token=first; token=second");
        assert_eq!(jar.get("token").map(String::as_str), Some("first"));
    }

    #[test]
    fn skips_malformed_pairs() {
        let jar = parse_cookies("garbage; =nameless; ;token=ok;");
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get("token").map(String::as_str), Some("ok"));
    }

    #[test]
    fn value_may_contain_equals() {
        let jar = parse_cookies("token=a=b=c");
        assert_eq!(jar.get("token").map(String::as_str), Some("a=b=c"));
    }

    #[test]
    fn empty_header() {
        assert!(parse_cookies("").is_empty());
    }
}
