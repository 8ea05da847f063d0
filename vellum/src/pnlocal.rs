//! `PN_PREFIX`/`PN_LOCAL` validation, grounded on the teacher's
//! `turtle/parse/terminals.rs` lazy_static regex terminals (`PN_CHARS_BASE`,
//! `PN_CHARS_U`, `PN_CHARS`, `PN_PREFIX`, `PLX`) but re-anchored to match a
//! whole string (the teacher's terminals match a prefix of the remaining
//! input for its tokenizer; this crate additionally needs a standalone
//! validator for names the encoder wants to *emit*, so the regexes are
//! anchored with `^...$` the way the teacher anchors `IRIREF_ONLY`).

use lazy_static::lazy_static;
use regex::Regex;

const PN_CHARS_BASE: &str = "A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}";

lazy_static! {
    static ref PN_CHARS_U: String = format!("{}_", PN_CHARS_BASE);
    static ref PN_CHARS: String = format!("{}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}-", *PN_CHARS_U);

    static ref PN_PREFIX_ONLY: Regex = Regex::new(&format!(
        r"^[{base}](?:[{chars}.]*[{chars}])?$",
        base = PN_CHARS_BASE,
        chars = *PN_CHARS
    ))
    .unwrap();

    static ref PN_LOCAL_FIRST: Regex =
        Regex::new(&format!(r"^[{chars_u}0-9:]|^%[0-9A-Fa-f]{{2}}|^\\[_~.\-!$&'()*+,;=/?#@%]", chars_u = *PN_CHARS_U)).unwrap();

    static ref PLX: Regex = Regex::new(r"^(?:%[0-9A-Fa-f]{2}|\\[_~.\-!$&'()*+,;=/?#@%])").unwrap();

    static ref PN_LOCAL_MID_CHAR: Regex =
        Regex::new(&format!(r"^[{chars}:]", chars = *PN_CHARS)).unwrap();
}

/// Validates a `PN_PREFIX` (the part before `:` in a prefixed name), without
/// the trailing `:`.
pub fn is_valid_pn_prefix(s: &str) -> bool {
    !s.is_empty() && PN_PREFIX_ONLY.is_match(s)
}

/// Validates a `PN_LOCAL` (the part after `:` in a prefixed name).
///
/// Implements the grammar directly rather than via one monolithic regex,
/// since `PN_LOCAL`'s character classes differ between the first character
/// (no bare `-` or `.`) and the rest (digits, `-`, and mid-string `.`
/// allowed, but not as the last character).
pub fn is_valid_pn_local(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.ends_with('.') {
        return false;
    }
    let mut rest = s;
    // First character (or PLX / escape).
    if let Some(m) = PLX.find(rest) {
        rest = &rest[m.end()..];
    } else if PN_LOCAL_FIRST.is_match(rest) {
        let first_len = rest.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
        rest = &rest[first_len..];
    } else {
        return false;
    }
    while !rest.is_empty() {
        if let Some(m) = PLX.find(rest) {
            rest = &rest[m.end()..];
            continue;
        }
        if rest.starts_with('.') || PN_LOCAL_MID_CHAR.is_match(rest) {
            let len = rest.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
            rest = &rest[len..];
            continue;
        }
        return false;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("ex" => true)]
    #[test_case("ex-2" => true)]
    #[test_case("" => false)]
    #[test_case("2ex" => false)]
    #[test_case("-ex" => false)]
    #[test_case("ex." => false)]
    #[test_case("a.b" => true)]
    fn check_pn_prefix(s: &str) -> bool {
        is_valid_pn_prefix(s)
    }

    #[test_case("name" => true)]
    #[test_case("name123" => true)]
    #[test_case("123" => true)]
    #[test_case("a.b.c" => true)]
    #[test_case("a." => false)]
    #[test_case("" => false)]
    #[test_case("-leading" => false)]
    #[test_case("a-b" => true)]
    #[test_case("a:b" => true)]
    #[test_case(r"a\,b" => true)]
    #[test_case("a%20b" => true)]
    fn check_pn_local(s: &str) -> bool {
        is_valid_pn_local(s)
    }
}
