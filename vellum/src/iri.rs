//! RFC 3986 §5 resolution, and its cost-minimizing inverse (relativization).
//!
//! Both the decoder (resolving `<R>` against the current base) and the
//! encoder (shortening absolute IRIs against a configured `base_uri`) sit on
//! top of this module.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The generic URI-reference splitting regex from RFC 3986 Appendix B.
    static ref COMPONENTS: Regex =
        Regex::new(r#"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$"#)
            .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Components<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn split(iri: &str) -> Components<'_> {
    // COMPONENTS matches any string (every group is optional), so this
    // capture is infallible.
    let caps = COMPONENTS.captures(iri).expect("URI-reference regex always matches");
    Components {
        scheme: caps.get(1).map(|m| m.as_str()),
        authority: caps.get(2).map(|m| m.as_str()),
        path: caps.get(3).map(|m| m.as_str()).unwrap_or(""),
        query: caps.get(4).map(|m| m.as_str()),
        fragment: caps.get(5).map(|m| m.as_str()),
    }
}

/// RFC 3986 §5.2.4.
fn remove_dot_segments(path: &str) -> String {
    let mut input = path.to_owned();
    let mut output = String::new();
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest.to_owned();
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest.to_owned();
        } else if let Some(rest) = input.strip_prefix("/./") {
            input = format!("/{}", rest);
        } else if input == "/." {
            input = "/".to_owned();
        } else if let Some(rest) = input.strip_prefix("/../") {
            remove_last_segment(&mut output);
            input = format!("/{}", rest);
        } else if input == "/.." {
            remove_last_segment(&mut output);
            input = "/".to_owned();
        } else if input == "." || input == ".." {
            input.clear();
        } else {
            // Move the first path segment (including any leading '/') from
            // input to output.
            let start_slash = input.starts_with('/');
            let search_from = if start_slash { 1 } else { 0 };
            let end = input[search_from..]
                .find('/')
                .map(|p| p + search_from)
                .unwrap_or_else(|| input.len());
            output.push_str(&input[..end]);
            input = input[end..].to_owned();
        }
    }
    output
}

/// Removes the last `/`-delimited segment (and its leading slash) from an
/// in-progress output buffer, per the `".."` cases of §5.2.4's algorithm.
fn remove_last_segment(output: &mut String) {
    match output.rfind('/') {
        Some(idx) => output.truncate(idx),
        None => output.clear(),
    }
}

fn merge_paths(base_has_authority: bool, base_path: &str, ref_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        format!("/{}", ref_path)
    } else {
        match base_path.rfind('/') {
            Some(idx) => format!("{}{}", &base_path[..=idx], ref_path),
            None => ref_path.to_owned(),
        }
    }
}

fn reassemble(
    scheme: Option<&str>,
    authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(s) = scheme {
        out.push_str(s);
        out.push(':');
    }
    if let Some(a) = authority {
        out.push_str("//");
        out.push_str(a);
    }
    out.push_str(path);
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}

/// Resolves `reference` against `base` per RFC 3986 §5.3.
///
/// If `reference` already carries a scheme it is absolute and is returned
/// unchanged. Otherwise `base` is required; if `base` itself fails to parse
/// a scheme, a best-effort, deterministic manual concatenation is used
/// instead of the full algorithm (documented fallback, see module tests).
pub fn resolve(reference: &str, base: Option<&str>) -> Result<String> {
    let r = split(reference);
    if r.scheme.is_some() {
        return Ok(reference.to_owned());
    }

    let base = base.filter(|b| !b.is_empty()).ok_or_else(|| Error::BaseIriRequired(reference.to_owned()))?;
    let b = split(base);

    if b.scheme.is_none() {
        // Malformed/schemeless base: best-effort manual concatenation.
        let merged_path = merge_paths(b.authority.is_some(), b.path, r.path);
        let merged_path = remove_dot_segments(&merged_path);
        return Ok(reassemble(None, b.authority, &merged_path, r.query.or(b.query), r.fragment));
    }

    let (authority, path, query) = if r.authority.is_some() {
        (r.authority, remove_dot_segments(r.path), r.query)
    } else if r.path.is_empty() {
        (b.authority, b.path.to_owned(), r.query.or(b.query))
    } else if r.path.starts_with('/') {
        (b.authority, remove_dot_segments(r.path), r.query)
    } else {
        let merged = merge_paths(b.authority.is_some(), b.path, r.path);
        (b.authority, remove_dot_segments(&merged), r.query)
    };

    Ok(reassemble(b.scheme, authority, &path, query, r.fragment))
}

/// Options controlling which relativization candidate forms are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativizePreset {
    /// Never relativize; `relativize` always returns the target unchanged.
    None,
    /// Only the within-directory and empty/fragment-only forms.
    Local,
    /// All candidate forms, subject to the tuning knobs.
    Full,
}

/// Tuning knobs for [`relativize`].
#[derive(Debug, Clone)]
pub struct RelativizeOptions {
    pub preset: RelativizePreset,
    pub max_up_levels: usize,
    pub max_additional_length: usize,
    pub allow_absolute_path: bool,
    pub allow_sibling_directories: bool,
}

impl Default for RelativizeOptions {
    fn default() -> Self {
        RelativizeOptions::full()
    }
}

impl RelativizeOptions {
    pub fn none() -> Self {
        RelativizeOptions {
            preset: RelativizePreset::None,
            max_up_levels: 0,
            max_additional_length: 0,
            allow_absolute_path: false,
            allow_sibling_directories: false,
        }
    }

    pub fn local() -> Self {
        RelativizeOptions {
            preset: RelativizePreset::Local,
            max_up_levels: 0,
            max_additional_length: usize::MAX,
            allow_absolute_path: false,
            allow_sibling_directories: false,
        }
    }

    pub fn full() -> Self {
        RelativizeOptions {
            preset: RelativizePreset::Full,
            max_up_levels: 8,
            max_additional_length: usize::MAX,
            allow_absolute_path: true,
            allow_sibling_directories: true,
        }
    }
}

/// A candidate relative form, scored by `(length, up_levels, is_absolute_path
/// ? 0 : 1, text)` per §9's declarative cost model.
struct Candidate {
    text: String,
    up_levels: usize,
    is_absolute_path: bool,
}

fn candidate_key(c: &Candidate) -> (usize, usize, u8, &str) {
    (c.text.len(), c.up_levels, if c.is_absolute_path { 0 } else { 1 }, c.text.as_str())
}

/// Rejects a candidate that would itself parse as an absolute IRI (the
/// scheme-collision guard: e.g. a candidate `123:foo` must never be
/// produced, since re-resolving it would not reproduce the target).
fn looks_absolute(candidate: &str) -> bool {
    split(candidate).scheme.is_some()
}

fn path_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    }
}

fn tail(query: Option<&str>, fragment: Option<&str>) -> String {
    let mut s = String::new();
    if let Some(q) = query {
        s.push('?');
        s.push_str(q);
    }
    if let Some(f) = fragment {
        s.push('#');
        s.push_str(f);
    }
    s
}

/// Computes the shortest admissible relative reference `S` such that
/// `resolve(S, base) == target`, per §4.B.
pub fn relativize(target: &str, base: &str, options: &RelativizeOptions) -> String {
    if options.preset == RelativizePreset::None {
        return target.to_owned();
    }

    let t = split(target);
    let b = split(base);

    if t.scheme != b.scheme || t.authority != b.authority {
        return target.to_owned();
    }
    if b.query.map(|q| !q.is_empty()).unwrap_or(false) {
        return target.to_owned();
    }

    let mut candidates = vec![Candidate {
        text: target.to_owned(),
        up_levels: 0,
        is_absolute_path: false,
    }];

    let base_no_fragment_matches = t.path == b.path && t.query == b.query;

    // 1. Empty.
    if base_no_fragment_matches && t.fragment.is_none() {
        candidates.push(Candidate { text: String::new(), up_levels: 0, is_absolute_path: false });
    }

    // 2. Fragment-only.
    if base_no_fragment_matches && t.fragment.is_some() {
        candidates.push(Candidate {
            text: format!("#{}", t.fragment.unwrap_or("")),
            up_levels: 0,
            is_absolute_path: false,
        });
    }

    let base_dir = path_dir(b.path);

    // 3. Relative path within directory.
    if !base_dir.is_empty() {
        if let Some(suffix) = t.path.strip_prefix(base_dir) {
            let text = format!("{}{}", suffix, tail(t.query, t.fragment));
            if !text.is_empty() && !looks_absolute(&text) {
                candidates.push(Candidate { text, up_levels: 0, is_absolute_path: false });
            }
        }
    }

    // 4. Sibling via `../`.
    if options.allow_sibling_directories && matches!(options.preset, RelativizePreset::Full) {
        let base_segments: Vec<&str> = base_dir.trim_end_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        let target_dir = path_dir(t.path);
        let target_segments: Vec<&str> = target_dir.trim_end_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        let common = base_segments
            .iter()
            .zip(target_segments.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let up_levels = base_segments.len() - common;
        if up_levels > 0 && up_levels <= options.max_up_levels {
            let down_dir = target_segments[common..].join("/");
            let file_name = &t.path[target_dir.len()..];
            let mut text = "../".repeat(up_levels);
            if !down_dir.is_empty() {
                text.push_str(&down_dir);
                text.push('/');
            }
            text.push_str(file_name);
            text.push_str(&tail(t.query, t.fragment));
            if !looks_absolute(&text) {
                candidates.push(Candidate { text, up_levels, is_absolute_path: false });
            }
        }
    }

    // 5. Absolute-path.
    if options.allow_absolute_path && matches!(options.preset, RelativizePreset::Full) {
        let text = format!("{}{}", t.path, tail(t.query, t.fragment));
        candidates.push(Candidate { text, up_levels: 0, is_absolute_path: true });
    }

    candidates.retain(|c| c.text.len() <= target.len().saturating_add(options.max_additional_length));

    candidates
        .into_iter()
        .min_by(|a, b| candidate_key(a).cmp(&candidate_key(b)))
        .map(|c| c.text)
        .unwrap_or_else(|| target.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_absolute_reference_returned_unchanged() {
        assert_eq!(resolve("http://ex/a", Some("http://other/")).unwrap(), "http://ex/a");
    }

    #[test]
    fn resolve_requires_base_for_relative_reference() {
        assert!(resolve("a", None).is_err());
    }

    #[test]
    fn resolve_empty_reference_strips_fragment() {
        assert_eq!(resolve("", Some("http://ex/a#frag")).unwrap(), "http://ex/a");
    }

    #[test]
    fn resolve_relative_path_merges_directory() {
        assert_eq!(resolve("b", Some("http://ex/a/c")).unwrap(), "http://ex/a/b");
    }

    #[test]
    fn resolve_dot_segments() {
        assert_eq!(resolve("../b", Some("http://ex/a/c/d")).unwrap(), "http://ex/a/b");
    }

    #[test]
    fn resolve_absolute_path_reference() {
        assert_eq!(resolve("/x", Some("http://ex/a/b/c")).unwrap(), "http://ex/x");
    }

    #[test]
    fn relativize_within_directory() {
        let s = relativize("http://ex/a/b/c", "http://ex/a/b/", &RelativizeOptions::full());
        assert_eq!(s, "c");
    }

    #[test]
    fn relativize_prefers_absolute_path_over_long_sibling_chain() {
        let s = relativize("http://ex/x", "http://ex/a/very/deep/path", &RelativizeOptions::full());
        assert_eq!(s, "/x");
    }

    #[test]
    fn relativize_identity_is_empty() {
        let s = relativize("http://ex/a", "http://ex/a", &RelativizeOptions::full());
        assert_eq!(s, "");
    }

    #[test]
    fn relativize_roundtrips_through_resolve() {
        let base = "http://ex/a/b/";
        let target = "http://ex/a/b/c/d";
        let rel = relativize(target, base, &RelativizeOptions::full());
        assert_eq!(resolve(&rel, Some(base)).unwrap(), target);
        assert!(rel.len() <= target.len());
    }

    #[test]
    fn relativize_refuses_when_authorities_differ() {
        let s = relativize("http://other/a", "http://ex/a", &RelativizeOptions::full());
        assert_eq!(s, "http://other/a");
    }

    #[test]
    fn relativize_none_preset_always_returns_target() {
        let s = relativize("http://ex/a/b", "http://ex/a/", &RelativizeOptions::none());
        assert_eq!(s, "http://ex/a/b");
    }

    #[test]
    fn relativize_never_produces_scheme_colliding_candidate() {
        // A path segment containing a colon must not be emitted as a bare
        // relative reference, since it would parse as absolute when re-read.
        let s = relativize("http://ex/a/urn:thing", "http://ex/a/b", &RelativizeOptions::full());
        assert!(!looks_absolute(&s) || s == "http://ex/a/urn:thing");
    }
}
