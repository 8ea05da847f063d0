//! The uniform codec surface: `decode`/`encode`/`can_parse`, plus the
//! content-type table a multi-format dispatcher would consult (this crate
//! only registers Turtle, per §4.G — JSON-LD/N-Triples dispatch is an
//! out-of-scope collaborator).

use crate::decoder::{self, DecoderFlags};
use crate::encoder::{self, EncoderOptions};
use crate::error::Result;
use crate::graph::Graph;

/// The canonical MIME type for Turtle.
pub const TURTLE_MIME: &str = "text/turtle";

/// Decodes `text` into a [`Graph`]. `content_type`, if given and not
/// `text/turtle`-compatible, is rejected; Turtle is the only codec this
/// crate registers.
pub fn decode(text: &str, content_type: Option<&str>, document_url: Option<&str>) -> Result<Graph> {
    check_content_type(content_type)?;
    decoder::decode(text, document_url)
}

/// Full form of [`decode`] threading [`DecoderFlags`].
pub fn decode_with_flags(
    text: &str,
    content_type: Option<&str>,
    document_url: Option<&str>,
    flags: &DecoderFlags,
) -> Result<Graph> {
    check_content_type(content_type)?;
    decoder::decode_with(text, document_url, flags, None)
}

/// Serializes `graph` as Turtle text.
pub fn encode(graph: &Graph, content_type: Option<&str>, base_uri: Option<&str>) -> Result<String> {
    check_content_type(content_type)?;
    encoder::encode(graph, &EncoderOptions::default(), base_uri)
}

/// Full form of [`encode`] threading [`EncoderOptions`].
pub fn encode_with_options(
    graph: &Graph,
    content_type: Option<&str>,
    base_uri: Option<&str>,
    options: &EncoderOptions,
) -> Result<String> {
    check_content_type(content_type)?;
    encoder::encode(graph, options, base_uri)
}

fn check_content_type(content_type: Option<&str>) -> Result<()> {
    match content_type {
        None => Ok(()),
        Some(ct) if ct.eq_ignore_ascii_case(TURTLE_MIME) || ct.eq_ignore_ascii_case("text/n3") => Ok(()),
        Some(ct) => Err(crate::error::Error::Constraint(format!("unsupported content type {:?}", ct))),
    }
}

/// A lightweight sniffer: `true` only when `text`, after skipping leading
/// whitespace and `#` comments, begins with a token that can only start a
/// Turtle document (a directive, an IRI ref, a prefixed name, or a blank
/// label). HTML/XML/JSON inputs reliably return `false`.
pub fn can_parse(text: &str) -> bool {
    let mut rest = text.trim_start();
    loop {
        if let Some(stripped) = rest.strip_prefix('#') {
            rest = stripped.splitn(2, '\n').nth(1).unwrap_or("").trim_start();
            continue;
        }
        break;
    }
    if rest.is_empty() {
        return true;
    }
    if rest.starts_with('<') {
        return crate::parse::IRIREF.is_match(rest);
    }
    if rest.starts_with("@prefix") || rest.starts_with("@base") {
        return true;
    }
    if rest.starts_with_ci_static("prefix") || rest.starts_with_ci_static("base") {
        return true;
    }
    if rest.starts_with("_:") {
        return true;
    }
    crate::parse::PN_PREFIX.find(rest).map(|m| m.start() == 0).unwrap_or(false)
}

trait StartsWithCi {
    fn starts_with_ci_static(&self, lit: &str) -> bool;
}

impl StartsWithCi for str {
    fn starts_with_ci_static(&self, lit: &str) -> bool {
        self.get(..lit.len()).map(|s| s.eq_ignore_ascii_case(lit)).unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_parse_accepts_turtle_prefix_directive() {
        assert!(can_parse("@prefix ex: <http://ex/> ."));
    }

    #[test]
    fn can_parse_accepts_bare_iri_ref() {
        assert!(can_parse("<http://ex/s> <http://ex/p> <http://ex/o> ."));
    }

    #[test]
    fn can_parse_rejects_html() {
        assert!(!can_parse("<!DOCTYPE html><html></html>"));
    }

    #[test]
    fn can_parse_rejects_json() {
        assert!(!can_parse(r#"{"@context": {}}"#));
    }

    #[test]
    fn can_parse_accepts_empty_input() {
        assert!(can_parse("   \n  "));
    }

    #[test]
    fn decode_rejects_unsupported_content_type() {
        assert!(decode("", Some("application/json"), None).is_err());
    }
}
