//! The Turtle grammar: a recursive-descent parser, production-per-function,
//! over the [`crate::parse::Cursor`] tokenizer. Grounded on the shape of the
//! teacher's `parse::turtle::Parser` driving loop and `parse::Context`
//! (prolog + blank-node counter + triple accumulation), generalized from a
//! `RefCell`-threaded iterator into a plain owned-state struct per §9's
//! "parser structure" design note.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::iri;
use crate::ns;
use crate::parse::{self, Cursor, ParseError};
use crate::pnlocal;
use crate::prefix::PrefixRegistry;
use crate::term::{BlankNode, Iri, Literal, Object, Predicate, Subject, Triple};
use std::collections::HashMap;

/// Which non-strict relaxations a decode session accepts. All default off;
/// a strict decoder rejects every input that isn't plain W3C Turtle 1.1.
#[derive(Debug, Clone, Default)]
pub struct DecoderFlags {
    pub allow_identifiers_without_colon: bool,
    pub allow_digit_in_local_name: bool,
    pub allow_missing_dot_after_prefix: bool,
    pub allow_missing_final_dot: bool,
    pub allow_prefix_without_at_sign: bool,
    pub auto_add_common_prefixes: bool,
}

impl DecoderFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_allow_identifiers_without_colon(&mut self, v: bool) -> &mut Self {
        self.allow_identifiers_without_colon = v;
        self
    }
    pub fn set_allow_digit_in_local_name(&mut self, v: bool) -> &mut Self {
        self.allow_digit_in_local_name = v;
        self
    }
    pub fn set_allow_missing_dot_after_prefix(&mut self, v: bool) -> &mut Self {
        self.allow_missing_dot_after_prefix = v;
        self
    }
    pub fn set_allow_missing_final_dot(&mut self, v: bool) -> &mut Self {
        self.allow_missing_final_dot = v;
        self
    }
    pub fn set_allow_prefix_without_at_sign(&mut self, v: bool) -> &mut Self {
        self.allow_prefix_without_at_sign = v;
        self
    }
    pub fn set_auto_add_common_prefixes(&mut self, v: bool) -> &mut Self {
        self.auto_add_common_prefixes = v;
        self
    }
}

/// Decodes `text` as Turtle. `document_url`, if given, is the initial base
/// IRI (overridden by any `@base` directive encountered).
pub fn decode(text: &str, document_url: Option<&str>) -> Result<Graph> {
    decode_with(text, document_url, &DecoderFlags::default(), None)
}

/// Full form of [`decode`], threading parsing flags and a seed prefix
/// table consulted before the well-known fallback.
pub fn decode_with(
    text: &str,
    document_url: Option<&str>,
    flags: &DecoderFlags,
    namespace_mappings: Option<&HashMap<String, String>>,
) -> Result<Graph> {
    let mut session = Session::new(text, document_url, flags.clone(), namespace_mappings);
    session.run().map_err(Error::from)?;
    Ok(session.graph)
}

struct Session<'a> {
    cursor: Cursor<'a>,
    flags: DecoderFlags,
    base: Option<String>,
    prefixes: PrefixRegistry,
    bnodes: HashMap<String, BlankNode>,
    graph: Graph,
}

impl<'a> Session<'a> {
    fn new(
        text: &'a str,
        document_url: Option<&str>,
        flags: DecoderFlags,
        namespace_mappings: Option<&HashMap<String, String>>,
    ) -> Self {
        let mut prefixes =
            if flags.auto_add_common_prefixes { PrefixRegistry::with_common_prefixes() } else { PrefixRegistry::new() };
        if let Some(seed) = namespace_mappings {
            for (p, ns) in seed {
                prefixes.bind(p.clone(), ns.clone());
            }
        }
        Session {
            cursor: Cursor::new(text),
            flags,
            base: document_url.map(|s| s.to_owned()),
            prefixes,
            bnodes: HashMap::new(),
            graph: Graph::new(),
        }
    }

    fn run(&mut self) -> std::result::Result<(), ParseError> {
        loop {
            self.cursor.skip_trivia();
            if self.cursor.is_empty() {
                return Ok(());
            }
            self.statement()?;
        }
    }

    fn statement(&mut self) -> std::result::Result<(), ParseError> {
        if self.cursor.starts_with("@") {
            self.directive(true)
        } else if self.flags.allow_prefix_without_at_sign
            && (self.cursor.starts_with_ci("prefix") || self.cursor.starts_with_ci("base"))
        {
            self.directive(false)
        } else {
            self.triples_statement()
        }
    }

    fn directive(&mut self, has_at: bool) -> std::result::Result<(), ParseError> {
        if has_at {
            self.cursor.bump(1);
        }
        if self.cursor.starts_with_ci("prefix") {
            self.cursor.bump("prefix".len());
            self.prefix_directive()
        } else if self.cursor.starts_with_ci("base") {
            self.cursor.bump("base".len());
            self.base_directive()
        } else {
            Err(self.cursor.error("expected 'prefix' or 'base' directive"))
        }
    }

    fn prefix_directive(&mut self) -> std::result::Result<(), ParseError> {
        self.cursor.skip_trivia();
        let prefix_name = self.scan_pn_prefix_before_colon()?;
        if !self.cursor.starts_with(":") {
            return Err(self.cursor.error("expected ':' in @prefix directive"));
        }
        self.cursor.bump(1);
        self.cursor.skip_trivia();
        let iri_text = self.scan_iriref()?;
        let resolved = iri::resolve(&iri_text, self.base.as_deref()).map_err(|e| self.cursor.error_from(e))?;
        self.prefixes.bind(prefix_name, resolved);
        self.end_directive()
    }

    fn base_directive(&mut self) -> std::result::Result<(), ParseError> {
        self.cursor.skip_trivia();
        let iri_text = self.scan_iriref()?;
        let resolved = iri::resolve(&iri_text, self.base.as_deref()).map_err(|e| self.cursor.error_from(e))?;
        self.base = Some(resolved);
        self.end_directive()
    }

    fn end_directive(&mut self) -> std::result::Result<(), ParseError> {
        self.cursor.skip_trivia();
        if self.cursor.starts_with(".") {
            self.cursor.bump(1);
            Ok(())
        } else if self.flags.allow_missing_dot_after_prefix {
            Ok(())
        } else {
            Err(self.cursor.error("expected '.' terminating directive"))
        }
    }

    fn triples_statement(&mut self) -> std::result::Result<(), ParseError> {
        let subject = self.subject()?;
        self.predicate_object_list(subject)?;
        self.cursor.skip_trivia();
        if self.cursor.starts_with(".") {
            self.cursor.bump(1);
            Ok(())
        } else if self.flags.allow_missing_final_dot && self.cursor.is_empty() {
            Ok(())
        } else {
            Err(self.cursor.error("expected '.' terminating triples"))
        }
    }

    fn predicate_object_list(&mut self, subject: Subject) -> std::result::Result<(), ParseError> {
        let mut first = true;
        loop {
            if !first {
                self.cursor.skip_trivia();
                if self.cursor.starts_with(";") {
                    self.cursor.bump(1);
                    self.cursor.skip_trivia();
                    if self.cursor.starts_with(".") || self.cursor.is_empty() || self.cursor.starts_with("]") {
                        break;
                    }
                } else {
                    break;
                }
            }
            first = false;
            let predicate = self.verb()?;
            self.object_list(subject.clone(), predicate)?;
        }
        Ok(())
    }

    fn object_list(&mut self, subject: Subject, predicate: Predicate) -> std::result::Result<(), ParseError> {
        loop {
            self.cursor.skip_trivia();
            let object = self.object()?;
            self.graph.add(Triple::new(subject.clone(), predicate.clone(), object));
            self.cursor.skip_trivia();
            if self.cursor.starts_with(",") {
                self.cursor.bump(1);
            } else {
                break;
            }
        }
        Ok(())
    }

    fn verb(&mut self) -> std::result::Result<Predicate, ParseError> {
        self.cursor.skip_trivia();
        if self.cursor.starts_with("a") {
            // "a" is the rdf:type keyword only if it isn't actually the
            // start of a longer prefixed name like `a:b` or `abc:d`.
            let boundary = self.cursor.input[1..].chars().next().map(|c| !(is_pn_char(c) || c == ':')).unwrap_or(true);
            if boundary {
                self.cursor.bump(1);
                return Ok(ns::rdf::TYPE.clone());
            }
        }
        self.iri_term()
    }

    fn subject(&mut self) -> std::result::Result<Subject, ParseError> {
        self.cursor.skip_trivia();
        if self.cursor.starts_with("(") {
            return Ok(object_to_subject(self.collection()?));
        }
        if self.cursor.starts_with("[") {
            return Ok(object_to_subject(self.blank_node_property_list()?));
        }
        if self.cursor.starts_with("_:") {
            return Ok(Subject::Blank(self.blank_node_label()?));
        }
        Ok(Subject::Iri(self.iri_term()?))
    }

    fn object(&mut self) -> std::result::Result<Object, ParseError> {
        self.cursor.skip_trivia();
        if self.cursor.starts_with("(") {
            return self.collection();
        }
        if self.cursor.starts_with("[") {
            return self.blank_node_property_list();
        }
        if self.cursor.starts_with("_:") {
            return Ok(Object::Blank(self.blank_node_label()?));
        }
        if self.cursor.starts_with("\"") || self.cursor.starts_with("'") {
            return self.literal_string();
        }
        if self.looks_like_numeric() {
            return self.numeric_literal();
        }
        if self.cursor.starts_with_ci("true") && word_boundary_after(self.cursor.input, 4) {
            self.cursor.bump(4);
            return Ok(Object::Literal(Literal::new_boolean(true)));
        }
        if self.cursor.starts_with_ci("false") && word_boundary_after(self.cursor.input, 5) {
            self.cursor.bump(5);
            return Ok(Object::Literal(Literal::new_boolean(false)));
        }
        Ok(Object::Iri(self.iri_term()?))
    }

    fn looks_like_numeric(&self) -> bool {
        let mut chars = self.cursor.input.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('+') | Some('-') => chars.next().map(|c| c.is_ascii_digit() || c == '.').unwrap_or(false),
            Some('.') => chars.next().map(|c| c.is_ascii_digit()).unwrap_or(false),
            _ => false,
        }
    }

    fn numeric_literal(&mut self) -> std::result::Result<Object, ParseError> {
        if let Some(m) = parse::DOUBLE.find(self.cursor.input) {
            let text = m.as_str().to_owned();
            self.cursor.bump(m.end());
            return Ok(Object::Literal(Literal::new_double(text)));
        }
        if let Some(m) = parse::DECIMAL.find(self.cursor.input) {
            let text = m.as_str().to_owned();
            self.cursor.bump(m.end());
            return Ok(Object::Literal(Literal::new_decimal(text)));
        }
        if let Some(m) = parse::INTEGER.find(self.cursor.input) {
            let text = m.as_str().to_owned();
            self.cursor.bump(m.end());
            return Ok(Object::Literal(Literal::new_integer(text)));
        }
        Err(self.cursor.error("expected numeric literal"))
    }

    fn literal_string(&mut self) -> std::result::Result<Object, ParseError> {
        let matched = parse::string_literal(self.cursor.input)
            .ok_or_else(|| self.cursor.error("unterminated string literal"))?
            .to_owned();
        let body = parse::strip_string_delimiters(&matched).to_owned();
        self.cursor.bump(matched.len());
        let lexical = parse::unescape_string(&body);

        if self.cursor.starts_with("@") {
            let m = parse::LANGTAG
                .find(self.cursor.input)
                .ok_or_else(|| self.cursor.error("invalid language tag"))?;
            let lang = m.as_str()[1..].to_owned();
            self.cursor.bump(m.end());
            return Ok(Object::Literal(Literal::new_lang_string(lexical, lang)));
        }
        if self.cursor.starts_with("^^") {
            self.cursor.bump(2);
            self.cursor.skip_trivia();
            let datatype = self.iri_term()?;
            let lit = Literal::new(lexical, datatype).map_err(|e| self.cursor.error_from(e))?;
            return Ok(Object::Literal(lit));
        }
        Ok(Object::Literal(Literal::new_string(lexical)))
    }

    fn collection(&mut self) -> std::result::Result<Object, ParseError> {
        self.cursor.bump(1); // '('
        self.cursor.skip_trivia();
        if self.cursor.starts_with(")") {
            self.cursor.bump(1);
            return Ok(Object::Iri(ns::rdf::NIL.clone()));
        }
        let mut items = Vec::new();
        loop {
            self.cursor.skip_trivia();
            if self.cursor.starts_with(")") {
                break;
            }
            items.push(self.object()?);
            self.cursor.skip_trivia();
        }
        if !self.cursor.starts_with(")") {
            return Err(self.cursor.error("expected ')' closing collection"));
        }
        self.cursor.bump(1);

        let mut next = Object::Iri(ns::rdf::NIL.clone());
        for item in items.into_iter().rev() {
            let node = BlankNode::fresh();
            self.graph.add(Triple::new(Subject::Blank(node.clone()), ns::rdf::FIRST.clone(), item));
            self.graph.add(Triple::new(Subject::Blank(node.clone()), ns::rdf::REST.clone(), next));
            next = Object::Blank(node);
        }
        Ok(next)
    }

    fn blank_node_property_list(&mut self) -> std::result::Result<Object, ParseError> {
        self.cursor.bump(1); // '['
        self.cursor.skip_trivia();
        let node = BlankNode::fresh();
        if self.cursor.starts_with("]") {
            self.cursor.bump(1);
            return Ok(Object::Blank(node));
        }
        self.predicate_object_list(Subject::Blank(node.clone()))?;
        self.cursor.skip_trivia();
        if !self.cursor.starts_with("]") {
            return Err(self.cursor.error("expected ']' closing blank-node property list"));
        }
        self.cursor.bump(1);
        Ok(Object::Blank(node))
    }

    fn blank_node_label(&mut self) -> std::result::Result<BlankNode, ParseError> {
        let m = parse::BLANK_NODE_LABEL
            .find(self.cursor.input)
            .ok_or_else(|| self.cursor.error("invalid blank node label"))?;
        let label = m.as_str().to_owned();
        self.cursor.bump(m.end());
        let node = self.bnodes.entry(label).or_insert_with(BlankNode::fresh).clone();
        Ok(node)
    }

    fn iri_term(&mut self) -> std::result::Result<Iri, ParseError> {
        self.cursor.skip_trivia();
        if self.cursor.starts_with("<") {
            let text = self.scan_iriref()?;
            let resolved = iri::resolve(&text, self.base.as_deref()).map_err(|e| self.cursor.error_from(e))?;
            return Iri::parse(resolved).map_err(|e| self.cursor.error_from(e));
        }
        self.prefixed_name()
    }

    fn prefixed_name(&mut self) -> std::result::Result<Iri, ParseError> {
        let prefix_len = parse::PN_PREFIX.find(self.cursor.input).map(|m| m.end()).unwrap_or(0);
        let has_colon = self.cursor.input.as_bytes().get(prefix_len) == Some(&b':');

        if !has_colon {
            if self.flags.allow_identifiers_without_colon && prefix_len > 0 {
                let local = &self.cursor.input[..prefix_len];
                let local = local.to_owned();
                self.cursor.bump(prefix_len);
                let base = self
                    .base
                    .clone()
                    .ok_or_else(|| self.cursor.error_from(Error::BaseIriRequired(local.clone())))?;
                let resolved = iri::resolve(&local, Some(&base)).map_err(|e| self.cursor.error_from(e))?;
                return Iri::parse(resolved).map_err(|e| self.cursor.error_from(e));
            }
            return Err(self.cursor.error("expected prefixed name or IRI reference"));
        }

        let prefix_name = self.cursor.input[..prefix_len].to_owned();
        self.cursor.bump(prefix_len);
        self.cursor.bump(1); // ':'

        let local_text = self.scan_pn_local()?;
        if !pnlocal::is_valid_pn_local(&local_text) && !local_text.is_empty() {
            return Err(self.cursor.error(format!("invalid local name {:?}", local_text)));
        }
        if let Some(first) = local_text.chars().next() {
            if first.is_ascii_digit() && !self.flags.allow_digit_in_local_name {
                return Err(self.cursor.error("local name must not start with a digit"));
            }
        }

        let namespace = self
            .prefixes
            .namespace_for(&prefix_name)
            .map(|s| s.to_owned())
            .ok_or_else(|| self.cursor.error_from(Error::UnknownPrefix(prefix_name.clone())))?;

        let local_decoded = decode_pn_local_escapes(&local_text);
        Iri::parse(format!("{}{}", namespace, local_decoded)).map_err(|e| self.cursor.error_from(e))
    }

    fn scan_pn_prefix_before_colon(&mut self) -> std::result::Result<String, ParseError> {
        let len = parse::PN_PREFIX.find(self.cursor.input).map(|m| m.end()).unwrap_or(0);
        let text = self.cursor.input[..len].to_owned();
        self.cursor.bump(len);
        Ok(text)
    }

    fn scan_iriref(&mut self) -> std::result::Result<String, ParseError> {
        let m = parse::IRIREF
            .find(self.cursor.input)
            .ok_or_else(|| self.cursor.error("expected IRI reference (<...>)"))?;
        let matched = m.as_str().to_owned();
        self.cursor.bump(matched.len());
        let body = &matched[1..matched.len() - 1];
        Ok(parse::unescape_iri(body))
    }

    /// Greedily scans a `PN_LOCAL` candidate: `PN_CHARS`/`:`/`.`/PLX
    /// escapes, then trims any trailing `.` run (never part of a valid
    /// local name, and otherwise ambiguous with the statement terminator).
    fn scan_pn_local(&mut self) -> std::result::Result<String, ParseError> {
        let input = self.cursor.input;
        let mut end = 0;
        let bytes = input.as_bytes();
        while end < bytes.len() {
            if bytes[end] == b'%' && end + 2 < bytes.len() && bytes[end + 1].is_ascii_hexdigit() && bytes[end + 2].is_ascii_hexdigit() {
                end += 3;
                continue;
            }
            if bytes[end] == b'\\' && end + 1 < bytes.len() {
                end += 2;
                continue;
            }
            let rest = &input[end..];
            if let Some(c) = rest.chars().next() {
                if c == ':' || c == '.' || is_pn_char(c) {
                    end += c.len_utf8();
                    continue;
                }
            }
            break;
        }
        while end > 0 && input.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        let text = input[..end].to_owned();
        self.cursor.bump(end);
        Ok(text)
    }
}

fn object_to_subject(o: Object) -> Subject {
    match o {
        Object::Iri(i) => Subject::Iri(i),
        Object::Blank(b) => Subject::Blank(b),
        Object::Literal(_) => unreachable!("collections and blank-node property lists never yield a literal head"),
    }
}

fn is_pn_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '\u{00B7}'
}

fn word_boundary_after(input: &str, byte_offset: usize) -> bool {
    input[byte_offset..].chars().next().map(|c| !is_pn_char(c)).unwrap_or(true)
}

fn decode_pn_local_escapes(local: &str) -> String {
    let mut out = String::with_capacity(local.len());
    let mut chars = local.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else if c == '%' {
            let h1 = chars.next();
            let h2 = chars.next();
            out.push('%');
            if let Some(h1) = h1 {
                out.push(h1);
            }
            if let Some(h2) = h2 {
                out.push(h2);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Pattern;

    #[test]
    fn s1_prefix_and_simple_triple() {
        let g = decode("@prefix ex: <http://example.org/> .\nex:a ex:b \"c\" .", None).unwrap();
        assert_eq!(g.size(), 1);
        let t = g.triples().next().unwrap();
        assert_eq!(t.subject(), &Subject::Iri(Iri::parse("http://example.org/a").unwrap()));
        assert_eq!(t.predicate(), &Iri::parse("http://example.org/b").unwrap());
        assert_eq!(t.object(), &Object::Literal(Literal::new_string("c")));
    }

    #[test]
    fn s2_collection() {
        let g = decode("<s> <p> (\"x\" \"y\") .", Some("http://ex/")).unwrap();
        assert_eq!(g.size(), 5);
        let nil = &*ns::rdf::NIL;
        let rest_to_nil = g.find(&Pattern { predicate: Some(ns::rdf::REST.clone()), object: Some(Object::Iri(nil.clone())), ..Default::default() });
        assert_eq!(rest_to_nil.len(), 1);
    }

    #[test]
    fn s3_nested_blank_node_property_list() {
        let g = decode("<s> <p> [ <q> \"v\" ] .", Some("http://ex/")).unwrap();
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn s6_flag_gated_parse_requires_both_flags() {
        let input = "prefix ex: <http://ex/> \nex:a ex:b \"c\" .";
        assert!(decode(input, None).is_err());

        let mut flags = DecoderFlags::new();
        flags.set_allow_prefix_without_at_sign(true).set_allow_missing_dot_after_prefix(true);
        let g = decode_with(input, None, &flags, None).unwrap();
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn boundary_empty_input_is_empty_graph() {
        let g = decode("", None).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn boundary_decimal_is_not_normalized() {
        let g = decode("<s> <p> 0.0 .", Some("http://ex/")).unwrap();
        let t = g.triples().next().unwrap();
        match t.object() {
            Object::Literal(l) => {
                assert_eq!(l.lexical_form(), "0.0");
                assert_eq!(l.datatype(), &*ns::xsd::DECIMAL);
            }
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn boundary_invalid_unicode_escape_preserved() {
        let g = decode(r#"<s> <p> "\u123" ."#, Some("http://ex/")).unwrap();
        let t = g.triples().next().unwrap();
        match t.object() {
            Object::Literal(l) => assert_eq!(l.lexical_form(), r"\u123"),
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn repeated_blank_label_aliases_same_node() {
        let g = decode("_:a <http://ex/p> _:a .", None).unwrap();
        let t = g.triples().next().unwrap();
        let s = match t.subject() {
            Subject::Blank(b) => b.clone(),
            _ => panic!("expected blank subject"),
        };
        let o = match t.object() {
            Object::Blank(b) => b.clone(),
            _ => panic!("expected blank object"),
        };
        assert_eq!(s, o);
    }

    #[test]
    fn anonymous_blank_nodes_never_alias() {
        let g = decode("[] <http://ex/p> [] .", None).unwrap();
        let t = g.triples().next().unwrap();
        let s = match t.subject() {
            Subject::Blank(b) => b.clone(),
            _ => panic!("expected blank subject"),
        };
        let o = match t.object() {
            Object::Blank(b) => b.clone(),
            _ => panic!("expected blank object"),
        };
        assert_ne!(s, o);
    }

    #[test]
    fn trailing_semicolon_is_accepted() {
        let g = decode("@prefix ex: <http://ex/> .\nex:a ex:b ex:c ; .", None).unwrap();
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn unknown_prefix_raises_unknown_prefix_error() {
        let err = decode("ex:a ex:b ex:c .", None).unwrap_err();
        assert!(matches!(err, Error::UnknownPrefix(ref p) if p == "ex"));
    }

    #[test]
    fn relative_iri_with_no_base_raises_base_iri_required() {
        let err = decode("<s> <p> <o> .", None).unwrap_err();
        assert!(matches!(err, Error::BaseIriRequired(_)));
    }

    #[test]
    fn malformed_iri_raises_invalid_iri() {
        // "1bad" isn't a valid RFC 3986 scheme (must start with a letter),
        // so this is lexically an IRIREF but fails `Iri::parse`'s
        // scheme check rather than `iri::resolve` (which only looks for a
        // `:` to decide a reference is already absolute).
        let err = decode("<1bad:thing> <http://ex/p> \"v\" .", None).unwrap_err();
        assert!(matches!(err, Error::InvalidIri { .. }));
    }

    #[test]
    fn unterminated_string_raises_syntax_error() {
        let err = decode("<http://ex/s> <http://ex/p> \"unterminated .", None).unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
    }

    #[test]
    fn auto_add_common_prefixes_recovers_well_known() {
        let mut flags = DecoderFlags::new();
        flags.set_auto_add_common_prefixes(true);
        let g = decode_with("<http://ex/s> rdf:type <http://ex/T> .", None, &flags, None).unwrap();
        assert_eq!(g.size(), 1);
    }
}
