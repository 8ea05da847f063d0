//! The Turtle encoder: a two-pass pretty-printer, grounded on §4.F.1's
//! `Scan`/`Emit` split, itself modeled on the teacher's `parse::Context`
//! accumulator-struct shape (there it accumulates while parsing; here pass 1
//! accumulates a plan and pass 2 only ever writes).

use crate::error::{Error, Result};
use crate::graph::{Graph, Pattern};
use crate::iri::{self, RelativizeOptions, RelativizePreset};
use crate::ns;
use crate::pnlocal::is_valid_pn_local;
use crate::prefix::PrefixRegistry;
use crate::term::{BlankNode, Iri, Literal, Object, Predicate, Subject, Term, Triple};
use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

/// Tuning knobs for [`encode`]. Mirrors the teacher's `Config<F, TD>` /
/// `Prolog<F, TD>` builder pattern: a plain struct with a `Default` impl and
/// `set_*` mutators returning `&mut Self`.
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    pub custom_prefixes: HashMap<String, String>,
    pub generate_missing_prefixes: bool,
    pub include_base_declaration: bool,
    pub use_numeric_local_names: bool,
    pub iri_relativization: RelativizeOptions,
    pub object_list_break_after: usize,
    pub collection_item_break_after: usize,
    pub inline_blank_node_max_width: usize,
    pub inline_blank_node_max_triples: usize,
    pub pretty_print_collections: bool,
    pub render_fragments_as_prefixed: bool,
    /// When an IRI's text contains whitespace, percent-escape it instead of
    /// raising [`Error::Constraint`]. Off by default, matching the source
    /// behavior this is grounded on (raises unless escaping is explicitly
    /// requested; see DESIGN.md "Open Question decisions").
    pub escape_disallowed_iri_characters: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            custom_prefixes: HashMap::new(),
            generate_missing_prefixes: true,
            include_base_declaration: true,
            use_numeric_local_names: false,
            iri_relativization: RelativizeOptions::full(),
            object_list_break_after: 3,
            collection_item_break_after: 3,
            inline_blank_node_max_width: 60,
            inline_blank_node_max_triples: 3,
            pretty_print_collections: true,
            render_fragments_as_prefixed: true,
            escape_disallowed_iri_characters: false,
        }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_custom_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> &mut Self {
        self.custom_prefixes.insert(prefix.into(), namespace.into());
        self
    }

    pub fn set_generate_missing_prefixes(&mut self, v: bool) -> &mut Self {
        self.generate_missing_prefixes = v;
        self
    }

    pub fn set_include_base_declaration(&mut self, v: bool) -> &mut Self {
        self.include_base_declaration = v;
        self
    }

    pub fn set_use_numeric_local_names(&mut self, v: bool) -> &mut Self {
        self.use_numeric_local_names = v;
        self
    }

    pub fn set_iri_relativization(&mut self, opts: RelativizeOptions) -> &mut Self {
        self.iri_relativization = opts;
        self
    }

    pub fn set_escape_disallowed_iri_characters(&mut self, v: bool) -> &mut Self {
        self.escape_disallowed_iri_characters = v;
        self
    }
}

/// Pass 1: scans the graph and produces an emission plan. Grounded on the
/// teacher's `Context` accumulator shape.
struct Scan {
    object_refcount: HashMap<Term, usize>,
    collection_heads: HashSet<BlankNode>,
    collection_members: HashSet<BlankNode>,
    namespace_counts: HashMap<String, usize>,
    required_prefixes: PrefixRegistry,
    base_uri: Option<String>,
}

fn namespace_split(iri: &Iri) -> (String, String) {
    let s = iri.as_str();
    let idx = s.rfind(['#', '/']).map(|i| i + 1).unwrap_or(0);
    (s[..idx].to_owned(), s[idx..].to_owned())
}

/// Walks the `rdf:rest` chain from `head`, returning the ordered list items
/// if every node satisfies the collection-candidate invariants from §4.F,
/// else `None`.
fn collection_items(graph: &Graph, head: &BlankNode) -> Option<Vec<Object>> {
    let mut items = Vec::new();
    let mut current = head.clone();
    loop {
        let node_subject = Subject::Blank(current.clone());
        let triples: Vec<&Triple> =
            graph.find(&Pattern { subject: Some(node_subject.clone()), ..Default::default() }).into_iter().collect();
        if triples.len() != 2 {
            return None;
        }
        let first = triples.iter().find(|t| *t.predicate() == *ns::rdf::FIRST);
        let rest = triples.iter().find(|t| *t.predicate() == *ns::rdf::REST);
        let (first, rest) = match (first, rest) {
            (Some(f), Some(r)) => (f, r),
            _ => return None,
        };
        items.push(first.object().clone());
        match rest.object() {
            Object::Iri(i) if *i == *ns::rdf::NIL => return Some(items),
            Object::Blank(b) => current = b.clone(),
            _ => return None,
        }
    }
}

fn referenced_object_count(graph: &Graph, term: &Term) -> usize {
    match term {
        Term::Blank(b) => graph
            .find(&Pattern { object: Some(Object::Blank(b.clone())), ..Default::default() })
            .len(),
        _ => 0,
    }
}

impl Scan {
    fn run(graph: &Graph, options: &EncoderOptions, base_uri: Option<&str>) -> Self {
        let mut object_refcount: HashMap<Term, usize> = HashMap::new();
        let mut namespace_counts: HashMap<String, usize> = HashMap::new();

        for t in graph.triples() {
            let obj_term: Term = t.object().clone().into();
            *object_refcount.entry(obj_term).or_insert(0) += 1;

            let (ns_p, _) = namespace_split(t.predicate());
            *namespace_counts.entry(ns_p).or_insert(0) += 1;
            if let Subject::Iri(iri) = t.subject() {
                let (ns_s, _) = namespace_split(iri);
                *namespace_counts.entry(ns_s).or_insert(0) += 1;
            }
            if let Object::Iri(iri) = t.object() {
                let (ns_o, _) = namespace_split(iri);
                *namespace_counts.entry(ns_o).or_insert(0) += 1;
            }
            if let Object::Literal(lit) = t.object() {
                let (ns_dt, _) = namespace_split(lit.datatype());
                *namespace_counts.entry(ns_dt).or_insert(0) += 1;
            }
        }

        let mut collection_heads = HashSet::new();
        let mut collection_members = HashSet::new();
        let mut blank_candidates: HashSet<BlankNode> = HashSet::new();
        for t in graph.triples() {
            if let Subject::Blank(b) = t.subject() {
                blank_candidates.insert(b.clone());
            }
            if let Object::Blank(b) = t.object() {
                blank_candidates.insert(b.clone());
            }
        }
        for b in &blank_candidates {
            if let Some(items) = collection_items(graph, b) {
                let ref_count = referenced_object_count(graph, &Term::Blank(b.clone()));
                if ref_count <= 1 {
                    collection_heads.insert(b.clone());
                    let mut node = b.clone();
                    loop {
                        collection_members.insert(node.clone());
                        let rest = graph
                            .find(&Pattern {
                                subject: Some(Subject::Blank(node.clone())),
                                predicate: Some(ns::rdf::REST.clone()),
                                ..Default::default()
                            })
                            .into_iter()
                            .next();
                        match rest.map(|t| t.object().clone()) {
                            Some(Object::Blank(next)) => node = next,
                            _ => break,
                        }
                    }
                    let _ = items;
                }
            }
        }

        let mut required_prefixes =
            if options.generate_missing_prefixes { PrefixRegistry::with_common_prefixes() } else { PrefixRegistry::new() };
        for (p, ns) in &options.custom_prefixes {
            required_prefixes.bind(p.clone(), ns.clone());
        }
        if let Some(base) = base_uri {
            if options.render_fragments_as_prefixed && base.ends_with('#') {
                required_prefixes.bind("", base.to_owned());
            }
        }
        if options.generate_missing_prefixes {
            let mut namespaces: Vec<(&String, &usize)> = namespace_counts.iter().collect();
            namespaces.sort_by(|a, b| a.0.cmp(b.0));
            for (namespace, count) in namespaces {
                if namespace.is_empty() {
                    continue;
                }
                let already_bound = required_prefixes.is_explicitly_bound(namespace);
                let well_known = ns::rdf::PREFIX == *namespace
                    || ns::rdfs::PREFIX == *namespace
                    || ns::xsd::PREFIX == *namespace;
                if already_bound {
                    continue;
                }
                if *count >= 2 || well_known {
                    required_prefixes.synthesize(namespace);
                }
            }
        }

        Scan {
            object_refcount,
            collection_heads,
            collection_members,
            namespace_counts,
            required_prefixes,
            base_uri: base_uri.map(|s| s.to_owned()),
        }
    }

    fn is_collection_head(&self, b: &BlankNode) -> bool {
        self.collection_heads.contains(b)
    }

    fn is_inlinable(&self, b: &BlankNode) -> bool {
        if self.collection_heads.contains(b) || self.collection_members.contains(b) {
            return false;
        }
        self.object_refcount.get(&Term::Blank(b.clone())).copied().unwrap_or(0) <= 1
    }
}

/// Renders an IRI term, preferring a prefixed form when one is available.
/// Raises [`Error::Constraint`] for an IRI whose text contains whitespace
/// unless `options.escape_disallowed_iri_characters` asks for percent-escaping
/// instead (see DESIGN.md "Open Question decisions", item 2).
fn render_iri(iri: &Iri, scan: &Scan, options: &EncoderOptions, relativize_as_predicate: bool) -> Result<String> {
    let (namespace, local) = namespace_split(iri);
    if let Some(prefix) = scan.required_prefixes.prefix_for(&namespace) {
        let digit_ok = options.use_numeric_local_names || local.chars().next().map(|c| !c.is_ascii_digit()).unwrap_or(true);
        if digit_ok && is_valid_pn_local(&local) {
            return Ok(format!("{}:{}", prefix, local));
        }
    }
    if !relativize_as_predicate {
        if let Some(base) = &scan.base_uri {
            if options.iri_relativization.preset != RelativizePreset::None {
                let rel = iri::relativize(iri.as_str(), base, &options.iri_relativization);
                return Ok(format!("<{}>", escape_iri_whitespace(&rel, options)?));
            }
        }
    }
    Ok(format!("<{}>", escape_iri_whitespace(iri.as_str(), options)?))
}

fn escape_iri_whitespace(text: &str, options: &EncoderOptions) -> Result<String> {
    if !text.contains(char::is_whitespace) {
        return Ok(text.to_owned());
    }
    if !options.escape_disallowed_iri_characters {
        return Err(Error::Constraint(format!("IRI {:?} contains disallowed whitespace", text)));
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).as_bytes() {
                write!(out, "%{:02X}", b).unwrap();
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Renders a literal, including its datatype position, which goes through
/// [`render_iri`] exactly like any other IRI term so a bound/synthesized
/// prefix (e.g. `xsd:`) is used instead of a bracketed full IRI.
fn render_literal(lit: &Literal, scan: &Scan, options: &EncoderOptions) -> Result<String> {
    let escaped = escape_string(lit.lexical_form());
    if let Some(lang) = lit.language() {
        return Ok(format!("\"{}\"@{}", escaped, lang));
    }
    if *lit.datatype() == *ns::xsd::STRING {
        return Ok(format!("\"{}\"", escaped));
    }
    let datatype = render_iri(lit.datatype(), scan, options, false)?;
    Ok(format!("\"{}\"^^{}", escaped, datatype))
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

fn render_blank_label(b: &BlankNode, labels: &mut HashMap<BlankNode, String>) -> String {
    let next_id = labels.len();
    let label = labels.entry(b.clone()).or_insert_with(|| format!("_:b{}", next_id));
    label.clone()
}

/// Encodes `graph` as Turtle text.
pub fn encode(graph: &Graph, options: &EncoderOptions, base_uri: Option<&str>) -> Result<String> {
    let scan = Scan::run(graph, options, base_uri);
    let mut out = String::new();
    let mut blank_labels: HashMap<BlankNode, String> = HashMap::new();

    if let Some(base) = base_uri {
        if options.include_base_declaration {
            writeln!(out, "@base <{}> .", base).map_err(|_| Error::Io(std::io::Error::from(std::io::ErrorKind::Other)))?;
        }
    }
    let mut prefixes: Vec<(String, String)> =
        scan.required_prefixes.bindings().map(|(p, n)| (p.to_owned(), n.to_owned())).collect();
    prefixes.sort_by(|a, b| a.0.cmp(&b.0));
    for (prefix, namespace) in &prefixes {
        writeln!(out, "@prefix {}: <{}> .", prefix, namespace).unwrap();
    }
    if !prefixes.is_empty() || base_uri.is_some() {
        out.push('\n');
    }

    let mut top_level_subjects: Vec<Subject> = Vec::new();
    let mut seen_subjects: HashSet<Term> = HashSet::new();
    for t in graph.triples() {
        let term: Term = t.subject().clone().into();
        if seen_subjects.insert(term.clone()) {
            let skip = matches!(t.subject(), Subject::Blank(b) if scan.is_inlinable(b) || scan.collection_members.contains(b));
            if !skip {
                top_level_subjects.push(t.subject().clone());
            }
        }
    }
    top_level_subjects.sort_by(|a, b| match (a, b) {
        (Subject::Iri(x), Subject::Iri(y)) => x.as_str().cmp(y.as_str()),
        (Subject::Iri(_), Subject::Blank(_)) => std::cmp::Ordering::Less,
        (Subject::Blank(_), Subject::Iri(_)) => std::cmp::Ordering::Greater,
        (Subject::Blank(x), Subject::Blank(y)) => x.id().cmp(&y.id()),
    });

    for (i, subject) in top_level_subjects.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_subject_block(&mut out, graph, &scan, options, subject, &mut blank_labels)?;
    }

    Ok(out)
}

fn write_subject_block(
    out: &mut String,
    graph: &Graph,
    scan: &Scan,
    options: &EncoderOptions,
    subject: &Subject,
    blank_labels: &mut HashMap<BlankNode, String>,
) -> Result<()> {
    write_subject_term(out, subject, scan, options, blank_labels)?;
    out.push(' ');

    let predicates = grouped_predicates(graph, subject);
    for (pi, (predicate, objects)) in predicates.iter().enumerate() {
        if pi > 0 {
            out.push_str(" ;\n    ");
        }
        write_predicate_term(out, predicate, scan, options)?;
        out.push(' ');
        for (oi, object) in objects.iter().enumerate() {
            if oi > 0 {
                out.push_str(if objects.len() > options.object_list_break_after { ",\n        " } else { ", " });
            }
            write_object_term(out, graph, scan, options, object, blank_labels)?;
        }
    }
    out.push_str(" .\n");
    Ok(())
}

fn grouped_predicates(graph: &Graph, subject: &Subject) -> Vec<(Predicate, Vec<Object>)> {
    let mut order: Vec<Predicate> = Vec::new();
    let mut grouped: HashMap<Predicate, Vec<Object>> = HashMap::new();
    for t in graph.find(&Pattern { subject: Some(subject.clone()), ..Default::default() }) {
        if !grouped.contains_key(t.predicate()) {
            order.push(t.predicate().clone());
        }
        grouped.entry(t.predicate().clone()).or_default().push(t.object().clone());
    }
    order.into_iter().map(|p| { let objs = grouped.remove(&p).unwrap_or_default(); (p, objs) }).collect()
}

fn write_subject_term(
    out: &mut String,
    subject: &Subject,
    scan: &Scan,
    options: &EncoderOptions,
    blank_labels: &mut HashMap<BlankNode, String>,
) -> Result<()> {
    match subject {
        Subject::Iri(iri) => out.push_str(&render_iri(iri, scan, options, false)?),
        Subject::Blank(b) => out.push_str(&render_blank_label(b, blank_labels)),
    }
    Ok(())
}

fn write_predicate_term(out: &mut String, predicate: &Predicate, scan: &Scan, options: &EncoderOptions) -> Result<()> {
    if *predicate == *ns::rdf::TYPE {
        out.push('a');
        return Ok(());
    }
    out.push_str(&render_iri(predicate, scan, options, true)?);
    Ok(())
}

fn write_object_term(
    out: &mut String,
    graph: &Graph,
    scan: &Scan,
    options: &EncoderOptions,
    object: &Object,
    blank_labels: &mut HashMap<BlankNode, String>,
) -> Result<()> {
    match object {
        Object::Iri(iri) if *iri == *ns::rdf::NIL => {
            out.push_str("()");
            Ok(())
        }
        Object::Iri(iri) => {
            out.push_str(&render_iri(iri, scan, options, false)?);
            Ok(())
        }
        Object::Literal(lit) => {
            out.push_str(&render_literal(lit, scan, options)?);
            Ok(())
        }
        Object::Blank(b) => {
            if scan.is_collection_head(b) {
                write_collection(out, graph, scan, options, b, blank_labels)
            } else if scan.is_inlinable(b) {
                write_inline_blank_node(out, graph, scan, options, b, blank_labels)
            } else {
                out.push_str(&render_blank_label(b, blank_labels));
                Ok(())
            }
        }
    }
}

fn write_collection(
    out: &mut String,
    graph: &Graph,
    scan: &Scan,
    options: &EncoderOptions,
    head: &BlankNode,
    blank_labels: &mut HashMap<BlankNode, String>,
) -> Result<()> {
    let items = collection_items(graph, head).unwrap_or_default();
    out.push('(');
    let multiline = options.pretty_print_collections && items.len() > options.collection_item_break_after;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(if multiline { '\n' } else { ' ' });
            if multiline {
                out.push_str("    ");
            }
        } else if multiline {
            out.push('\n');
            out.push_str("    ");
        } else {
            out.push(' ');
        }
        write_object_term(out, graph, scan, options, item, blank_labels)?;
    }
    if multiline {
        out.push('\n');
    } else {
        out.push(' ');
    }
    out.push(')');
    Ok(())
}

fn write_inline_blank_node(
    out: &mut String,
    graph: &Graph,
    scan: &Scan,
    options: &EncoderOptions,
    node: &BlankNode,
    blank_labels: &mut HashMap<BlankNode, String>,
) -> Result<()> {
    let predicates = grouped_predicates(graph, &Subject::Blank(node.clone()));
    if predicates.is_empty() {
        out.push_str("[]");
        return Ok(());
    }
    out.push_str("[ ");
    for (pi, (predicate, objects)) in predicates.iter().enumerate() {
        if pi > 0 {
            out.push_str(" ; ");
        }
        write_predicate_term(out, predicate, scan, options)?;
        out.push(' ');
        for (oi, object) in objects.iter().enumerate() {
            if oi > 0 {
                out.push_str(", ");
            }
            write_object_term(out, graph, scan, options, object, blank_labels)?;
        }
    }
    out.push_str(" ]");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decoder::decode;

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn s4_round_trip_determinism() {
        let mut g = Graph::new();
        g.add(Triple::new(Subject::from(iri("http://ex/s")), ns::rdf::TYPE.clone(), Object::from(iri("http://ex/T"))));
        g.add(Triple::new(Subject::from(iri("http://ex/s")), iri("http://ex/n"), Object::from(Literal::new_string("x"))));

        let options = EncoderOptions::default();
        let text = encode(&g, &options, None).unwrap();
        assert!(text.contains(" a "));

        let decoded = decode(&text, None).unwrap();
        assert_eq!(decoded, g);
    }

    #[test]
    fn encode_then_decode_then_encode_is_a_fixed_point() {
        let mut g = Graph::new();
        g.add(Triple::new(
            Subject::from(iri("http://ex/s")),
            iri("http://ex/p"),
            Object::from(Literal::new_string("v")),
        ));
        let options = EncoderOptions::default();
        let once = encode(&g, &options, None).unwrap();
        let decoded = decode(&once, None).unwrap();
        let twice = encode(&decoded, &options, None).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn whitespace_in_iri_is_a_constraint_violation_by_default() {
        let mut g = Graph::new();
        g.add(Triple::new(
            Subject::from(Iri::new_unvalidated("http://ex/s p".to_owned())),
            iri("http://ex/p"),
            Object::from(Literal::new_string("v")),
        ));
        let err = encode(&g, &EncoderOptions::default(), None).unwrap_err();
        assert!(matches!(err, Error::Constraint(_)));
    }

    #[test]
    fn whitespace_in_iri_is_percent_escaped_when_requested() {
        let mut g = Graph::new();
        g.add(Triple::new(
            Subject::from(Iri::new_unvalidated("http://ex/s p".to_owned())),
            iri("http://ex/p"),
            Object::from(Literal::new_string("v")),
        ));
        let mut options = EncoderOptions::default();
        options.set_escape_disallowed_iri_characters(true);
        let text = encode(&g, &options, None).unwrap();
        assert!(text.contains("http://ex/s%20p"));
    }

    #[test]
    fn typed_literal_datatype_is_counted_and_rendered_with_prefix() {
        let mut g = Graph::new();
        g.add(Triple::new(
            Subject::from(iri("http://ex/s")),
            iri("http://ex/n"),
            Object::from(Literal::new_integer("3")),
        ));

        let options = EncoderOptions::default();
        let text = encode(&g, &options, None).unwrap();
        assert!(text.contains("@prefix xsd: <http://www.w3.org/2001/XMLSchema#> ."));
        assert!(text.contains("\"3\"^^xsd:integer"));
        assert!(!text.contains("<http://www.w3.org/2001/XMLSchema#integer>"));

        let decoded = decode(&text, None).unwrap();
        assert_eq!(decoded, g);
    }

    #[test]
    fn collection_round_trips() {
        let mut g = Graph::new();
        let h = BlankNode::fresh();
        let tail = BlankNode::fresh();
        g.add(Triple::new(Subject::from(iri("http://ex/s")), iri("http://ex/p"), Object::Blank(h.clone())));
        g.add(Triple::new(Subject::Blank(h.clone()), ns::rdf::FIRST.clone(), Object::from(Literal::new_string("x"))));
        g.add(Triple::new(Subject::Blank(h.clone()), ns::rdf::REST.clone(), Object::Blank(tail.clone())));
        g.add(Triple::new(Subject::Blank(tail.clone()), ns::rdf::FIRST.clone(), Object::from(Literal::new_string("y"))));
        g.add(Triple::new(Subject::Blank(tail), ns::rdf::REST.clone(), Object::Iri(ns::rdf::NIL.clone())));

        let options = EncoderOptions::default();
        let text = encode(&g, &options, None).unwrap();
        assert!(text.contains("(\"x\" \"y\")") || text.contains("( \"x\" \"y\" )") || text.contains("(\n    \"x\""));

        // Blank-node identity isn't preserved across a decode, only
        // isomorphism (§8 invariant 1), so compare structure rather than
        // `Graph`'s strict-identity equality: same triple count, and the
        // collection's literal payload survives the round trip.
        let decoded = decode(&text, None).unwrap();
        assert_eq!(decoded.size(), g.size());
        assert_eq!(
            decoded.find(&Pattern { predicate: Some(ns::rdf::FIRST.clone()), ..Default::default() }).len(),
            2
        );
    }

    #[test]
    fn inline_blank_node_round_trips() {
        let mut g = Graph::new();
        let b = BlankNode::fresh();
        g.add(Triple::new(Subject::from(iri("http://ex/s")), iri("http://ex/p"), Object::Blank(b.clone())));
        g.add(Triple::new(Subject::Blank(b), iri("http://ex/q"), Object::from(Literal::new_string("v"))));

        let options = EncoderOptions::default();
        let text = encode(&g, &options, None).unwrap();
        assert!(text.contains('['));

        let decoded = decode(&text, None).unwrap();
        assert_eq!(decoded.size(), g.size());
        assert_eq!(
            decoded
                .find(&Pattern { predicate: Some(iri("http://ex/q")), object: Some(Object::from(Literal::new_string("v"))), ..Default::default() })
                .len(),
            1
        );
    }
}
