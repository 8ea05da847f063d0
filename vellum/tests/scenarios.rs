//! Crate-level scenario tests (S1-S6) and cross-cutting invariants,
//! exercised through the public API only, the way a downstream consumer
//! of this crate would.

use vellum::codec::TURTLE_MIME;
use vellum::ns;
use vellum::{
    can_parse, decode, decode_with_flags, encode, relativize, resolve, DecoderFlags, Object, Pattern,
    RelativizeOptions, Subject,
};

#[test]
fn s1_prefix_and_simple_triple() {
    let text = "@prefix ex: <http://example.org/> .\nex:a ex:b \"c\" .";
    let graph = decode(text, None, None).unwrap();
    assert_eq!(graph.size(), 1);
    let triple = graph.triples().next().unwrap();
    match triple.subject() {
        Subject::Iri(iri) => assert_eq!(iri.as_str(), "http://example.org/a"),
        Subject::Blank(_) => panic!("expected an IRI subject"),
    }
}

#[test]
fn s2_collection() {
    let text = "<s> <p> (\"x\" \"y\") .";
    let graph = decode(text, None, Some("http://ex/")).unwrap();
    assert_eq!(graph.size(), 5);
    let firsts = graph.find(&Pattern { predicate: Some(ns::rdf::FIRST.clone()), ..Default::default() });
    assert_eq!(firsts.len(), 2);
}

#[test]
fn s3_nested_blank_node_property_list() {
    let text = "<s> <p> [ <q> \"v\" ] .";
    let graph = decode(text, None, Some("http://ex/")).unwrap();
    assert_eq!(graph.size(), 2);
}

#[test]
fn s4_round_trip_determinism() {
    let text = "@prefix ex: <http://ex/> .\nex:s a ex:T ;\n    ex:n \"x\" .\n";
    let graph = decode(text, None, None).unwrap();
    let out = encode(&graph, None, None).unwrap();
    assert!(out.contains(" a "));
    let roundtripped = decode(&out, None, None).unwrap();
    assert_eq!(roundtripped, graph);
}

#[test]
fn s5_relativization() {
    let opts = RelativizeOptions::full();
    assert_eq!(relativize("http://ex/a/b/c", "http://ex/a/b/", &opts), "c");
    assert_eq!(relativize("http://ex/x", "http://ex/a/very/deep/path", &opts), "/x");
    assert_eq!(relativize("http://ex/a", "http://ex/a", &opts), "");
}

#[test]
fn s6_flag_gated_parse() {
    let text = "prefix ex: <http://ex/> ex:a ex:b \"c\" .";

    assert!(decode(text, None, None).is_err());

    let mut flags = DecoderFlags::default();
    flags.set_allow_prefix_without_at_sign(true).set_allow_missing_dot_after_prefix(true);
    let graph = decode_with_flags(text, Some(TURTLE_MIME), None, &flags).unwrap();
    assert_eq!(graph.size(), 1);
}

#[test]
fn invariant_relativize_resolve_roundtrip() {
    let base = "http://ex/a/b/";
    let target = "http://ex/a/b/c/d";
    let rel = relativize(target, base, &RelativizeOptions::full());
    assert_eq!(resolve(&rel, Some(base)).unwrap(), target);
}

#[test]
fn invariant_blank_node_labels_never_alias_across_decodes() {
    let g1 = decode("[] <http://ex/p> \"v\" .", None, Some("http://ex/")).unwrap();
    let g2 = decode("[] <http://ex/p> \"v\" .", None, Some("http://ex/")).unwrap();
    assert_eq!(g1.size(), 1);
    assert_eq!(g2.size(), 1);
}

#[test]
fn boundary_empty_input_decodes_to_empty_graph() {
    let graph = decode("", None, None).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn can_parse_sniffs_turtle_vs_other_formats() {
    assert!(can_parse("@prefix ex: <http://ex/> ."));
    assert!(!can_parse("<html><body></body></html>"));
}

#[test]
fn decode_of_sole_nil_object_never_materializes_a_blank_node() {
    let graph = decode("<http://ex/s> <http://ex/p> () .", None, None).unwrap();
    assert_eq!(graph.size(), 1);
    let triple = graph.triples().next().unwrap();
    assert!(matches!(triple.object(), Object::Iri(_)));
}
