//! Prefix bindings: a document-scoped registry seeded from a curated
//! well-known table, plus the synthesis algorithm the encoder uses to invent
//! a prefix for a namespace nobody named.
//!
//! Grounded on the teacher's `common::Prolog<F, TD>` (`base` + `prefixes:
//! HashMap<String, Term<TD>>` with builder-style mutators).

use crate::pnlocal::is_valid_pn_prefix;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Namespace IRI -> canonical prefix, seeded with the handful of
    /// vocabularies common enough to warrant auto-recognition.
    static ref WELL_KNOWN: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf");
        m.insert("http://www.w3.org/2000/01/rdf-schema#", "rdfs");
        m.insert("http://www.w3.org/2001/XMLSchema#", "xsd");
        m.insert("http://www.w3.org/2002/07/owl#", "owl");
        m.insert("http://xmlns.com/foaf/0.1/", "foaf");
        m.insert("http://purl.org/dc/terms/", "dcterms");
        m.insert("http://purl.org/dc/elements/1.1/", "dc");
        m.insert("http://www.w3.org/ns/shacl#", "sh");
        m.insert("http://www.w3.org/ns/prov#", "prov");
        m.insert("http://schema.org/", "schema");
        m
    };
}

/// A document's in-scope prefix bindings, seeded lazily from the well-known
/// table when `auto_add_common_prefixes` is enabled.
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    bindings: HashMap<String, String>,
    auto_common: bool,
}

impl PrefixRegistry {
    /// An empty registry: no bindings in scope.
    pub fn new() -> Self {
        PrefixRegistry { bindings: HashMap::new(), auto_common: false }
    }

    /// A registry that falls back to the well-known table for any
    /// namespace it has no explicit binding for.
    pub fn with_common_prefixes() -> Self {
        PrefixRegistry { bindings: HashMap::new(), auto_common: true }
    }

    /// Binds `prefix` to `namespace`, overwriting any prior binding.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.bindings.insert(prefix.into(), namespace.into());
    }

    /// Looks up the namespace bound to `prefix`.
    pub fn namespace_for(&self, prefix: &str) -> Option<&str> {
        if let Some(ns) = self.bindings.get(prefix) {
            return Some(ns.as_str());
        }
        if self.auto_common {
            return WELL_KNOWN.iter().find(|(_, p)| **p == prefix).map(|(ns, _)| *ns);
        }
        None
    }

    /// Looks up the prefix bound to `namespace`, document bindings first.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        if let Some((prefix, _)) = self.bindings.iter().find(|(_, ns)| ns.as_str() == namespace) {
            return Some(prefix.as_str());
        }
        if self.auto_common {
            return WELL_KNOWN.get(namespace).copied();
        }
        None
    }

    /// All document-scoped bindings, for emitting `@prefix` directives.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// `true` if `namespace` has an explicit, document-scoped binding.
    /// Unlike [`Self::prefix_for`], this ignores the well-known auto-fallback
    /// table, so a caller deciding whether a namespace still needs an
    /// `@prefix` line declared doesn't mistake "resolvable via fallback" for
    /// "already declared".
    pub fn is_explicitly_bound(&self, namespace: &str) -> bool {
        self.bindings.values().any(|ns| ns.as_str() == namespace)
    }

    fn is_taken(&self, candidate: &str) -> bool {
        self.bindings.contains_key(candidate)
            || (self.auto_common && WELL_KNOWN.values().any(|p| *p == candidate))
    }

    /// Synthesizes a fresh, unused prefix for `namespace` and binds it.
    /// Used by the encoder when a namespace appears in the graph with no
    /// prior binding. Tries, in order: the namespace's own well-known
    /// canonical prefix, the last path segment, the first letter of each
    /// dot-separated host label, then numeric suffixes on whichever of those
    /// is a valid `PN_PREFIX`.
    pub fn synthesize(&mut self, namespace: &str) -> String {
        if let Some((prefix, _)) = self.bindings.iter().find(|(_, ns)| ns.as_str() == namespace) {
            return prefix.clone();
        }
        if let Some(&canonical) = WELL_KNOWN.get(namespace) {
            self.bind(canonical.to_owned(), namespace.to_owned());
            return canonical.to_owned();
        }

        let candidates = synthesis_candidates(namespace);
        for candidate in &candidates {
            if is_valid_pn_prefix(candidate) && !self.is_taken(candidate) {
                self.bind(candidate.clone(), namespace.to_owned());
                return candidate.clone();
            }
        }

        let base = candidates.first().cloned().unwrap_or_else(|| "ns".to_owned());
        let base = if is_valid_pn_prefix(&base) { base } else { "ns".to_owned() };
        let mut n = 1u32;
        loop {
            let candidate = format!("{}{}", base, n);
            if is_valid_pn_prefix(&candidate) && !self.is_taken(&candidate) {
                self.bind(candidate.clone(), namespace.to_owned());
                return candidate;
            }
            n += 1;
        }
    }
}

fn synthesis_candidates(namespace: &str) -> Vec<String> {
    let mut out = Vec::new();

    let trimmed = namespace.trim_end_matches(['/', '#']);
    if let Some(segment) = trimmed.rsplit(['/', '#']).next() {
        if !segment.is_empty() {
            out.push(segment.to_ascii_lowercase());
        }
    }

    if let Some(host) = extract_host(namespace) {
        let initials: String = host
            .split('.')
            .filter(|label| !label.is_empty())
            .filter_map(|label| label.chars().next())
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        if !initials.is_empty() {
            out.push(initials.to_ascii_lowercase());
        }
    }

    out
}

fn extract_host(iri: &str) -> Option<&str> {
    let after_scheme = iri.split_once("://").map(|(_, rest)| rest)?;
    let authority = after_scheme.split(['/', '?', '#']).next().unwrap_or(after_scheme);
    let host = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    Some(host)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn well_known_round_trips() {
        let reg = PrefixRegistry::with_common_prefixes();
        assert_eq!(reg.prefix_for("http://www.w3.org/1999/02/22-rdf-syntax-ns#"), Some("rdf"));
        assert_eq!(reg.namespace_for("rdf"), Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#"));
    }

    #[test]
    fn explicit_binding_shadows_none() {
        let mut reg = PrefixRegistry::new();
        reg.bind("ex", "http://example.org/");
        assert_eq!(reg.prefix_for("http://example.org/"), Some("ex"));
    }

    #[test]
    fn synthesize_uses_last_segment() {
        let mut reg = PrefixRegistry::new();
        let p = reg.synthesize("http://example.org/vocab/Person#");
        assert_eq!(p, "person");
    }

    #[test]
    fn synthesize_falls_back_to_host_initials() {
        let mut reg = PrefixRegistry::new();
        let p = reg.synthesize("http://example.org/");
        assert_eq!(p, "e");
    }

    #[test]
    fn synthesize_resolves_collisions_with_numeric_suffix() {
        let mut reg = PrefixRegistry::new();
        reg.bind("person", "http://other.example/taken#");
        let p = reg.synthesize("http://example.org/vocab/Person#");
        assert_eq!(p, "person1");
    }

    #[test]
    fn synthesize_is_idempotent_for_same_namespace() {
        let mut reg = PrefixRegistry::new();
        let a = reg.synthesize("http://example.org/vocab/Person#");
        let b = reg.synthesize("http://example.org/vocab/Person#");
        assert_eq!(a, b);
    }
}
