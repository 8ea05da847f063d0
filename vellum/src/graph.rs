//! An in-memory RDF graph: a multiset of [`Triple`]s with subject/predicate
//! /object indexes for [`Graph::find`].
//!
//! Grounded on the teacher's `parse::Context` triple accumulation
//! (`triple_stack: VecDeque<...>`), generalized into a standalone indexed
//! store rather than a parser-internal staging buffer.

use crate::term::{Object, Predicate, Subject, Term, Triple};
use std::collections::HashMap;

/// A collection of triples, equal by multiset membership rather than by
/// storage order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    by_subject: HashMap<Term, Vec<usize>>,
    by_predicate: HashMap<Term, Vec<usize>>,
    by_object: HashMap<Term, Vec<usize>>,
}

/// A triple pattern for [`Graph::find`]; `None` in any position matches
/// anything in that position.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    pub subject: Option<Subject>,
    pub predicate: Option<Predicate>,
    pub object: Option<Object>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Appends `triple`, regardless of whether an identical triple is
    /// already present (graphs are multisets, not sets).
    pub fn add(&mut self, triple: Triple) {
        let idx = self.triples.len();
        self.by_subject.entry(triple.subject_term()).or_default().push(idx);
        self.by_predicate.entry(Term::Iri(triple.predicate().clone())).or_default().push(idx);
        self.by_object.entry(triple.object_term()).or_default().push(idx);
        self.triples.push(triple);
    }

    /// Appends every triple from `other`, consuming it.
    pub fn add_all(&mut self, other: Graph) {
        for t in other.triples {
            self.add(t);
        }
    }

    /// Returns a new graph with `triple` appended, leaving `self` untouched.
    /// Functional-overlay convenience for callers building graphs
    /// incrementally without mutation.
    pub fn with_triple(&self, triple: Triple) -> Self {
        let mut clone = self.clone();
        clone.add(triple);
        clone
    }

    /// The number of triples (counting duplicates).
    pub fn size(&self) -> usize {
        self.triples.len()
    }

    /// `true` if the graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// All triples, in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples matching `pattern`, via the position(s) actually constrained
    /// (fully unconstrained patterns scan linearly).
    pub fn find(&self, pattern: &Pattern) -> Vec<&Triple> {
        let candidate_indexes: Option<Vec<usize>> = match (
            &pattern.subject,
            &pattern.predicate,
            &pattern.object,
        ) {
            (Some(s), _, _) => Some(self.by_subject.get(&Term::from(s.clone())).cloned().unwrap_or_default()),
            (_, Some(p), _) => Some(self.by_predicate.get(&Term::Iri(p.clone())).cloned().unwrap_or_default()),
            (_, _, Some(o)) => Some(self.by_object.get(&Term::from(o.clone())).cloned().unwrap_or_default()),
            (None, None, None) => None,
        };

        let matches = |t: &Triple| -> bool {
            pattern.subject.as_ref().map(|s| *s == *t.subject()).unwrap_or(true)
                && pattern.predicate.as_ref().map(|p| *p == *t.predicate()).unwrap_or(true)
                && pattern.object.as_ref().map(|o| *o == *t.object()).unwrap_or(true)
        };

        match candidate_indexes {
            Some(indexes) => indexes.into_iter().map(|i| &self.triples[i]).filter(|t| matches(t)).collect(),
            None => self.triples.iter().filter(|t| matches(t)).collect(),
        }
    }
}

impl PartialEq for Graph {
    /// Graphs compare equal iff they contain the same triples with the same
    /// multiplicities, irrespective of insertion order.
    fn eq(&self, other: &Self) -> bool {
        if self.triples.len() != other.triples.len() {
            return false;
        }
        let mut remaining: Vec<&Triple> = other.triples.iter().collect();
        for t in &self.triples {
            if let Some(pos) = remaining.iter().position(|o| *o == t) {
                remaining.swap_remove(pos);
            } else {
                return false;
            }
        }
        true
    }
}

impl Eq for Graph {}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for t in iter {
            self.add(t);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut g = Graph::new();
        g.extend(iter);
        g
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{BlankNode, Iri, Literal};

    fn iri(s: &str) -> Iri {
        Iri::new_unvalidated(s)
    }

    #[test]
    fn add_then_find_by_subject() {
        let mut g = Graph::new();
        let s = Subject::from(BlankNode::fresh());
        let t = Triple::new(s.clone(), iri("http://ex/p"), Object::from(iri("http://ex/o")));
        g.add(t.clone());
        let found = g.find(&Pattern { subject: Some(s), ..Default::default() });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], &t);
    }

    #[test]
    fn graphs_are_multisets_not_sets() {
        let mut g = Graph::new();
        let t = Triple::new(
            Subject::from(iri("http://ex/s")),
            iri("http://ex/p"),
            Object::from(Literal::new_string("v")),
        );
        g.add(t.clone());
        g.add(t);
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let s = Subject::from(iri("http://ex/s"));
        let p = iri("http://ex/p");
        let a = Triple::new(s.clone(), p.clone(), Object::from(iri("http://ex/a")));
        let b = Triple::new(s, p, Object::from(iri("http://ex/b")));

        let mut g1 = Graph::new();
        g1.add(a.clone());
        g1.add(b.clone());

        let mut g2 = Graph::new();
        g2.add(b);
        g2.add(a);

        assert_eq!(g1, g2);
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let mut g = Graph::new();
        g.add(Triple::new(
            Subject::from(iri("http://ex/s")),
            iri("http://ex/p"),
            Object::from(iri("http://ex/o")),
        ));
        assert_eq!(g.find(&Pattern::default()).len(), 1);
    }
}
