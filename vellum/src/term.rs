//! Value types for the RDF term model: IRIs, blank nodes, literals and
//! triples built from them.

use crate::error::{Error, Result};
use crate::ns;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Checks that a scheme starts with a letter and contains only
/// `[A-Za-z0-9+\-.]`, per RFC 3986 §3.1.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn validate_absolute_iri(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(Error::InvalidIri {
            text: s.to_owned(),
            reason: "IRI must not be empty".to_owned(),
        });
    }
    match s.find(':') {
        Some(colon) if colon > 0 && is_valid_scheme(&s[..colon]) => Ok(()),
        _ => Err(Error::InvalidIri {
            text: s.to_owned(),
            reason: "IRI must have a valid scheme".to_owned(),
        }),
    }
}

/// An immutable, absolute IRI.
///
/// Equality is case-sensitive on the full text. Constructing an [`Iri`] via
/// [`Iri::parse`] validates the scheme; [`Iri::new_unvalidated`] is reserved
/// for call sites (the decoder, after a successful grammar match) that have
/// already established the text is a valid absolute IRI.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Parses and validates an absolute IRI.
    pub fn parse(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref();
        validate_absolute_iri(text)?;
        Ok(Iri(Arc::from(text)))
    }

    /// Builds an [`Iri`] without validation.
    ///
    /// Reserved for internal use once a value is already known-good (e.g. the
    /// output of [`crate::iri::resolve`], which only ever returns absolute
    /// IRIs).
    pub(crate) fn new_unvalidated(text: impl Into<Arc<str>>) -> Self {
        Iri(text.into())
    }

    /// The IRI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iri({:?})", self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque blank-node identity.
///
/// Two handles are equal iff they were minted from the same call to
/// [`BlankNode::fresh`]; there is no external name. A process-wide counter
/// (rather than one scoped to a single parse/encode session) is used so that
/// handles remain distinct even when triples from independently-constructed
/// graphs are merged.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlankNode(u64);

static NEXT_BLANK_ID: AtomicU64 = AtomicU64::new(0);

impl BlankNode {
    /// Mints a new, globally-unique blank node.
    pub fn fresh() -> Self {
        BlankNode(NEXT_BLANK_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The handle's numeric identity. Exposed for label synthesis
    /// (`_:b{id}`) during serialization; carries no meaning otherwise.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlankNode(#{})", self.0)
    }
}

/// A literal: a lexical form, a datatype IRI, and an optional language tag.
///
/// The lexical form is stored verbatim; no canonicalization (e.g. of numeric
/// literals) is performed. A language tag is present iff the datatype is
/// `rdf:langString`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Iri,
    language: Option<Arc<str>>,
}

impl Literal {
    /// A plain (non-language-tagged) literal with an explicit datatype.
    ///
    /// Fails if `datatype` is `rdf:langString`; use [`Literal::new_lang_string`]
    /// for language-tagged literals.
    pub fn new(lexical: impl Into<Arc<str>>, datatype: Iri) -> Result<Self> {
        if datatype == *ns::rdf::LANG_STRING {
            return Err(Error::Constraint(
                "rdf:langString literals must carry a language tag; use Literal::new_lang_string"
                    .to_owned(),
            ));
        }
        Ok(Literal {
            lexical: lexical.into(),
            datatype,
            language: None,
        })
    }

    /// A language-tagged literal; datatype is fixed to `rdf:langString`.
    pub fn new_lang_string(lexical: impl Into<Arc<str>>, language: impl Into<Arc<str>>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: ns::rdf::LANG_STRING.clone(),
            language: Some(language.into()),
        }
    }

    /// `"lexical"^^xsd:string`.
    pub fn new_string(lexical: impl Into<Arc<str>>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: ns::xsd::STRING.clone(),
            language: None,
        }
    }

    /// `"lexical"^^xsd:integer`.
    pub fn new_integer(lexical: impl Into<Arc<str>>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: ns::xsd::INTEGER.clone(),
            language: None,
        }
    }

    /// `"lexical"^^xsd:decimal`.
    pub fn new_decimal(lexical: impl Into<Arc<str>>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: ns::xsd::DECIMAL.clone(),
            language: None,
        }
    }

    /// `"lexical"^^xsd:double`.
    pub fn new_double(lexical: impl Into<Arc<str>>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: ns::xsd::DOUBLE.clone(),
            language: None,
        }
    }

    /// `"true"^^xsd:boolean` or `"false"^^xsd:boolean`.
    pub fn new_boolean(value: bool) -> Self {
        Literal {
            lexical: Arc::from(if value { "true" } else { "false" }),
            datatype: ns::xsd::BOOLEAN.clone(),
            language: None,
        }
    }

    /// The lexical form, verbatim.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The literal's datatype IRI.
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "\"{}\"@{}", self.lexical, lang),
            None => write!(f, "\"{}\"^^{}", self.lexical, self.datatype),
        }
    }
}

/// A term occupying any role: IRI, blank node, or literal.
///
/// [`Subject`] and [`Object`] are the role-constrained views used by
/// [`Triple`]; this unconstrained enum is what graph indexing and pattern
/// matching operate over, since a lookup pattern for, say, the object
/// position may legally be any of the three.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(bnode: BlankNode) -> Self {
        Term::Blank(bnode)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// A term legal in subject position: IRI or blank node.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Subject {
    Iri(Iri),
    Blank(BlankNode),
}

impl From<Subject> for Term {
    fn from(s: Subject) -> Self {
        match s {
            Subject::Iri(iri) => Term::Iri(iri),
            Subject::Blank(b) => Term::Blank(b),
        }
    }
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Subject::Iri(iri)
    }
}

impl From<BlankNode> for Subject {
    fn from(b: BlankNode) -> Self {
        Subject::Blank(b)
    }
}

/// A term legal in object position: IRI, blank node, or literal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Object {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl From<Object> for Term {
    fn from(o: Object) -> Self {
        match o {
            Object::Iri(iri) => Term::Iri(iri),
            Object::Blank(b) => Term::Blank(b),
            Object::Literal(l) => Term::Literal(l),
        }
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Iri(iri)
    }
}

impl From<BlankNode> for Object {
    fn from(b: BlankNode) -> Self {
        Object::Blank(b)
    }
}

impl From<Literal> for Object {
    fn from(l: Literal) -> Self {
        Object::Literal(l)
    }
}

impl From<Subject> for Object {
    fn from(s: Subject) -> Self {
        match s {
            Subject::Iri(iri) => Object::Iri(iri),
            Subject::Blank(b) => Object::Blank(b),
        }
    }
}

/// The predicate position is always an IRI.
pub type Predicate = Iri;

/// An ordered `(subject, predicate, object)` triple.
///
/// Role constraints (subject ∈ {IRI, blank}, predicate ∈ {IRI}, object ∈
/// {IRI, blank, literal}) are enforced at compile time through [`Subject`]
/// and [`Object`] rather than through a fallible constructor.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Triple {
    subject: Subject,
    predicate: Predicate,
    object: Object,
}

impl Triple {
    pub fn new(subject: impl Into<Subject>, predicate: Predicate, object: impl Into<Object>) -> Self {
        Triple {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    /// The subject, viewed as a generic [`Term`] (for indexing/pattern
    /// matching, which is role-agnostic).
    pub(crate) fn subject_term(&self) -> Term {
        self.subject.clone().into()
    }

    /// The object, viewed as a generic [`Term`].
    pub(crate) fn object_term(&self) -> Term {
        self.object.clone().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/" => true ; "http")]
    #[test_case("urn:isbn:0451450523" => true ; "urn")]
    #[test_case("a+b-c.d://x" => true ; "exotic scheme chars")]
    #[test_case("" => false ; "empty")]
    #[test_case("no-scheme" => false ; "missing colon")]
    #[test_case("1http://x" => false ; "scheme starts with digit")]
    #[test_case(":noscheme" => false ; "empty scheme")]
    fn check_iri_parse(text: &str) -> bool {
        Iri::parse(text).is_ok()
    }

    #[test]
    fn blank_nodes_are_distinct_by_identity() {
        let a = BlankNode::fresh();
        let b = BlankNode::fresh();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn lang_string_requires_language() {
        let err = Literal::new("hi", ns::rdf::LANG_STRING.clone());
        assert!(err.is_err());
        let ok = Literal::new_lang_string("hi", "en");
        assert_eq!(ok.language(), Some("en"));
    }

    #[test]
    fn literal_equality_is_componentwise() {
        let a = Literal::new_string("x");
        let b = Literal::new_string("x");
        let c = Literal::new_integer("x");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
