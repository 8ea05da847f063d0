//! Constant terms from well-known vocabularies used by the decoder and
//! encoder (`rdf:type`, `rdf:first`/`rdf:rest`/`rdf:nil`, the `xsd:` numeric
//! and boolean datatypes).
//!
//! Mirrors the teacher crate's `ns` module, which built per-vocabulary terms
//! via `sophia_term::namespace!`; here the handful of terms this crate
//! actually needs are `lazy_static` [`Iri`] constants instead, since the
//! core no longer depends on `sophia`.

use crate::term::Iri;
use lazy_static::lazy_static;

macro_rules! iri_const {
    ($name:ident, $value:expr) => {
        lazy_static! {
            pub static ref $name: Iri = Iri::new_unvalidated($value);
        }
    };
}

/// RDF vocabulary (`http://www.w3.org/1999/02/22-rdf-syntax-ns#`).
#[allow(missing_docs)]
pub mod rdf {
    use super::*;

    pub const PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    iri_const!(TYPE, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    iri_const!(FIRST, "http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
    iri_const!(REST, "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");
    iri_const!(NIL, "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");
    iri_const!(
        LANG_STRING,
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
    );
}

/// RDF Schema vocabulary.
#[allow(missing_docs)]
pub mod rdfs {
    pub const PREFIX: &str = "http://www.w3.org/2000/01/rdf-schema#";
}

/// XML Schema datatypes vocabulary.
#[allow(missing_docs)]
pub mod xsd {
    use super::*;

    pub const PREFIX: &str = "http://www.w3.org/2001/XMLSchema#";

    iri_const!(STRING, "http://www.w3.org/2001/XMLSchema#string");
    iri_const!(INTEGER, "http://www.w3.org/2001/XMLSchema#integer");
    iri_const!(DECIMAL, "http://www.w3.org/2001/XMLSchema#decimal");
    iri_const!(DOUBLE, "http://www.w3.org/2001/XMLSchema#double");
    iri_const!(BOOLEAN, "http://www.w3.org/2001/XMLSchema#boolean");
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_is_rdf_type() {
        assert_eq!(rdf::TYPE.as_str(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    }
}
