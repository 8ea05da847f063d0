//! A Turtle codec: Turtle text ↔ RDF triples.
//!
//! The crate is organized the way the teacher crate organizes a Turtle/N3
//! engine — a term/graph model at the bottom, a tokenizer and grammar-driven
//! decoder above it, a two-pass encoder as its mirror image, and a thin
//! facade (`codec`) tying `decode`/`encode`/`can_parse` together behind one
//! error type.

#![warn(missing_docs)]

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod graph;
pub mod iri;
pub mod ns;
mod parse;
pub mod pnlocal;
pub mod prefix;
pub mod term;

pub use codec::{can_parse, decode, decode_with_flags, encode, encode_with_options};
pub use decoder::DecoderFlags;
pub use encoder::EncoderOptions;
pub use error::{Error, Result};
pub use graph::{Graph, Pattern};
pub use iri::{relativize, resolve, RelativizeOptions, RelativizePreset};
pub use prefix::PrefixRegistry;
pub use term::{BlankNode, Iri, Literal, Object, Predicate, Subject, Term, Triple};
