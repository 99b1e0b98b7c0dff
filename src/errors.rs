//! Crate-wide error type.
//!
//! Construction failures and rendering failures each get a single variant so
//! callers can match on the failing concern without knowing the underlying
//! IRI parser or I/O error vocabulary.

use crate::{
    ontology::{expression::ClassExpressionKind, value_objects::IriError, OntologyError},
    render::RenderError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An entity identifier was empty or malformed.
    #[error("invalid entity identifier: {0}")]
    InvalidIdentifier(#[from] IriError),

    /// An n-ary class expression was built with too few operands.
    #[error("{kind} requires at least {expected} operands, got {found}")]
    Arity {
        kind: ClassExpressionKind,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Ontology(#[from] OntologyError),

    /// Writing a rendered ontology to its sink failed.
    #[error(transparent)]
    Rendering(#[from] RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
