//! Ontology model primitives.
//!
//! Named entities, class expressions and the structural transforms defined
//! on them (negation normal form and conjunct/disjunct decomposition), plus
//! the ontology aggregate handed to renderers. Everything here is an
//! immutable value once built and is safe to share between threads.

pub mod decompose;
pub mod entities;
pub mod entity;
pub mod expression;
pub mod nnf;
pub mod value_objects;

pub use entities::{ClassAxiom, Ontology, OntologyError};
pub use entity::{AtomicClass, ClassFactory, ObjectProperty};
pub use expression::{
    make_atomic, make_complement, make_intersection, make_union, ClassExpression,
    ClassExpressionKind,
};
pub use value_objects::{Iri, IriError, OWL_NOTHING, OWL_THING};
