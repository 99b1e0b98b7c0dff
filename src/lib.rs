//! # owl-model
//!
//! In-memory description-logic class expressions for an ontology model.
//!
//! - [`ontology::AtomicClass`] wraps an IRI and knows whether it is
//!   `owl:Thing` or `owl:Nothing`.
//! - [`ontology::ClassExpression`] is the closed algebra of class
//!   expressions, with [`to_nnf`](ontology::ClassExpression::to_nnf),
//!   [`complement_nnf`](ontology::ClassExpression::complement_nnf) and the
//!   conjunct/disjunct collectors.
//! - [`render::OntologyRenderer`] is the boundary through which an
//!   [`ontology::Ontology`] is written to a text or byte sink.
//!
//! ```
//! use owl_model::ontology::{make_atomic, ClassExpression};
//!
//! # fn main() -> owl_model::Result<()> {
//! let a = ClassExpression::class(make_atomic("https://example.org/A")?);
//! let b = ClassExpression::class(make_atomic("https://example.org/B")?);
//! let c = ClassExpression::class(make_atomic("https://example.org/C")?);
//!
//! let expression = ClassExpression::intersection([
//!     a.clone(),
//!     ClassExpression::complement(ClassExpression::union([b.clone(), c.clone()])?),
//! ])?;
//!
//! let conjuncts = expression.to_nnf().as_conjunct_set();
//! assert!(conjuncts.contains(&a));
//! assert!(conjuncts.contains(&ClassExpression::complement(b)));
//! assert!(conjuncts.contains(&ClassExpression::complement(c)));
//! # Ok(())
//! # }
//! ```

pub use self::errors::{Error, Result};

pub mod config;
mod errors;
pub mod ontology;
pub mod render;
