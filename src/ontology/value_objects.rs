use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use oxrdf::NamedNode;
use thiserror::Error;

/// IRI of the universal class.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
/// IRI of the empty class.
pub const OWL_NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

/// Value object ensuring that supplied text represents a valid IRI.
///
/// The text is reference counted so that cloning an identifier, and every
/// entity built on top of it, never copies the underlying string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: Arc<str>,
}

impl Iri {
    /// Validates and constructs a new [`Iri`] value object.
    ///
    /// Empty text and anything that does not parse as an absolute IRI are
    /// rejected, so every entity carries a canonical identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IriError::Empty);
        }
        NamedNode::new(value.as_str()).map_err(|_| IriError::Invalid {
            value: value.clone(),
        })?;
        Ok(Self {
            value: Arc::from(value),
        })
    }

    /// Wraps one of the vocabulary constants of this module without parsing it.
    pub(crate) fn from_vocabulary(value: &'static str) -> Self {
        Self {
            value: Arc::from(value),
        }
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `true` when the identifier denotes `owl:Thing`.
    #[must_use]
    pub fn is_thing(&self) -> bool {
        self.as_str() == OWL_THING
    }

    /// Returns `true` when the identifier denotes `owl:Nothing`.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.as_str() == OWL_NOTHING
    }

    /// Splits the IRI into a namespace and a local name at the last `#` or `/`.
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        let text = self.as_str();
        match text.rfind(|c: char| c == '#' || c == '/') {
            Some(index) => text.split_at(index + 1),
            None => (text, ""),
        }
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Iri {
    type Error = IriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text was empty or only whitespace.
    #[error("IRI must not be empty")]
    Empty,
    /// The provided text could not be parsed as an IRI.
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}
