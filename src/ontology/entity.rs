use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use dashmap::DashMap;

use super::value_objects::{Iri, OWL_NOTHING, OWL_THING};
use crate::Result;

/// A named, indivisible class reference.
///
/// Whether the class is `owl:Thing` or `owl:Nothing` is decided once, at
/// construction. Equality, hashing and ordering only look at the IRI.
#[derive(Clone, Debug)]
pub struct AtomicClass {
    iri: Iri,
    is_thing: bool,
    is_nothing: bool,
}

impl AtomicClass {
    /// Creates a class for an already validated identifier.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        let is_thing = iri.is_thing();
        let is_nothing = iri.is_nothing();
        Self {
            iri,
            is_thing,
            is_nothing,
        }
    }

    /// Parses `id` as an IRI and wraps it in a class.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] when `id` is empty or not
    /// an absolute IRI.
    pub fn parse(id: &str) -> Result<Self> {
        Ok(Self::new(Iri::new(id)?))
    }

    /// The universal class `owl:Thing`.
    #[must_use]
    pub fn thing() -> Self {
        Self::builtin(OWL_THING)
    }

    /// The empty class `owl:Nothing`.
    #[must_use]
    pub fn nothing() -> Self {
        Self::builtin(OWL_NOTHING)
    }

    fn builtin(text: &'static str) -> Self {
        Self::new(Iri::from_vocabulary(text))
    }

    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    #[must_use]
    pub fn to_string_id(&self) -> String {
        self.iri.to_string()
    }

    /// Returns `true` for `owl:Thing`.
    #[must_use]
    pub fn is_top(&self) -> bool {
        self.is_thing
    }

    /// Returns `true` for `owl:Nothing`.
    #[must_use]
    pub fn is_bottom(&self) -> bool {
        self.is_nothing
    }

    /// Returns `true` for either of the two built-in classes.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.is_thing || self.is_nothing
    }
}

impl PartialEq for AtomicClass {
    fn eq(&self, other: &Self) -> bool {
        self.iri == other.iri
    }
}

impl Eq for AtomicClass {}

impl Hash for AtomicClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iri.hash(state);
    }
}

impl PartialOrd for AtomicClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AtomicClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iri.cmp(&other.iri)
    }
}

impl Display for AtomicClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

impl From<Iri> for AtomicClass {
    fn from(iri: Iri) -> Self {
        Self::new(iri)
    }
}

/// Named object property used by quantified restrictions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectProperty {
    iri: Iri,
}

impl ObjectProperty {
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self { iri }
    }

    /// Parses `id` as an IRI and wraps it in a property.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] when `id` is not a valid IRI.
    pub fn parse(id: &str) -> Result<Self> {
        Ok(Self::new(Iri::new(id)?))
    }

    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }
}

impl Display for ObjectProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

/// Thread-safe factory handing out one shared [`AtomicClass`] per identifier.
///
/// Classes obtained from the factory share their identifier allocation. Value
/// equality still governs comparisons, so classes built outside the factory
/// behave identically.
#[derive(Debug, Default)]
pub struct ClassFactory {
    classes: DashMap<Iri, AtomicClass>,
}

impl ClassFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the class registered for `id`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] when `id` is empty or not
    /// an absolute IRI. Nothing is cached in that case.
    pub fn class(&self, id: &str) -> Result<AtomicClass> {
        if let Some(existing) = self.classes.get(id) {
            return Ok(existing.value().clone());
        }
        let iri = Iri::new(id)?;
        let class = self
            .classes
            .entry(iri.clone())
            .or_insert_with(|| {
                tracing::trace!(class = %iri, "class_interned");
                AtomicClass::new(iri)
            })
            .value()
            .clone();
        Ok(class)
    }

    /// `owl:Thing`, registered in this factory.
    #[must_use]
    pub fn thing(&self) -> AtomicClass {
        self.intern(AtomicClass::thing())
    }

    /// `owl:Nothing`, registered in this factory.
    #[must_use]
    pub fn nothing(&self) -> AtomicClass {
        self.intern(AtomicClass::nothing())
    }

    fn intern(&self, class: AtomicClass) -> AtomicClass {
        self.classes
            .entry(class.iri().clone())
            .or_insert(class)
            .value()
            .clone()
    }

    /// Number of distinct classes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
