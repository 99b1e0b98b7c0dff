//! Class expressions.
//!
//! [`ClassExpression`] is a closed set of shapes: named classes, complement,
//! intersection, union and the existential/universal restrictions. Values
//! are immutable trees whose subtrees are shared through [`Arc`], so cloning
//! is cheap and a single expression can be read from many threads at once.
//! Equality, hashing and ordering are structural.

use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    sync::Arc,
};

use super::entity::{AtomicClass, ObjectProperty};
use crate::{Error, Result};

/// A description-logic class expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassExpression {
    /// A named class, including `owl:Thing` and `owl:Nothing`.
    Class(AtomicClass),
    /// `ObjectComplementOf(C)`.
    ObjectComplementOf(Arc<ClassExpression>),
    /// `ObjectIntersectionOf(C1 ... Cn)` with `n >= 2`.
    ObjectIntersectionOf(Arc<[ClassExpression]>),
    /// `ObjectUnionOf(C1 ... Cn)` with `n >= 2`.
    ObjectUnionOf(Arc<[ClassExpression]>),
    /// `ObjectSomeValuesFrom(P C)`: existential restriction.
    ObjectSomeValuesFrom {
        property: ObjectProperty,
        filler: Arc<ClassExpression>,
    },
    /// `ObjectAllValuesFrom(P C)`: universal restriction.
    ObjectAllValuesFrom {
        property: ObjectProperty,
        filler: Arc<ClassExpression>,
    },
}

/// Discriminant of a [`ClassExpression`], named after its functional-syntax
/// constructor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassExpressionKind {
    Class,
    ObjectComplementOf,
    ObjectIntersectionOf,
    ObjectUnionOf,
    ObjectSomeValuesFrom,
    ObjectAllValuesFrom,
}

impl ClassExpressionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::ObjectComplementOf => "ObjectComplementOf",
            Self::ObjectIntersectionOf => "ObjectIntersectionOf",
            Self::ObjectUnionOf => "ObjectUnionOf",
            Self::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
            Self::ObjectAllValuesFrom => "ObjectAllValuesFrom",
        }
    }
}

impl Display for ClassExpressionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const MIN_NARY_OPERANDS: usize = 2;

impl ClassExpression {
    /// Wraps a named class.
    #[must_use]
    pub fn class(class: impl Into<AtomicClass>) -> Self {
        Self::Class(class.into())
    }

    /// Builds `ObjectComplementOf(operand)`. Never fails and never normalizes.
    #[must_use]
    pub fn complement(operand: ClassExpression) -> Self {
        Self::ObjectComplementOf(Arc::new(operand))
    }

    /// Builds `ObjectIntersectionOf(operands)`.
    ///
    /// Operand order and duplicates are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] when fewer than two operands are supplied.
    pub fn intersection(operands: impl IntoIterator<Item = ClassExpression>) -> Result<Self> {
        let operands = Self::nary_operands(ClassExpressionKind::ObjectIntersectionOf, operands)?;
        Ok(Self::ObjectIntersectionOf(operands))
    }

    /// Builds `ObjectUnionOf(operands)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] when fewer than two operands are supplied.
    pub fn union(operands: impl IntoIterator<Item = ClassExpression>) -> Result<Self> {
        let operands = Self::nary_operands(ClassExpressionKind::ObjectUnionOf, operands)?;
        Ok(Self::ObjectUnionOf(operands))
    }

    fn nary_operands(
        kind: ClassExpressionKind,
        operands: impl IntoIterator<Item = ClassExpression>,
    ) -> Result<Arc<[ClassExpression]>> {
        let operands: Vec<ClassExpression> = operands.into_iter().collect();
        if operands.len() < MIN_NARY_OPERANDS {
            return Err(Error::Arity {
                kind,
                expected: MIN_NARY_OPERANDS,
                found: operands.len(),
            });
        }
        Ok(operands.into())
    }

    /// Builds `ObjectSomeValuesFrom(property filler)`.
    #[must_use]
    pub fn some_values_from(property: ObjectProperty, filler: ClassExpression) -> Self {
        Self::ObjectSomeValuesFrom {
            property,
            filler: Arc::new(filler),
        }
    }

    /// Builds `ObjectAllValuesFrom(property filler)`.
    #[must_use]
    pub fn all_values_from(property: ObjectProperty, filler: ClassExpression) -> Self {
        Self::ObjectAllValuesFrom {
            property,
            filler: Arc::new(filler),
        }
    }

    /// Returns the complement of this expression without normalizing it.
    #[must_use]
    pub fn object_complement_of(&self) -> Self {
        Self::complement(self.clone())
    }

    #[must_use]
    pub fn kind(&self) -> ClassExpressionKind {
        match self {
            Self::Class(_) => ClassExpressionKind::Class,
            Self::ObjectComplementOf(_) => ClassExpressionKind::ObjectComplementOf,
            Self::ObjectIntersectionOf(_) => ClassExpressionKind::ObjectIntersectionOf,
            Self::ObjectUnionOf(_) => ClassExpressionKind::ObjectUnionOf,
            Self::ObjectSomeValuesFrom { .. } => ClassExpressionKind::ObjectSomeValuesFrom,
            Self::ObjectAllValuesFrom { .. } => ClassExpressionKind::ObjectAllValuesFrom,
        }
    }

    /// Returns true if this is a named class.
    #[must_use]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    #[must_use]
    pub fn as_class(&self) -> Option<&AtomicClass> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_owl_thing(&self) -> bool {
        self.as_class().is_some_and(AtomicClass::is_top)
    }

    #[must_use]
    pub fn is_owl_nothing(&self) -> bool {
        self.as_class().is_some_and(AtomicClass::is_bottom)
    }

    /// Returns `true` for a named class or the complement of a named class.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Class(_) => true,
            Self::ObjectComplementOf(operand) => operand.is_named(),
            _ => false,
        }
    }

    /// Direct operands of an intersection or union; empty for other shapes.
    #[must_use]
    pub fn operands(&self) -> &[ClassExpression] {
        match self {
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => &operands[..],
            _ => &[],
        }
    }

    /// Named classes mentioned anywhere in the expression.
    #[must_use]
    pub fn classes_in_signature(&self) -> BTreeSet<AtomicClass> {
        let mut classes = BTreeSet::new();
        self.walk(&mut |expression| {
            if let Self::Class(class) = expression {
                classes.insert(class.clone());
            }
        });
        classes
    }

    /// Object properties mentioned anywhere in the expression.
    #[must_use]
    pub fn object_properties_in_signature(&self) -> BTreeSet<ObjectProperty> {
        let mut properties = BTreeSet::new();
        self.walk(&mut |expression| match expression {
            Self::ObjectSomeValuesFrom { property, .. }
            | Self::ObjectAllValuesFrom { property, .. } => {
                properties.insert(property.clone());
            }
            _ => {}
        });
        properties
    }

    fn walk(&self, visit: &mut impl FnMut(&ClassExpression)) {
        visit(self);
        match self {
            Self::Class(_) => {}
            Self::ObjectComplementOf(operand) => operand.walk(visit),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                for operand in operands.iter() {
                    operand.walk(visit);
                }
            }
            Self::ObjectSomeValuesFrom { filler, .. } | Self::ObjectAllValuesFrom { filler, .. } => {
                filler.walk(visit);
            }
        }
    }
}

impl From<AtomicClass> for ClassExpression {
    fn from(class: AtomicClass) -> Self {
        Self::Class(class)
    }
}

/// Renders the expression in OWL functional-style syntax with full IRIs.
impl Display for ClassExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::ObjectComplementOf(operand) => write!(f, "{}({operand})", self.kind()),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                write!(f, "{}(", self.kind())?;
                for (index, operand) in operands.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{operand}")?;
                }
                f.write_str(")")
            }
            Self::ObjectSomeValuesFrom { property, filler }
            | Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "{}({property} {filler})", self.kind())
            }
        }
    }
}

/// Creates a named class from an identifier.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] when `id` is empty or malformed.
pub fn make_atomic(id: &str) -> Result<AtomicClass> {
    AtomicClass::parse(id)
}

#[must_use]
pub fn make_complement(operand: ClassExpression) -> ClassExpression {
    ClassExpression::complement(operand)
}

/// # Errors
///
/// Returns [`Error::Arity`] when fewer than two operands are supplied.
pub fn make_intersection(
    operands: impl IntoIterator<Item = ClassExpression>,
) -> Result<ClassExpression> {
    ClassExpression::intersection(operands)
}

/// # Errors
///
/// Returns [`Error::Arity`] when fewer than two operands are supplied.
pub fn make_union(operands: impl IntoIterator<Item = ClassExpression>) -> Result<ClassExpression> {
    ClassExpression::union(operands)
}
