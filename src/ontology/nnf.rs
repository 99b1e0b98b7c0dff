//! Negation normal form.
//!
//! In NNF a complement only ever wraps a named class. Negation is pushed
//! inwards with De Morgan's laws and the existential/universal duality, and
//! double negations cancel. Both entry points perform a single recursive
//! descent: negating a compound expression calls
//! [`ClassExpression::complement_nnf`] on its operands instead of building a
//! complement and normalizing it afterwards.

use std::sync::Arc;

use super::expression::ClassExpression;

impl ClassExpression {
    /// Returns the negation normal form of this expression.
    ///
    /// Named classes and complements of named classes are already in NNF and
    /// are returned as shared clones of `self`.
    #[must_use]
    pub fn to_nnf(&self) -> ClassExpression {
        match self {
            Self::Class(_) => self.clone(),
            Self::ObjectComplementOf(operand) => match operand.as_ref() {
                Self::Class(_) => self.clone(),
                _ => operand.complement_nnf(),
            },
            Self::ObjectIntersectionOf(operands) => {
                Self::ObjectIntersectionOf(map_operands(operands, Self::to_nnf))
            }
            Self::ObjectUnionOf(operands) => {
                Self::ObjectUnionOf(map_operands(operands, Self::to_nnf))
            }
            Self::ObjectSomeValuesFrom { property, filler } => Self::ObjectSomeValuesFrom {
                property: property.clone(),
                filler: Arc::new(filler.to_nnf()),
            },
            Self::ObjectAllValuesFrom { property, filler } => Self::ObjectAllValuesFrom {
                property: property.clone(),
                filler: Arc::new(filler.to_nnf()),
            },
        }
    }

    /// Returns the negation normal form of the complement of this expression.
    ///
    /// Always equal to `ClassExpression::complement(self.clone()).to_nnf()`.
    #[must_use]
    pub fn complement_nnf(&self) -> ClassExpression {
        match self {
            Self::Class(_) => Self::complement(self.clone()),
            Self::ObjectComplementOf(operand) => operand.to_nnf(),
            Self::ObjectIntersectionOf(operands) => {
                Self::ObjectUnionOf(map_operands(operands, Self::complement_nnf))
            }
            Self::ObjectUnionOf(operands) => {
                Self::ObjectIntersectionOf(map_operands(operands, Self::complement_nnf))
            }
            Self::ObjectSomeValuesFrom { property, filler } => Self::ObjectAllValuesFrom {
                property: property.clone(),
                filler: Arc::new(filler.complement_nnf()),
            },
            Self::ObjectAllValuesFrom { property, filler } => Self::ObjectSomeValuesFrom {
                property: property.clone(),
                filler: Arc::new(filler.complement_nnf()),
            },
        }
    }

    /// Returns `true` when every complement in the expression wraps a named class.
    #[must_use]
    pub fn is_in_nnf(&self) -> bool {
        match self {
            Self::Class(_) => true,
            Self::ObjectComplementOf(operand) => operand.is_named(),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                operands.iter().all(Self::is_in_nnf)
            }
            Self::ObjectSomeValuesFrom { filler, .. } | Self::ObjectAllValuesFrom { filler, .. } => {
                filler.is_in_nnf()
            }
        }
    }
}

// Operand count is preserved, so the arity invariant of the source node carries over.
fn map_operands(
    operands: &[ClassExpression],
    transform: impl Fn(&ClassExpression) -> ClassExpression,
) -> Arc<[ClassExpression]> {
    operands.iter().map(transform).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::ontology::{
        entity::{AtomicClass, ObjectProperty},
        expression::{make_atomic, ClassExpression},
    };

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(make_atomic(&format!("https://example.org/{name}")).unwrap())
    }

    fn not(expression: ClassExpression) -> ClassExpression {
        ClassExpression::complement(expression)
    }

    fn and(operands: impl IntoIterator<Item = ClassExpression>) -> ClassExpression {
        ClassExpression::intersection(operands).unwrap()
    }

    fn or(operands: impl IntoIterator<Item = ClassExpression>) -> ClassExpression {
        ClassExpression::union(operands).unwrap()
    }

    #[test]
    fn named_class_is_already_normal() {
        let a = class("A");
        assert_eq!(a.to_nnf(), a);
    }

    #[test]
    fn complement_of_named_class_is_shared_not_copied() {
        let negated = not(class("A"));
        let normalized = negated.to_nnf();
        match (&negated, &normalized) {
            (
                ClassExpression::ObjectComplementOf(before),
                ClassExpression::ObjectComplementOf(after),
            ) => assert!(Arc::ptr_eq(before, after)),
            _ => panic!("expected a complement, got {normalized}"),
        }
    }

    #[test]
    fn double_negation_is_eliminated() {
        assert_eq!(not(not(class("A"))).to_nnf(), class("A"));
    }

    #[test]
    fn triple_negation_reduces_to_single_negation() {
        assert_eq!(not(not(not(class("A")))).to_nnf(), not(class("A")));
    }

    #[test]
    fn de_morgan_pushes_negation_into_union() {
        let expression = and([class("A"), not(or([class("B"), class("C")]))]);
        let expected = and([class("A"), and([not(class("B")), not(class("C"))])]);
        assert_eq!(expression.to_nnf(), expected);
    }

    #[test]
    fn de_morgan_pushes_negation_into_intersection() {
        let expression = not(and([class("A"), not(class("B")), class("C")]));
        let expected = or([not(class("A")), class("B"), not(class("C"))]);
        assert_eq!(expression.to_nnf(), expected);
    }

    #[test]
    fn quantifiers_swap_under_negation() {
        let has_part = ObjectProperty::parse("https://example.org/hasPart").unwrap();
        let expression = not(ClassExpression::some_values_from(
            has_part.clone(),
            or([class("A"), not(class("B"))]),
        ));
        let expected = ClassExpression::all_values_from(
            has_part.clone(),
            and([not(class("A")), class("B")]),
        );
        assert_eq!(expression.to_nnf(), expected);

        let expression = not(ClassExpression::all_values_from(
            has_part.clone(),
            class("A"),
        ));
        let expected = ClassExpression::some_values_from(has_part, not(class("A")));
        assert_eq!(expression.to_nnf(), expected);
    }

    #[test]
    fn builtin_classes_are_not_rewritten() {
        let top = ClassExpression::class(AtomicClass::thing());
        assert_eq!(not(top.clone()).to_nnf(), not(top));
    }

    #[test]
    fn complement_nnf_matches_negate_then_normalize() {
        let has_part = ObjectProperty::parse("https://example.org/hasPart").unwrap();
        let expressions = [
            class("A"),
            not(class("A")),
            not(not(class("A"))),
            and([class("A"), or([class("B"), not(class("C"))])]),
            ClassExpression::all_values_from(has_part, not(and([class("A"), class("B")]))),
        ];
        for expression in expressions {
            assert_eq!(
                expression.complement_nnf(),
                not(expression.clone()).to_nnf(),
                "mismatch for {expression}"
            );
        }
    }

    #[test]
    fn normalized_expressions_report_nnf() {
        let expression = not(and([class("A"), not(or([class("B"), class("C")]))]));
        assert!(!expression.is_in_nnf());
        let normalized = expression.to_nnf();
        assert!(normalized.is_in_nnf());
        assert_eq!(normalized.to_nnf(), normalized);
    }
}
