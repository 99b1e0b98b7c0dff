//! Conjunct and disjunct decomposition.
//!
//! Nested intersections flatten into one set of conjuncts and nested unions
//! into one set of disjuncts. Every other shape is a single conjunct (or
//! disjunct) of itself. The returned sets are derived data and share
//! subtrees with the original expression.

use std::collections::BTreeSet;

use super::expression::ClassExpression;

#[derive(Copy, Clone)]
enum Connective {
    And,
    Or,
}

impl Connective {
    fn operands(self, expression: &ClassExpression) -> Option<&[ClassExpression]> {
        match (self, expression) {
            (Self::And, ClassExpression::ObjectIntersectionOf(operands))
            | (Self::Or, ClassExpression::ObjectUnionOf(operands)) => Some(&operands[..]),
            _ => None,
        }
    }

    fn collect(self, expression: &ClassExpression, into: &mut BTreeSet<ClassExpression>) {
        match self.operands(expression) {
            Some(operands) => {
                for operand in operands {
                    self.collect(operand, into);
                }
            }
            None => {
                into.insert(expression.clone());
            }
        }
    }

    fn contains(self, expression: &ClassExpression, needle: &ClassExpression) -> bool {
        match self.operands(expression) {
            Some(operands) => operands
                .iter()
                .any(|operand| self.contains(operand, needle)),
            None => expression == needle,
        }
    }
}

impl ClassExpression {
    /// Flattens nested intersections into their set of conjuncts.
    ///
    /// `A and (B and (A and C))` yields `{A, B, C}`; any expression that is
    /// not an intersection yields a singleton containing itself.
    #[must_use]
    pub fn as_conjunct_set(&self) -> BTreeSet<ClassExpression> {
        let mut conjuncts = BTreeSet::new();
        Connective::And.collect(self, &mut conjuncts);
        conjuncts
    }

    /// Flattens nested unions into their set of disjuncts.
    #[must_use]
    pub fn as_disjunct_set(&self) -> BTreeSet<ClassExpression> {
        let mut disjuncts = BTreeSet::new();
        Connective::Or.collect(self, &mut disjuncts);
        disjuncts
    }

    /// Equivalent to `self.as_conjunct_set().contains(conjunct)`, stopping at
    /// the first match.
    #[must_use]
    pub fn contains_conjunct(&self, conjunct: &ClassExpression) -> bool {
        Connective::And.contains(self, conjunct)
    }

    /// Equivalent to `self.as_disjunct_set().contains(disjunct)`, stopping at
    /// the first match.
    #[must_use]
    pub fn contains_disjunct(&self, disjunct: &ClassExpression) -> bool {
        Connective::Or.contains(self, disjunct)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::ontology::{
        entity::ObjectProperty,
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

    fn set(items: impl IntoIterator<Item = ClassExpression>) -> BTreeSet<ClassExpression> {
        items.into_iter().collect()
    }

    #[test]
    fn leaves_are_their_own_conjunct_and_disjunct() {
        let has_part = ObjectProperty::parse("https://example.org/hasPart").unwrap();
        for leaf in [
            class("A"),
            not(class("A")),
            not(and([class("A"), class("B")])),
            ClassExpression::some_values_from(has_part, class("A")),
        ] {
            assert_eq!(leaf.as_conjunct_set(), set([leaf.clone()]));
            assert_eq!(leaf.as_disjunct_set(), set([leaf.clone()]));
            assert!(leaf.contains_conjunct(&leaf));
            assert!(leaf.contains_disjunct(&leaf));
            assert!(!leaf.contains_conjunct(&class("Z")));
        }
    }

    #[test]
    fn nested_intersections_flatten_and_deduplicate() {
        let expression = and([class("A"), and([class("B"), and([class("A"), class("C")])])]);
        assert_eq!(
            expression.as_conjunct_set(),
            set([class("A"), class("B"), class("C")])
        );
    }

    #[test]
    fn conjunct_set_does_not_descend_into_unions() {
        let union = or([class("B"), class("C")]);
        let expression = and([class("A"), union.clone()]);
        assert_eq!(expression.as_conjunct_set(), set([class("A"), union.clone()]));
        assert!(!expression.contains_conjunct(&class("B")));
        assert!(expression.contains_conjunct(&union));
    }

    #[test]
    fn disjunct_set_is_dual() {
        let intersection = and([class("B"), class("C")]);
        let expression = or([class("A"), or([intersection.clone(), class("A")])]);
        assert_eq!(
            expression.as_disjunct_set(),
            set([class("A"), intersection.clone()])
        );
        assert!(expression.contains_disjunct(&intersection));
        assert!(!expression.contains_disjunct(&class("B")));
        assert_eq!(expression.as_conjunct_set(), set([expression.clone()]));
    }

    #[test]
    fn normalized_expression_decomposes_into_literals() {
        let expression = and([class("A"), not(or([class("B"), class("C")]))]);
        assert_eq!(
            expression.to_nnf().as_conjunct_set(),
            set([class("A"), not(class("B")), not(class("C"))])
        );
    }

    #[test]
    fn flattened_intersections_are_not_conjuncts() {
        let inner = and([class("B"), class("C")]);
        let expression = and([class("A"), inner.clone()]);
        assert!(expression.contains_conjunct(&class("C")));
        // A nested intersection is flattened away, so it is not itself a conjunct.
        assert!(!expression.contains_conjunct(&inner));
        assert!(!expression.as_conjunct_set().contains(&inner));
    }
}
