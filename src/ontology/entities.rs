use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

use thiserror::Error;

use super::{
    entity::{AtomicClass, ObjectProperty},
    expression::ClassExpression,
    value_objects::Iri,
};

/// Class axiom relating two or more class expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassAxiom {
    /// `SubClassOf(sub super)`.
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },
    /// `EquivalentClasses(C1 ... Cn)` with `n >= 2`.
    EquivalentClasses(Vec<ClassExpression>),
    /// `DisjointClasses(C1 ... Cn)` with `n >= 2`.
    DisjointClasses(Vec<ClassExpression>),
}

impl ClassAxiom {
    #[must_use]
    pub fn subclass_of(sub_class: ClassExpression, super_class: ClassExpression) -> Self {
        Self::SubClassOf {
            sub_class,
            super_class,
        }
    }

    /// Builds an `EquivalentClasses` axiom.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Arity`] when fewer than two operands are given.
    pub fn equivalent_classes(
        operands: impl IntoIterator<Item = ClassExpression>,
    ) -> Result<Self, OntologyError> {
        let operands = nary("EquivalentClasses", operands)?;
        Ok(Self::EquivalentClasses(operands))
    }

    /// Builds a `DisjointClasses` axiom.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Arity`] when fewer than two operands are given.
    pub fn disjoint_classes(
        operands: impl IntoIterator<Item = ClassExpression>,
    ) -> Result<Self, OntologyError> {
        let operands = nary("DisjointClasses", operands)?;
        Ok(Self::DisjointClasses(operands))
    }

    /// Functional-syntax name of the axiom.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubClassOf { .. } => "SubClassOf",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::DisjointClasses(_) => "DisjointClasses",
        }
    }

    /// Class expressions the axiom is about, in declaration order.
    #[must_use]
    pub fn class_expressions(&self) -> Vec<&ClassExpression> {
        match self {
            Self::SubClassOf {
                sub_class,
                super_class,
            } => vec![sub_class, super_class],
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                operands.iter().collect()
            }
        }
    }
}

fn nary(
    axiom: &'static str,
    operands: impl IntoIterator<Item = ClassExpression>,
) -> Result<Vec<ClassExpression>, OntologyError> {
    let operands: Vec<ClassExpression> = operands.into_iter().collect();
    if operands.len() < 2 {
        return Err(OntologyError::Arity {
            axiom,
            found: operands.len(),
        });
    }
    Ok(operands)
}

impl Display for ClassAxiom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (index, expression) in self.class_expressions().into_iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{expression}")?;
        }
        f.write_str(")")
    }
}

/// Aggregates class and property declarations together with class axioms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ontology {
    id: Iri,
    label: Option<String>,
    classes: BTreeSet<AtomicClass>,
    object_properties: BTreeSet<ObjectProperty>,
    axioms: Vec<ClassAxiom>,
}

impl Ontology {
    /// Creates a new ontology aggregate with the supplied identifier.
    #[must_use]
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            label: None,
            classes: BTreeSet::new(),
            object_properties: BTreeSet::new(),
            axioms: Vec::new(),
        }
    }

    /// Sets a human readable label for the ontology.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Declares a named class, enforcing unique declarations.
    pub fn declare_class(&mut self, class: AtomicClass) -> Result<(), OntologyError> {
        if self.classes.contains(&class) {
            return Err(OntologyError::DuplicateClass(class.iri().clone()));
        }
        self.classes.insert(class);
        Ok(())
    }

    /// Declares an object property, enforcing unique declarations.
    pub fn declare_object_property(
        &mut self,
        property: ObjectProperty,
    ) -> Result<(), OntologyError> {
        if self.object_properties.contains(&property) {
            return Err(OntologyError::DuplicateProperty(property.iri().clone()));
        }
        self.object_properties.insert(property);
        Ok(())
    }

    /// Adds a class axiom after checking that it only references declared
    /// entities. `owl:Thing` and `owl:Nothing` never need a declaration.
    pub fn add_axiom(&mut self, axiom: ClassAxiom) -> Result<(), OntologyError> {
        for expression in axiom.class_expressions() {
            for class in expression.classes_in_signature() {
                if !class.is_builtin() && !self.classes.contains(&class) {
                    return Err(OntologyError::MissingClass {
                        ontology: self.id.clone(),
                        class: class.iri().clone(),
                    });
                }
            }
            for property in expression.object_properties_in_signature() {
                if !self.object_properties.contains(&property) {
                    return Err(OntologyError::MissingProperty {
                        ontology: self.id.clone(),
                        property: property.iri().clone(),
                    });
                }
            }
        }

        self.axioms.push(axiom);
        Ok(())
    }

    /// Returns the ontology identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the declared classes ordered by identifier.
    #[must_use]
    pub fn classes(&self) -> &BTreeSet<AtomicClass> {
        &self.classes
    }

    /// Returns the declared object properties ordered by identifier.
    #[must_use]
    pub fn object_properties(&self) -> &BTreeSet<ObjectProperty> {
        &self.object_properties
    }

    /// Returns the class axioms in insertion order.
    #[must_use]
    pub fn axioms(&self) -> &[ClassAxiom] {
        &self.axioms
    }

    /// Every named class the ontology declares or mentions in an axiom.
    #[must_use]
    pub fn signature(&self) -> BTreeSet<AtomicClass> {
        let mut signature = self.classes.clone();
        for axiom in &self.axioms {
            for expression in axiom.class_expressions() {
                signature.extend(expression.classes_in_signature());
            }
        }
        signature
    }
}

/// Errors raised when manipulating an ontology aggregate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OntologyError {
    /// Attempted to declare a class twice.
    #[error("class `{0}` already declared")]
    DuplicateClass(Iri),
    /// Attempted to declare an object property twice.
    #[error("object property `{0}` already declared")]
    DuplicateProperty(Iri),
    /// An axiom referenced a class that was not declared.
    #[error("class `{class}` is not declared in ontology `{ontology}`")]
    MissingClass { ontology: Iri, class: Iri },
    /// An axiom referenced an object property that was not declared.
    #[error("object property `{property}` is not declared in ontology `{ontology}`")]
    MissingProperty { ontology: Iri, property: Iri },
    /// An n-ary axiom was built with too few operands.
    #[error("{axiom} requires at least two class expressions, got {found}")]
    Arity { axiom: &'static str, found: usize },
}
