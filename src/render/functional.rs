use std::fmt::{self, Write};

use super::{OntologyRenderer, RenderError};
use crate::{config::StorerParameters, ontology::Ontology};

const PREFIXES: [(&str, &str); 4] = [
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// Writes ontologies in OWL functional-style syntax.
///
/// Recognised storer parameters:
/// - `declarations` (bool, default `true`): emit `Declaration` entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionalSyntaxRenderer;

impl FunctionalSyntaxRenderer {
    fn write_label(writer: &mut dyn Write, label: &str) -> fmt::Result {
        writer.write_str("Annotation(rdfs:label \"")?;
        for character in label.chars() {
            match character {
                '"' => writer.write_str("\\\"")?,
                '\\' => writer.write_str("\\\\")?,
                other => writer.write_char(other)?,
            }
        }
        writer.write_str("\")\n")
    }
}

impl OntologyRenderer for FunctionalSyntaxRenderer {
    fn render(
        &self,
        ontology: &Ontology,
        writer: &mut dyn Write,
        parameters: &StorerParameters,
    ) -> Result<(), RenderError> {
        let declarations = parameters
            .parameter("declarations")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);

        for (prefix, namespace) in PREFIXES {
            writeln!(writer, "Prefix({prefix}:=<{namespace}>)")?;
        }
        writeln!(writer)?;
        writeln!(writer, "Ontology(<{}>", ontology.id())?;
        if let Some(label) = ontology.label() {
            Self::write_label(writer, label)?;
        }

        if declarations {
            writeln!(writer)?;
            for class in ontology.classes() {
                writeln!(writer, "Declaration(Class({class}))")?;
            }
            for property in ontology.object_properties() {
                writeln!(writer, "Declaration(ObjectProperty({property}))")?;
            }
        }

        if !ontology.axioms().is_empty() {
            writeln!(writer)?;
            for axiom in ontology.axioms() {
                writeln!(writer, "{axiom}")?;
            }
        }
        writeln!(writer, ")")?;

        tracing::debug!(
            ontology = %ontology.id(),
            classes = ontology.classes().len(),
            axioms = ontology.axioms().len(),
            "functional_syntax_rendered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::FunctionalSyntaxRenderer;
    use crate::{
        config::StorerParameters,
        ontology::{AtomicClass, Iri, Ontology},
        render::OntologyRenderer,
    };

    #[test]
    fn declarations_can_be_disabled() {
        let mut ontology = Ontology::new(Iri::new("https://example.org/onto").unwrap());
        ontology
            .declare_class(AtomicClass::parse("https://example.org/A").unwrap())
            .unwrap();

        let mut with = String::new();
        FunctionalSyntaxRenderer
            .render(&ontology, &mut with, &StorerParameters::default())
            .unwrap();
        assert!(with.contains("Declaration(Class(<https://example.org/A>))"));

        let mut without = String::new();
        FunctionalSyntaxRenderer
            .render(
                &ontology,
                &mut without,
                &StorerParameters::default().with_parameter("declarations", json!(false)),
            )
            .unwrap();
        assert!(!without.contains("Declaration"));
        assert!(without.ends_with(")\n"));
    }

    #[test]
    fn labels_are_escaped() {
        let ontology = Ontology::new(Iri::new("https://example.org/onto").unwrap())
            .with_label(r#"say "hi" \o/"#);
        let mut text = String::new();
        FunctionalSyntaxRenderer
            .render(&ontology, &mut text, &StorerParameters::default())
            .unwrap();
        assert!(text.contains(r#"Annotation(rdfs:label "say \"hi\" \\o/")"#));
    }
}
