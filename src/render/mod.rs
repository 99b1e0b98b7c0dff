//! Rendering boundary.
//!
//! A renderer turns a populated [`Ontology`] into text. Implementors only
//! write to a text sink; the byte-sink entry point is provided and wraps the
//! sink in a buffered [`EncodingWriter`] chosen from the storer parameters.

use std::{fmt, io};

use thiserror::Error;

use crate::{config::StorerParameters, ontology::Ontology};

pub mod encoding;
pub mod functional;

pub use encoding::{EncodingWriter, TextEncoding};
pub use functional::FunctionalSyntaxRenderer;

/// Failure raised while rendering an ontology to a sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported text encoding `{0}`")]
    UnsupportedEncoding(String),
    #[error("character {character:?} cannot be encoded as {encoding}")]
    Unmappable {
        character: char,
        encoding: TextEncoding,
    },
    #[error("failed to write rendered ontology: {0}")]
    Io(#[from] io::Error),
    #[error("text sink rejected the rendered ontology")]
    Sink(#[from] fmt::Error),
}

/// Contract implemented by every concrete ontology syntax writer.
pub trait OntologyRenderer {
    /// Renders `ontology` to a text sink.
    ///
    /// The sink is used as given: no buffering is added and it is not flushed.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the sink refuses the output.
    fn render(
        &self,
        ontology: &Ontology,
        writer: &mut dyn fmt::Write,
        parameters: &StorerParameters,
    ) -> Result<(), RenderError>;

    /// Renders `ontology` to a byte sink using `parameters.encoding`.
    ///
    /// On success the output is fully written and flushed exactly once. On
    /// failure exactly one error is returned and the sink may hold a partial
    /// document.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] for an unsupported encoding, an unmappable
    /// character, or an I/O failure of the sink.
    fn render_to_bytes(
        &self,
        ontology: &Ontology,
        sink: &mut dyn io::Write,
        parameters: &StorerParameters,
    ) -> Result<(), RenderError> {
        let encoding = parameters.text_encoding()?;
        tracing::debug!(ontology = %ontology.id(), %encoding, "render_ontology_start");

        let mut writer = EncodingWriter::new(sink, encoding);
        let result = match self.render(ontology, &mut writer, parameters) {
            Ok(()) => writer.finish().map(|_| ()),
            Err(error) => Err(writer.take_error().unwrap_or(error)),
        };

        match &result {
            Ok(()) => tracing::debug!(ontology = %ontology.id(), "render_ontology_done"),
            Err(error) => {
                tracing::error!(err.msg = %error, err.detail = ?error, "render_ontology_error");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::{fmt, io};

    use super::{OntologyRenderer, RenderError};
    use crate::{
        config::StorerParameters,
        ontology::{Iri, Ontology},
    };

    struct Greeting;

    impl OntologyRenderer for Greeting {
        fn render(
            &self,
            ontology: &Ontology,
            writer: &mut dyn fmt::Write,
            _parameters: &StorerParameters,
        ) -> Result<(), RenderError> {
            write!(writer, "hello {}", ontology.id())?;
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingSink {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl io::Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn ontology() -> Ontology {
        Ontology::new(Iri::new("https://example.org/onto").unwrap())
    }

    #[test]
    fn byte_sink_is_encoded_and_flushed_once() {
        let mut sink = CountingSink::default();
        Greeting
            .render_to_bytes(
                &ontology(),
                &mut sink,
                &StorerParameters::default().with_encoding("UTF-16LE"),
            )
            .expect("rendered");

        let expected: Vec<u8> = "hello https://example.org/onto"
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect();
        assert_eq!(sink.bytes, expected);
        assert_eq!(sink.flushes, 1);
    }

    #[test]
    fn unsupported_encoding_writes_nothing() {
        let mut sink = CountingSink::default();
        let err = Greeting
            .render_to_bytes(
                &ontology(),
                &mut sink,
                &StorerParameters::default().with_encoding("EBCDIC"),
            )
            .expect_err("unsupported encoding");
        assert!(matches!(err, RenderError::UnsupportedEncoding(_)));
        assert!(sink.bytes.is_empty());
        assert_eq!(sink.flushes, 0);
    }

    #[test]
    fn text_sink_is_used_directly() {
        let mut text = String::new();
        Greeting
            .render(&ontology(), &mut text, &StorerParameters::default())
            .expect("rendered");
        assert_eq!(text, "hello https://example.org/onto");
    }
}
