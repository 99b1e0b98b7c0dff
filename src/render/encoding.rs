//! Text encodings for byte sinks.
//!
//! [`EncodingWriter`] adapts a byte sink to [`std::fmt::Write`] so renderers
//! only ever deal with text. The first I/O or encoding failure is kept and
//! every later write is refused, so callers always see the original cause.

use std::{
    fmt::{self, Display, Formatter},
    io::{BufWriter, Write},
    str::FromStr,
};

use super::RenderError;

/// Text encodings a byte sink can be wrapped with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    /// Big-endian UTF-16 preceded by a byte order mark.
    Utf16,
    Utf16Be,
    Utf16Le,
    Iso8859_1,
    UsAscii,
}

impl TextEncoding {
    /// Canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::UsAscii => "US-ASCII",
        }
    }

    fn byte_order_mark(self) -> &'static [u8] {
        match self {
            Self::Utf16 => &[0xFE, 0xFF],
            _ => &[],
        }
    }

    /// Encodes `text` and writes the bytes to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Unmappable`] for a character the encoding cannot
    /// represent, or [`RenderError::Io`] when the sink fails.
    pub fn encode_into(self, text: &str, sink: &mut impl Write) -> Result<(), RenderError> {
        match self {
            Self::Utf8 => sink.write_all(text.as_bytes())?,
            Self::Utf16 | Self::Utf16Be => {
                for unit in text.encode_utf16() {
                    sink.write_all(&unit.to_be_bytes())?;
                }
            }
            Self::Utf16Le => {
                for unit in text.encode_utf16() {
                    sink.write_all(&unit.to_le_bytes())?;
                }
            }
            Self::Iso8859_1 => self.encode_single_byte(text, 0xFF, sink)?,
            Self::UsAscii => self.encode_single_byte(text, 0x7F, sink)?,
        }
        Ok(())
    }

    fn encode_single_byte(
        self,
        text: &str,
        max: u32,
        sink: &mut impl Write,
    ) -> Result<(), RenderError> {
        let mut bytes = Vec::with_capacity(text.len());
        for character in text.chars() {
            match u8::try_from(u32::from(character)) {
                Ok(byte) if u32::from(byte) <= max => bytes.push(byte),
                _ => {
                    return Err(RenderError::Unmappable {
                        character,
                        encoding: self,
                    })
                }
            }
        }
        sink.write_all(&bytes)?;
        Ok(())
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('_', "-");
        let encoding = match normalized.as_str() {
            "UTF-8" | "UTF8" => Self::Utf8,
            "UTF-16" | "UTF16" => Self::Utf16,
            "UTF-16BE" | "UTF16BE" => Self::Utf16Be,
            "UTF-16LE" | "UTF16LE" => Self::Utf16Le,
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" => Self::Iso8859_1,
            "US-ASCII" | "ASCII" => Self::UsAscii,
            _ => return Err(RenderError::UnsupportedEncoding(s.to_string())),
        };
        Ok(encoding)
    }
}

/// Buffered [`fmt::Write`] adapter over a byte sink.
pub struct EncodingWriter<W: Write> {
    inner: BufWriter<W>,
    encoding: TextEncoding,
    started: bool,
    error: Option<RenderError>,
}

impl<W: Write> EncodingWriter<W> {
    pub fn new(sink: W, encoding: TextEncoding) -> Self {
        Self {
            inner: BufWriter::new(sink),
            encoding,
            started: false,
            error: None,
        }
    }

    #[must_use]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Removes and returns the failure that stopped the writer, if any.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.error.take()
    }

    fn write_text(&mut self, text: &str) -> Result<(), RenderError> {
        if !self.started {
            self.started = true;
            self.inner.write_all(self.encoding.byte_order_mark())?;
        }
        self.encoding.encode_into(text, &mut self.inner)
    }

    /// Flushes buffered bytes and the underlying sink, returning the sink.
    ///
    /// # Errors
    ///
    /// Returns the failure recorded by an earlier write, or the I/O error
    /// raised while flushing.
    pub fn finish(mut self) -> Result<W, RenderError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        if !self.started {
            self.write_text("")?;
        }
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|err| RenderError::Io(err.into_error()))
    }
}

impl<W: Write> fmt::Write for EncodingWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.write_text(s).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use rstest::rstest;

    use super::{EncodingWriter, TextEncoding};
    use crate::render::RenderError;

    #[rstest]
    #[case("utf-8", TextEncoding::Utf8)]
    #[case("UTF8", TextEncoding::Utf8)]
    #[case("utf_16le", TextEncoding::Utf16Le)]
    #[case("UTF-16BE", TextEncoding::Utf16Be)]
    #[case("UTF-16", TextEncoding::Utf16)]
    #[case("latin1", TextEncoding::Iso8859_1)]
    #[case("ascii", TextEncoding::UsAscii)]
    fn parses_encoding_names(#[case] name: &str, #[case] expected: TextEncoding) {
        assert_eq!(name.parse::<TextEncoding>().unwrap(), expected);
    }

    #[rstest]
    #[case(TextEncoding::Utf8, "é", vec![0xC3, 0xA9])]
    #[case(TextEncoding::Utf16Be, "é", vec![0x00, 0xE9])]
    #[case(TextEncoding::Utf16Le, "é", vec![0xE9, 0x00])]
    #[case(TextEncoding::Utf16, "A", vec![0xFE, 0xFF, 0x00, 0x41])]
    #[case(TextEncoding::Iso8859_1, "é", vec![0xE9])]
    #[case(TextEncoding::UsAscii, "ok", vec![b'o', b'k'])]
    fn encodes_text(#[case] encoding: TextEncoding, #[case] text: &str, #[case] bytes: Vec<u8>) {
        let mut writer = EncodingWriter::new(Vec::new(), encoding);
        writer.write_str(text).expect("write");
        assert_eq!(writer.finish().expect("finish"), bytes);
    }

    #[test]
    fn unmappable_character_is_reported_once() {
        let mut writer = EncodingWriter::new(Vec::new(), TextEncoding::UsAscii);
        assert!(writer.write_str("caf\u{e9}").is_err());
        assert!(writer.write_str("more").is_err());
        assert!(matches!(
            writer.finish(),
            Err(RenderError::Unmappable {
                character: '\u{e9}',
                encoding: TextEncoding::UsAscii
            })
        ));
    }

    #[test]
    fn byte_order_mark_is_written_for_empty_output() {
        let writer = EncodingWriter::new(Vec::new(), TextEncoding::Utf16);
        assert_eq!(writer.finish().expect("finish"), vec![0xFE, 0xFF]);
    }
}
