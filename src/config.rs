//! Storer parameters handed to renderers.
//!
//! Parameters can be built in code or deserialized from YAML/JSON. Only the
//! text encoding is interpreted here; every other key is kept verbatim in
//! [`StorerParameters::extra`] for the concrete renderer to read.
//!
//! ```yaml
//! encoding: UTF-16LE
//! indent: 2
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::{RenderError, TextEncoding};

const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorerParameters {
    /// Name of the text encoding used when rendering to a byte sink.
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Storer specific parameters, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

impl Default for StorerParameters {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            extra: BTreeMap::new(),
        }
    }
}

impl StorerParameters {
    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Looks up a storer specific parameter.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Resolves [`Self::encoding`] to a supported [`TextEncoding`].
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedEncoding`] for unknown names.
    pub fn text_encoding(&self) -> Result<TextEncoding, RenderError> {
        self.encoding.parse()
    }

    /// Parses parameters from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid YAML or has the wrong shape.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Parses parameters from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON or has the wrong shape.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
