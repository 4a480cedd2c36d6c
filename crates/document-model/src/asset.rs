//! Asset entries (`assets[]`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Prefix every inline asset reference starts with.
pub const DATA_URI_PREFIX: &str = "data:";

/// One entry of the document's `assets` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Identifier referenced by layers through `refId`.
    pub id: String,

    /// File name, relative path, or an inline data URI once embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,

    /// Folder prefix joined in front of `p`; cleared on embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,

    /// Intrinsic width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<Number>,

    /// Intrinsic height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<Number>,

    /// Embedded flag (`1` once `p` holds a data URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<u8>,

    /// Layers of a precomposition asset. Carried verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<Value>>,

    /// All other fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetEntry {
    /// Create a file-backed image asset.
    pub fn image(id: impl Into<String>, folder: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            p: Some(file.into()),
            u: Some(folder.into()),
            w: None,
            h: None,
            e: Some(0),
            layers: None,
            extra: Map::new(),
        }
    }

    /// Builder-style dimensions.
    pub fn with_size(mut self, w: u32, h: u32) -> Self {
        self.w = Some(Number::from(w));
        self.h = Some(Number::from(h));
        self
    }

    /// Precompositions reference layers, not files.
    pub fn is_precomposition(&self) -> bool {
        self.layers.is_some()
    }

    /// Whether `p` already holds an inline data URI.
    pub fn is_embedded(&self) -> bool {
        self.p
            .as_deref()
            .is_some_and(|p| p.starts_with(DATA_URI_PREFIX))
    }

    /// Recorded file reference, if any.
    pub fn recorded_path(&self) -> Option<&str> {
        self.p.as_deref().filter(|p| !p.is_empty())
    }

    /// Folder prefix, empty when absent.
    pub fn folder(&self) -> &str {
        self.u.as_deref().unwrap_or("")
    }

    /// Width and height when both are declared and non-zero.
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        let w = self.w.as_ref()?.as_f64()?;
        let h = self.h.as_ref()?.as_f64()?;
        if w == 0.0 || h == 0.0 {
            return None;
        }
        Some((w, h))
    }

    /// Replace the external reference with an inline data URI.
    pub fn embed(&mut self, data_uri: String) {
        self.u = Some(String::new());
        self.p = Some(data_uri);
        self.e = Some(1);
    }
}
