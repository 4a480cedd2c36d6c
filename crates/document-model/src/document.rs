//! Top-level Lottie document and its on-disk form.

use std::path::{Path, PathBuf};

use lottie_embed_common::EmbedError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::asset::AssetEntry;
use crate::layer::LayerEntry;

/// A parsed Lottie document.
///
/// `assets` and `layers` are optional so a document that lacks either
/// serializes back without gaining an empty array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LottieDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<LayerEntry>>,

    /// All other top-level fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LottieDocument {
    /// Create a document from asset and layer lists.
    pub fn new(assets: Vec<AssetEntry>, layers: Vec<LayerEntry>) -> Self {
        Self {
            assets: Some(assets),
            layers: Some(layers),
            extra: Map::new(),
        }
    }

    /// Parse document text, checking the shape of the collections we touch.
    pub fn parse(text: &[u8], path: &Path) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_slice(text).map_err(|e| DocumentError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let Value::Object(root) = &value else {
            return Err(DocumentError::schema("document root is not a JSON object"));
        };
        for key in ["assets", "layers"] {
            match root.get(key) {
                None | Some(Value::Array(_)) => {}
                Some(other) => {
                    return Err(DocumentError::schema(format!(
                        "`{key}` must be an array, found {}",
                        json_kind(other)
                    )));
                }
            }
        }
        if let Some(Value::Array(assets)) = root.get("assets") {
            for (index, asset) in assets.iter().enumerate() {
                if asset.get("id").and_then(Value::as_str).is_none() {
                    return Err(DocumentError::schema(format!(
                        "assets[{index}] has no string `id`"
                    )));
                }
            }
        }

        serde_json::from_value(value).map_err(|e| DocumentError::schema(e.to_string()))
    }

    pub fn assets(&self) -> &[AssetEntry] {
        self.assets.as_deref().unwrap_or(&[])
    }

    pub fn assets_mut(&mut self) -> &mut [AssetEntry] {
        self.assets.as_deref_mut().unwrap_or(&mut [])
    }

    pub fn layers(&self) -> &[LayerEntry] {
        self.layers.as_deref().unwrap_or(&[])
    }

    pub fn layers_mut(&mut self) -> &mut [LayerEntry] {
        self.layers.as_deref_mut().unwrap_or(&mut [])
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::schema(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A document together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Filesystem path the document was read from.
    pub path: PathBuf,

    /// Exact bytes read from disk, kept for the backup copy.
    pub original: Vec<u8>,

    /// Parsed document, mutated in place by the pipeline.
    pub document: LottieDocument,
}

impl LoadedDocument {
    /// Read and parse a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(DocumentError::NotFound { path });
        }

        let original = std::fs::read(&path).map_err(|e| DocumentError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let document = LottieDocument::parse(&original, &path)?;

        Ok(Self {
            path,
            original,
            document,
        })
    }

    /// Folder containing the document, used to resolve relative asset paths.
    pub fn folder(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Errors that can occur when reading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid document: {message}")]
    SchemaError { message: String },
}

impl DocumentError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaError {
            message: msg.into(),
        }
    }
}

impl From<DocumentError> for EmbedError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotFound { path } => EmbedError::FileNotFound { path },
            DocumentError::IoError { source, .. } => EmbedError::Io(source),
            DocumentError::ParseError { path, source } => EmbedError::Parse { path, source },
            DocumentError::SchemaError { message } => EmbedError::Schema { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<LottieDocument, DocumentError> {
        LottieDocument::from_value(value)
    }

    #[test]
    fn test_untouched_fields_roundtrip() {
        let original = json!({
            "v": "5.7.4",
            "fr": 29.97,
            "ip": 0,
            "op": 120,
            "w": 1920,
            "h": 1080,
            "nm": "Scene",
            "ddd": 0,
            "assets": [
                { "id": "image_0", "w": 200, "h": 100, "u": "images/", "p": "logo0.png", "e": 0 }
            ],
            "layers": [
                { "ddd": 0, "ind": 1, "ty": 2, "nm": "logo", "refId": "image_0",
                  "ks": { "o": { "a": 0, "k": 100 }, "a": { "a": 0, "k": [0, 0, 0] } },
                  "ip": 0, "op": 120, "st": 0, "bm": 0 }
            ],
            "markers": []
        });

        let document = parse(original.clone()).unwrap();
        let back = serde_json::to_value(&document).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_missing_collections_are_empty_and_not_added() {
        let document = parse(json!({ "v": "5.7.4" })).unwrap();
        assert!(document.assets().is_empty());
        assert!(document.layers().is_empty());

        let text = document.to_json_string().unwrap();
        assert_eq!(text, r#"{"v":"5.7.4"}"#);
    }

    #[test]
    fn test_non_array_assets_is_schema_error() {
        let err = parse(json!({ "assets": { "id": "x" } })).unwrap_err();
        assert!(matches!(err, DocumentError::SchemaError { .. }));
        assert!(err.to_string().contains("`assets` must be an array"));
    }

    #[test]
    fn test_non_object_root_is_schema_error() {
        let err = parse(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, DocumentError::SchemaError { .. }));
    }

    #[test]
    fn test_asset_without_id_is_schema_error() {
        let err = parse(json!({ "assets": [{ "p": "a.png" }] })).unwrap_err();
        assert!(err.to_string().contains("assets[0]"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = LottieDocument::parse(b"{ nope", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, DocumentError::ParseError { .. }));

        let embed: EmbedError = err.into();
        assert!(matches!(embed, EmbedError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("lottie_embed_test_document_missing.json");
        let _ = std::fs::remove_file(&path);

        let err = LoadedDocument::load(&path).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound { .. }));
    }

    #[test]
    fn test_load_keeps_original_bytes() {
        let dir = std::env::temp_dir().join("lottie_embed_test_document_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("anim.json");
        let text = "{\n  \"assets\": [],\n  \"layers\": []\n}\n";
        std::fs::write(&path, text).unwrap();

        let loaded = LoadedDocument::load(&path).unwrap();
        assert_eq!(loaded.original, text.as_bytes());
        assert_eq!(loaded.folder(), dir.as_path());

        std::fs::remove_dir_all(&dir).ok();
    }
}
