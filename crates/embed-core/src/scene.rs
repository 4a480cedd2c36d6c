//! Scene asset index: the host project's loaded assets keyed by file name.
//!
//! The index is built once per run from a [`SceneAssetSource`] and consulted
//! by the name-matching resolver. Key order is insertion order, and lookups
//! return the first key contained in the queried name.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use lottie_embed_common::{EmbedError, EmbedResult};
use serde::{Deserialize, Serialize};

use crate::mime::mime_for_extension;

/// Asset type reported for files the host cannot classify.
pub const UNKNOWN_ASSET_TYPE: &str = "unknown";

/// One asset loaded in the host project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneAsset {
    /// Host-side asset identifier.
    pub id: String,

    /// Host-side asset type (`"image"`, `"unknown"`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Absolute path of the backing file.
    pub path: PathBuf,
}

/// Enumerates the assets loaded in the host project.
pub trait SceneAssetSource {
    /// Assets in a stable order.
    fn scene_assets(&self) -> EmbedResult<Vec<SceneAsset>>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Every regular file directly inside a folder, sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SceneAssetSource for DirectorySource {
    fn scene_assets(&self) -> EmbedResult<Vec<SceneAsset>> {
        if !self.root.is_dir() {
            return Err(EmbedError::FileNotFound {
                path: self.root.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        Ok(files
            .into_iter()
            .map(|path| {
                let kind = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(mime_for_extension)
                    .map(|_| "image")
                    .unwrap_or(UNKNOWN_ASSET_TYPE);
                SceneAsset {
                    id: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    kind: kind.to_string(),
                    path,
                }
            })
            .collect())
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// A JSON array of `{ "id", "type", "path" }` exported from the host project.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SceneAssetSource for ManifestSource {
    fn scene_assets(&self) -> EmbedResult<Vec<SceneAsset>> {
        if !self.path.is_file() {
            return Err(EmbedError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let text = std::fs::read_to_string(&self.path)?;
        let assets: Vec<SceneAsset> =
            serde_json::from_str(&text).map_err(|e| EmbedError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        // Relative entries are taken relative to the manifest itself.
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Ok(assets
            .into_iter()
            .map(|mut asset| {
                if asset.path.is_relative() {
                    asset.path = base.join(&asset.path);
                }
                asset
            })
            .collect())
    }

    fn describe(&self) -> String {
        format!("manifest {}", self.path.display())
    }
}

/// File name without extension mapped to absolute path, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SceneAssetIndex {
    entries: IndexMap<String, PathBuf>,
}

impl SceneAssetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a source, skipping assets of unknown type.
    pub fn build(source: &dyn SceneAssetSource) -> EmbedResult<Self> {
        let assets = source.scene_assets()?;
        let index = Self::from_assets(assets);
        tracing::debug!(
            source = %source.describe(),
            entries = index.len(),
            "Built scene asset index"
        );
        Ok(index)
    }

    pub fn from_assets(assets: impl IntoIterator<Item = SceneAsset>) -> Self {
        let mut index = Self::new();
        for asset in assets {
            if asset.kind == UNKNOWN_ASSET_TYPE {
                continue;
            }
            let Some(name) = base_name(&asset.path) else {
                continue;
            };
            index.insert(name, asset.path);
        }
        index
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    /// First key (in insertion order) that is a substring of `name`.
    pub fn find_match(&self, name: &str) -> Option<(&str, &Path)> {
        self.entries
            .iter()
            .find(|(key, _)| name.contains(key.as_str()))
            .map(|(key, path)| (key.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// File name without its extension.
pub fn base_name(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scene(id: &str, kind: &str, path: &str) -> SceneAsset {
        SceneAsset {
            id: id.to_string(),
            kind: kind.to_string(),
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn test_first_inserted_key_wins() {
        let mut index = SceneAssetIndex::new();
        index.insert("logo", "/abs/logo.png");
        index.insert("logo_2x", "/abs/logo_2x.png");

        let (key, path) = index.find_match("logo_2x_final").unwrap();
        assert_eq!(key, "logo");
        assert_eq!(path, Path::new("/abs/logo.png"));
    }

    #[test]
    fn test_insertion_order_not_length_decides() {
        let mut index = SceneAssetIndex::new();
        index.insert("logo_2x", "/abs/logo_2x.png");
        index.insert("logo", "/abs/logo.png");

        let (key, _) = index.find_match("logo_2x_final").unwrap();
        assert_eq!(key, "logo_2x");
    }

    #[test]
    fn test_no_match() {
        let mut index = SceneAssetIndex::new();
        index.insert("background", "/abs/background.jpg");
        assert!(index.find_match("logo0").is_none());
    }

    #[test]
    fn test_unknown_types_are_skipped() {
        let index = SceneAssetIndex::from_assets(vec![
            scene("1", "unknown", "/abs/notes.txt"),
            scene("2", "image", "/abs/logo.png"),
        ]);
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["logo"]);
    }

    #[test]
    fn test_duplicate_name_replaces_path_keeps_position() {
        let index = SceneAssetIndex::from_assets(vec![
            scene("1", "image", "/a/logo.png"),
            scene("2", "image", "/a/bg.png"),
            scene("3", "image", "/b/logo.jpg"),
        ]);
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["logo", "bg"]);
        let (_, path) = index.find_match("logo0").unwrap();
        assert_eq!(path, Path::new("/b/logo.jpg"));
    }

    #[test]
    fn test_directory_source_is_sorted_and_typed() {
        let dir = std::env::temp_dir().join("lottie_embed_test_scene_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("b.png"), b"b").unwrap();
        std::fs::write(dir.join("a.jpg"), b"a").unwrap();
        std::fs::write(dir.join("readme.txt"), b"r").unwrap();

        let assets = DirectorySource::new(&dir).scene_assets().unwrap();
        let names: Vec<_> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "readme.txt"]);
        assert_eq!(assets[2].kind, UNKNOWN_ASSET_TYPE);

        let index = SceneAssetIndex::build(&DirectorySource::new(&dir)).unwrap();
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["a", "b"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_manifest_source_resolves_relative_paths() {
        let dir = std::env::temp_dir().join("lottie_embed_test_scene_manifest");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let manifest = dir.join("scene.json");
        std::fs::write(
            &manifest,
            r#"[
                { "id": "asset#1", "type": "image", "path": "art/logo.png" },
                { "id": "asset#2", "type": "unknown", "path": "/abs/font.ttf" }
            ]"#,
        )
        .unwrap();

        let assets = ManifestSource::new(&manifest).scene_assets().unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].path, dir.join("art/logo.png"));
        assert_eq!(assets[1].path, PathBuf::from("/abs/font.ttf"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_manifest_is_not_found() {
        let err = ManifestSource::new("/definitely/not/here.json")
            .scene_assets()
            .unwrap_err();
        assert!(matches!(err, EmbedError::FileNotFound { .. }));
    }

    proptest! {
        #[test]
        fn prop_match_is_first_contained_key(
            keys in prop::collection::vec("[a-c]{1,3}", 1..6),
            name in "[a-c]{0,8}",
        ) {
            let mut index = SceneAssetIndex::new();
            let mut order: Vec<String> = Vec::new();
            for key in &keys {
                if !order.contains(key) {
                    order.push(key.clone());
                }
                index.insert(key.clone(), format!("/abs/{key}.png"));
            }

            let expected = order.iter().find(|k| name.contains(k.as_str()));
            let actual = index.find_match(&name).map(|(k, _)| k.to_string());
            prop_assert_eq!(actual.as_ref(), expected);
        }
    }
}
