//! Asset resolution: locate the file behind an external asset reference.

use std::path::{Path, PathBuf};

use lottie_embed_common::{EmbedError, EmbedResult, ResolverStrategy};
use lottie_embed_document::AssetEntry;

use crate::scene::{base_name, SceneAssetIndex, SceneAssetSource};

/// Maps an asset entry to the file that should be embedded for it.
pub trait AssetResolver {
    /// Candidate file for the asset, or `None` when nothing matches.
    fn resolve(&self, asset: &AssetEntry) -> Option<PathBuf>;

    /// Strategy implemented by this resolver.
    fn strategy(&self) -> ResolverStrategy;
}

/// Joins `<document folder>/<u><p>` and requires the result to exist.
#[derive(Debug, Clone)]
pub struct PathJoinResolver {
    document_folder: PathBuf,
}

impl PathJoinResolver {
    pub fn new(document_folder: impl Into<PathBuf>) -> Self {
        Self {
            document_folder: document_folder.into(),
        }
    }

    /// The joined path, whether or not it exists.
    ///
    /// `u` + `p` is always taken relative to the document folder, even when
    /// the exporter wrote a leading separator.
    pub fn candidate(&self, asset: &AssetEntry) -> Option<PathBuf> {
        let file = asset.recorded_path()?;
        let relative = format!("{}{}", asset.folder(), file);
        let relative = relative.trim_start_matches(['/', '\\']);
        Some(self.document_folder.join(relative))
    }
}

impl AssetResolver for PathJoinResolver {
    fn resolve(&self, asset: &AssetEntry) -> Option<PathBuf> {
        let candidate = self.candidate(asset)?;
        if candidate.is_file() {
            Some(candidate)
        } else {
            tracing::debug!(asset = %asset.id, path = %candidate.display(), "Candidate missing");
            None
        }
    }

    fn strategy(&self) -> ResolverStrategy {
        ResolverStrategy::PathJoin
    }
}

/// Matches the recorded file name against the scene asset index.
///
/// The first index key (insertion order) contained in the asset's base file
/// name wins, even when a later key is a longer, more specific match.
#[derive(Debug, Clone)]
pub struct NameMatchResolver {
    index: SceneAssetIndex,
}

impl NameMatchResolver {
    pub fn new(index: SceneAssetIndex) -> Self {
        Self { index }
    }
}

impl AssetResolver for NameMatchResolver {
    fn resolve(&self, asset: &AssetEntry) -> Option<PathBuf> {
        let name = base_name(asset.recorded_path()?)?;
        let (key, path) = self.index.find_match(&name)?;
        tracing::debug!(asset = %asset.id, name = %name, key = %key, "Matched scene asset");
        Some(path.to_path_buf())
    }

    fn strategy(&self) -> ResolverStrategy {
        ResolverStrategy::NameMatch
    }
}

/// Build the resolver selected by configuration.
///
/// The name-matching strategy needs a scene asset source; path-join ignores it.
pub fn build_resolver(
    strategy: ResolverStrategy,
    document_folder: &Path,
    scene: Option<&dyn SceneAssetSource>,
) -> EmbedResult<Box<dyn AssetResolver>> {
    match strategy {
        ResolverStrategy::PathJoin => Ok(Box::new(PathJoinResolver::new(document_folder))),
        ResolverStrategy::NameMatch => {
            let source = scene.ok_or_else(|| {
                EmbedError::config("name_match strategy requires a scene directory or manifest")
            })?;
            let index = SceneAssetIndex::build(source)?;
            if index.is_empty() {
                tracing::warn!(source = %source.describe(), "Scene asset index is empty");
            }
            Ok(Box::new(NameMatchResolver::new(index)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DirectorySource;

    #[test]
    fn test_path_join_candidate_concatenates_folder_and_file() {
        let resolver = PathJoinResolver::new("/exports/anim");
        let asset = AssetEntry::image("image_0", "images/", "img_0.png");
        assert_eq!(
            resolver.candidate(&asset),
            Some(PathBuf::from("/exports/anim/images/img_0.png"))
        );
    }

    #[test]
    fn test_path_join_keeps_document_folder_for_rooted_prefix() {
        let dir = std::env::temp_dir().join("lottie_embed_test_resolver_rooted");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("images")).unwrap();
        std::fs::write(dir.join("images").join("img_0.png"), b"png").unwrap();

        let resolver = PathJoinResolver::new(&dir);
        let rooted_folder = AssetEntry::image("image_0", "/images/", "img_0.png");
        let rooted_file = AssetEntry::image("image_1", "", "/images/img_0.png");

        assert_eq!(
            resolver.candidate(&rooted_folder),
            Some(dir.join("images/img_0.png"))
        );
        assert_eq!(
            resolver.resolve(&rooted_folder),
            Some(dir.join("images/img_0.png"))
        );
        assert_eq!(
            resolver.resolve(&rooted_file),
            Some(dir.join("images/img_0.png"))
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_path_join_requires_existing_file() {
        let dir = std::env::temp_dir().join("lottie_embed_test_resolver_join");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("images")).unwrap();
        std::fs::write(dir.join("images").join("img_0.png"), b"png").unwrap();

        let resolver = PathJoinResolver::new(&dir);
        let present = AssetEntry::image("image_0", "images/", "img_0.png");
        let missing = AssetEntry::image("image_1", "images/", "img_1.png");

        assert_eq!(
            resolver.resolve(&present),
            Some(dir.join("images").join("img_0.png"))
        );
        assert_eq!(resolver.resolve(&missing), None);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_path_join_embedded_entry_degenerates() {
        let resolver = PathJoinResolver::new("/nowhere");
        let mut asset = AssetEntry::image("image_0", "images/", "img_0.png");
        asset.embed("data:image/png;base64,AAAA".to_string());
        assert_eq!(resolver.resolve(&asset), None);
    }

    #[test]
    fn test_name_match_uses_base_name_of_recorded_path() {
        let mut index = SceneAssetIndex::new();
        index.insert("logo", "/abs/logo.png");
        index.insert("logo_2x", "/abs/logo_2x.png");
        let resolver = NameMatchResolver::new(index);

        let asset = AssetEntry::image("image_0", "images/", "logo_2x_final.png");
        assert_eq!(resolver.resolve(&asset), Some(PathBuf::from("/abs/logo.png")));

        let other = AssetEntry::image("image_1", "images/", "background0.png");
        assert_eq!(resolver.resolve(&other), None);
    }

    #[test]
    fn test_name_match_without_source_is_config_error() {
        let err = build_resolver(ResolverStrategy::NameMatch, Path::new("/tmp"), None)
            .err()
            .unwrap();
        assert!(matches!(err, EmbedError::Config { .. }));
    }

    #[test]
    fn test_build_resolver_reports_strategy() {
        let resolver = build_resolver(ResolverStrategy::PathJoin, Path::new("/tmp"), None).unwrap();
        assert_eq!(resolver.strategy(), ResolverStrategy::PathJoin);

        let dir = std::env::temp_dir().join("lottie_embed_test_resolver_build");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("logo.png"), b"png").unwrap();

        let source = DirectorySource::new(&dir);
        let resolver =
            build_resolver(ResolverStrategy::NameMatch, Path::new("/tmp"), Some(&source)).unwrap();
        assert_eq!(resolver.strategy(), ResolverStrategy::NameMatch);
        let asset = AssetEntry::image("image_0", "images/", "logo0.png");
        assert_eq!(resolver.resolve(&asset), Some(dir.join("logo.png")));

        std::fs::remove_dir_all(&dir).ok();
    }
}
