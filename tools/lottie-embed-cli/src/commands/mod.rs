//! Subcommand implementations.

pub mod config;
pub mod embed;
pub mod inspect;

use std::path::PathBuf;

use lottie_embed_common::{AppConfig, EmbedError, EmbedResult, ResolverStrategy};
use lottie_embed_core::{DirectorySource, ManifestSource, SceneAssetSource};

use crate::ui::prompt_for_document;
use crate::ResolveArgs;

/// Document named on the command line, else prompted for.
///
/// `Ok(None)` when the prompt was left empty; callers exit quietly.
fn document_path(args: &ResolveArgs) -> EmbedResult<Option<PathBuf>> {
    if let Some(path) = &args.path {
        return Ok(Some(path.clone()));
    }
    match prompt_for_document() {
        Ok(path) => Ok(Some(path)),
        Err(EmbedError::NoFileSelected) => {
            tracing::debug!("No file selected");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Scene source named on the command line, if any.
fn scene_source(args: &ResolveArgs) -> Option<Box<dyn SceneAssetSource>> {
    if let Some(dir) = &args.scene_dir {
        return Some(Box::new(DirectorySource::new(dir)));
    }
    args.scene_manifest
        .as_ref()
        .map(|path| Box::new(ManifestSource::new(path)) as Box<dyn SceneAssetSource>)
}

/// Explicit flag first, then name matching when a scene was given, then config.
fn strategy(args: &ResolveArgs, config: &AppConfig) -> ResolverStrategy {
    match args.strategy {
        Some(strategy) => strategy.into(),
        None if args.scene_dir.is_some() || args.scene_manifest.is_some() => {
            ResolverStrategy::NameMatch
        }
        None => config.strategy,
    }
}
