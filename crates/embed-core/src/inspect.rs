//! Read-only listing of a document's assets and how they would resolve.

use std::path::PathBuf;

use lottie_embed_document::LottieDocument;
use serde::Serialize;

use crate::resolver::AssetResolver;

/// How one asset entry stands before embedding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetInspection {
    pub id: String,
    /// Recorded `u` + `p`; `None` for inline and precomposition entries.
    pub reference: Option<String>,
    pub dimensions: Option<(f64, f64)>,
    pub embedded: bool,
    pub precomposition: bool,
    /// File the resolver would embed.
    pub resolved: Option<PathBuf>,
}

impl AssetInspection {
    /// Whether a run would be able to inline this entry.
    pub fn is_satisfiable(&self) -> bool {
        self.precomposition || self.embedded || self.resolved.is_some()
    }
}

pub fn inspect(document: &LottieDocument, resolver: &dyn AssetResolver) -> Vec<AssetInspection> {
    document
        .assets()
        .iter()
        .map(|asset| {
            let file_backed = !asset.is_embedded() && !asset.is_precomposition();
            AssetInspection {
                id: asset.id.clone(),
                reference: file_backed
                    .then(|| asset.recorded_path().map(|p| format!("{}{}", asset.folder(), p)))
                    .flatten(),
                dimensions: asset.dimensions(),
                embedded: asset.is_embedded(),
                precomposition: asset.is_precomposition(),
                resolved: if file_backed {
                    resolver.resolve(asset)
                } else {
                    None
                },
            }
        })
        .collect()
}
