//! Inline data URI embedding of resolved asset files.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use lottie_embed_document::LottieDocument;

use crate::mime::mime_type;
use crate::report::EmbedReport;
use crate::resolver::AssetResolver;

/// Read a file and format it as `data:{mime};base64,{data}`.
pub fn data_uri(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        mime_type(path),
        BASE64_STANDARD.encode(bytes)
    ))
}

/// Embed every resolvable asset of `document` in place.
///
/// Entries that already hold a data URI are counted and left untouched.
/// Precompositions are not file references and are not counted at all.
/// Unresolved entries keep their original reference.
pub fn embed_assets(document: &mut LottieDocument, resolver: &dyn AssetResolver) -> EmbedReport {
    let mut report = EmbedReport::default();

    for asset in document.assets_mut() {
        if asset.is_precomposition() {
            continue;
        }
        report.total += 1;

        if asset.is_embedded() {
            tracing::debug!(asset = %asset.id, "Already embedded, skipping");
            report.already_embedded += 1;
            continue;
        }

        let Some(path) = resolver.resolve(asset) else {
            tracing::warn!(
                asset = %asset.id,
                reference = asset.recorded_path().unwrap_or(""),
                "No file found for asset"
            );
            report.unresolved.push(asset.id.clone());
            continue;
        };

        match data_uri(&path) {
            Ok(uri) => {
                tracing::debug!(asset = %asset.id, path = %path.display(), bytes = uri.len(), "Embedded asset");
                asset.embed(uri);
                report.embedded += 1;
            }
            Err(e) => {
                tracing::warn!(asset = %asset.id, path = %path.display(), "Failed to read asset: {e}");
                report.unresolved.push(asset.id.clone());
            }
        }
    }

    report
}
