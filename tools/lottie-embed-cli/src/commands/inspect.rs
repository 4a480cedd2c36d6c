//! Show how each asset of a document would resolve.

use std::process::ExitCode;

use lottie_embed_common::AppConfig;
use lottie_embed_core::build_resolver;
use lottie_embed_core::inspect::inspect;
use lottie_embed_document::LoadedDocument;

use crate::ResolveArgs;

pub fn run(resolve: ResolveArgs, config: AppConfig) -> anyhow::Result<ExitCode> {
    let Some(path) = super::document_path(&resolve)? else {
        return Ok(ExitCode::SUCCESS);
    };

    let loaded = LoadedDocument::load(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let strategy = super::strategy(&resolve, &config);
    let scene = super::scene_source(&resolve);
    let resolver = build_resolver(strategy, loaded.folder(), scene.as_deref())?;

    let rows = inspect(&loaded.document, resolver.as_ref());

    println!("Document: {}", loaded.path.display());
    println!("  Strategy: {strategy}");
    println!("  Layers: {}", loaded.document.layers().len());
    println!();

    println!("Assets:");
    for row in &rows {
        let size = row
            .dimensions
            .map(|(w, h)| format!("{w}x{h}"))
            .unwrap_or_else(|| "-".to_string());
        if row.precomposition {
            println!("  {} (precomposition)", row.id);
        } else if row.embedded {
            println!("  {} [{size}] already embedded", row.id);
        } else {
            let reference = row.reference.as_deref().unwrap_or("<none>");
            match &row.resolved {
                Some(file) => println!("  {} [{size}] {reference} -> {}", row.id, file.display()),
                None => println!("  {} [{size}] {reference} -> NOT FOUND", row.id),
            }
        }
    }

    let file_backed = rows.iter().filter(|r| !r.precomposition).count();
    let satisfiable = rows
        .iter()
        .filter(|r| !r.precomposition && r.is_satisfiable())
        .count();
    println!();
    println!("{satisfiable} of {file_backed} assets can be embedded.");

    if satisfiable == file_backed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
