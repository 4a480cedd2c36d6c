//! Embed external assets into a Lottie document.

use std::process::ExitCode;

use lottie_embed_common::{AppConfig, EmbedError};
use lottie_embed_core::{EmbedJob, RunState, StatusLine};

use crate::ui::print_status;
use crate::ResolveArgs;

pub fn run(
    resolve: ResolveArgs,
    mut config: AppConfig,
    no_center_anchors: bool,
    backup_suffix: Option<String>,
    dry_run: bool,
) -> anyhow::Result<ExitCode> {
    let path = match super::document_path(&resolve) {
        Ok(Some(path)) => path,
        Ok(None) => return Ok(ExitCode::SUCCESS),
        Err(e) => return Ok(report_failure(&e)),
    };

    if no_center_anchors {
        config.center_anchors = false;
    }
    if let Some(suffix) = backup_suffix {
        config.backup_suffix = suffix;
    }
    config.strategy = super::strategy(&resolve, &config);

    let mut job = EmbedJob::new(&path, &config);
    job.scene = super::scene_source(&resolve);
    job.dry_run = dry_run;

    println!("Embedding assets in: {}", path.display());
    println!("  Strategy: {}", config.strategy);
    println!("  Center anchor points: {}", config.center_anchors);

    let outcome = match lottie_embed_core::run(job) {
        Ok(outcome) => outcome,
        Err(e) => return Ok(report_failure(&e)),
    };

    for id in &outcome.report.unresolved {
        println!("  - No file found for asset {id}");
    }
    match &outcome.state {
        RunState::Persisted(receipt) => {
            println!("  Backup: {}", receipt.backup_path.display());
            println!("  Centered layers: {}", outcome.report.centered_layers);
        }
        RunState::DryRun => println!("  Dry run: no files written"),
        RunState::Aborted => {}
    }

    match outcome.into_result() {
        Ok(outcome) => {
            print_status(&outcome.status());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

/// Show a failed run on the status line and pick the exit code.
fn report_failure(err: &EmbedError) -> ExitCode {
    match err {
        EmbedError::NoFileSelected => {
            tracing::debug!("No file selected");
            ExitCode::SUCCESS
        }
        EmbedError::PartialResolution { embedded, total } => {
            print_status(&StatusLine::error(*embedded, *total));
            ExitCode::from(1)
        }
        e if e.is_load_failure() => {
            print_status(&StatusLine::failure(e));
            ExitCode::from(2)
        }
        e => {
            print_status(&StatusLine::failure(e));
            ExitCode::from(1)
        }
    }
}
