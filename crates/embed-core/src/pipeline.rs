//! The embedding run: load, resolve, embed, normalize, persist.
//!
//! ```text
//! Idle -> DocumentLoaded -> AssetsResolved -+-> AllEmbedded -> [Normalized] -> Persisted
//!                                           +-> PartiallyEmbedded -> Aborted (nothing written)
//! ```

use std::path::PathBuf;

use lottie_embed_common::{AppConfig, EmbedError, EmbedResult, ResolverStrategy};
use lottie_embed_document::{LoadedDocument, LottieDocument};

use crate::anchor::center_anchor_points;
use crate::embedder::embed_assets;
use crate::persist::{persist, PersistReceipt};
use crate::report::{EmbedReport, StatusLine};
use crate::resolver::{build_resolver, AssetResolver};
use crate::scene::SceneAssetSource;

/// Embed assets in place and, when everything resolved, recenter anchors.
///
/// Pure with respect to the filesystem apart from reading asset files.
pub fn transform(
    document: &mut LottieDocument,
    resolver: &dyn AssetResolver,
    center_anchors: bool,
) -> EmbedReport {
    let mut report = embed_assets(document, resolver);
    if center_anchors && report.all_embedded() {
        report.centered_layers = center_anchor_points(document);
    }
    report
}

/// Everything needed for one run.
pub struct EmbedJob {
    /// Document to rewrite.
    pub path: PathBuf,

    /// How asset files are located.
    pub strategy: ResolverStrategy,

    /// Host project assets, required by the name-matching strategy.
    pub scene: Option<Box<dyn SceneAssetSource>>,

    /// Recenter image layer anchors.
    pub center_anchors: bool,

    /// Where the verbatim copy of the original goes.
    pub backup_path: PathBuf,

    /// Report without writing anything.
    pub dry_run: bool,
}

impl EmbedJob {
    /// A job for `path` using the configured defaults.
    pub fn new(path: impl Into<PathBuf>, config: &AppConfig) -> Self {
        let path = path.into();
        Self {
            backup_path: config.backup_path(&path),
            strategy: config.strategy,
            scene: None,
            center_anchors: config.center_anchors,
            dry_run: false,
            path,
        }
    }

    pub fn with_scene(mut self, scene: Box<dyn SceneAssetSource>) -> Self {
        self.scene = Some(scene);
        self
    }
}

/// Terminal state of a run that got past loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// Backup and rewrite both completed.
    Persisted(PersistReceipt),
    /// Not every asset resolved; nothing was written.
    Aborted,
    /// Dry run; nothing was written.
    DryRun,
}

/// Result of [`run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub path: PathBuf,
    pub report: EmbedReport,
    pub state: RunState,
}

impl RunOutcome {
    pub fn status(&self) -> StatusLine {
        self.report.status()
    }

    /// Turn an aborted run into [`EmbedError::PartialResolution`].
    pub fn into_result(self) -> EmbedResult<Self> {
        match self.state {
            RunState::Aborted => Err(EmbedError::PartialResolution {
                embedded: self.report.satisfied(),
                total: self.report.total,
            }),
            _ => Ok(self),
        }
    }
}

/// Execute one embedding run.
///
/// Load failures and write failures are returned as errors. A partial
/// resolution is a normal outcome ([`RunState::Aborted`]) and leaves both the
/// document and any existing backup untouched.
pub fn run(job: EmbedJob) -> EmbedResult<RunOutcome> {
    let mut loaded = LoadedDocument::load(&job.path)?;
    tracing::info!(
        path = %loaded.path.display(),
        assets = loaded.document.assets().len(),
        layers = loaded.document.layers().len(),
        "Document loaded"
    );

    let resolver = build_resolver(job.strategy, loaded.folder(), job.scene.as_deref())?;
    let report = transform(&mut loaded.document, resolver.as_ref(), job.center_anchors);

    tracing::info!(
        strategy = %job.strategy,
        total = report.total,
        embedded = report.embedded,
        already_embedded = report.already_embedded,
        centered_layers = report.centered_layers,
        "Assets processed"
    );

    let state = if !report.all_embedded() {
        tracing::warn!(
            unresolved = ?report.unresolved,
            "Not all assets resolved; leaving files untouched"
        );
        RunState::Aborted
    } else if job.dry_run {
        RunState::DryRun
    } else {
        RunState::Persisted(persist(&loaded, &job.backup_path)?)
    };

    Ok(RunOutcome {
        path: loaded.path,
        report,
        state,
    })
}
