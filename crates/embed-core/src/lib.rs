//! lottie-embed Core
//!
//! Rewrites a Lottie document so every external image reference becomes an
//! inline base64 data URI:
//! - **Resolve:** locate each asset file by path join or scene name matching
//! - **Embed:** replace `p` with a data URI, clear `u`, set `e = 1`
//! - **Normalize:** optionally recenter anchors of image layers
//! - **Persist:** verbatim backup, then rewrite, only when every asset embedded

pub mod anchor;
pub mod embedder;
pub mod inspect;
pub mod mime;
pub mod persist;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod scene;

pub use pipeline::{run, transform, EmbedJob, RunOutcome, RunState};
pub use report::{EmbedReport, StatusLine, StatusTone};
pub use resolver::{build_resolver, AssetResolver, NameMatchResolver, PathJoinResolver};
pub use scene::{DirectorySource, ManifestSource, SceneAsset, SceneAssetIndex, SceneAssetSource};
