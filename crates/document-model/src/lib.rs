//! lottie-embed Document Model
//!
//! Defines the subset of the Lottie format the embedder touches:
//! - **Assets:** External image references, precompositions, embedded data URIs
//! - **Layers:** Image layers and their anchor-point transform property
//! - **Document:** The top-level container plus load/save of the file on disk
//!
//! Every field not modeled here is carried through untouched so a rewritten
//! document differs from the original only where the pipeline mutated it.

pub mod asset;
pub mod document;
pub mod layer;

pub use asset::*;
pub use document::*;
pub use layer::*;
