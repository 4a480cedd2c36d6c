//! Backup-then-rewrite of the document file.
//!
//! The sequence is strictly ordered and stops at the first failure:
//! 1. write the original bytes to the backup path and read them back
//! 2. serialize the transformed document
//! 3. write it to a temp file beside the real target, rename over it, read back
//!
//! A symlinked document keeps its link; the file it points to is replaced.

use std::io::Write;
use std::path::{Path, PathBuf};

use lottie_embed_common::{EmbedError, EmbedResult};
use lottie_embed_document::LoadedDocument;

/// What a successful persist left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReceipt {
    pub document_path: PathBuf,
    pub backup_path: PathBuf,
    pub bytes_written: usize,
}

/// Back up the original file, then overwrite it with the transformed document.
pub fn persist(loaded: &LoadedDocument, backup_path: &Path) -> EmbedResult<PersistReceipt> {
    if backup_path == loaded.path {
        return Err(EmbedError::config(
            "backup path must differ from the document path",
        ));
    }

    write_backup(&loaded.original, backup_path)?;
    tracing::debug!(path = %backup_path.display(), "Backup written");

    let text = loaded.document.to_json_string()?;
    write_document(text.as_bytes(), &loaded.path)?;
    tracing::info!(
        path = %loaded.path.display(),
        bytes = text.len(),
        "Document rewritten"
    );

    Ok(PersistReceipt {
        document_path: loaded.path.clone(),
        backup_path: backup_path.to_path_buf(),
        bytes_written: text.len(),
    })
}

fn write_backup(original: &[u8], backup_path: &Path) -> EmbedResult<()> {
    let backup_err = |source: std::io::Error| EmbedError::Backup {
        path: backup_path.to_path_buf(),
        source,
    };

    std::fs::write(backup_path, original).map_err(backup_err)?;
    let written = std::fs::read(backup_path).map_err(backup_err)?;
    if written != original {
        return Err(backup_err(std::io::Error::other(
            "backup content does not match the original",
        )));
    }
    Ok(())
}

fn write_document(bytes: &[u8], path: &Path) -> EmbedResult<()> {
    let write_err = |source: std::io::Error| EmbedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = std::fs::canonicalize(path).map_err(write_err)?;
    let folder = target.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".tmp")
        .tempfile_in(folder)
        .map_err(write_err)?;
    temp.write_all(bytes).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    // On failure the returned temp file is dropped, which deletes it.
    temp.persist(&target).map_err(|e| write_err(e.error))?;

    let written = std::fs::read(path).map_err(write_err)?;
    if written != bytes {
        return Err(write_err(std::io::Error::other(
            "written document does not match the serialized output",
        )));
    }
    Ok(())
}

const TEMP_PREFIX: &str = ".lottie-embed-";
