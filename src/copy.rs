//! Passthrough copies.
//!
//! The config declares a list of files and directories that go into the
//! output tree verbatim — stylesheets, blog attachments, embeds. Each target
//! keeps its path relative to the input root, so `blog/attachments` lands at
//! `<output>/blog/attachments`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("passthrough source not found: {0}")]
    MissingSource(PathBuf),
}

/// Report for one passthrough target.
#[derive(Debug)]
pub struct CopiedEntry {
    /// Target path as declared in the config.
    pub target: String,
    /// Number of files copied (1 for a plain file).
    pub files: usize,
}

/// Copy every declared passthrough target from the input root into the
/// output tree. A missing source aborts the build rather than silently
/// producing an incomplete site.
pub fn run_passthrough_copies(
    input_root: &Path,
    output_root: &Path,
    targets: &[String],
) -> Result<Vec<CopiedEntry>, CopyError> {
    let mut copied = Vec::with_capacity(targets.len());
    for target in targets {
        let src = input_root.join(target);
        let dst = output_root.join(target);
        if !src.exists() {
            return Err(CopyError::MissingSource(src));
        }
        let files = if src.is_dir() {
            fs::create_dir_all(&dst)?;
            copy_dir_recursive(&src, &dst)?
        } else {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&src, &dst)?;
            1
        };
        copied.push(CopiedEntry {
            target: target.clone(),
            files,
        });
    }
    Ok(copied)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut files = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            files += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            files += 1;
        }
    }
    Ok(files)
}
