//! Output post-processing: blog image path rewriting.
//!
//! Blog posts render one directory level deeper than the `attachments/`
//! directory they reference, so relative `src="attachments/..."` references
//! in their HTML need one level of parent traversal. The rewrite is a literal
//! substring substitution scoped to `.html` pages under `/blog/` — not an
//! HTML parse. `href=` attributes and single-quoted `src` attributes are
//! deliberately out of scope.
//!
//! Each page is transformed independently with no shared state, so the
//! directory pass runs pages in parallel.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// The attribute pattern that gets rewritten. Double-quoted only.
pub const ATTACHMENT_SRC: &str = "src=\"attachments/";
const ATTACHMENT_SRC_REWRITTEN: &str = "src=\"../attachments/";

/// Rewrite relative attachment references in one rendered page.
///
/// Identity unless `output_path` is present, non-empty, ends with `.html`,
/// and contains the `/blog/` segment. When the condition holds, every
/// occurrence of `src="attachments/` becomes `src="../attachments/`.
///
/// Already-rewritten content no longer matches the pattern, so re-applying
/// the transform is a no-op.
pub fn rewrite_image_paths<'a>(content: &'a str, output_path: Option<&str>) -> Cow<'a, str> {
    let Some(path) = output_path.filter(|p| !p.is_empty()) else {
        return Cow::Borrowed(content);
    };
    if !path.ends_with(".html") || !path.contains("/blog/") {
        return Cow::Borrowed(content);
    }
    if !content.contains(ATTACHMENT_SRC) {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace(ATTACHMENT_SRC, ATTACHMENT_SRC_REWRITTEN))
}

/// One page changed by the directory pass.
#[derive(Debug)]
pub struct TransformedPage {
    /// Site-relative output path (`/blog/hello/index.html`).
    pub path: String,
    /// Number of `src` references rewritten.
    pub rewrites: usize,
}

/// Apply [`rewrite_image_paths`] to every `.html` file under `output_dir`,
/// writing changed pages back in place.
///
/// The path condition is evaluated on the site-relative path with a leading
/// slash and forward-slash separators, so the result is identical across
/// platforms. Returns the changed pages in path order.
pub fn rewrite_output_dir(output_dir: &Path) -> Result<Vec<TransformedPage>, TransformError> {
    let mut html_files = Vec::new();
    for entry in WalkDir::new(output_dir) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
        {
            html_files.push(entry.into_path());
        }
    }
    html_files.sort();

    let transformed: Vec<Option<TransformedPage>> = html_files
        .par_iter()
        .map(|file| -> Result<Option<TransformedPage>, TransformError> {
            let site_path = site_relative_path(output_dir, file);
            let content = fs::read_to_string(file)?;
            let rewrites = content.matches(ATTACHMENT_SRC).count();
            match rewrite_image_paths(&content, Some(&site_path)) {
                Cow::Borrowed(_) => Ok(None),
                Cow::Owned(rewritten) => {
                    fs::write(file, rewritten)?;
                    Ok(Some(TransformedPage {
                        path: site_path,
                        rewrites,
                    }))
                }
            }
        })
        .collect::<Result<_, _>>()?;

    Ok(transformed.into_iter().flatten().collect())
}

/// `/`-prefixed, forward-slash path of `file` relative to the output root.
fn site_relative_path(output_dir: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(output_dir).unwrap_or(file);
    let mut path = String::from("/");
    for (i, component) in rel.components().enumerate() {
        if i > 0 {
            path.push('/');
        }
        path.push_str(&component.as_os_str().to_string_lossy());
    }
    path
}
