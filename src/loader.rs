use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::vectorizer::corpus::Corpus;

/// Read every `*.txt` file directly inside `dir` into a corpus.
///
/// Not recursive. Files are added in file-name order and keyed by file name,
/// so the document order is stable across runs and platforms.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.to_path_buf()));
    }

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| Error::Io { path, source }
    };

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!(?path, "skipping file with non UTF-8 name");
            continue;
        };
        if name.ends_with(".txt") {
            files.push((name.to_string(), path));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut corpus = Corpus::new();
    for (name, path) in files {
        let text = fs::read_to_string(&path).map_err(io_err(&path))?;
        corpus.add_document(name, text)?;
    }
    info!(documents = corpus.doc_num(), dir = %dir.display(), "documents loaded");
    Ok(corpus)
}
