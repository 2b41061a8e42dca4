use std::{
    fs,
    path::{Path, PathBuf},
};

/// A named text corpus, read fully into memory.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub name: String,
    pub text: String,
}

impl Corpus {
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

pub fn load_corpus(path: &Path) -> Result<Corpus, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read text file {}: {}", path.display(), e))?;

    let name = filename_from_path(path)?;
    log::debug!("loaded corpus {} ({} bytes)", name, text.len());

    Ok(Corpus { name, text })
}

pub fn load_corpora(paths: &[PathBuf]) -> Result<Vec<Corpus>, String> {
    let mut corpora = Vec::with_capacity(paths.len());

    for path in paths {
        corpora.push(load_corpus(path)?);
    }

    Ok(corpora)
}

fn filename_from_path(path: &Path) -> Result<String, String> {
    path.file_name()
        .ok_or_else(|| format!("Missing filename for path {}", path.display()))
        .map(|name| name.to_string_lossy().to_string())
}
