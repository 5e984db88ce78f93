use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

/// Emoji character sequence keyed to the image filename that renders it.
///
/// Keys are kept sorted so the file on disk is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiMapping {
    entries: BTreeMap<String, String>,
}

impl EmojiMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins. Returns the filename that was replaced, if any.
    pub fn insert(&mut self, emoji: String, file_name: String) -> Option<String> {
        self.entries.insert(emoji, file_name)
    }

    pub fn get(&self, emoji: &str) -> Option<&str> {
        self.entries.get(emoji).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(emoji, file_name)| (emoji.as_str(), file_name.as_str()))
    }

    /// Full path of the image for `emoji` inside `emoji_dir`.
    pub fn image_path(&self, emoji_dir: &Path, emoji: &str) -> Option<PathBuf> {
        self.get(emoji).map(|file_name| emoji_dir.join(file_name))
    }

    /// Two space indent, non-ascii characters written as-is.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Overwrites `path`. The json goes to a sibling temp file first and is
    /// renamed into place so a failed write can't leave a truncated mapping.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_json()?;
        let mut tmp_name = path
            .file_name()
            .with_context(|| format!("output path has no file name: {}", path.display()))?
            .to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);
        if let Err(e) = fs::write(&tmp_path, data) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("failed to write {}", tmp_path.display()));
        }
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| {
                format!("failed to move mapping into place at {}", path.display())
            });
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&data_str)
            .with_context(|| format!("invalid emoji mapping in {}", path.display()))
    }
}
