use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;

use crate::EmojiMapping;
use crate::codepoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The emoji directory does not exist. Nothing was scanned.
    Missing,
    Mapped(EmojiMapping),
}

/// Build the emoji mapping from the image files in `emoji_dir`.
///
/// Filenames are processed in sorted order, so when two files decode to the
/// same emoji the lexicographically last one wins. Subdirectories and
/// non-utf8 names are ignored.
pub fn scan_dir(emoji_dir: &Path) -> Result<ScanOutcome> {
    if !emoji_dir.exists() {
        return Ok(ScanOutcome::Missing);
    }
    println!("Scanning emoji directory: {}", emoji_dir.display());
    let mut file_names = vec![];
    let entries = fs::read_dir(emoji_dir)
        .with_context(|| format!("failed to list {}", emoji_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(file_name) = entry.file_name().to_str() {
            if codepoint::is_image_file(file_name) {
                file_names.push(file_name.to_string());
            }
        }
    }
    file_names.sort();

    let mut mapping = EmojiMapping::new();
    for file_name in file_names {
        let Some(codepoints) = codepoint::parse_filename(&file_name) else {
            continue;
        };
        match codepoint::emoji_key(&codepoints) {
            Some(emoji) => {
                mapping.insert(emoji, file_name);
            }
            None => eprintln!("skipping {file_name}: not a valid unicode sequence"),
        }
    }
    Ok(ScanOutcome::Mapped(mapping))
}
