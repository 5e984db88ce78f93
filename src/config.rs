use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use once_cell::sync::Lazy;

pub const OUTPUT_FILE_NAME: &str = "emoji_mapping.json";

/// Where the document renderer caches its emoji images. Falls back to a
/// literal `~` when the home directory can't be determined.
pub static DEFAULT_EMOJI_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".cache")
        .join("md2pdf")
        .join("emojis")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    pub emoji_dir: PathBuf,
    pub output_file_name: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EMOJI_DIR.to_path_buf())
    }
}

impl MappingConfig {
    pub fn new(emoji_dir: impl Into<PathBuf>) -> Self {
        Self {
            emoji_dir: emoji_dir.into(),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }

    /// The mapping sits next to the emoji directory, not inside it.
    pub fn output_path(&self) -> PathBuf {
        let parent = self.emoji_dir.parent().unwrap_or(&self.emoji_dir);
        parent.join(&self.output_file_name)
    }

    /// Accepts at most one positional argument: the emoji directory.
    /// `args` should not include the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut args = args.into_iter();
        let config = match args.next() {
            Some(dir) => Self::new(dir.as_ref()),
            None => Self::default(),
        };
        if args.next().is_some() {
            anyhow::bail!("usage: emoji-manifest [EMOJI_DIR]");
        }
        Ok(config)
    }
}
