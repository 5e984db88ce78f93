mod codepoint;
mod config;
mod mapping;
mod scanner;

pub use codepoint::IMAGE_EXTENSION;
pub use codepoint::emoji_key;
pub use codepoint::is_image_file;
pub use codepoint::parse_filename;
pub use config::DEFAULT_EMOJI_DIR;
pub use config::MappingConfig;
pub use config::OUTPUT_FILE_NAME;
pub use mapping::EmojiMapping;
pub use scanner::ScanOutcome;
pub use scanner::scan_dir;

use anyhow::Result;

/// Scan the emoji directory and write the mapping next to it.
///
/// A missing directory is reported and yields `Ok(None)` without touching
/// the output file. Write failures are returned as errors.
pub fn generate_mapping(config: &MappingConfig) -> Result<Option<EmojiMapping>> {
    let emoji_dir = &config.emoji_dir;
    let mapping = match scan_dir(emoji_dir)? {
        ScanOutcome::Mapped(mapping) => mapping,
        ScanOutcome::Missing => {
            eprintln!("error: emoji directory does not exist: {}", emoji_dir.display());
            return Ok(None);
        }
    };
    println!("Found {} emoji", mapping.len());

    let output_path = config.output_path();
    mapping.save(&output_path)?;
    println!("Mapping saved to: {}", output_path.display());
    Ok(Some(mapping))
}
