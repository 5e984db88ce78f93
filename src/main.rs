use emoji_manifest::MappingConfig;
use emoji_manifest::generate_mapping;

fn main() -> anyhow::Result<()> {
    let config = MappingConfig::from_args(std::env::args_os().skip(1))?;
    // a missing emoji directory is reported but isn't a failure
    generate_mapping(&config)?;
    Ok(())
}
