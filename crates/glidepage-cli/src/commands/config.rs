use anyhow::Result;

use glidepage_core::AppConfig;

/// Print the config file location and the effective settings
pub fn run(config: &AppConfig) -> Result<()> {
    println!("# {}", AppConfig::config_path().display());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
