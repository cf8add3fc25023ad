//! Initialize .mentor.toml configuration

use anyhow::Result;
use colored::Colorize;
use mentor_core::config::CONFIG_FILE_NAME;
use mentor_core::MentorConfig;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!(
            "  {} {} already exists at {}",
            "warn:".yellow(),
            CONFIG_FILE_NAME,
            config_path.display()
        );
        return Ok(());
    }

    MentorConfig::default().save(&config_path)?;

    println!(
        "  {} Created {} at {}",
        "✓".green(),
        CONFIG_FILE_NAME,
        config_path.display()
    );
    println!("\n  Set [ai].api_key (or DEEPSEEK_API_KEY) and run:");
    println!("    mentor chat");

    Ok(())
}
