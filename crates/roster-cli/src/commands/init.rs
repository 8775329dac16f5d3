//! The `roster init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", SAMPLE_CONFIG)?;
        println!("Created roster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust roster.toml if you want a different message delay or format");
    println!("  2. Run: roster shell");
    println!("  3. Or:  roster exec \"add Neha 70\" sort highest");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# roster configuration

# How long a success/error message stays on screen.
dismiss_after_ms = 5000

# Output format when --format is not given: text, html, json
default_format = "text"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, OutputFormat};

    #[test]
    fn sample_config_parses() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.dismiss_after_ms, 5000);
        assert_eq!(config.default_format, OutputFormat::Text);
    }
}
