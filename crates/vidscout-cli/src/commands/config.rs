use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use serde_json::json;
use vidscout_config::{Config, PathManager};

pub fn run_show(output: &Output) -> Result<()> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let config = Config::load_with_env(&paths.config_file());

    match output.format() {
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": paths.config_file(),
                "api_key": mask_key(&config.youtube.api_key),
                "max_results": config.youtube.max_results,
                "region": config.youtube.region,
            }));
        }
        OutputFormat::Human => {
            output.info(format!("Config file: {}", paths.config_file().display()));
            output.info(format!("API key:     {}", mask_key(&config.youtube.api_key)));
            output.info(format!("Max results: {}", config.youtube.max_results));
            output.info(format!(
                "Region:      {}",
                config.youtube.region.as_deref().unwrap_or("(none)")
            ));
            if !config.is_configured() {
                output.warn("No API key configured. Run 'vidscout config set-key <KEY>'.");
            }
        }
    }
    Ok(())
}

pub fn run_set_key(key: &str, output: &Output) -> Result<()> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    paths.ensure_directories().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let mut config = Config::load_or_default(&paths.config_file());
    config.youtube.api_key = key.to_string();
    config
        .save_to_file(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config: {}", e))?;
    output.success(format!("API key saved ({})", mask_key(key)));
    Ok(())
}

pub fn run_set_region(code: Option<String>, output: &Output) -> Result<()> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    paths.ensure_directories().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let mut config = Config::load_or_default(&paths.config_file());
    config.youtube.region = code.map(|c| c.to_uppercase());
    config
        .save_to_file(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config: {}", e))?;
    match &config.youtube.region {
        Some(region) => output.success(format!("Default region set to {}", region)),
        None => output.success("Default region cleared"),
    }
    Ok(())
}

/// Keep the first few characters so the user can tell which key is loaded.
fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = key.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(key.chars().count().saturating_sub(4)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("abc"), "abc");
        assert_eq!(mask_key("abcdefgh"), "abcd****");
    }
}
