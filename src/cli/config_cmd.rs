use comment_remover::config::Settings;
use comment_remover::error::{Error, Result};

pub fn show_path() -> Result<()> {
    println!("{}", Settings::config_path()?.display());
    Ok(())
}

pub fn set_config(key: &str, value: &str) -> Result<()> {
    let mut settings = Settings::load()?;

    match key {
        "fallback_language" => {
            settings.registry()?.language(value)?;
            settings.fallback_language = value.to_string();
        }
        "backup" => settings.backup = parse_bool(value)?,
        "tidy.squeeze_blank_lines" => settings.tidy.squeeze_blank_lines = parse_bool(value)?,
        "tidy.trim_trailing_whitespace" => {
            settings.tidy.trim_trailing_whitespace = parse_bool(value)?
        }
        "tidy.final_newline" => settings.tidy.final_newline = parse_bool(value)?,
        _ => return Err(Error::UnknownSetting(key.to_string())),
    }

    settings.save()?;
    println!("{key} = {value}");
    Ok(())
}

pub fn get_config(key: &str) -> Result<()> {
    let settings = Settings::load()?;

    match key {
        "fallback_language" => println!("{}", settings.fallback_language),
        "backup" => println!("{}", settings.backup),
        "tidy.squeeze_blank_lines" => println!("{}", settings.tidy.squeeze_blank_lines),
        "tidy.trim_trailing_whitespace" => {
            println!("{}", settings.tidy.trim_trailing_whitespace)
        }
        "tidy.final_newline" => println!("{}", settings.tidy.final_newline),
        _ => return Err(Error::UnknownSetting(key.to_string())),
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidValue(value.to_string())),
    }
}
