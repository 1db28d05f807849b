use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{
    get_config_path, save_config, validate_config, Config, PositionConfig, DEFAULT_BASE_POINTS,
};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until the answer parses as a non-negative whole number.
fn prompt_points(message: &str, default: u64) -> Result<u64> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<u64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("  Invalid: must be a non-negative whole number. Try again."),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Shift Tally Configuration Wizard");
    println!("================================");
    println!();

    // 1. Default base points
    println!("Base points are the most a volunteer can earn for one unit of work,");
    println!("before the grade multiplier is applied.");
    let default_base_points = prompt_points("Default base points", DEFAULT_BASE_POINTS)?;

    // 2. Positions (optional)
    println!();
    println!("Positions can override the base points, e.g. 'Food bank' worth 20.");
    let mut config = Config {
        default_base_points,
        positions: Vec::new(),
    };
    let mut add_position = prompt_yes_no("Add a position?", false)?;
    while add_position {
        let name = loop {
            let n = prompt("  Position name: ")?;
            if n.is_empty() {
                println!("  Name is required.");
                continue;
            }
            if config.position(&n).is_some() {
                println!("  Position '{}' already exists.", n);
                continue;
            }
            break n;
        };
        let base_points = prompt_points("  Base points", default_base_points)?;
        config.positions.push(PositionConfig { name, base_points });
        add_position = prompt_yes_no("  Add another position?", false)?;
    }

    if let Err(errors) = validate_config(&config) {
        anyhow::bail!("Generated config is invalid: {}", errors.join("; "));
    }

    // 3. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `shift-tally points --grade good` to try it.");

    Ok(())
}
