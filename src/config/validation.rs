use std::collections::HashSet;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, position) in config.positions.iter().enumerate() {
        let name = position.name.trim();
        if name.is_empty() {
            errors.push(format!("positions[{}].name: must not be empty", i));
            continue;
        }
        if !seen.insert(name.to_lowercase()) {
            errors.push(format!(
                "positions[{}].name: duplicate position '{}'",
                i, position.name
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
