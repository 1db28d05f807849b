use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_POINTS: u64 = 100;

fn default_base_points() -> u64 {
    DEFAULT_BASE_POINTS
}

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// default_base_points: 10
/// positions:
///   - name: Food bank
///     base_points: 20
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base points used when no position matches (default: 100)
    #[serde(default = "default_base_points")]
    pub default_base_points: u64,

    /// Per-position base points
    #[serde(default)]
    pub positions: Vec<PositionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_base_points: DEFAULT_BASE_POINTS,
            positions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PositionConfig {
    pub name: String,
    pub base_points: u64,
}

impl Config {
    /// Case-insensitive position lookup
    pub fn position(&self, name: &str) -> Option<&PositionConfig> {
        let name = name.trim();
        self.positions
            .iter()
            .find(|p| p.name.trim().eq_ignore_ascii_case(name))
    }

    /// Base points for a position, falling back to `default_base_points`
    pub fn base_points_for(&self, position: Option<&str>) -> u64 {
        position
            .and_then(|name| self.position(name))
            .map(|p| p.base_points)
            .unwrap_or(self.default_base_points)
    }
}
