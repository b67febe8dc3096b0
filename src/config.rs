use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Thresholds driving the insight heuristics.
///
/// The defaults reproduce the documented behavior exactly; overriding them
/// in `.roicast.toml` trades determinism-across-installs for tunability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Uplift (percentage points) above which it counts as a top driver.
    #[serde(default = "default_uplift_driver")]
    pub uplift_driver: f64,

    /// Gross margin (%) above which it counts as a top driver.
    #[serde(default = "default_margin_driver")]
    pub margin_driver: f64,

    /// Reach (units) above which it counts as a top driver.
    #[serde(default = "default_reach_driver")]
    pub reach_driver: f64,

    /// Delivery timeline (months) above which it is a critical assumption.
    #[serde(default = "default_long_delivery_months")]
    pub long_delivery_months: f64,

    /// Risk score (1-5 scale) at or above which a dimension is dominant.
    #[serde(default = "default_dominant_risk")]
    pub dominant_risk: f64,
}

fn default_uplift_driver() -> f64 {
    20.0
}

fn default_margin_driver() -> f64 {
    70.0
}

fn default_reach_driver() -> f64 {
    10000.0
}

fn default_long_delivery_months() -> f64 {
    6.0
}

fn default_dominant_risk() -> f64 {
    4.0
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            uplift_driver: default_uplift_driver(),
            margin_driver: default_margin_driver(),
            reach_driver: default_reach_driver(),
            long_delivery_months: default_long_delivery_months(),
            dominant_risk: default_dominant_risk(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoicastConfig {
    #[serde(default)]
    pub insights: InsightThresholds,

    #[serde(default)]
    pub output: OutputConfig,
}

impl RoicastConfig {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `.roicast.toml` from the working directory, falling back to
    /// defaults when the file is absent. A present-but-malformed file is
    /// an error, not a silent fallback.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(".roicast.toml"))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }
}

static CONFIG: OnceLock<RoicastConfig> = OnceLock::new();

/// Process-wide config, loaded once. Load errors degrade to defaults with
/// a logged warning so a broken config file cannot change calculation
/// results silently mid-run.
pub fn get_config() -> &'static RoicastConfig {
    CONFIG.get_or_init(|| match RoicastConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring invalid .roicast.toml: {e}");
            RoicastConfig::default()
        }
    })
}
