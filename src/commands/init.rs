use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".roicast.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Roicast Configuration

[insights]
# Thresholds driving the insight heuristics. The defaults reproduce the
# documented behavior; change them only if your product intent differs.
uplift_driver = 20.0
margin_driver = 70.0
reach_driver = 10000.0
long_delivery_months = 6.0
# Risk scores are on a 1-5 scale.
dominant_risk = 4.0

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .roicast.toml configuration file");

    Ok(())
}
