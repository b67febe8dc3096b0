use crate::cli::OutputFormat;
use crate::config::get_config;
use crate::engine::types::CaseFile;
use crate::engine::calculate_at;
use crate::errors::RoicastError;
use crate::io::output::create_writer;
use crate::storage::{JsonFileStore, ReportStore};
use crate::validation::{check_preconditions, validate_all_fields, Severity};
use anyhow::Result;
use chrono::Utc;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;

pub struct CalculateConfig {
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub report_id: Option<String>,
    pub store: Option<PathBuf>,
    pub no_validate: bool,
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let case = load_case_file(&config.input)?;

    check_preconditions(&case.initiative, &case.risks)?;
    if !config.no_validate {
        report_plausibility_findings(&case)?;
    }

    let created_at = Utc::now();
    let report_id = config
        .report_id
        .unwrap_or_else(|| format!("case-{}", created_at.format("%Y%m%d%H%M%S")));

    let app_config = get_config();
    let result = calculate_at(
        case.initiative,
        case.risks,
        case.confidence,
        &report_id,
        created_at,
        &app_config.insights,
    );

    if let Some(dir) = config.store {
        let mut store = JsonFileStore::open(dir)?;
        store.put(&report_id, &result)?;
        log::info!("stored report {report_id}");
    }

    let format = resolve_format(config.format, &app_config.output.default_format)?;
    let mut writer = match config.output {
        Some(path) => create_writer(format.into(), File::create(path)?),
        None => create_writer(format.into(), std::io::stdout()),
    };
    writer.write_report(&result)?;

    Ok(())
}

fn load_case_file(path: &PathBuf) -> Result<CaseFile> {
    let content = crate::io::read_file(path)?;
    let case = serde_json::from_str(&content)
        .map_err(|e| RoicastError::case_file(path.clone(), e.to_string()))?;
    Ok(case)
}

/// Plausibility rules: errors abort, warnings and infos are logged.
fn report_plausibility_findings(case: &CaseFile) -> Result<()> {
    let numeric_inputs: BTreeMap<String, f64> = case
        .initiative
        .template_inputs
        .iter()
        .filter_map(|(id, value)| value.as_f64().map(|v| (id.clone(), v)))
        .collect();

    let findings = validate_all_fields(case.initiative.business_model, &numeric_inputs);
    let mut errors = Vec::new();
    for (field, finding) in findings {
        match finding.severity {
            Severity::Error => {
                let detail = finding.suggestion.as_deref().unwrap_or("").to_string();
                errors.push(format!("{field}: {} {detail}", finding.message));
            }
            Severity::Warning => log::warn!("{field}: {}", finding.message),
            Severity::Info => log::info!("{field}: {}", finding.message),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        anyhow::bail!(
            "case file has implausible values (pass --no-validate to override):\n  {}",
            errors.join("\n  ")
        )
    }
}

fn resolve_format(cli_format: Option<OutputFormat>, configured: &str) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match configured {
        "json" => Ok(OutputFormat::Json),
        "markdown" => Ok(OutputFormat::Markdown),
        "terminal" => Ok(OutputFormat::Terminal),
        other => anyhow::bail!("unknown default_format {other:?} in .roicast.toml"),
    }
}
