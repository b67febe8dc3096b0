use crate::engine::types::{CalculationResult, Scenario, ScenarioResult, PAYBACK_NEVER};
use colored::*;
use comfy_table::Table;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, result: &CalculationResult) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

fn scenario_label(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Conservative => "Conservative",
        Scenario::Base => "Base",
        Scenario::Aggressive => "Aggressive",
    }
}

fn format_money(value: f64) -> String {
    format!("{value:.0}")
}

fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn format_payback(months: f64) -> String {
    if months == PAYBACK_NEVER {
        "Never".to_string()
    } else {
        format!("{months:.1} mo")
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        self.write_header(result)?;
        self.write_summary(result)?;
        self.write_scenarios(result)?;
        self.write_insights(result)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let title = result
            .initiative
            .project_name
            .as_deref()
            .unwrap_or("Business Case");
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            result.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Report: {}", result.report_id)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(
            self.writer,
            "| Business model | {} |",
            result.initiative.business_model.id()
        )?;
        writeln!(self.writer, "| Reach | {} |", result.initiative.reach)?;
        writeln!(self.writer, "| Uplift | {}pp |", result.initiative.uplift)?;
        writeln!(
            self.writer,
            "| Unit value | {} |",
            result.initiative.unit_value
        )?;
        writeln!(
            self.writer,
            "| Gross margin | {}% |",
            result.initiative.gross_margin
        )?;
        writeln!(
            self.writer,
            "| Delivery cost | {} |",
            format_money(result.initiative.delivery_cost.total())
        )?;
        writeln!(
            self.writer,
            "| Monthly run cost | {} |",
            result.initiative.run_cost
        )?;
        writeln!(
            self.writer,
            "| Horizon | {} months |",
            result.initiative.horizon
        )?;
        writeln!(
            self.writer,
            "| Confidence score | {}/100 |",
            result.confidence_score
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scenarios")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Scenario | Annual profit | Total profit | ROI 12m | ROI 24m | ROI 36m | Payback |"
        )?;
        writeln!(
            self.writer,
            "|----------|---------------|--------------|---------|---------|---------|---------|"
        )?;
        for scenario in Scenario::ALL {
            let s = result.scenarios.get(scenario);
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                scenario_label(scenario),
                format_money(s.annual_profit),
                format_money(s.total_profit),
                format_percent(s.roi12),
                format_percent(s.roi24),
                format_percent(s.roi36),
                format_payback(s.payback_months),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let sections: [(&str, &im::Vector<String>); 3] = [
            ("Top drivers", &result.insights.top_drivers),
            ("Critical assumptions", &result.insights.critical_assumptions),
            ("Dominant risks", &result.insights.dominant_risks),
        ];
        writeln!(self.writer, "## Insights")?;
        writeln!(self.writer)?;
        for (title, entries) in sections {
            writeln!(self.writer, "### {title}")?;
            writeln!(self.writer)?;
            if entries.is_empty() {
                writeln!(self.writer, "_None._")?;
            } else {
                for entry in entries {
                    writeln!(self.writer, "- {entry}")?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_insight_list(&mut self, title: &str, entries: &im::Vector<String>) -> anyhow::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", title.bold())?;
        for entry in entries {
            writeln!(self.writer, "  • {entry}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let title = result
            .initiative
            .project_name
            .as_deref()
            .unwrap_or("Business case");
        writeln!(self.writer, "{}", title.bold().underline())?;
        writeln!(
            self.writer,
            "{} {} · {} {}/100",
            "model:".dimmed(),
            result.initiative.business_model.id(),
            "confidence:".dimmed(),
            result.confidence_score
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.set_header(vec![
            "Scenario",
            "Annual profit",
            "Total profit",
            "ROI 12m",
            "ROI 24m",
            "ROI 36m",
            "Payback",
        ]);
        for scenario in Scenario::ALL {
            let s: &ScenarioResult = result.scenarios.get(scenario);
            table.add_row(vec![
                scenario_label(scenario).to_string(),
                format_money(s.annual_profit),
                format_money(s.total_profit),
                format_percent(s.roi12),
                format_percent(s.roi24),
                format_percent(s.roi36),
                format_payback(s.payback_months),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        let insights = result.insights.clone();
        self.write_insight_list("Top drivers", &insights.top_drivers)?;
        self.write_insight_list("Critical assumptions", &insights.critical_assumptions)?;
        self.write_insight_list("Dominant risks", &insights.dominant_risks)?;

        Ok(())
    }
}
