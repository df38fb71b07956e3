//! Output formatters for compatibility reports

use crate::config::OutputFormat;
use crate::engine::analyzer::{DetailedReport, MatchLevel};
use crate::error::Result;
use chrono::Utc;
use colored::{Color, Colorize};
use std::fmt::Write as _;

/// Trait for formatting compatibility reports
pub trait OutputFormatter {
    fn format_report(&self, report: &DetailedReport) -> Result<String>;
}

/// Console formatter with colors and skill chips
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    detailed: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    detailed: bool,
}

/// Coordinates the individual formatters behind one entry point
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn level_color(level: MatchLevel) -> Color {
    match level {
        MatchLevel::High => Color::Green,
        MatchLevel::Moderate => Color::Yellow,
        MatchLevel::Low => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, detailed: &DetailedReport) -> Result<String> {
        let report = &detailed.report;
        let color = level_color(report.match_level);
        let mut out = String::new();

        writeln!(out, "\n📊 Posting Compatibility").ok();
        writeln!(
            out,
            "  {} ({})",
            self.paint(&format!("{}%", report.match_percent), color),
            self.paint(report.match_level.label(), color)
        )
        .ok();

        let total = report.matched_skills.len() + report.missing_skills.len();

        if !report.matched_skills.is_empty() {
            writeln!(
                out,
                "\n✅ You have ({} of {}):",
                report.matched_skills.len(),
                total
            )
            .ok();
            for skill in &report.matched_skills {
                writeln!(out, "  • {}", self.paint(skill.name(), Color::Green)).ok();
            }
        }

        if !report.missing_skills.is_empty() {
            writeln!(out, "\n❌ You are missing ({}):", report.missing_skills.len()).ok();
            for skill in &report.missing_skills {
                writeln!(out, "  • {}", self.paint(skill.name(), Color::Red)).ok();
            }
        }

        writeln!(out, "\n💡 How to improve your compatibility:").ok();
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, suggestion).ok();
        }

        if self.detailed && !detailed.category_scores.is_empty() {
            writeln!(out, "\n📈 Score by category:").ok();
            for score in &detailed.category_scores {
                writeln!(
                    out,
                    "  • {}: {}% ({} of {})",
                    score.category, score.percent, score.matched, score.total
                )
                .ok();
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, detailed: &DetailedReport) -> Result<String> {
        let json = if self.detailed {
            serde_json::to_string_pretty(detailed)?
        } else {
            serde_json::to_string_pretty(&detailed.report)?
        };
        Ok(json)
    }
}

impl MarkdownFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, detailed: &DetailedReport) -> Result<String> {
        let report = &detailed.report;
        let mut out = String::new();

        writeln!(out, "# Posting Compatibility Report\n").ok();
        writeln!(
            out,
            "*Generated: {}*\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        )
        .ok();
        writeln!(
            out,
            "**Compatibility: {}% ({})**\n",
            report.match_percent,
            report.match_level.label()
        )
        .ok();

        if !report.matched_skills.is_empty() {
            writeln!(out, "## Matched skills\n").ok();
            for skill in &report.matched_skills {
                writeln!(out, "- {}", skill.name()).ok();
            }
            writeln!(out).ok();
        }

        if !report.missing_skills.is_empty() {
            writeln!(out, "## Missing skills\n").ok();
            for skill in &report.missing_skills {
                writeln!(out, "- {}", skill.name()).ok();
            }
            writeln!(out).ok();
        }

        writeln!(out, "## Suggestions\n").ok();
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, suggestion).ok();
        }

        if self.detailed && !detailed.category_scores.is_empty() {
            writeln!(out, "\n## Score by category\n").ok();
            writeln!(out, "| Category | Matched | Total | Score |").ok();
            writeln!(out, "|----------|---------|-------|-------|").ok();
            for score in &detailed.category_scores {
                writeln!(
                    out,
                    "| {} | {} | {} | {}% |",
                    score.category, score.matched, score.total, score.percent
                )
                .ok();
            }
        }

        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(detailed),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate(&self, report: &DetailedReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}
