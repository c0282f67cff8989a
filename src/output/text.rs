//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per outdated dependency with pinned and latest versions
//! - Semantic version change type indication (major/minor/patch)
//! - Publication dates
//! - Unresolved dependencies listed separately
//! - A short summary line

use crate::domain::ResolvedDependency;
use crate::output::{OutputFormatter, Report};
use chrono::{DateTime, Utc};
use colored::Colorize;
use semver::Version;
use std::io::Write;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions.
    ///
    /// Display only; whether a dependency is up to date is plain string equality.
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |v: &str| Version::parse(v.strip_prefix('v').unwrap_or(v)).ok();

        match (parse(old), parse(new)) {
            (Some(old), Some(new)) => {
                if new.major != old.major {
                    VersionChangeType::Major
                } else if new.minor != old.minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Format a publication timestamp as a date, if it parses
    fn format_date(published_at: Option<&str>) -> Option<String> {
        published_at
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
            .map(|d| d.format("%Y/%m/%d").to_string())
    }

    /// Format a single outdated dependency line
    fn format_update_line(
        &self,
        dependency: &ResolvedDependency,
        latest: &str,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let pinned = dependency.record.pinned_version.as_str();
        let change_type = VersionChangeType::from_versions(pinned, latest);
        let name_display = format!("{:width$}", dependency.record.name, width = max_name_len);
        let date = Self::format_date(dependency.published_at.as_deref())
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();

        if self.color {
            writeln!(
                writer,
                "  {} {} {} {} [{}]{}",
                name_display,
                pinned.dimmed(),
                "→".dimmed(),
                latest.bright_white().bold(),
                change_type.colored_label(),
                date.dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {} {} → {} [{}]{}",
                name_display,
                pinned,
                latest,
                change_type.label(),
                date
            )
        }
    }

    /// Format a dependency whose latest version is unknown
    fn format_unresolved_line(
        &self,
        dependency: &ResolvedDependency,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name_display = format!("{:width$}", dependency.record.name, width = max_name_len);
        let url = dependency.record.repository_url.as_str();

        if self.color {
            writeln!(writer, "  {} {}", name_display, url.dimmed())
        } else {
            writeln!(writer, "  {} {}", name_display, url)
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let (resolved, unresolved): (Vec<_>, Vec<_>) =
            report.updatable.iter().partition(|d| d.is_resolved());

        let max_name_len = report
            .updatable
            .iter()
            .map(|d| d.record.name.len())
            .max()
            .unwrap_or(0);

        if !resolved.is_empty() {
            let header = "Updates available:";
            if self.color {
                writeln!(writer, "{}", header.bold())?;
            } else {
                writeln!(writer, "{}", header)?;
            }
            for dependency in &resolved {
                if let Some(latest) = dependency.latest_version.as_deref() {
                    self.format_update_line(dependency, latest, max_name_len, writer)?;
                }
            }
        }

        if !unresolved.is_empty() {
            if !resolved.is_empty() {
                writeln!(writer)?;
            }
            let header = "Latest version unknown:";
            if self.color {
                writeln!(writer, "{}", header.yellow())?;
            } else {
                writeln!(writer, "{}", header)?;
            }
            for dependency in &unresolved {
                self.format_unresolved_line(dependency, max_name_len, writer)?;
            }
        }

        if !report.updatable.is_empty() {
            writeln!(writer)?;
        }

        let summary = if report.updatable.is_empty() {
            "All packages are up to date".to_string()
        } else {
            format!(
                "{} package(s) can be updated, {} could not be checked",
                resolved.len(),
                unresolved.len()
            )
        };

        if self.color {
            writeln!(writer, "{}", summary.green())
        } else {
            writeln!(writer, "{}", summary)
        }
    }
}
