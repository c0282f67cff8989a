//! JSON output formatter for machine processing

use crate::output::{OutputFormatter, Report};
use std::io::Write;

/// JSON formatter printing the report document
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = report.to_json().map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyRecord, ResolvedDependency};

    #[test]
    fn test_format_json() {
        let record = DependencyRecord::new("Foo", "1.0.0", "https://github.com/a/b");
        let dependency = ResolvedDependency::updated(
            &record,
            Some("1.1.0".to_string()),
            Some("2024-01-01T00:00:00Z".to_string()),
        );
        let report = Report::build(vec![dependency], false);

        let mut output = Vec::new();
        JsonFormatter.format(&report, &mut output).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&String::from_utf8(output).unwrap()).unwrap();

        assert_eq!(parsed["repos"][0]["name"], "Foo");
        assert_eq!(parsed["updatable"][0]["currentVersion"], "1.0.0");
        assert_eq!(parsed["updatable"][0]["latestVersion"], "1.1.0");
        assert_eq!(parsed["updatable"][0]["isUpToDate"], false);
        assert_eq!(parsed["updatable"][0]["lastUpdate"], "2024-01-01T00:00:00Z");
    }
}
