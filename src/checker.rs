use std::collections::HashSet;

use validator::{Validate, ValidationErrors};

use crate::settings::PluginSettings;
use crate::utils::constants::KNOWN_GRAPH_KEYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CheckFinding {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl CheckFinding {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub findings: Vec<CheckFinding>,
}

impl CheckReport {
    pub fn errors(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Configuration Check Report ===\n");
        summary.push_str(&format!("Errors: {}\n", self.errors()));
        summary.push_str(&format!("Warnings: {}\n", self.warnings()));

        for finding in &self.findings {
            let tag = match finding.severity {
                Severity::Error => "ERROR",
                Severity::Warning => "WARN ",
            };
            summary.push_str(&format!("{} {}: {}\n", tag, finding.field, finding.message));
        }

        if self.is_clean() {
            summary.push_str("No problems found\n");
        }

        summary
    }
}

/// Consumer-side validation of a settings record. Loading never runs
/// these checks; the plugin operator invokes them explicitly.
pub struct SettingsChecker;

impl SettingsChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, settings: &PluginSettings) -> CheckReport {
        let mut report = CheckReport::default();

        self.check_stations(settings, &mut report);
        self.check_graphs(settings, &mut report);
        self.check_receiver(settings, &mut report);

        report
    }

    fn check_stations(&self, settings: &PluginSettings, report: &mut CheckReport) {
        if settings.stations.is_empty() {
            report.findings.push(CheckFinding::warning(
                "stations",
                "no stations declared, the plugin will record nothing",
            ));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (index, station) in settings.stations.iter().enumerate() {
            let scope = format!("stations[{index}]");

            if let Err(errors) = station.validate() {
                push_validation_findings(&scope, &errors, report);
            }

            if !station.id.is_empty() && !seen.insert(station.id.as_str()) {
                report.findings.push(CheckFinding::error(
                    scope,
                    format!("duplicate station id '{}'", station.id),
                ));
            }
        }
    }

    fn check_graphs(&self, settings: &PluginSettings, report: &mut CheckReport) {
        if settings.graphs.is_empty() {
            report.findings.push(CheckFinding::warning(
                "graphs",
                "no graphs declared, the plugin will offer no output",
            ));
        }

        for (key, graph) in &settings.graphs {
            let scope = format!("graphs.{key}");

            if let Err(errors) = graph.validate() {
                push_validation_findings(&scope, &errors, report);
            }

            // Unknown keys are declared but never fetched by the stock plugin
            if !KNOWN_GRAPH_KEYS.contains(&key.as_str()) {
                report.findings.push(CheckFinding::warning(
                    scope,
                    format!("graph key '{key}' is not fetched by the stock plugin"),
                ));
            }
        }
    }

    fn check_receiver(&self, settings: &PluginSettings, report: &mut CheckReport) {
        if let Err(errors) = settings.receiver.validate() {
            push_validation_findings("receiver", &errors, report);
        }
    }
}

impl Default for SettingsChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn push_validation_findings(scope: &str, errors: &ValidationErrors, report: &mut CheckReport) {
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            report.findings.push(CheckFinding::error(
                format!("{scope}.{field}"),
                format!("failed '{}' constraint", error.code),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphSpec, ReceiverPosition, StationEntry};

    #[test]
    fn test_default_settings_are_clean() {
        let report = SettingsChecker::new().check(&PluginSettings::default());
        assert!(report.is_clean(), "unexpected findings:\n{}", report.summary());
    }

    #[test]
    fn test_duplicate_station_ids_reported() {
        let mut settings = PluginSettings::default();
        settings.stations.push(StationEntry::new("3772", "heathrow again"));

        let report = SettingsChecker::new().check(&settings);
        assert_eq!(report.errors(), 1);
        assert!(report.summary().contains("duplicate station id '3772'"));
    }

    #[test]
    fn test_empty_graph_field_reported() {
        let mut settings = PluginSettings::default();
        settings
            .graphs
            .insert("wx_temp".to_string(), GraphSpec::new("Temperature", "", "T"));

        let report = SettingsChecker::new().check(&settings);
        assert_eq!(report.errors(), 1);
    }

    #[test]
    fn test_unknown_graph_key_is_warning_only() {
        let mut settings = PluginSettings::default();
        settings.graphs.insert(
            "wx_dewpoint".to_string(),
            GraphSpec::new("Dew point", "°C", "W"),
        );

        let report = SettingsChecker::new().check(&settings);
        assert_eq!(report.errors(), 0);
        assert_eq!(report.warnings(), 1);
    }

    #[test]
    fn test_empty_station_list_is_warning() {
        let mut settings = PluginSettings::default();
        settings.stations.clear();

        let report = SettingsChecker::new().check(&settings);
        assert_eq!(report.errors(), 0);
        assert_eq!(report.warnings(), 1);
    }

    #[test]
    fn test_out_of_range_receiver_reported() {
        let mut settings = PluginSettings::default();
        settings.receiver = ReceiverPosition::new(95.0, 0.123, 0.03);

        let report = SettingsChecker::new().check(&settings);
        assert_eq!(report.errors(), 1);
    }
}
