use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{GraphSpec, ReceiverPosition, StationEntry};
use crate::utils::constants::{
    DEFAULT_RX_ALT_FT, DEFAULT_RX_LAT, DEFAULT_RX_LON, GRAPH_HUMIDITY, GRAPH_PRESSURE, GRAPH_TEMP,
    GRAPH_WIND_DIR, GRAPH_WIND_SPD, LOCATION_ALL,
};

/// The configuration record the plugin scripts import: API credential,
/// location filter, stations to poll, graphs to offer and the receiver
/// position for the station-listing helper.
///
/// Loading performs no semantic validation. A file with duplicate station
/// ids or empty graph fields loads fine; run [`crate::checker::SettingsChecker`]
/// to surface such problems before the plugin trips over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Weather API credential. Empty is valid; fetching simply degrades.
    pub api_key: String,

    /// Location code, or "all" to poll without filtering.
    pub location_filter: String,

    /// Stations to record, in poll and display order.
    pub stations: Vec<StationEntry>,

    /// Graphs the plugin offers. Delete entries you don't want output.
    pub graphs: HashMap<String, GraphSpec>,

    /// Receiver position. Only required for station listing.
    pub receiver: ReceiverPosition,
}

impl Default for PluginSettings {
    fn default() -> Self {
        let mut graphs = HashMap::new();
        graphs.insert(
            GRAPH_TEMP.to_string(),
            GraphSpec::new("Temperature", "°C", "T"),
        );
        graphs.insert(
            GRAPH_WIND_DIR.to_string(),
            GraphSpec::new("Wind direction", "°", "D"),
        );
        graphs.insert(
            GRAPH_WIND_SPD.to_string(),
            GraphSpec::new("Wind speed", "kts", "S"),
        );
        graphs.insert(
            GRAPH_PRESSURE.to_string(),
            GraphSpec::new("Pressure", "hPa", "P"),
        );
        graphs.insert(
            GRAPH_HUMIDITY.to_string(),
            GraphSpec::new("Relative humidity", "%", "H"),
        );

        Self {
            api_key: String::new(),
            location_filter: LOCATION_ALL.to_string(),
            stations: vec![StationEntry::new("3772", "heathrow")],
            graphs,
            receiver: ReceiverPosition::from_feet(DEFAULT_RX_LAT, DEFAULT_RX_LON, DEFAULT_RX_ALT_FT),
        }
    }
}

impl PluginSettings {
    /// Load settings from a TOML file. Missing keys fall back to the
    /// built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings file");
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from `path` when given, otherwise return the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Render a starter settings file with a short usage header.
    pub fn to_starter_file(&self) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Settings for the UK Met Office weather Munin plugin.\n");
        out.push_str("# Station order is poll and display order.\n");
        out.push_str("# Delete any graphs you don't want output.\n\n");
        out.push_str(&self.to_toml_string()?);
        Ok(out)
    }

    /// Location filter with the "all" sentinel resolved: `None` means
    /// consumers must not filter by location.
    pub fn effective_location(&self) -> Option<&str> {
        if self.location_filter == LOCATION_ALL {
            None
        } else {
            Some(self.location_filter.as_str())
        }
    }

    pub fn station(&self, id: &str) -> Option<&StationEntry> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn graph(&self, key: &str) -> Option<&GraphSpec> {
        self.graphs.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_default_settings_match_shipped_configuration() {
        let settings = PluginSettings::default();

        assert_eq!(settings.api_key, "");
        assert_eq!(settings.location_filter, "all");
        assert_eq!(settings.stations, vec![StationEntry::new("3772", "heathrow")]);
        assert_eq!(settings.graphs.len(), 5);
        assert_eq!(
            settings.graph("wx_press"),
            Some(&GraphSpec::new("Pressure", "hPa", "P"))
        );
        assert_eq!(
            settings.station("3772"),
            Some(&StationEntry::new("3772", "heathrow"))
        );
        assert_eq!(settings.station("9999"), None);
        assert!((settings.receiver.latitude_deg - 51.567).abs() < f64::EPSILON);
        assert!((settings.receiver.longitude_deg - 0.123).abs() < f64::EPSILON);
        assert!((settings.receiver.altitude_km - 108.0 * 0.0003048).abs() < 1e-6);
    }

    #[test]
    fn test_default_station_ids_are_unique() {
        let settings = PluginSettings::default();
        let ids: HashSet<&str> = settings.stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), settings.stations.len());
    }

    #[test]
    fn test_default_graphs_have_all_fields() {
        for (key, graph) in &PluginSettings::default().graphs {
            assert!(!graph.title.is_empty(), "graph {key} has empty title");
            assert!(!graph.unit.is_empty(), "graph {key} has empty unit");
            assert!(!graph.short_code.is_empty(), "graph {key} has empty short code");
        }
    }

    #[test]
    fn test_effective_location() {
        let mut settings = PluginSettings::default();
        assert_eq!(settings.effective_location(), None);

        settings.location_filter = "3772".to_string();
        assert_eq!(settings.effective_location(), Some("3772"));
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = PluginSettings::default();
        let toml_str = settings.to_toml_string().unwrap();
        let reloaded: PluginSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, reloaded);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = PluginSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let reloaded: PluginSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, reloaded);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let partial = r#"
            api_key = "abc123"

            [[stations]]
            id = "3672"
            label = "northolt"
        "#;

        let settings: PluginSettings = toml::from_str(partial).unwrap();
        assert_eq!(settings.api_key, "abc123");
        assert_eq!(settings.stations, vec![StationEntry::new("3672", "northolt")]);
        // Omitted fields come from the defaults
        assert_eq!(settings.location_filter, "all");
        assert_eq!(settings.graphs.len(), 5);
    }

    #[test]
    fn test_station_order_is_preserved() {
        let declared = r#"
            [[stations]]
            id = "3772"
            label = "heathrow"

            [[stations]]
            id = "3672"
            label = "northolt"

            [[stations]]
            id = "3781"
            label = "kenley"
        "#;

        let settings: PluginSettings = toml::from_str(declared).unwrap();
        let ids: Vec<&str> = settings.stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3772", "3672", "3781"]);
    }

    #[test]
    fn test_duplicate_station_ids_still_load() {
        // Loading is unvalidated; the checker reports duplicates instead.
        let duplicated = r#"
            [[stations]]
            id = "3772"
            label = "heathrow"

            [[stations]]
            id = "3772"
            label = "heathrow again"
        "#;

        let settings: PluginSettings = toml::from_str(duplicated).unwrap();
        assert_eq!(settings.stations.len(), 2);
    }
}
