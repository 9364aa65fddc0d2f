/// Sentinel location filter meaning "no filtering".
pub const LOCATION_ALL: &str = "all";

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "ukmo_wx.toml";

/// Graph keys the stock plugin knows how to fetch values for
pub const GRAPH_TEMP: &str = "wx_temp";
pub const GRAPH_WIND_DIR: &str = "wx_wind_dir";
pub const GRAPH_WIND_SPD: &str = "wx_wind_spd";
pub const GRAPH_PRESSURE: &str = "wx_press";
pub const GRAPH_HUMIDITY: &str = "wx_rh";

pub const KNOWN_GRAPH_KEYS: &[&str] = &[
    GRAPH_TEMP,
    GRAPH_WIND_DIR,
    GRAPH_WIND_SPD,
    GRAPH_PRESSURE,
    GRAPH_HUMIDITY,
];

/// Default receiver position (altitude in feet, converted at load)
pub const DEFAULT_RX_LAT: f64 = 51.567;
pub const DEFAULT_RX_LON: f64 = 0.123;
pub const DEFAULT_RX_ALT_FT: f64 = 108.0;
