//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub paragraph: ParagraphConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Background color applied to the row and column siblings of a hovered
    /// cell, as a `#RRGGBB` hex code.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
    /// Class name toggled on the paragraph while it is hovered.
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
    /// Status bar clock format.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            highlight_color: default_highlight_color(),
            marker_class: default_marker_class(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_highlight_color() -> String {
    "#EAD575".to_string()
}

fn default_marker_class() -> String {
    "pretty-hover".to_string()
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphConfig {
    #[serde(default = "default_paragraph_text")]
    pub text: String,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            text: default_paragraph_text(),
        }
    }
}

fn default_paragraph_text() -> String {
    "Hover this paragraph to apply its marker style; move the pointer away to clear it."
        .to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell labels, one inner list per row. Rows shorter than the widest row
    /// are padded with empty cells.
    #[serde(default = "default_grid_rows")]
    pub rows: Vec<Vec<String>>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_grid_rows(),
        }
    }
}

fn default_grid_rows() -> Vec<Vec<String>> {
    vec![
        vec!["alpha".into(), "beta".into(), "gamma".into()],
        vec!["delta".into(), "epsilon".into(), "zeta".into()],
        vec!["eta".into(), "theta".into(), "iota".into()],
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write diagnostics to a dated file under the log directory.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default tracing filter; `RUST_LOG` overrides it.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/share/hovergrid/logs".to_string()
}

fn default_log_filter() -> String {
    "hovergrid=debug".to_string()
}
