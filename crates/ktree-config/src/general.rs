use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    #[serde(alias = "log-tail-lines")]
    pub log_tail_lines: i64,
    #[serde(alias = "show-managed-fields")]
    pub show_managed_fields: bool,
    #[serde(alias = "min-column-width")]
    pub min_column_width: u16,
    #[serde(alias = "detail-min-width")]
    pub detail_min_width: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250, log_tail_lines: 100, show_managed_fields: false, min_column_width: 15, detail_min_width: 40 }
    }
}
