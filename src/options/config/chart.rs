use serde::Deserialize;

use super::StringOrNum;

/// Chart behaviour options from the `[chart]` table.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub(crate) struct ChartConfig {
    pub(crate) show_title: Option<bool>,
    pub(crate) iteration_timeout: Option<StringOrNum>,
    pub(crate) start_running_timeout: Option<StringOrNum>,
    pub(crate) transition_duration: Option<StringOrNum>,
    pub(crate) bar_height: Option<u16>,
    pub(crate) bar_gap_size: Option<u16>,
    pub(crate) baseline: Option<f64>,
}
