pub mod chart;
pub mod style;

use serde::Deserialize;

use self::{chart::ChartConfig, style::StyleConfig};

/// The contents of a config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub(crate) chart: Option<ChartConfig>,
    pub(crate) styles: Option<StyleConfig>,
}

/// A duration in a config file, which may be given as a number of
/// milliseconds or as a human-readable string (e.g. `"2s"`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}

impl From<String> for StringOrNum {
    fn from(value: String) -> Self {
        StringOrNum::String(value)
    }
}

impl From<u64> for StringOrNum {
    fn from(value: u64) -> Self {
        StringOrNum::Num(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml_edit::de::from_str("").unwrap();
        assert!(config.chart.is_none());
        assert!(config.styles.is_none());
    }

    #[test]
    fn string_or_num_durations() {
        let config: Config = toml_edit::de::from_str(
            r#"
            [chart]
            iteration_timeout = "2s"
            start_running_timeout = 500
            "#,
        )
        .unwrap();

        let chart = config.chart.unwrap();
        assert_eq!(chart.iteration_timeout, Some(StringOrNum::String("2s".into())));
        assert_eq!(chart.start_running_timeout, Some(StringOrNum::Num(500)));
    }

    #[test]
    fn unknown_fields_are_rejected_in_tests() {
        assert!(toml_edit::de::from_str::<Config>("[flags]\nrate = 1").is_err());
    }
}
