//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
pub use error::OptionError;
pub(crate) use error::OptionResult;

use self::{
    args::BarraceArgs,
    config::{chart::ChartConfig, Config, StringOrNum},
};
use crate::constants::*;

/// The resolved options that drive a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Whether the current frame's name is drawn as a title.
    pub show_title: bool,

    /// How long each frame is shown; the advance timer's period.
    pub iteration_timeout: Duration,

    /// How long to wait before the first advance.
    pub start_running_timeout: Duration,

    /// How long bars take to move between two frames.
    pub transition_duration: Duration,

    /// Rows per bar.
    pub bar_height: u16,

    /// Empty rows between bars.
    pub bar_gap_size: u16,

    /// If set, bars are sized by their distance from this value and values
    /// below it grow leftwards.
    pub baseline: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_title: true,
            iteration_timeout: Duration::from_millis(DEFAULT_ITERATION_TIMEOUT_IN_MILLISECONDS),
            start_running_timeout: Duration::from_millis(
                DEFAULT_START_RUNNING_TIMEOUT_IN_MILLISECONDS,
            ),
            transition_duration: Duration::from_millis(DEFAULT_TRANSITION_DURATION_IN_MILLISECONDS),
            bar_height: DEFAULT_BAR_HEIGHT,
            bar_gap_size: DEFAULT_BAR_GAP_SIZE,
            baseline: None,
        }
    }
}

/// Returns the config path to use. If `override_config_path` is specified, then
/// we will use that. If not, then return `<SYSTEM_CONFIG_FOLDER>/barrace/barrace.toml`.
///
/// For more details on this, see [dirs](https://docs.rs/dirs/latest/dirs/fn.config_dir.html)'
/// documentation.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    match override_config_path {
        Some(conf_loc) => Some(conf_loc.to_path_buf()),
        None => dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION)),
    }
}

/// Get the config at `config_path`. If there is no config file at the specified
/// path, it will try to create a new file with the default settings, unless
/// `no_write` is set.
pub fn get_or_create_config(config_path: Option<&Path>, no_write: bool) -> anyhow::Result<Config> {
    match config_path {
        Some(path) if path.exists() => {
            let config_string = fs::read_to_string(path).with_context(|| {
                format!("Unable to read the config file at '{}'.", path.display())
            })?;

            Ok(toml_edit::de::from_str(config_string.as_str()).map_err(OptionError::from)?)
        }
        Some(path) if !no_write => {
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }

            fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
            crate::info!("created a default config file at {}", path.display());

            Ok(Config::default())
        }
        _ => {
            // Don't write, the config path was either not wanted or somehow None...
            Ok(Config::default())
        }
    }
}

/// Returns the path of the frame file to replay.
pub fn get_data_path(args: &BarraceArgs) -> OptionResult<PathBuf> {
    args.data.clone().ok_or_else(|| {
        OptionError::arg("a data file of frames must be given, e.g. 'barrace frames.json'.")
    })
}

/// Resolves the [`ChartOptions`] from the arguments and config file. Arguments
/// take priority over the config file, which takes priority over the defaults.
pub fn get_chart_options(args: &BarraceArgs, config: &Config) -> OptionResult<ChartOptions> {
    let default_config = ChartConfig::default();
    let chart_config = config.chart.as_ref().unwrap_or(&default_config);
    let chart_args = &args.chart_args;

    let show_title = if chart_args.hide_title {
        false
    } else {
        chart_config.show_title.unwrap_or(true)
    };

    let iteration_timeout = get_duration_ms(
        chart_args.iteration_timeout.as_deref(),
        chart_config.iteration_timeout.as_ref(),
        "iteration_timeout",
        DEFAULT_ITERATION_TIMEOUT_IN_MILLISECONDS,
    )?;

    if iteration_timeout < MIN_ITERATION_TIMEOUT_IN_MILLISECONDS {
        return Err(if chart_args.iteration_timeout.is_some() {
            OptionError::arg(format!(
                "'--iteration_timeout' must be at least {MIN_ITERATION_TIMEOUT_IN_MILLISECONDS}ms."
            ))
        } else {
            OptionError::config(format!(
                "'iteration_timeout' must be at least {MIN_ITERATION_TIMEOUT_IN_MILLISECONDS}ms."
            ))
        });
    }

    let start_running_timeout = get_duration_ms(
        chart_args.start_running_timeout.as_deref(),
        chart_config.start_running_timeout.as_ref(),
        "start_running_timeout",
        DEFAULT_START_RUNNING_TIMEOUT_IN_MILLISECONDS,
    )?;

    // An unset transition shrinks to fit short periods; only a chosen one is checked.
    let is_transition_set =
        chart_args.transition_duration.is_some() || chart_config.transition_duration.is_some();
    let transition_duration = get_duration_ms(
        chart_args.transition_duration.as_deref(),
        chart_config.transition_duration.as_ref(),
        "transition_duration",
        DEFAULT_TRANSITION_DURATION_IN_MILLISECONDS.min(iteration_timeout),
    )?;

    if is_transition_set && transition_duration > iteration_timeout {
        return Err(OptionError::other(format!(
            "'transition_duration' must be at most the iteration timeout ({iteration_timeout}ms)."
        )));
    }

    let bar_height = chart_args
        .bar_height
        .or(chart_config.bar_height)
        .unwrap_or(DEFAULT_BAR_HEIGHT);

    if bar_height == 0 {
        return Err(if chart_args.bar_height.is_some() {
            OptionError::arg("'--bar_height' must be at least 1.")
        } else {
            OptionError::config("'bar_height' must be at least 1.")
        });
    }

    let bar_gap_size = chart_args
        .bar_gap_size
        .or(chart_config.bar_gap_size)
        .unwrap_or(DEFAULT_BAR_GAP_SIZE);

    let baseline = match (chart_args.baseline, chart_config.baseline) {
        (Some(baseline), _) if !baseline.is_finite() => {
            return Err(OptionError::invalid_arg_value("baseline"));
        }
        (None, Some(baseline)) if !baseline.is_finite() => {
            return Err(OptionError::invalid_config_value("baseline"));
        }
        (arg, config) => arg.or(config),
    };

    Ok(ChartOptions {
        show_title,
        iteration_timeout: Duration::from_millis(iteration_timeout),
        start_running_timeout: Duration::from_millis(start_running_timeout),
        transition_duration: Duration::from_millis(transition_duration),
        bar_height,
        bar_gap_size,
        baseline,
    })
}

/// Try to parse a string as a number of milliseconds, or a human duration
/// (e.g. `2s`).
fn try_parse_ms(s: &str) -> Result<u64, ()> {
    let s = s.trim();

    if let Ok(val) = s.parse::<u64>() {
        Ok(val)
    } else if let Ok(val) = humantime::parse_duration(s) {
        val.as_millis().try_into().map_err(|_| ())
    } else {
        Err(())
    }
}

/// Gets a duration in milliseconds, preferring the argument, then the config
/// value, then `default`.
fn get_duration_ms(
    arg: Option<&str>, config: Option<&StringOrNum>, name: &str, default: u64,
) -> OptionResult<u64> {
    if let Some(arg) = arg {
        try_parse_ms(arg).map_err(|_| OptionError::invalid_arg_value(name))
    } else if let Some(config) = config {
        match config {
            StringOrNum::String(s) => {
                try_parse_ms(s).map_err(|_| OptionError::invalid_config_value(name))
            }
            StringOrNum::Num(n) => Ok(*n),
        }
    } else {
        Ok(default)
    }
}
