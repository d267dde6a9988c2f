//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the help
//! output stays in one place.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "barrace [OPTIONS] <DATA>";

/// The arguments for barrace.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct BarraceArgs {
    #[arg(
        value_name = "DATA",
        help = "The JSON file of frames to replay.",
        long_help = indoc! {
            "The JSON file of frames to replay. It must contain a list of frames, where
            each frame has a name and a list of values:

            [
              { \"name\": \"2001\", \"values\": [ { \"id\": \"de\", \"value\": 10, \"label\": \"Germany\" } ] }
            ]

            A value may also set a 'color', either a single color or a list of colors
            to use as a gradient."
        }
    )]
    pub data: Option<PathBuf>,

    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub chart_args: ChartArgs,

    #[command(flatten)]
    pub style_args: StyleArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        help = "Disables writing a default config file if one doesn't exist.",
        long_help = "Disables writing a default config file if one doesn't exist at the config \
                    location. The built-in defaults are used instead."
    )]
    pub no_write: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Chart Options")]
pub struct ChartArgs {
    #[arg(
        long,
        help = "Hides the name of the current frame.",
        long_help = "Hides the name of the current frame, which is otherwise shown as the chart's title."
    )]
    pub hide_title: bool,

    #[arg(
        short = 'i',
        long,
        value_name = "TIME",
        help = "Sets how long each frame is shown.",
        long_help = "Sets how long each frame is shown before advancing to the next one. Takes a number in \
                    milliseconds or a human-readable duration (e.g. 2s). The minimum is 50ms, and defaults \
                    to 1000ms."
    )]
    pub iteration_timeout: Option<String>,

    #[arg(
        short = 's',
        long,
        value_name = "TIME",
        help = "Sets how long to wait before the first frame.",
        long_help = "Sets how long to wait after starting before the first frame is shown. Takes a number in \
                    milliseconds or a human-readable duration (e.g. 3s). Defaults to 0ms."
    )]
    pub start_running_timeout: Option<String>,

    #[arg(
        long,
        value_name = "TIME",
        help = "Sets how long bars take to move between frames.",
        long_help = "Sets how long bars take to move and resize between frames. Takes a number in \
                    milliseconds or a human-readable duration. Set to 0 to disable the animation. \
                    Defaults to 200ms, and must be at most the iteration timeout."
    )]
    pub transition_duration: Option<String>,

    #[arg(
        long,
        value_name = "ROWS",
        help = "Sets the height of each bar in rows.",
        long_help = "Sets the height of each bar in terminal rows. The minimum is 1, and defaults to 1."
    )]
    pub bar_height: Option<u16>,

    #[arg(
        long,
        value_name = "ROWS",
        help = "Sets the gap between bars in rows.",
        long_help = "Sets the number of empty terminal rows between two bars. Defaults to 1."
    )]
    pub bar_gap_size: Option<u16>,

    #[arg(
        long,
        value_name = "VALUE",
        allow_negative_numbers = true,
        help = "Sets a baseline value to diverge bars from.",
        long_help = "Sets a baseline value. Bars are sized by their distance from the baseline, with values \
                    above it growing right and values below it growing left from a centre axis."
    )]
    pub baseline: Option<f64>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Style Options")]
pub struct StyleArgs {
    #[arg(
        long,
        value_name = "THEME",
        value_parser = [
            "default",
            "default-light",
            "gruvbox",
            "nord",
        ],
        hide_possible_values = true,
        help = "Use a built-in theme, use --help for info on the themes. \
                [possible values: default, default-light, gruvbox, nord]",
        long_help = indoc! {
            "Use a pre-defined theme. Currently supported values are:
            - default
            - default-light (default but adjusted for lighter backgrounds)
            - gruvbox       (a bright theme with 'retro groove' colors)
            - nord          (an arctic, north-bluish color palette)"
        }
    )]
    pub theme: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use `--help`.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`BarraceArgs`].
pub fn get_args() -> BarraceArgs {
    BarraceArgs::parse()
}
