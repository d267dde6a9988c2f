use indoc::indoc;

// How often the main loop wakes up to redraw, in milliseconds. This also bounds the animation frame rate.
pub const TICK_RATE_IN_MILLISECONDS: u64 = 33;

// Timing defaults, in milliseconds.
pub const DEFAULT_ITERATION_TIMEOUT_IN_MILLISECONDS: u64 = 1000;
pub const MIN_ITERATION_TIMEOUT_IN_MILLISECONDS: u64 = 50;
pub const DEFAULT_START_RUNNING_TIMEOUT_IN_MILLISECONDS: u64 = 0;
pub const DEFAULT_TRANSITION_DURATION_IN_MILLISECONDS: u64 = 200;

// Layout defaults, in terminal rows.
pub const DEFAULT_BAR_HEIGHT: u16 = 1;
pub const DEFAULT_BAR_GAP_SIZE: u16 = 1;

/// The longest bar takes up this much of the available width, leaving the
/// rest as headroom.
pub const BAR_HEADROOM_RATIO: f64 = 0.85;

// Config and config path constants
#[cfg(target_os = "windows")]
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "barrace\\barrace.toml";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "barrace/barrace.toml";

pub const CONFIG_TEXT: &str = indoc! {r##"
    # This is a default config file for barrace. All of the settings are commented
    # out by default; if you wish to change them uncomment and modify as you see
    # fit.

    # This group of options represents how the chart plays back.
    [chart]
    # Whether to show the current frame's name as the chart title.
    #show_title = true
    # How long each frame is shown. Either a number of milliseconds or a human duration.
    #iteration_timeout = "1s"
    # How long to wait before showing the first frame.
    #start_running_timeout = 0
    # How long bars take to move between frames. Set to 0 to disable the animation.
    #transition_duration = 200
    # The height of each bar, and the gap between bars, in rows.
    #bar_height = 1
    #bar_gap_size = 1
    # A baseline value. Bars below it grow left from a centre axis.
    #baseline = 0.0

    # These are all the styles that can be changed. Colors can be a named ANSI
    # color, a hex color (e.g. "#ffffff") or an RGB color (e.g. "255, 255, 255").
    [styles]
    # A built-in theme: "default", "default-light", "gruvbox" or "nord".
    #theme = "default"

    #[styles.bars]
    # Colors given, in order, to values that don't set their own.
    #colors = ["light magenta", "light yellow", "light cyan", "light green"]
    #axis_color = "dark gray"

    #[styles.widgets]
    #border_color = "gray"
    #title = { color = "light blue", bold = true }
    #text = "gray"
    #status = "dark gray"
"##};
