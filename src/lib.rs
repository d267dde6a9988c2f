//! A terminal "bar chart race": replays a sequence of frames as an animated,
//! re-sorting horizontal bar chart.
//!
//! The chart itself lives in [`app`]. A [`app::frame_store::FrameStore`]
//! advances through the frames on a timer, [`app::projection::project`] turns
//! the current values into sorted and sized bars, and
//! [`app::transition::Transition`] animates between them. Everything else is
//! the plumbing around it: options, data loading, the event loop and drawing.

pub(crate) mod utils {
    pub(crate) mod cancellation_token;
    pub(crate) mod logging;
    pub(crate) mod strings;
}

pub mod app;
pub mod canvas;
pub mod constants;
pub mod data;
pub mod event;
pub mod options;
pub mod timer;

use std::{
    io::{stdout, Stdout},
    panic::{self, PanicHookInfo},
    path::Path,
    sync::{
        mpsc::{self, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use anyhow::Context;
use app::App;
use canvas::Painter;
use constants::*;
use crossterm::{
    cursor::Show,
    event::{poll, read, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::{handle_key_event_or_break, BarraceEvent};
use options::{
    args, config::style::Styles, get_chart_options, get_config_path, get_data_path,
    get_or_create_config,
};
use timer::AdvanceTimer;
use tui::{backend::CrosstermBackend, Terminal};
use utils::cancellation_token::CancellationToken;

/// Runs barrace until the user quits.
///
/// Everything that can fail because of the user's input (arguments, the
/// config file, the data file) is checked before the terminal is touched, so
/// those errors print normally.
pub fn start_barrace() -> anyhow::Result<()> {
    let args = args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        if let Err(err) =
            utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new("debug.log"))
        {
            println!("Issue initializing logger: {err}");
        }
    }

    let config_path = get_config_path(args.general_args.config_location.as_deref().map(Path::new));
    let config = get_or_create_config(config_path.as_deref(), args.general_args.no_write)
        .context("Unable to properly parse or create the config file.")?;

    let styles = Styles::new(&args, &config)?;
    let chart_options = get_chart_options(&args, &config)?;
    let data_path = get_data_path(&args)?;
    let frames = data::load_frames(&data_path).context("Unable to load the frames to replay.")?;

    let (sender, receiver) = mpsc::channel();

    let mut app = App::new(
        frames,
        chart_options,
        styles.bar_colours.clone(),
        AdvanceTimer::new(sender.clone()),
    )
    .with_data_path(data_path);
    let painter = Painter::init(styles);

    let cancellation_token = Arc::new(CancellationToken::default());
    let _input_thread = create_input_thread(sender.clone(), cancellation_token.clone());

    // Set up tui and crossterm
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(panic_hook));

    // Set termination hook
    ctrlc::set_handler(move || {
        let _ = sender.send(BarraceEvent::Terminate);
    })?;

    app.start();
    try_drawing(&mut terminal, &app, &painter)?;

    let mut was_animating = false;
    loop {
        let mut redraw = false;

        if let Ok(recv) = receiver.recv_timeout(Duration::from_millis(TICK_RATE_IN_MILLISECONDS)) {
            match recv {
                BarraceEvent::Resize => {
                    redraw = true;
                }
                BarraceEvent::KeyInput(event) => {
                    if handle_key_event_or_break(event, &mut app) {
                        break;
                    }
                    redraw = true;
                }
                BarraceEvent::Advance(generation) => {
                    redraw = app.on_advance_event(generation, Instant::now());
                }
                BarraceEvent::Terminate => {
                    break;
                }
            }
        }

        // Keep drawing until the frame after an animation ends, so bars land
        // exactly on their targets.
        let is_animating = app.is_animating(Instant::now());
        if redraw || is_animating || was_animating {
            try_drawing(&mut terminal, &app, &painter)?;
        }
        was_animating = is_animating;
    }

    // Stop the timer before tearing anything else down.
    drop(app);
    cancellation_token.cancel();
    cleanup_terminal(&mut terminal)?;

    Ok(())
}

fn try_drawing(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App, painter: &Painter,
) -> anyhow::Result<()> {
    if let Err(err) = terminal.draw(|f| painter.draw_chart(f, app, Instant::now())) {
        cleanup_terminal(terminal)?;
        return Err(err.into());
    }

    Ok(())
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs
fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace = format!("{:?}", backtrace::Backtrace::new());

    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen);

    // Print stack trace. Must be done after!
    if let Some(panic_info) = panic_info.location() {
        let _ = execute!(
            stdout,
            Print(format!(
                "thread '<unnamed>' panicked at '{msg}', {panic_info}\n\r{stacktrace}",
            )),
        );
    }

    // Show the cursor before we end.
    let _ = execute!(stdout, Show);
}

/// Reads terminal events and forwards the ones we care about until the token
/// is cancelled.
fn create_input_thread(
    sender: Sender<BarraceEvent>, cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            if let Some(is_terminated) = cancellation_token.try_check() {
                if is_terminated {
                    break;
                }
            }

            if let Ok(true) = poll(Duration::from_millis(20)) {
                let event = match read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        BarraceEvent::KeyInput(key)
                    }
                    Ok(Event::Resize(_, _)) => BarraceEvent::Resize,
                    _ => continue,
                };

                if sender.send(event).is_err() {
                    break;
                }
            }
        }
    })
}
