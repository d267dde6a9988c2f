use std::{ffi::OsString, path::Path, process::Command};

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

const BARRACE_EXE_PATH: &str = env!("CARGO_BIN_EXE_barrace");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];
pub const VALID_DATA: &str = "./tests/data/frames.json";

/// Returns the [`Command`] of a binary invocation of barrace. Config and data
/// paths are made absolute.
pub fn barrace_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(BARRACE_EXE_PATH);
    cmd.env("NO_COLOR", "1");

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" || arg.ends_with(".json") {
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of barrace with the default,
/// empty config file and a valid data file.
pub fn no_cfg_barrace_command() -> Command {
    let mut cmd = barrace_command(&DEFAULT_CFG);
    cmd.arg(abs_path(VALID_DATA));
    cmd
}
