use std::path::PathBuf;

use clap::{builder::BoolishValueParser, ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::{
    config::Config,
    ebc::{
        action::DEFAULT_REDRAW_PROGRAM,
        store::{DEFAULT_BACKLIGHT_DIR, DEFAULT_PARAMS_DIR},
        Driver, Normal, ParameterStore, RedrawAction, Waveform,
    },
};

#[derive(Parser, Debug)]
#[command(
    name = "ebc-controller",
    author,
    version,
    about = "Adjust the Rockchip EBC e-paper display driver parameters"
)]
pub struct Cli {
    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Directory holding the display driver module parameters
    #[arg(long, env = "EBC_PARAMS_DIR", default_value = DEFAULT_PARAMS_DIR, global = true)]
    pub params_dir: PathBuf,

    /// Directory of the warm backlight class device
    #[arg(long, env = "EBC_BACKLIGHT_DIR", default_value = DEFAULT_BACKLIGHT_DIR, global = true)]
    pub backlight_dir: PathBuf,

    /// Program triggering a full screen redraw
    #[arg(long, env = "EBC_REDRAW_PROGRAM", default_value = DEFAULT_REDRAW_PROGRAM, global = true)]
    pub redraw_program: PathBuf,
}

impl From<PathArgs> for Config {
    fn from(args: PathArgs) -> Self {
        Config {
            params_dir: args.params_dir,
            backlight_dir: args.backlight_dir,
            redraw_program: args.redraw_program,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print every readable setting
    Show,
    /// Print one setting
    Get { parameter: Parameter },
    /// Change one setting
    #[command(subcommand)]
    Set(SetCommand),
    /// Trigger a full screen redraw
    Redraw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Parameter {
    BwMode,
    BwThreshold,
    BwDitherInvert,
    #[value(name = "waveform")]
    DefaultWaveform,
    AutoRefresh,
    RefreshThreshold,
    WarmBrightness,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SetCommand {
    /// Black & white mode
    BwMode {
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        value: bool,
    },
    /// Black & white threshold (0.0..=1.0)
    BwThreshold { value: Normal },
    /// Black & white dithering inversion
    BwDitherInvert {
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        value: bool,
    },
    /// Default waveform (a2, du, gc16, du4 or 1, 2, 4, 7)
    #[command(name = "waveform")]
    DefaultWaveform { value: Waveform },
    /// Automatic full refresh
    AutoRefresh {
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        value: bool,
    },
    /// Auto refresh threshold (0.0..=1.0)
    RefreshThreshold { value: Normal },
    /// Warm backlight brightness (0.0..=1.0)
    WarmBrightness { value: Normal },
}

fn print_value(value: Option<impl std::fmt::Display>) {
    match value {
        Some(value) => println!("{value}"),
        None => println!("unavailable"),
    }
}

impl Command {
    pub fn run<S: ParameterStore, A: RedrawAction>(self, driver: &Driver<S, A>) {
        match self {
            Command::Show => println!("{}", driver.settings()),
            Command::Get { parameter } => {
                use Parameter::*;
                match parameter {
                    BwMode => print_value(driver.bw_mode()),
                    BwThreshold => print_value(driver.bw_threshold()),
                    BwDitherInvert => print_value(driver.bw_dither_invert()),
                    DefaultWaveform => print_value(driver.default_waveform()),
                    AutoRefresh => print_value(driver.auto_refresh()),
                    RefreshThreshold => print_value(driver.refresh_threshold()),
                    WarmBrightness => print_value(driver.warm_brightness()),
                }
            }
            Command::Set(set) => {
                use SetCommand::*;
                match set {
                    BwMode { value } => driver.set_bw_mode(value),
                    BwThreshold { value } => driver.set_bw_threshold(value),
                    BwDitherInvert { value } => driver.set_bw_dither_invert(value),
                    DefaultWaveform { value } => driver.set_default_waveform(value),
                    AutoRefresh { value } => driver.set_auto_refresh(value),
                    RefreshThreshold { value } => driver.set_refresh_threshold(value),
                    WarmBrightness { value } => driver.set_warm_brightness(value),
                }
            }
            Command::Redraw => driver.redraw_screen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, Parameter, SetCommand};
    use crate::ebc::{
        action::recording::RecordingRedraw, store::memory::MemoryStore, Driver, Locations, Normal,
        Waveform,
    };

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ebc-controller").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn parse_set() {
        assert_eq!(
            Command::Set(SetCommand::BwMode { value: true }),
            parse(&["set", "bw-mode", "on"]).command,
        );
        assert_eq!(
            Command::Set(SetCommand::AutoRefresh { value: false }),
            parse(&["set", "auto-refresh", "no"]).command,
        );
        assert_eq!(
            Command::Set(SetCommand::BwThreshold {
                value: Normal::CENTER
            }),
            parse(&["set", "bw-threshold", "0.5"]).command,
        );
        assert_eq!(
            Command::Set(SetCommand::DefaultWaveform {
                value: Waveform::GC16
            }),
            parse(&["set", "waveform", "gc16"]).command,
        );
    }

    #[test]
    fn parse_invalid() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("ebc-controller").chain(args.iter().copied()))
        };

        assert!(parse(&["set", "bw-threshold", "1.5"]).is_err());
        assert!(parse(&["set", "waveform", "3"]).is_err());
        assert!(parse(&["set", "bw-mode", "maybe"]).is_err());
        assert!(parse(&["get", "max-brightness"]).is_err());
    }

    #[test]
    fn parse_paths() {
        let cli = parse(&["--params-dir", "/tmp/ebc", "get", "bw-mode"]);

        assert_eq!(cli.paths.params_dir, std::path::Path::new("/tmp/ebc"));
        assert_eq!(
            cli.command,
            Command::Get {
                parameter: Parameter::BwMode
            },
        );
    }

    #[test]
    fn run_set() {
        let driver = Driver::new(
            MemoryStore::default(),
            Locations::default(),
            RecordingRedraw::default(),
        );

        parse(&["set", "refresh-threshold", "0.25"])
            .command
            .run(&driver);
        assert_eq!(driver.refresh_threshold(), Some(Normal::try_from(0.25).unwrap()));

        parse(&["set", "waveform", "du4"]).command.run(&driver);
        assert_eq!(driver.default_waveform(), Some(Waveform::DU4));

        parse(&["redraw"]).command.run(&driver);
        parse(&["show"]).command.run(&driver);
    }
}
