use std::path::PathBuf;

use crate::ebc::{
    action::DEFAULT_REDRAW_PROGRAM,
    store::{DEFAULT_BACKLIGHT_DIR, DEFAULT_PARAMS_DIR},
    Locations, RedrawCommand,
};

/// Where to find the device parameters and the redraw program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub params_dir: PathBuf,
    pub backlight_dir: PathBuf,
    pub redraw_program: PathBuf,
}

impl Config {
    pub fn locations(&self) -> Locations {
        Locations::new(&self.params_dir, &self.backlight_dir)
    }

    pub fn redraw_command(&self) -> RedrawCommand {
        RedrawCommand::new(&self.redraw_program)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            params_dir: DEFAULT_PARAMS_DIR.into(),
            backlight_dir: DEFAULT_BACKLIGHT_DIR.into(),
            redraw_program: DEFAULT_REDRAW_PROGRAM.into(),
        }
    }
}
