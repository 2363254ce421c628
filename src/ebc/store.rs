use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::ebc::{data::Location, Error};

pub const DEFAULT_PARAMS_DIR: &str = "/sys/module/rockchip_ebc/parameters";
pub const DEFAULT_BACKLIGHT_DIR: &str = "/sys/class/backlight/backlight_warm";

/// Raw access to the named parameter locations.
pub trait ParameterStore {
    fn read(&self, location: &Path) -> Result<String, Error>;
    fn write(&self, location: &Path, value: &str) -> Result<(), Error>;
}

/// A `ParameterStore` using direct file I/O, e.g. on sysfs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysfsStore;

impl ParameterStore for SysfsStore {
    fn read(&self, location: &Path) -> Result<String, Error> {
        fs::read_to_string(location).map_err(|err| Error::store_read(location, err))
    }

    fn write(&self, location: &Path, value: &str) -> Result<(), Error> {
        fs::write(location, value).map_err(|err| Error::store_write(location, value, err))
    }
}

/// Immutable table of the path for each `Location`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locations {
    map: BTreeMap<Location, PathBuf>,
}

impl Locations {
    /// Builds the table with the driver parameters in `params_dir`
    /// and the warm backlight class in `backlight_dir`.
    pub fn new(params_dir: impl AsRef<Path>, backlight_dir: impl AsRef<Path>) -> Self {
        let params_dir = params_dir.as_ref();
        let backlight_dir = backlight_dir.as_ref();

        let map = Location::ALL
            .iter()
            .map(|&location| {
                let dir = if location.is_backlight() {
                    backlight_dir
                } else {
                    params_dir
                };

                (location, dir.join(location.file_name()))
            })
            .collect();

        Locations { map }
    }

    pub fn get(&self, location: Location) -> &Path {
        // Every `Location` is inserted by `Locations::new`.
        &self.map[&location]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, &Path)> + '_ {
        self.map.iter().map(|(location, path)| (*location, path.as_path()))
    }
}

impl Default for Locations {
    fn default() -> Self {
        Locations::new(DEFAULT_PARAMS_DIR, DEFAULT_BACKLIGHT_DIR)
    }
}
