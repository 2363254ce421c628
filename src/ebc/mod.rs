pub mod action;
pub use action::{RedrawAction, RedrawCommand};

pub mod data;
pub use data::{Location, Normal, Settings, Waveform};

mod error;
pub use error::Error;

pub mod store;
pub use store::{Locations, ParameterStore, SysfsStore};

pub mod prelude {
    pub use super::data::{BoolParameter, RangeParameter};
}

use std::path::Path;

use prelude::*;

use data::{
    AutoRefresh, Brightness, BwDitherInvert, BwMode, BwThreshold, RawValue, RefreshThreshold,
};

/// Maps normalized settings to the raw parameters of the EBC display driver.
///
/// Getters return `None` if the value couldn't be retrieved, setters and
/// actions never fail: errors are logged and the device state is left
/// to whatever the store ended up with. Nothing is cached, each call
/// goes to the store.
pub struct Driver<S = SysfsStore, A = RedrawCommand> {
    store: S,
    locations: Locations,
    redraw: A,
}

impl Driver {
    /// Builds a `Driver` operating on the actual device files.
    pub fn sysfs(locations: Locations, redraw: RedrawCommand) -> Self {
        Driver::new(SysfsStore, locations, redraw)
    }
}

impl<S: ParameterStore, A: RedrawAction> Driver<S, A> {
    pub fn new(store: S, locations: Locations, redraw: A) -> Self {
        Driver {
            store,
            locations,
            redraw,
        }
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn bw_mode(&self) -> Option<bool> {
        self.get(BwMode::NAME, || self.try_get_bool::<BwMode>())
    }

    pub fn set_bw_mode(&self, is_bw: bool) {
        self.set(BwMode::NAME, || self.try_set_bool(BwMode::from(is_bw)));
    }

    pub fn bw_threshold(&self) -> Option<Normal> {
        self.get(BwThreshold::NAME, || self.try_get_range::<BwThreshold>())
    }

    pub fn set_bw_threshold(&self, threshold: Normal) {
        self.set(BwThreshold::NAME, || {
            self.try_set_range(BwThreshold::from(threshold))
        });
    }

    pub fn bw_dither_invert(&self) -> Option<bool> {
        self.get(BwDitherInvert::NAME, || {
            self.try_get_bool::<BwDitherInvert>()
        })
    }

    pub fn set_bw_dither_invert(&self, is_on: bool) {
        self.set(BwDitherInvert::NAME, || {
            self.try_set_bool(BwDitherInvert::from(is_on))
        });
    }

    pub fn default_waveform(&self) -> Option<Waveform> {
        self.get(Waveform::NAME, || {
            Waveform::try_from_raw(&self.read(Location::DefaultWaveform)?)
        })
    }

    pub fn set_default_waveform(&self, waveform: Waveform) {
        self.set(Waveform::NAME, || {
            self.write(Location::DefaultWaveform, waveform.to_raw_value())
        });
    }

    pub fn auto_refresh(&self) -> Option<bool> {
        self.get(AutoRefresh::NAME, || self.try_get_bool::<AutoRefresh>())
    }

    pub fn set_auto_refresh(&self, do_refresh: bool) {
        self.set(AutoRefresh::NAME, || {
            self.try_set_bool(AutoRefresh::from(do_refresh))
        });
    }

    pub fn refresh_threshold(&self) -> Option<Normal> {
        self.get(RefreshThreshold::NAME, || {
            self.try_get_range::<RefreshThreshold>()
        })
    }

    pub fn set_refresh_threshold(&self, threshold: Normal) {
        self.set(RefreshThreshold::NAME, || {
            self.try_set_range(RefreshThreshold::from(threshold))
        });
    }

    pub fn warm_brightness(&self) -> Option<Normal> {
        self.get(Location::WarmBrightness.name(), || {
            let raw = self.read_raw_value(Location::WarmBrightness)?;
            let max = self.read_raw_value(Location::WarmMaxBrightness)?;

            Ok(Brightness::try_from_raw(raw, max)?.normal())
        })
    }

    /// Sets the warm backlight brightness.
    ///
    /// The maximum brightness is read before each write, it may change
    /// between the read and the write.
    pub fn set_warm_brightness(&self, value: Normal) {
        self.set(Location::WarmBrightness.name(), || {
            let max = self.read_raw_value(Location::WarmMaxBrightness)?;
            if max == RawValue::ZERO {
                return Err(Error::ZeroMaxBrightness);
            }

            let raw = Brightness::from(value).to_raw_value(max);
            self.write(Location::WarmBrightness, raw)
        });
    }

    /// Triggers a full screen redraw, without waiting for its completion.
    pub fn redraw_screen(&self) {
        match self.redraw.trigger() {
            Ok(()) => log::debug!("Triggered screen redraw"),
            Err(err) => log::error!("Screen redraw: {err}"),
        }
    }

    /// Reads all the readable settings.
    pub fn settings(&self) -> Settings {
        Settings {
            bw_mode: self.bw_mode(),
            bw_threshold: self.bw_threshold(),
            bw_dither_invert: self.bw_dither_invert(),
            default_waveform: self.default_waveform(),
            auto_refresh: self.auto_refresh(),
            refresh_threshold: self.refresh_threshold(),
            warm_brightness: self.warm_brightness(),
        }
    }

    fn get<T>(&self, name: &str, f: impl FnOnce() -> Result<T, Error>) -> Option<T> {
        match f() {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("Couldn't get {name}: {err}");
                None
            }
        }
    }

    fn set(&self, name: &str, f: impl FnOnce() -> Result<(), Error>) {
        if let Err(err) = f() {
            log::error!("Couldn't set {name}: {err}");
        }
    }

    fn try_get_bool<P: BoolParameter>(&self) -> Result<bool, Error> {
        P::try_from_raw(&self.read(P::LOCATION)?).map(P::is_active)
    }

    fn try_set_bool<P: BoolParameter>(&self, param: P) -> Result<(), Error> {
        self.write(P::LOCATION, param.to_raw())
    }

    fn try_get_range<P: RangeParameter>(&self) -> Result<Normal, Error> {
        P::try_from_raw(&self.read(P::LOCATION)?).map(P::normal)
    }

    fn try_set_range<P: RangeParameter>(&self, param: P) -> Result<(), Error> {
        self.write(P::LOCATION, param.to_raw_value())
    }

    fn path(&self, location: Location) -> &Path {
        self.locations.get(location)
    }

    fn read(&self, location: Location) -> Result<String, Error> {
        self.store.read(self.path(location))
    }

    fn read_raw_value(&self, location: Location) -> Result<RawValue, Error> {
        self.read(location)?
            .parse()
            .map_err(|err| Error::with_context(location.name(), err))
    }

    fn write(&self, location: Location, value: impl ToString) -> Result<(), Error> {
        let value = value.to_string();
        log::debug!("Writing {value} to {location}");

        self.store.write(self.path(location), &value)
    }
}
