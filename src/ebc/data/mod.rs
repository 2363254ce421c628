#[macro_use]
pub mod parameter;
pub use parameter::{
    trim_raw, BoolParameter, Brightness, FlagEncoding, Normal, RangeParameter, RawRange, RawValue,
};

pub mod settings;
pub use settings::{
    AutoRefresh, BwDitherInvert, BwMode, BwThreshold, RefreshThreshold, Settings,
};

pub mod waveform;
pub use waveform::Waveform;

use std::fmt;

/// A raw location exposed by the display driver or the backlight class.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Location {
    BwMode,
    BwThreshold,
    BwDitherInvert,
    DefaultWaveform,
    AutoRefresh,
    RefreshThreshold,
    WarmBrightness,
    WarmMaxBrightness,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::BwMode,
        Location::BwThreshold,
        Location::BwDitherInvert,
        Location::DefaultWaveform,
        Location::AutoRefresh,
        Location::RefreshThreshold,
        Location::WarmBrightness,
        Location::WarmMaxBrightness,
    ];

    pub const fn name(self) -> &'static str {
        use Location::*;
        match self {
            BwMode => "bw_mode",
            BwThreshold => "bw_threshold",
            BwDitherInvert => "bw_dither_invert",
            DefaultWaveform => "default_waveform",
            AutoRefresh => "auto_refresh",
            RefreshThreshold => "refresh_threshold",
            WarmBrightness => "warm_backlight_brightness",
            WarmMaxBrightness => "warm_backlight_max_brightness",
        }
    }

    /// Whether this location belongs to the backlight class
    /// rather than to the display driver module parameters.
    pub const fn is_backlight(self) -> bool {
        matches!(self, Location::WarmBrightness | Location::WarmMaxBrightness)
    }

    /// File name of the location within its parent directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Location::WarmBrightness => "brightness",
            Location::WarmMaxBrightness => "max_brightness",
            other => other.name(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
