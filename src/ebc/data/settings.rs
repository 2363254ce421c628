use std::fmt;

use crate::ebc::data::{FlagEncoding, Location, Normal, RawValue, Waveform};

bool_parameter!(BwMode {
    const LOCATION = Location::BwMode,
    const ENCODING = FlagEncoding::Letter,
});

range_parameter!(BwThreshold {
    const LOCATION = Location::BwThreshold,
    const MIN_RAW = RawValue::new(4),
    const MAX_RAW = RawValue::new(13),
});

bool_parameter!(BwDitherInvert {
    const LOCATION = Location::BwDitherInvert,
    const ENCODING = FlagEncoding::Digit,
});

bool_parameter!(AutoRefresh {
    const LOCATION = Location::AutoRefresh,
    const ENCODING = FlagEncoding::Letter,
});

range_parameter!(RefreshThreshold {
    const LOCATION = Location::RefreshThreshold,
    const MIN_RAW = RawValue::new(30),
    const MAX_RAW = RawValue::new(90),
});

/// A snapshot of every readable setting.
///
/// A field is `None` when its location couldn't be read or decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Settings {
    pub bw_mode: Option<bool>,
    pub bw_threshold: Option<Normal>,
    pub bw_dither_invert: Option<bool>,
    pub default_waveform: Option<Waveform>,
    pub auto_refresh: Option<bool>,
    pub refresh_threshold: Option<Normal>,
    pub warm_brightness: Option<Normal>,
}

struct Field<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("unavailable"),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<28}{}", Location::BwMode, Field(&self.bw_mode))?;
        writeln!(f, "{:<28}{}", Location::BwThreshold, Field(&self.bw_threshold))?;
        writeln!(f, "{:<28}{}", Location::BwDitherInvert, Field(&self.bw_dither_invert))?;
        writeln!(f, "{:<28}{}", Location::DefaultWaveform, Field(&self.default_waveform))?;
        writeln!(f, "{:<28}{}", Location::AutoRefresh, Field(&self.auto_refresh))?;
        writeln!(f, "{:<28}{}", Location::RefreshThreshold, Field(&self.refresh_threshold))?;
        write!(f, "{:<28}{}", Location::WarmBrightness, Field(&self.warm_brightness))
    }
}
