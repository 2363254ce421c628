use crate::ebc::{
    data::{Normal, RawValue},
    Error,
};

/// A backlight brightness, relative to the maximum reported by the device.
///
/// The maximum is device dependent: callers must read it from the
/// backlight class each time they convert.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Brightness(Normal);

impl Brightness {
    pub fn try_from_raw(raw: RawValue, max: RawValue) -> Result<Self, Error> {
        if max == RawValue::ZERO {
            return Err(Error::ZeroMaxBrightness);
        }

        Normal::try_normalize(raw.as_u32(), max.as_u32()).map(Brightness)
    }

    /// Returns `round(normal × max)`, halves rounding away from zero.
    pub fn to_raw_value(self, max: RawValue) -> RawValue {
        let raw = (self.0.as_ratio() * max.as_u32() as f32).round() as u32;

        RawValue::new(raw.min(max.as_u32()))
    }

    pub fn normal(self) -> Normal {
        self.0
    }
}

impl From<Normal> for Brightness {
    fn from(normal: Normal) -> Self {
        Brightness(normal)
    }
}

impl From<Brightness> for Normal {
    fn from(brightness: Brightness) -> Self {
        brightness.0
    }
}
