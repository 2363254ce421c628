use std::{fmt, str::FromStr};

use crate::ebc::Error;

/// A Normal (0.0..=1.0) value based on an `f32`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Normal(f32);

impl Normal {
    pub const MIN: Normal = Normal(0.0);
    pub const CENTER: Normal = Normal(0.5);
    pub const MAX: Normal = Normal(1.0);

    #[inline]
    pub fn as_ratio(self) -> f32 {
        self.0
    }

    /// Builds a `Normal` from a value which may lie outside of `0.0..=1.0`.
    ///
    /// Useful for slider positions. `NaN` maps to `Normal::MIN`.
    pub fn saturating(value: f32) -> Self {
        if value.is_nan() {
            return Normal::MIN;
        }

        Normal(value.clamp(0.0, 1.0))
    }

    /// Tries to build a `Normal` from the provided zero based value and range.
    ///
    /// Returns an `Error` if the `value` is greater than `range`.
    #[inline]
    pub fn try_normalize(value: u32, range: u32) -> Result<Normal, Error> {
        if value > range {
            return Err(Error::ValueOutOfRange {
                value,
                min: 0,
                max: range,
            });
        }

        Ok(Self(value as f32 / range as f32))
    }
}

impl From<Normal> for f32 {
    fn from(normal: Normal) -> f32 {
        normal.as_ratio()
    }
}

impl TryFrom<f32> for Normal {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::NormalOutOfRange(value));
        }

        Ok(Normal(value))
    }
}

impl FromStr for Normal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f32>()
            .map_err(|_| Error::Parse(s.to_string()))?;

        Normal::try_from(value)
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
