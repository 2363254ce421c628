use crate::ebc::{
    data::{Location, Normal, RawValue},
    Error,
};

pub trait RangeParameter:
    From<Normal> + Into<Normal> + PartialEq + Copy + Clone + std::fmt::Debug
{
    const NAME: &'static str;
    const LOCATION: Location;
    const MIN_RAW: RawValue;
    const MAX_RAW: RawValue;
    const RANGE: RawRange;

    fn try_from_raw(raw: &str) -> Result<Self, Error> {
        raw.parse::<RawValue>()
            .and_then(|raw| Self::RANGE.try_normalize(raw))
            .map(Self::from)
            .map_err(|err| Error::with_context(Self::NAME, err))
    }

    fn to_raw_value(self) -> RawValue {
        Self::RANGE.encode(self.into())
    }

    fn normal(self) -> Normal {
        self.into()
    }
}

macro_rules! range_parameter {
    ( $param:ident {
        const LOCATION = $location:expr,
        const MIN_RAW = $min:expr,
        const MAX_RAW = $max:expr $(,)?
    } ) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $param(crate::ebc::data::Normal);

        impl crate::ebc::data::RangeParameter for $param {
            const NAME: &'static str = $location.name();
            const LOCATION: crate::ebc::data::Location = $location;
            const MIN_RAW: crate::ebc::data::RawValue = $min;
            const MAX_RAW: crate::ebc::data::RawValue = $max;
            const RANGE: crate::ebc::data::RawRange =
                crate::ebc::data::RawRange::new(Self::MIN_RAW, Self::MAX_RAW);
        }

        impl From<crate::ebc::data::Normal> for $param {
            fn from(normal: crate::ebc::data::Normal) -> Self {
                $param(normal)
            }
        }

        impl From<$param> for crate::ebc::data::Normal {
            fn from(param: $param) -> Self {
                param.0
            }
        }
    };
}

/// An inclusive range of raw integers mapped onto `Normal`s.
///
/// Encoding floors towards `min`, so a decoded value is only guaranteed
/// to fall in the same raw step as the `Normal` it was encoded from.
#[derive(Clone, Copy, Debug)]
pub struct RawRange {
    min: u32,
    width: u32,
}

impl RawRange {
    /// Builds a new `RawRange` from the provided bounds.
    ///
    /// # Panic
    ///
    /// Panics if `min` >= `max`.
    pub const fn new(min: RawValue, max: RawValue) -> Self {
        let min = min.as_u32();
        let max = max.as_u32();

        assert!(min < max);

        RawRange {
            min,
            width: max - min,
        }
    }

    pub fn min(self) -> RawValue {
        RawValue::new(self.min)
    }

    pub fn max(self) -> RawValue {
        RawValue::new(self.min + self.width)
    }

    fn out_of_range_error(self, value: RawValue) -> Error {
        Error::ValueOutOfRange {
            value: value.as_u32(),
            min: self.min,
            max: self.min + self.width,
        }
    }

    /// Tries to build a `Normal` from the provided `value`.
    pub fn try_normalize(self, value: RawValue) -> Result<Normal, Error> {
        let zero_based_value = value
            .as_u32()
            .checked_sub(self.min)
            .ok_or_else(|| self.out_of_range_error(value))?;

        Normal::try_normalize(zero_based_value, self.width)
            .map_err(|_| self.out_of_range_error(value))
    }

    /// Returns the raw value for `normal`: `min + floor(normal × width)`.
    pub fn encode(self, normal: Normal) -> RawValue {
        let steps = (normal.as_ratio() * self.width as f32).floor() as u32;

        RawValue::new(self.min + steps.min(self.width))
    }
}
