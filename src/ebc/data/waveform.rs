use once_cell::sync::Lazy;

use std::{fmt, str::FromStr};

use crate::ebc::{
    data::{Location, RawValue},
    Error,
};

/// Refresh algorithm used by the controller when an update doesn't ask for one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Waveform {
    /// Fast, black & white only.
    A2,
    /// Direct update, black & white.
    DU,
    /// Full 16 levels of grey.
    GC16,
    /// Direct update, 4 levels of grey.
    DU4,
}

impl Waveform {
    pub const NAME: &'static str = Location::DefaultWaveform.name();

    pub fn list() -> &'static [Waveform] {
        static LIST: Lazy<Vec<Waveform>> = Lazy::new(|| {
            use Waveform::*;
            vec![A2, DU, GC16, DU4]
        });

        &LIST
    }

    pub fn name(self) -> &'static str {
        use Waveform::*;
        match self {
            A2 => "A2",
            DU => "DU",
            GC16 => "GC16",
            DU4 => "DU4",
        }
    }

    pub fn to_raw_value(self) -> RawValue {
        use Waveform::*;
        RawValue::new(match self {
            A2 => 1,
            DU => 2,
            GC16 => 4,
            DU4 => 7,
        })
    }

    pub fn try_from_raw(raw: &str) -> Result<Self, Error> {
        raw.parse::<RawValue>()
            .and_then(Waveform::try_from)
            .map_err(|err| Error::with_context(Self::NAME, err))
    }
}

impl TryFrom<RawValue> for Waveform {
    type Error = Error;

    fn try_from(raw: RawValue) -> Result<Self, Error> {
        Waveform::list()
            .iter()
            .find(|wf| wf.to_raw_value() == raw)
            .copied()
            .ok_or_else(|| Error::UnknownWaveform(raw.to_string()))
    }
}

/// Parses either a waveform name (case insensitive) or its raw value.
impl FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(raw) = s.parse::<RawValue>() {
            return Waveform::try_from(raw);
        }

        Waveform::list()
            .iter()
            .find(|wf| wf.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::UnknownWaveform(s.to_string()))
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, RawValue, Waveform};

    #[test]
    fn raw_values() {
        let raws: Vec<u32> = Waveform::list()
            .iter()
            .map(|wf| wf.to_raw_value().as_u32())
            .collect();
        assert_eq!(raws, [1, 2, 4, 7]);
    }

    #[test]
    fn from_raw() {
        assert_eq!(Waveform::try_from_raw("4\n").unwrap(), Waveform::GC16);
        assert_eq!(Waveform::try_from(RawValue::new(7)).unwrap(), Waveform::DU4);

        for raw in [0, 3, 5, 6, 8] {
            assert!(matches!(
                Waveform::try_from(RawValue::new(raw)).unwrap_err(),
                Error::UnknownWaveform(_),
            ));
        }

        let err = Waveform::try_from_raw("3").unwrap_err();
        assert_eq!(err.to_string(), "default_waveform: Unknown waveform 3");
    }

    #[test]
    fn parse() {
        assert_eq!("a2".parse::<Waveform>().unwrap(), Waveform::A2);
        assert_eq!("Du".parse::<Waveform>().unwrap(), Waveform::DU);
        assert_eq!("gc16".parse::<Waveform>().unwrap(), Waveform::GC16);
        assert_eq!("7".parse::<Waveform>().unwrap(), Waveform::DU4);

        assert!("gc4".parse::<Waveform>().is_err());
        assert!("5".parse::<Waveform>().is_err());
    }
}
