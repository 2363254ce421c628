use std::{fmt, str::FromStr};

use crate::ebc::Error;

/// Strips the line terminators the kernel appends to parameter files.
pub fn trim_raw(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

/// An integer value as stored in a raw parameter location.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct RawValue(u32);

impl RawValue {
    pub const ZERO: Self = RawValue(0);

    /// Builds a `RawValue`.
    pub const fn new(value: u32) -> Self {
        RawValue(value)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue(value)
    }
}

impl From<RawValue> for u32 {
    fn from(value: RawValue) -> Self {
        value.0
    }
}

impl FromStr for RawValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(RawValue)
            .map_err(|_| Error::Parse(s.to_string()))
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{trim_raw, Error, RawValue};

    #[test]
    fn parse() {
        assert_eq!("9".parse::<RawValue>().unwrap(), RawValue::new(9));
        assert_eq!("45\n".parse::<RawValue>().unwrap(), RawValue::new(45));
        assert_eq!(" 255\r\n".parse::<RawValue>().unwrap(), RawValue::new(255));

        match "Y\n".parse::<RawValue>().unwrap_err() {
            Error::Parse(text) => assert_eq!(text, "Y\n"),
            other => panic!("{other}"),
        }
        assert!("-1".parse::<RawValue>().is_err());
        assert!("".parse::<RawValue>().is_err());
    }

    #[test]
    fn trim() {
        assert_eq!(trim_raw("Y\n"), "Y");
        assert_eq!(trim_raw("N\r\n"), "N");
        assert_eq!(trim_raw(" Y"), " Y");
    }
}
