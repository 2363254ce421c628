use crate::ebc::{
    data::{trim_raw, Location, RawValue},
    Error,
};

/// How a boolean is spelled in its raw location.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlagEncoding {
    /// `Y` / `N`, as used by kernel `bool` module parameters.
    Letter,
    /// `1` / `0`, as used by kernel integer module parameters.
    Digit,
}

impl FlagEncoding {
    pub fn decode(self, raw: &str) -> Result<bool, Error> {
        match self {
            FlagEncoding::Letter => Ok(trim_raw(raw) == "Y"),
            FlagEncoding::Digit => Ok(raw.parse::<RawValue>()?.as_u32() == 1),
        }
    }

    pub fn encode(self, value: bool) -> &'static str {
        match (self, value) {
            (FlagEncoding::Letter, true) => "Y",
            (FlagEncoding::Letter, false) => "N",
            (FlagEncoding::Digit, true) => "1",
            (FlagEncoding::Digit, false) => "0",
        }
    }
}

pub trait BoolParameter: From<bool> + Into<bool> + PartialEq + Copy + Clone + std::fmt::Debug {
    const NAME: &'static str;
    const LOCATION: Location;
    const ENCODING: FlagEncoding;

    fn try_from_raw(raw: &str) -> Result<Self, Error> {
        Self::ENCODING
            .decode(raw)
            .map(Self::from)
            .map_err(|err| Error::with_context(Self::NAME, err))
    }

    fn to_raw(self) -> &'static str {
        Self::ENCODING.encode(self.into())
    }

    fn is_active(self) -> bool {
        self.into()
    }
}

macro_rules! bool_parameter {
    ( $param:ident {
        const LOCATION = $location:expr,
        const ENCODING = $encoding:expr $(,)?
    } ) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $param(bool);

        impl crate::ebc::data::BoolParameter for $param {
            const NAME: &'static str = $location.name();
            const LOCATION: crate::ebc::data::Location = $location;
            const ENCODING: crate::ebc::data::FlagEncoding = $encoding;
        }

        impl From<bool> for $param {
            fn from(value: bool) -> Self {
                $param(value)
            }
        }

        impl From<$param> for bool {
            fn from(param: $param) -> Self {
                param.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{Error, FlagEncoding};

    #[test]
    fn letter() {
        let enc = FlagEncoding::Letter;

        assert_eq!(enc.encode(true), "Y");
        assert_eq!(enc.encode(false), "N");

        assert!(enc.decode("Y").unwrap());
        assert!(enc.decode("Y\n").unwrap());
        assert!(!enc.decode("N").unwrap());
        assert!(!enc.decode("N\n").unwrap());
        assert!(!enc.decode("y").unwrap());
        assert!(!enc.decode("").unwrap());
    }

    #[test]
    fn digit() {
        let enc = FlagEncoding::Digit;

        assert_eq!(enc.encode(true), "1");
        assert_eq!(enc.encode(false), "0");

        assert!(enc.decode("1\n").unwrap());
        assert!(!enc.decode("0\n").unwrap());
        assert!(!enc.decode("2").unwrap());

        assert!(matches!(enc.decode("Y").unwrap_err(), Error::Parse(_)));
    }
}
