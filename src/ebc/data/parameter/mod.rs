#[macro_use]
mod boolean;
pub use boolean::{BoolParameter, FlagEncoding};

mod brightness;
pub use brightness::Brightness;

mod normal;
pub use normal::Normal;

#[macro_use]
mod range;
pub use range::{RangeParameter, RawRange};

mod raw;
pub use raw::{trim_raw, RawValue};
