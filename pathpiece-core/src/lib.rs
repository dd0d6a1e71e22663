pub mod batch;
#[cfg(feature = "chrono")]
pub mod calendar;
pub mod codec;
pub mod enumeration;
pub mod error;
pub mod escape;
mod instances;
pub mod lenient;
pub mod numeric;

pub use batch::*;
pub use codec::*;
pub use error::{DecodeError, DecodeResult};
pub use instances::monoid;
pub use instances::wrappers::{Const, Either, Identity, Tagged};
pub use lenient::Lenient;
