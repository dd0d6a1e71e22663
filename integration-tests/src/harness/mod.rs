pub mod codec;
pub mod tracing;

pub use self::codec::{assert_decode_error, assert_round_trip};
pub use self::tracing::{CapturedEvent, capture_events};
