mod bounds;
mod integer;

pub use bounds::*;
pub use integer::*;
