mod point;
mod region;

pub use point::*;
pub use region::*;
