// Domain layer: value types and ports. No I/O here.

pub mod colors;
pub mod model;
pub mod ports;
