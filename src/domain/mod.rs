// Domain layer: value objects and ports. No I/O.

pub mod model;
pub mod ports;
