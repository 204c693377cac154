// Domain layer: cart model, cart errors and ports (interfaces). No I/O here.

pub mod error;
pub mod model;
pub mod ports;
