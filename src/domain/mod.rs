// Domain layer: response shapes and the ports the services depend on.

pub mod model;
pub mod ports;
