// Domain layer: payload/envelope models and the ports the trigger depends on.

pub mod model;
pub mod ports;
