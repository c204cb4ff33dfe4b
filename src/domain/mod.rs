// Domain layer: content model types and the port the loader implements.

pub mod model;
pub mod ports;
