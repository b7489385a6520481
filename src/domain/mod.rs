// Domain layer: name models and the matcher port. Only std/serde plus the crate error type.

pub mod model;
pub mod ports;
