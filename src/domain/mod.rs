// Domain layer: the copy parameter set and the config port. std only.

pub mod model;
pub mod ports;
