// Domain layer: wire models and the transport-agnostic request/response contract.

pub mod model;
pub mod ports;
