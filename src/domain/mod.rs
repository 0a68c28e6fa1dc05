// Domain layer: request payloads and the ports the client and CLI meet at.

pub mod model;
pub mod ports;
