// Domain layer: status records and the ports (source / sink) the poller talks to.

pub mod model;
pub mod ports;
