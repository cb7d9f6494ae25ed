// Domain layer: catalog records, query criteria and the ports the shell plugs into.

pub mod model;
pub mod ports;
