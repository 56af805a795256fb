// Domain layer: contact models and ports (interfaces) to the API, the screen and user input.

pub mod model;
pub mod ports;
