// Adapters layer: concrete implementations of the domain ports (REST API, terminal screen, stdin).

pub mod http;
pub mod terminal;

pub use http::HttpContactApi;
pub use terminal::{StdinEvents, StdoutTarget};
