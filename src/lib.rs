pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpContactApi, StdinEvents, StdoutTarget};
pub use crate::app::{Coordinator, HintDelays, Presenter};
pub use crate::config::Settings;
pub use crate::core::store::ContactStore;
pub use crate::utils::error::{ContactError, Result};
