pub mod coordinator;
pub mod intent;
pub mod presenter;
pub mod timer;

pub use coordinator::Coordinator;
pub use intent::Intent;
pub use presenter::{FilterIndicator, FormOutcome, HintDelays, Presenter};
