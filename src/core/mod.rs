pub mod matching;
pub mod store;

pub use crate::domain::model::{Contact, ContactId, ContactInput, ContactPayload, ContactRecord, FormContext};
pub use crate::domain::ports::{ConfigProvider, ContactApi, EventSource, RenderTarget};
pub use crate::utils::error::Result;
pub use store::ContactStore;
