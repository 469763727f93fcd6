pub mod dispatcher;
pub mod event_processor;
pub mod push_client;
pub mod store;

pub use dispatcher::*;
pub use event_processor::*;
pub use push_client::*;
pub use store::*;
