//! Domain events emitted by the credibility engine and the sink contract
//! consumed by the notification collaborator.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::CredibilityEventHandler;
pub use types::*;
