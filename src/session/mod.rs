//! Actor-facing editing layer: per-actor state, configuration, the command
//! protocol and the service that ties planning, application and history
//! together.

pub mod config;
pub mod state;
pub mod service;
pub mod protocol;
pub mod command;

pub use config::EditConfig;
pub use state::{ActorSession, Selection};
pub use service::EditingService;
pub use protocol::{EditCommand, EditRequest, EditResponse, ErrorKind, ResponseData};
pub use command::CommandExecutor;
