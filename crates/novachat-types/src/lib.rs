pub mod conversation;
pub mod error;
pub mod event;
pub mod message;
pub mod model;
pub mod settings;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
