//! Message handling - Event-driven envelope processing

pub mod decoder;
pub mod dispatcher;
pub mod parser;

pub use decoder::decode;
pub use dispatcher::EventDispatcher;
pub use parser::CommandParser;
