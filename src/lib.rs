pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod receiver;
pub mod stream;
pub use solace_consumer_message::frame;
pub use solace_consumer_message::meta;
pub use solace_consumer_message::PktType;
