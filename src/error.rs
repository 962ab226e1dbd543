use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsumerError {
    /// invalid or missing configuration value
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// the broker could not be reached or rejected the session
    #[error("Connection failed: {0}")]
    Connection(String),
    /// the topic subscription or queue bind was refused
    #[error("Subscription failed: {0}")]
    Subscription(String),
    /// client is not connected yet
    #[error("Client is not connected")]
    ClientNotConnected,
    /// the broker answered a request with an unexpected frame
    #[error("Unexpected `{0}` frame from the broker")]
    UnexpectedFrame(String),
}
