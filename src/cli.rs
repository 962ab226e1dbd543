use clap::Parser;

/// subscription mode
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Topic,
    Queue,
}

/// queue access type
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum QueueType {
    Exclusive,
    NonExclusive,
}

/// log level for the consumer
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Trace,
    Warn,
    Info,
    Error,
    Debug,
}

/// the main command
///
/// every flag falls back to its `SOLACE_*` environment variable and then to a
/// built-in default; the fallbacks are applied by the configuration resolver,
/// not by clap, so that resolution stays testable.
#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// broker uri, tcp://host:port or tcps://host:port
    #[clap(long)]
    pub host: Option<String>,

    /// message vpn name
    #[clap(long)]
    pub vpn: Option<String>,

    /// username for basic authentication
    #[clap(long)]
    pub username: Option<String>,

    /// password for basic authentication
    #[clap(long)]
    pub password: Option<String>,

    /// subscription mode, topic or queue
    #[clap(long, value_enum)]
    pub mode: Option<Mode>,

    /// topic pattern to subscribe to (topic mode)
    #[clap(long)]
    pub topic: Option<String>,

    /// queue name to bind to (queue mode)
    #[clap(long)]
    pub queue: Option<String>,

    /// queue access type (queue mode)
    #[clap(long, value_enum)]
    pub queue_type: Option<QueueType>,

    /// acknowledge each message after it is handled (queue mode)
    #[clap(long)]
    pub ack: bool,

    /// print message payloads (default)
    #[clap(long = "show-message", overrides_with = "no_show_message")]
    pub show_message: bool,

    /// do not print message payloads
    #[clap(long = "no-show-message")]
    pub no_show_message: bool,

    /// print message header fields (default)
    #[clap(long = "show-headers", overrides_with = "no_show_headers")]
    pub show_headers: bool,

    /// do not print message header fields
    #[clap(long = "no-show-headers")]
    pub no_show_headers: bool,

    /// ca certificate for tcps:// hosts
    #[clap(long)]
    pub cert: Option<String>,

    /// log level, default: info
    #[clap(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
