//! Resolves the command line, the `SOLACE_*` environment and the built-in
//! defaults into one immutable `ConsumerConfig`.

use crate::cli::{Cli, Mode, QueueType};
use crate::error::ConsumerError;
use solace_consumer_message::meta::{ConnectInfo, QueueAccess};

pub const DEFAULT_HOST: &str = "tcp://localhost:55555";
pub const DEFAULT_VPN: &str = "default";
pub const DEFAULT_USERNAME: &str = "default";
pub const DEFAULT_PASSWORD: &str = "default";
pub const DEFAULT_TOPIC: &str = "solace/samples/>";

/// subscription mode resolved from `--mode`/`SOLACE_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionMode {
    Topic,
    Queue,
}

/// the resolved, immutable consumer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumerConfig {
    pub host: String,
    pub vpn: String,
    pub username: String,
    pub password: String,
    pub mode: SubscriptionMode,
    /// used iff mode is `Topic`.
    pub topic: String,
    /// used iff mode is `Queue`.
    pub queue: String,
    pub queue_access: QueueAccess,
    pub acknowledge: bool,
    pub show_payload: bool,
    pub show_headers: bool,
    /// ca certificate path for tcps:// hosts.
    pub cert: Option<String>,
}

impl ConsumerConfig {
    /// resolves the config from the parsed cli and the process environment.
    pub fn from_env(cli: &Cli) -> Result<ConsumerConfig, ConsumerError> {
        ConsumerConfig::resolve(cli, |name| std::env::var(name).ok())
    }

    /// resolves the config from the parsed cli and the given environment
    /// lookup, per field: explicit flag > environment variable > default.
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<ConsumerConfig, ConsumerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = resolve_string(&cli.host, env("SOLACE_HOST"), DEFAULT_HOST);
        let vpn = resolve_string(&cli.vpn, env("SOLACE_VPN"), DEFAULT_VPN);
        let username = resolve_string(&cli.username, env("SOLACE_USERNAME"), DEFAULT_USERNAME);
        let password = resolve_string(&cli.password, env("SOLACE_PASSWORD"), DEFAULT_PASSWORD);
        let topic = resolve_string(&cli.topic, env("SOLACE_TOPIC"), DEFAULT_TOPIC);
        let queue = resolve_string(&cli.queue, env("SOLACE_QUEUE"), "");

        let mode = match cli.mode {
            Some(Mode::Topic) => SubscriptionMode::Topic,
            Some(Mode::Queue) => SubscriptionMode::Queue,
            None => match env("SOLACE_MODE") {
                Some(value) => parse_mode("SOLACE_MODE", &value)?,
                None => SubscriptionMode::Topic,
            },
        };

        let queue_access = match cli.queue_type {
            Some(QueueType::Exclusive) => QueueAccess::Exclusive,
            Some(QueueType::NonExclusive) => QueueAccess::NonExclusive,
            None => match env("SOLACE_QUEUE_TYPE") {
                Some(value) => parse_queue_access("SOLACE_QUEUE_TYPE", &value)?,
                None => QueueAccess::Exclusive,
            },
        };

        let acknowledge = if cli.ack {
            true
        } else {
            resolve_bool("SOLACE_ACK", env("SOLACE_ACK"), false)?
        };
        let show_payload = resolve_flag_pair(
            cli.show_message,
            cli.no_show_message,
            "SOLACE_SHOW_MESSAGE",
            env("SOLACE_SHOW_MESSAGE"),
            true,
        )?;
        let show_headers = resolve_flag_pair(
            cli.show_headers,
            cli.no_show_headers,
            "SOLACE_SHOW_HEADERS",
            env("SOLACE_SHOW_HEADERS"),
            true,
        )?;

        // the only input validation: a queue bind needs a queue name, and it
        // has to fail before any network activity.
        if mode == SubscriptionMode::Queue && queue.is_empty() {
            return Err(ConsumerError::Configuration(
                "queue mode requires a queue name (--queue or SOLACE_QUEUE)".to_string(),
            ));
        }

        Ok(ConsumerConfig {
            host,
            vpn,
            username,
            password,
            mode,
            topic,
            queue,
            queue_access,
            acknowledge,
            show_payload,
            show_headers,
            cert: cli.cert.clone(),
        })
    }

    /// the session parameters sent with the connect frame.
    pub fn connect_info(&self) -> ConnectInfo {
        ConnectInfo {
            vpn: self.vpn.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// the destination the consumer attaches to, for display.
    pub fn destination(&self) -> &str {
        match self.mode {
            SubscriptionMode::Topic => &self.topic,
            SubscriptionMode::Queue => &self.queue,
        }
    }
}

fn resolve_string(flag: &Option<String>, env: Option<String>, default: &str) -> String {
    flag.clone()
        .or(env)
        .unwrap_or_else(|| default.to_string())
}

fn parse_mode(name: &str, value: &str) -> Result<SubscriptionMode, ConsumerError> {
    match value.to_ascii_lowercase().as_str() {
        "topic" => Ok(SubscriptionMode::Topic),
        "queue" => Ok(SubscriptionMode::Queue),
        _ => Err(ConsumerError::Configuration(format!(
            "{name} must be `topic` or `queue`, got `{value}`"
        ))),
    }
}

fn parse_queue_access(name: &str, value: &str) -> Result<QueueAccess, ConsumerError> {
    match value.to_ascii_lowercase().as_str() {
        "exclusive" => Ok(QueueAccess::Exclusive),
        "non-exclusive" => Ok(QueueAccess::NonExclusive),
        _ => Err(ConsumerError::Configuration(format!(
            "{name} must be `exclusive` or `non-exclusive`, got `{value}`"
        ))),
    }
}

fn resolve_bool(name: &str, env: Option<String>, default: bool) -> Result<bool, ConsumerError> {
    let Some(value) = env else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConsumerError::Configuration(format!(
            "{name} must be a boolean, got `{value}`"
        ))),
    }
}

/// `--x`/`--no-x` flag pair with an environment fallback; clap's
/// `overrides_with` already guarantees at most one of the pair is set.
fn resolve_flag_pair(
    set: bool,
    unset: bool,
    name: &str,
    env: Option<String>,
    default: bool,
) -> Result<bool, ConsumerError> {
    if set {
        Ok(true)
    } else if unset {
        Ok(false)
    } else {
        resolve_bool(name, env, default)
    }
}
