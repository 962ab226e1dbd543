//! The receiver: owns the client after the session is open, drives the
//! subscribe/bind and the delivery loop, and terminates on shutdown.

use crate::client::Client;
use crate::config::{ConsumerConfig, SubscriptionMode};
use crate::error::ConsumerError;
use crate::handler::MessageCounter;
use crate::message::InboundMessage;
use log::{debug, warn};
use solace_consumer_message::meta::QueueAccess;
use solace_consumer_message::PktType;
use tokio::sync::watch;

/// lifecycle of a receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverState {
    Created,
    Started,
    Subscribed,
    Receiving,
    Terminating,
    Terminated,
}

/// which kind of interest the receiver registers with the broker.
#[derive(Debug, Clone)]
pub enum ReceiverMode {
    /// non-durable topic subscription; no acknowledgements.
    Topic { pattern: String },
    /// durable queue bind; acknowledges each message when enabled.
    Queue {
        name: String,
        access: QueueAccess,
        acknowledge: bool,
    },
}

impl ReceiverMode {
    pub fn from_config(config: &ConsumerConfig) -> ReceiverMode {
        match config.mode {
            SubscriptionMode::Topic => ReceiverMode::Topic {
                pattern: config.topic.clone(),
            },
            SubscriptionMode::Queue => ReceiverMode::Queue {
                name: config.queue.clone(),
                access: config.queue_access,
                acknowledge: config.acknowledge,
            },
        }
    }
}

#[derive(Debug)]
pub struct Receiver {
    client: Client,
    mode: ReceiverMode,
    state: ReceiverState,
}

impl Receiver {
    /// wraps a connected client; the receiver starts in `Created`.
    pub fn new(client: Client, config: &ConsumerConfig) -> Receiver {
        Receiver {
            client,
            mode: ReceiverMode::from_config(config),
            state: ReceiverState::Created,
        }
    }

    pub fn state(&self) -> ReceiverState {
        self.state
    }

    /// registers the interest with the broker: topic subscription or queue
    /// bind. a refusal is fatal; the receiver is not retried.
    pub async fn start(&mut self) -> Result<(), ConsumerError> {
        self.state = ReceiverState::Started;
        match self.mode.clone() {
            ReceiverMode::Topic { pattern } => self.client.subscribe(&pattern).await?,
            ReceiverMode::Queue { name, access, .. } => self.client.bind(&name, access).await?,
        }
        self.state = ReceiverState::Subscribed;
        Ok(())
    }

    /// the delivery loop: reads frames and invokes the handler once per
    /// message, in arrival order, until shutdown is signalled or the stream
    /// ends. never returns an error; steady-state failures are warnings.
    pub async fn run(&mut self, handler: &MessageCounter, mut shutdown: watch::Receiver<bool>) {
        self.state = ReceiverState::Receiving;
        let acknowledge = matches!(
            &self.mode,
            ReceiverMode::Queue {
                acknowledge: true,
                ..
            }
        );
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    debug!("shutdown signalled, leaving the receive loop");
                    break;
                }
                frame = self.client.read_frame() => {
                    match frame {
                        Ok(frame) if frame.header.pkt_type == PktType::DELIVER => {
                            let message = InboundMessage::from_frame(&frame);
                            handler.on_message(&message);
                            if acknowledge {
                                let delivery_id = message.meta.delivery_id;
                                if let Err(e) = self.client.ack(delivery_id).await {
                                    warn!("could not acknowledge delivery {delivery_id}: {e}");
                                }
                            }
                        }
                        Ok(frame) if frame.header.pkt_type == PktType::ERROR => {
                            let diagnostic = String::from_utf8_lossy(&frame.payload).into_owned();
                            warn!("broker reported an error: {diagnostic}");
                        }
                        Ok(frame) => {
                            debug!("ignoring {} frame", frame.header.pkt_type);
                        }
                        Err(e) => {
                            warn!("receive loop stopped: {e}");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// tears the interest down; best-effort, failures are warnings.
    pub async fn terminate(&mut self) {
        self.state = ReceiverState::Terminating;
        if let ReceiverMode::Topic { pattern } = self.mode.clone() {
            if let Err(e) = self.client.unsubscribe(&pattern).await {
                warn!("error while unsubscribing from `{pattern}`: {e}");
            }
        }
        self.state = ReceiverState::Terminated;
    }

    /// hands the client back for the final disconnect.
    pub fn into_client(self) -> Client {
        self.client
    }
}
