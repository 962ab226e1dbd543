//! Typed metadata sections carried in the json body of a frame.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// session parameters sent with a `CONNECT` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectInfo {
    /// message vpn the session is scoped to.
    pub vpn: String,
    pub username: String,
    pub password: String,
}

/// how a named queue is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueAccess {
    /// the broker enforces a single active consumer.
    Exclusive,
    /// the broker load-balances across bound consumers.
    NonExclusive,
}

impl Display for QueueAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueAccess::Exclusive => write!(f, "exclusive"),
            QueueAccess::NonExclusive => write!(f, "non-exclusive"),
        }
    }
}

/// bind parameters sent with a `BIND` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindInfo {
    pub access: QueueAccess,
}

/// acknowledgement sent with an `ACK` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckInfo {
    /// broker-assigned id of the delivery being acknowledged.
    pub delivery_id: u64,
}

/// per-message metadata carried on a `DELIVER` frame.
///
/// every field except `delivery_id` is optional; absent fields are not
/// serialized at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMeta {
    /// broker-assigned id used to acknowledge the delivery.
    #[serde(default)]
    pub delivery_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_message_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    /// epoch millis at send time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// epoch millis after which the broker discards the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u64>,
    /// user-defined properties, name to value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_properties: BTreeMap<String, String>,
}
