use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An application event logged by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Name of the event, forwarded verbatim to the wrapped SDK.
    pub name: String,
    /// Optional string attributes attached to the event by the host application. Forwarded as
    /// event metadata when present.
    pub custom_attributes: Option<HashMap<String, String>>,
}

impl Event {
    /// Creates an event with the given name and no custom attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            custom_attributes: None,
        }
    }
}

/// A commerce event logged by the host application.
///
/// Only purchase events carrying both a transaction id and a revenue are forwarded; everything
/// else is dropped without acknowledgment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommerceEvent {
    /// The product action describing this event, e.g. [`CommerceEvent::PURCHASE`]. Compared
    /// case-insensitively.
    pub product_action: Option<String>,
    /// Attributes of the transaction this event belongs to.
    pub transaction_attributes: Option<TransactionAttributes>,
}

impl CommerceEvent {
    /// Product action of purchase events, the only action forwarded by this kit.
    pub const PURCHASE: &'static str = "purchase";
}

/// Transaction attributes of a [`CommerceEvent`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionAttributes {
    /// Unique identifier of the transaction.
    pub id: Option<String>,
    /// Total revenue of the transaction.
    pub revenue: Option<f64>,
}

/// Types of user identity tracked by the host framework.
///
/// The kit forwards [`IdentityType::CustomerId`] and [`IdentityType::Email`] as Taplytics user
/// attributes; all other types are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum IdentityType {
    /// The host application's customer identifier.
    CustomerId,
    /// The user's email address.
    Email,
    /// Facebook identifier.
    Facebook,
    /// Google identifier.
    Google,
    /// Microsoft identifier.
    Microsoft,
    /// Twitter identifier.
    Twitter,
    /// Yahoo identifier.
    Yahoo,
    /// Any other identity type.
    Other,
}

/// User identities carried by a completed identify, login, logout, or modify request.
#[derive(Debug, Clone, Default)]
pub struct IdentityApiRequest {
    /// The user identities known to the request, by type.
    pub user_identities: HashMap<IdentityType, String>,
}

impl IdentityApiRequest {
    /// Creates a request carrying the given identities.
    pub fn new(user_identities: HashMap<IdentityType, String>) -> Self {
        Self { user_identities }
    }
}
