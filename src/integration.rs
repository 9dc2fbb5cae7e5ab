use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{CommerceEvent, Event, IdentityApiRequest, IdentityType, Result, Settings};

/// Opaque handle to the host application environment.
///
/// The kit never inspects the context; it is passed through verbatim to the wrapped SDK's start
/// call.
#[derive(Debug, Clone, Default)]
pub struct KitContext {
    /// Identifier of the hosting application, when the host provides one.
    pub application_id: Option<String>,
}

/// Kinds of calls a kit acknowledges to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageType {
    /// An application event was forwarded.
    Event,
    /// A screen view was forwarded.
    ScreenView,
    /// A commerce event was forwarded.
    CommerceEvent,
    /// An opt-out toggle was forwarded.
    OptOut,
}

impl MessageType {
    /// The short code the host framework uses for this message type.
    pub fn code(&self) -> &'static str {
        match self {
            MessageType::Event => "e",
            MessageType::ScreenView => "v",
            MessageType::CommerceEvent => "cm",
            MessageType::OptOut => "o",
        }
    }
}

/// Acknowledgment returned to the host framework for a forwarded call.
///
/// A callback that produces no acknowledgment was not forwarded to the wrapped SDK.
#[derive(Debug, Clone, Serialize)]
pub struct ReportingMessage {
    /// The kind of call that was forwarded.
    pub message_type: MessageType,
    /// When the kit forwarded the call.
    pub timestamp: DateTime<Utc>,
}

impl ReportingMessage {
    /// Creates an acknowledgment stamped with the current time.
    pub fn new(message_type: MessageType) -> Self {
        Self {
            message_type,
            timestamp: Utc::now(),
        }
    }
}

/// Core capability interface every kit implements.
pub trait KitIntegration {
    /// The kit's identifying name.
    fn name(&self) -> &str;

    /// Creation hook: delivers the remote kit settings and the host context handle.
    ///
    /// # Errors
    ///
    /// Fails without mutating kit state when a required setting is missing, so the host may
    /// retry with corrected settings.
    fn on_kit_create(
        &self,
        settings: &Settings,
        context: &KitContext,
    ) -> Result<Vec<ReportingMessage>>;

    /// The host framework reported the start of a new session.
    fn on_session_start(&self) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// The host framework reported the end of the current session.
    fn on_session_end(&self) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// The host application toggled the user's tracking opt-out state.
    fn set_opt_out(&self, opted_out: bool) -> Vec<ReportingMessage>;

    /// The host application logged the user out of the kit's service.
    fn logout(&self) -> Vec<ReportingMessage> {
        Vec::new()
    }
}

/// Capability interface for kits that receive user attribute changes.
pub trait AttributeListener {
    /// Sets a single user attribute. `None` marks a removed value.
    fn set_user_attribute(&self, key: &str, value: Option<&str>);

    /// Removes a user attribute.
    fn remove_user_attribute(&self, key: &str);

    /// Replays all known user attributes, e.g. when the kit is first enabled.
    fn set_all_user_attributes(
        &self,
        attributes: &HashMap<String, String>,
        attribute_lists: &HashMap<String, Vec<String>>,
    );

    /// Whether the kit can represent list-valued attributes.
    fn supports_attribute_lists(&self) -> bool {
        false
    }

    /// Sets a list-valued user attribute, for kits that support them.
    fn set_user_attribute_list(&self, _key: &str, _values: &[String]) {}
}

/// Capability interface for kits that receive application events.
pub trait EventListener {
    /// Logs an application event.
    fn log_event(&self, event: &Event) -> Vec<ReportingMessage>;

    /// Logs a screen view.
    fn log_screen(
        &self,
        screen_name: &str,
        attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage>;

    /// Logs a caught exception.
    fn log_exception(
        &self,
        _message: &str,
        _attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// Logs an application error.
    fn log_error(
        &self,
        _message: &str,
        _attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// Leaves a breadcrumb for crash reporting.
    fn leave_breadcrumb(&self, _breadcrumb: &str) -> Vec<ReportingMessage> {
        Vec::new()
    }
}

/// Capability interface for kits that receive commerce events.
pub trait CommerceListener {
    /// Logs a commerce event.
    fn log_commerce_event(&self, event: &CommerceEvent) -> Vec<ReportingMessage>;

    /// Logs an increase in the user's lifetime value.
    fn log_ltv_increase(
        &self,
        _value_increased: f64,
        _value_total: f64,
        _event_name: &str,
        _context_info: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }
}

/// Capability interface for kits that track user identity changes.
pub trait IdentityListener {
    /// Sets a single user identity. `None` marks a removed value.
    fn set_user_identity(&self, identity_type: IdentityType, identity: Option<&str>);

    /// Removes a user identity.
    fn remove_user_identity(&self, identity_type: IdentityType);

    /// An identify request completed with the given identities.
    fn on_identify_completed(&self, request: &IdentityApiRequest);

    /// A login request completed with the given identities.
    fn on_login_completed(&self, request: &IdentityApiRequest);

    /// A logout request completed.
    fn on_logout_completed(&self, request: &IdentityApiRequest);

    /// A modify request completed.
    fn on_modify_completed(&self, request: &IdentityApiRequest);

    /// The current user was identified, without an accompanying request.
    fn on_user_identified(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_types_map_to_host_codes() {
        assert_eq!(MessageType::Event.code(), "e");
        assert_eq!(MessageType::ScreenView.code(), "v");
        assert_eq!(MessageType::CommerceEvent.code(), "cm");
        assert_eq!(MessageType::OptOut.code(), "o");
    }

    #[test]
    fn reporting_messages_carry_their_type() {
        let message = ReportingMessage::new(MessageType::OptOut);
        assert_eq!(message.message_type, MessageType::OptOut);
    }
}
