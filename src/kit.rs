use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{
    lifecycle::{StartGuard, StartSignal},
    options, AttributeListener, CommerceEvent, CommerceListener, Error, Event, EventListener,
    IdentityApiRequest, IdentityListener, IdentityType, KitConfig, KitContext, KitIntegration,
    MessageType, OptionValue, Options, ReportingMessage, Result, Settings, TaplyticsApi,
};

/// The kit's identifying name, reported to the host framework.
const KIT_NAME: &str = "Taplytics";

/// Taplytics attribute key the customer-id identity is forwarded under.
const USER_ID: &str = "user_id";
/// Taplytics attribute key the email identity is forwarded under.
const EMAIL: &str = "email";

/// Start request retained between a deferred creation signal and the session-start signal that
/// performs the actual start.
struct StartRequest {
    api_key: String,
    settings: Settings,
    context: KitContext,
}

/// Kit adapter forwarding host framework callbacks to the Taplytics SDK.
///
/// The kit implements the host framework's capability interfaces ([`KitIntegration`],
/// [`AttributeListener`], [`EventListener`], [`CommerceListener`], [`IdentityListener`]) and
/// translates each callback into the corresponding [`TaplyticsApi`] call. Forwarding is
/// synchronous and unbuffered; the wrapped SDK is started at most once per kit instance.
///
/// In order to create a kit instance, first create a [`KitConfig`].
///
/// # Examples
/// ```no_run
/// # use taplytics_kit::{KitConfig, KitContext, KitIntegration, TaplyticsApi};
/// # fn test(taplytics: impl TaplyticsApi + Send + Sync + 'static) -> taplytics_kit::Result<()> {
/// let kit = KitConfig::new(taplytics).to_kit();
/// let settings = [("apiKey".to_owned(), "tl-api-key".to_owned())].into();
/// kit.on_kit_create(&settings, &KitContext::default())?;
/// # Ok(())
/// # }
/// ```
pub struct TaplyticsKit {
    api: Arc<dyn TaplyticsApi + Send + Sync>,
    /// Host-set start options; win over settings-derived options on merge.
    options: Options,
    guard: StartGuard,
    pending: Mutex<Option<StartRequest>>,
}

impl TaplyticsKit {
    /// Creates a new `TaplyticsKit` using the specified configuration.
    pub fn new(config: KitConfig) -> Self {
        TaplyticsKit {
            api: config.api,
            options: config.options,
            guard: StartGuard::new(config.delay_start_until_session_start),
            pending: Mutex::new(None),
        }
    }

    /// Whether the wrapped SDK's start call has been issued.
    pub fn is_started(&self) -> bool {
        self.guard.is_started()
    }

    fn resolve_api_key(settings: &Settings) -> Result<String> {
        match settings.get(options::API_KEY) {
            Some(api_key) if !api_key.is_empty() => Ok(api_key.clone()),
            _ => {
                log::warn!(target: "taplytics", "kit settings are missing the required API key");
                Err(Error::MissingApiKey)
            }
        }
    }

    fn start_taplytics(&self, request: &StartRequest) {
        let mut options = options::merge_options(
            Some(&self.options),
            Some(options::options_from_settings(&request.settings)),
        );
        // Taplytics must not auto-start sessions on its own; session tracking stays under the
        // host framework's control.
        options.insert(options::DELAYED_START.to_owned(), OptionValue::Boolean(true));
        log::debug!(target: "taplytics", options:serde; "starting Taplytics SDK");
        self.api
            .start_taplytics(&request.context, &request.api_key, &options);
    }

    /// Forwards an attribute object to the wrapped SDK. Serializing a string map cannot fail;
    /// encoder errors are dropped rather than surfaced to the host.
    fn forward_user_attributes(&self, attributes: &HashMap<&str, &str>) {
        if let Ok(payload) = serde_json::to_value(attributes) {
            self.api.set_user_attributes(&payload);
        }
    }

    fn forward_user_attribute(&self, key: &str, value: Option<&str>) {
        self.forward_user_attributes(&HashMap::from([(key, value.unwrap_or(""))]));
    }

    /// Forwards the customer id and email carried by a completed identity request as one
    /// combined attribute object.
    fn forward_identity_request(&self, request: &IdentityApiRequest) {
        let mut attributes = HashMap::new();
        if let Some(customer_id) = request.user_identities.get(&IdentityType::CustomerId) {
            attributes.insert(USER_ID, customer_id.as_str());
        }
        if let Some(email) = request.user_identities.get(&IdentityType::Email) {
            attributes.insert(EMAIL, email.as_str());
        }
        self.forward_user_attributes(&attributes);
    }
}

impl KitIntegration for TaplyticsKit {
    fn name(&self) -> &str {
        KIT_NAME
    }

    fn on_kit_create(
        &self,
        settings: &Settings,
        context: &KitContext,
    ) -> Result<Vec<ReportingMessage>> {
        let request = StartRequest {
            api_key: Self::resolve_api_key(settings)?,
            settings: settings.clone(),
            context: context.clone(),
        };
        self.guard
            .transition(StartSignal::KitCreate, || self.start_taplytics(&request));
        // Retained for a deferred start; repeated creation signals refresh it.
        *self.pending.lock().unwrap() = Some(request);
        Ok(Vec::new())
    }

    fn on_session_start(&self) -> Vec<ReportingMessage> {
        let pending = self.pending.lock().unwrap();
        if let Some(request) = pending.as_ref() {
            self.guard
                .transition(StartSignal::SessionStart, || self.start_taplytics(request));
        }
        Vec::new()
    }

    fn set_opt_out(&self, opted_out: bool) -> Vec<ReportingMessage> {
        let api = Arc::clone(&self.api);
        self.api
            .has_user_opted_out_tracking(Box::new(move |has_opted_out| {
                // Correct the wrapped SDK only when its state differs from the requested one.
                if !has_opted_out && opted_out {
                    log::debug!(target: "taplytics", "opting user out of Taplytics tracking");
                    api.opt_out_user_tracking();
                } else if has_opted_out && !opted_out {
                    log::debug!(target: "taplytics", "opting user back into Taplytics tracking");
                    api.opt_in_user_tracking();
                }
            }));
        vec![ReportingMessage::new(MessageType::OptOut)]
    }
}

impl AttributeListener for TaplyticsKit {
    fn set_user_attribute(&self, key: &str, value: Option<&str>) {
        self.forward_user_attribute(key, value);
    }

    fn remove_user_attribute(&self, key: &str) {
        // Taplytics has no attribute deletion; removal forwards an empty-string set.
        self.forward_user_attribute(key, None);
    }

    fn set_all_user_attributes(
        &self,
        attributes: &HashMap<String, String>,
        _attribute_lists: &HashMap<String, Vec<String>>,
    ) {
        for (key, value) in attributes {
            self.forward_user_attribute(key, Some(value.as_str()));
        }
    }
}

impl EventListener for TaplyticsKit {
    fn log_event(&self, event: &Event) -> Vec<ReportingMessage> {
        let metadata = event
            .custom_attributes
            .as_ref()
            .and_then(|attributes| serde_json::to_value(attributes).ok());
        self.api.log_event(&event.name, metadata);
        vec![ReportingMessage::new(MessageType::Event)]
    }

    fn log_screen(
        &self,
        screen_name: &str,
        _attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        // Screen views reuse the generic event log, with the screen name as the event name.
        self.api.log_event(screen_name, None);
        vec![ReportingMessage::new(MessageType::ScreenView)]
    }
}

impl CommerceListener for TaplyticsKit {
    fn log_commerce_event(&self, event: &CommerceEvent) -> Vec<ReportingMessage> {
        let is_purchase = event
            .product_action
            .as_deref()
            .is_some_and(|action| action.eq_ignore_ascii_case(CommerceEvent::PURCHASE));
        if !is_purchase {
            return Vec::new();
        }
        let Some(transaction) = &event.transaction_attributes else {
            return Vec::new();
        };
        let (Some(id), Some(revenue)) = (&transaction.id, transaction.revenue) else {
            log::trace!(target: "taplytics", "purchase event without transaction id or revenue, not forwarded");
            return Vec::new();
        };
        self.api.log_revenue(id, revenue);
        vec![ReportingMessage::new(MessageType::CommerceEvent)]
    }
}

impl IdentityListener for TaplyticsKit {
    fn set_user_identity(&self, identity_type: IdentityType, identity: Option<&str>) {
        match identity_type {
            IdentityType::CustomerId => self.forward_user_attribute(USER_ID, identity),
            IdentityType::Email => self.forward_user_attribute(EMAIL, identity),
            _ => {}
        }
    }

    fn remove_user_identity(&self, identity_type: IdentityType) {
        self.set_user_identity(identity_type, None);
    }

    fn on_identify_completed(&self, request: &IdentityApiRequest) {
        self.forward_identity_request(request);
    }

    fn on_login_completed(&self, request: &IdentityApiRequest) {
        self.forward_identity_request(request);
    }

    fn on_logout_completed(&self, _request: &IdentityApiRequest) {
        self.api.reset_app_user(Box::new(|| {
            // no-op
        }));
    }

    fn on_modify_completed(&self, _request: &IdentityApiRequest) {}

    fn on_user_identified(&self) {}
}
