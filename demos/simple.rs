use std::collections::HashMap;

use taplytics_kit::{
    AttributeListener, Event, EventListener, HasUserOptedOutListener, KitConfig, KitContext,
    KitIntegration, Options, ResetUserListener, TaplyticsApi,
};

/// A stand-in for the vendor SDK that prints every call it receives.
struct PrintingTaplytics;

impl TaplyticsApi for PrintingTaplytics {
    fn start_taplytics(&self, _context: &KitContext, api_key: &str, options: &Options) {
        println!("startTaplytics({:?}, {:?})", api_key, options);
    }

    fn set_user_attributes(&self, attributes: &serde_json::Value) {
        println!("setUserAttributes({})", attributes);
    }

    fn log_event(&self, name: &str, metadata: Option<serde_json::Value>) {
        println!("logEvent({:?}, {:?})", name, metadata);
    }

    fn log_revenue(&self, name: &str, revenue: f64) {
        println!("logRevenue({:?}, {})", name, revenue);
    }

    fn reset_app_user(&self, listener: ResetUserListener) {
        println!("resetAppUser()");
        listener();
    }

    fn has_user_opted_out_tracking(&self, listener: HasUserOptedOutListener) {
        listener(false);
    }

    fn opt_in_user_tracking(&self) {
        println!("optInUserTracking()");
    }

    fn opt_out_user_tracking(&self) {
        println!("optOutUserTracking()");
    }
}

pub fn main() {
    env_logger::init();

    let kit = KitConfig::new(PrintingTaplytics)
        .option("liveUpdate", false)
        .to_kit();

    // The host framework delivers the remote kit settings on creation.
    let settings = HashMap::from([("apiKey".to_owned(), "demo-api-key".to_owned())]);
    kit.on_kit_create(&settings, &KitContext::default()).unwrap();

    kit.set_user_attribute("plan", Some("pro"));
    kit.log_event(&Event::new("checkout_viewed"));
    kit.set_opt_out(true);
}
