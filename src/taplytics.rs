use serde_json::Value;

use crate::{KitContext, Options};

/// Completion listener for [`TaplyticsApi::reset_app_user`].
pub type ResetUserListener = Box<dyn FnOnce() + Send>;

/// Completion listener for [`TaplyticsApi::has_user_opted_out_tracking`], receiving the wrapped
/// SDK's current opt-out state.
pub type HasUserOptedOutListener = Box<dyn FnOnce(bool) + Send>;

/// The surface of the wrapped Taplytics SDK used by this kit.
///
/// The production implementation binds to the vendor SDK; tests substitute a recording mock.
///
/// [`TaplyticsApi::reset_app_user`] and [`TaplyticsApi::has_user_opted_out_tracking`] are
/// asynchronous: implementations deliver the completion listener on a thread of their choosing,
/// and the kit never blocks waiting for it.
pub trait TaplyticsApi {
    /// Starts the SDK for the given host context, with the resolved API key and merged start
    /// options.
    fn start_taplytics(&self, context: &KitContext, api_key: &str, options: &Options);

    /// Attaches the given attributes to the current user.
    fn set_user_attributes(&self, attributes: &Value);

    /// Logs a named event, with optional metadata.
    fn log_event(&self, name: &str, metadata: Option<Value>);

    /// Logs revenue for a transaction.
    fn log_revenue(&self, name: &str, revenue: f64);

    /// Resets the current app user, calling `listener` when done.
    fn reset_app_user(&self, listener: ResetUserListener);

    /// Queries whether the user has opted out of tracking, delivering the answer to `listener`.
    fn has_user_opted_out_tracking(&self, listener: HasUserOptedOutListener);

    /// Opts the user into tracking.
    fn opt_in_user_tracking(&self);

    /// Opts the user out of tracking.
    fn opt_out_user_tracking(&self);
}
