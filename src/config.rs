use std::sync::Arc;

use crate::{OptionValue, Options, TaplyticsApi, TaplyticsKit};

/// Configuration for [`TaplyticsKit`].
///
/// # Examples
/// ```no_run
/// # use taplytics_kit::{KitConfig, TaplyticsApi, TaplyticsKit};
/// # fn test(taplytics: impl TaplyticsApi + Send + Sync + 'static) {
/// let kit: TaplyticsKit = KitConfig::new(taplytics)
///     .option("liveUpdate", false)
///     .to_kit();
/// # }
/// ```
pub struct KitConfig {
    pub(crate) api: Arc<dyn TaplyticsApi + Send + Sync>,
    pub(crate) options: Options,
    pub(crate) delay_start_until_session_start: bool,
}

impl KitConfig {
    /// Creates a default kit configuration around the given wrapped SDK handle.
    pub fn new(api: impl TaplyticsApi + Send + Sync + 'static) -> Self {
        KitConfig {
            api: Arc::new(api),
            options: Options::new(),
            delay_start_until_session_start: false,
        }
    }

    /// Sets a single start option. Host-set options override settings-derived options with the
    /// same key.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Replaces all host-set start options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Defers the wrapped SDK's start call until the first session-start signal. Defaults to
    /// `false`: the SDK starts as soon as the kit is created.
    pub fn delay_start_until_session_start(mut self, delay: bool) -> Self {
        self.delay_start_until_session_start = delay;
        self
    }

    /// Creates a new [`TaplyticsKit`] using this configuration.
    pub fn to_kit(self) -> TaplyticsKit {
        TaplyticsKit::new(self)
    }
}
