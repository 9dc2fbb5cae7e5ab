use std::collections::HashMap;

use derive_more::From;
use serde::{Deserialize, Serialize};

/// Kit setting holding the Taplytics SDK key. Required and non-empty.
pub(crate) const API_KEY: &str = "apiKey";

/// Kit setting mapped to the Taplytics `aggressive` start option.
pub(crate) const AGGRESSIVE: &str = "TaplyticsOptionAggressive";

/// Taplytics option name the [`AGGRESSIVE`] setting translates to.
const TAPLYTICS_AGGRESSIVE: &str = "aggressive";

/// Start option telling Taplytics not to auto-start sessions. Always injected by the kit.
pub(crate) const DELAYED_START: &str = "delayedStartTaplytics";

/// Type alias for the settings mapping the host framework delivers at kit creation.
///
/// Keys are setting names from the remote kit configuration.
pub type Settings = HashMap<String, String>;

/// Type alias for the options mapping passed to the wrapped SDK's start call.
///
/// Keys are Taplytics start option names; values are passed through opaquely.
pub type Options = HashMap<String, OptionValue>;

/// Enum representing possible values of a Taplytics start option.
///
/// Conveniently implements `From` conversions for `String`, `&str`, `f64`, and `bool` types.
///
/// Examples:
/// ```
/// # use taplytics_kit::OptionValue;
/// let string_option: OptionValue = "example".into();
/// let number_option: OptionValue = 42.0.into();
/// let bool_option: OptionValue = true.into();
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, From, Clone)]
#[serde(untagged)]
pub enum OptionValue {
    /// A string value.
    String(String),
    /// A numerical value.
    Number(f64),
    /// A boolean value.
    Boolean(bool),
    /// A null value or absence of value.
    Null,
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Merges host-set override options with options derived from kit settings.
///
/// Every key from `configuration` is present in the result, then every key from `overrides`
/// overwrites it. Absent inputs are treated as empty mappings.
pub(crate) fn merge_options(
    overrides: Option<&Options>,
    configuration: Option<Options>,
) -> Options {
    let mut merged = configuration.unwrap_or_default();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Builds the options mapping derived from the remote kit settings.
pub(crate) fn options_from_settings(settings: &Settings) -> Options {
    let mut options = Options::new();
    add_aggressive_option(&mut options, settings);
    options
}

fn add_aggressive_option(options: &mut Options, settings: &Settings) {
    // Absent or unparseable values parse as false, like Java's Boolean.parseBoolean.
    let aggressive = settings
        .get(AGGRESSIVE)
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));
    options.insert(
        TAPLYTICS_AGGRESSIVE.to_owned(),
        OptionValue::Boolean(aggressive),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_on_key_collision() {
        let overrides = Options::from([("aggressive".to_owned(), true.into())]);
        let configuration = Options::from([
            ("aggressive".to_owned(), false.into()),
            ("other".to_owned(), "x".into()),
        ]);

        let merged = merge_options(Some(&overrides), Some(configuration));

        assert_eq!(
            merged,
            Options::from([
                ("aggressive".to_owned(), true.into()),
                ("other".to_owned(), "x".into()),
            ])
        );
    }

    #[test]
    fn absent_inputs_merge_as_empty_mappings() {
        assert_eq!(merge_options(None, None), Options::new());

        let overrides = Options::from([("liveUpdate".to_owned(), false.into())]);
        assert_eq!(merge_options(Some(&overrides), None), overrides);

        let configuration = Options::from([("aggressive".to_owned(), false.into())]);
        assert_eq!(merge_options(None, Some(configuration.clone())), configuration);
    }

    #[test]
    fn aggressive_setting_parses_case_insensitively() {
        let settings = Settings::from([(AGGRESSIVE.to_owned(), "TRUE".to_owned())]);
        assert_eq!(
            options_from_settings(&settings),
            Options::from([("aggressive".to_owned(), true.into())])
        );
    }

    #[test]
    fn aggressive_setting_defaults_to_false() {
        assert_eq!(
            options_from_settings(&Settings::new()),
            Options::from([("aggressive".to_owned(), false.into())])
        );

        let settings = Settings::from([(AGGRESSIVE.to_owned(), "yes please".to_owned())]);
        assert_eq!(
            options_from_settings(&settings),
            Options::from([("aggressive".to_owned(), false.into())])
        );
    }
}
