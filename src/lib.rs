//! Taplytics kit for the mParticle SDK: forwards lifecycle signals, user attributes, identity
//! changes, and commerce events from the host kit framework to the Taplytics A/B-testing and
//! feature-flagging SDK.
//!
//! # Overview
//!
//! The kit revolves around [`TaplyticsKit`], which implements the host framework's capability
//! interfaces ([`KitIntegration`], [`AttributeListener`], [`EventListener`], [`CommerceListener`],
//! [`IdentityListener`]) and translates each callback into the corresponding call on the wrapped
//! SDK's API, expressed by the [`TaplyticsApi`] trait.
//!
//! The wrapped SDK is started at most once per kit instance: immediately when the host creates
//! the kit, or on the first session-start signal when configured with
//! [`KitConfig::delay_start_until_session_start`]. Start options are assembled by merging
//! host-set overrides over options derived from the remote kit settings.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. The only fatal error is a missing API key at
//! creation time; forwarding failures are never surfaced to the host, as analytics forwarding is
//! not critical enough to break the host application's primary flow.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages. Consider integrating a `log`-compatible logger implementation for better visibility
//! into kit operations.
//!
//! # Examples
//!
//! A runnable demo lives in the `demos` directory of the crate repository.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod config;
mod error;
mod events;
mod integration;
mod kit;
mod lifecycle;
mod options;
mod taplytics;

pub use config::KitConfig;
pub use error::{Error, Result};
pub use events::{CommerceEvent, Event, IdentityApiRequest, IdentityType, TransactionAttributes};
pub use integration::{
    AttributeListener, CommerceListener, EventListener, IdentityListener, KitContext,
    KitIntegration, MessageType, ReportingMessage,
};
pub use kit::TaplyticsKit;
pub use options::{OptionValue, Options, Settings};
pub use taplytics::{HasUserOptedOutListener, ResetUserListener, TaplyticsApi};
