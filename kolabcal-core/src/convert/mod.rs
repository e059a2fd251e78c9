//! Mapping between the neutral [`kolab`](crate::kolab) model and the native
//! [`kcal`](crate::kcal) model.
//!
//! Conversions never fail. Lossy or invalid input is reported to the shared
//! [`ErrorHandler`] and the best-effort value is returned; callers check
//! [`Converter::failed`] (or the handler directly) after a batch.
//!
//! ```
//! use std::sync::Arc;
//! use kolabcal_core::convert::{Converter, FromNative, ToNative};
//! use kolabcal_core::diagnostics::ErrorHandler;
//! use kolabcal_core::kolab;
//!
//! let converter = Converter::new(Arc::new(ErrorHandler::new()), Default::default());
//! let mut event = kolab::Event::default();
//! event.incidence.uid = "uid".to_string();
//!
//! let native = event.to_native(&converter);
//! let back = kolab::Event::from_native(&native, &converter);
//! assert_eq!(back.incidence.uid, "uid");
//! ```

mod alarm;
mod attachment;
mod attendee;
mod contact;
mod custom_properties;
mod datetime;
mod duration;
mod enums;
mod incidence;
mod recurrence;

use std::sync::Arc;

use crate::config::MapperConfig;
use crate::diagnostics::ErrorHandler;

pub use attendee::{format_mailto, parse_mailto};
pub use custom_properties::{CONTACT_CUTYPE_PROPERTY, CONTACT_UUID_PROPERTY};
pub use datetime::{datetime_from_native, datetime_to_native};
pub use duration::{duration_from_native, duration_to_native};

/// Conversion context: where diagnostics go and how custom properties are namespaced.
#[derive(Debug, Clone)]
pub struct Converter {
    log: Arc<ErrorHandler>,
    config: MapperConfig,
}

impl Converter {
    pub fn new(log: Arc<ErrorHandler>, config: MapperConfig) -> Self {
        Converter { log, config }
    }

    pub fn log(&self) -> &ErrorHandler {
        &self.log
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Whether the diagnostics recorded so far reach the configured failure level.
    pub fn failed(&self) -> bool {
        self.log.worst_severity() >= self.config.fail_on
    }
}

/// Neutral value convertible to its native counterpart.
pub trait ToNative {
    type Native;

    fn to_native(&self, converter: &Converter) -> Self::Native;
}

/// Neutral value buildable from its native counterpart.
pub trait FromNative: Sized {
    type Native;

    fn from_native(native: &Self::Native, converter: &Converter) -> Self;
}
