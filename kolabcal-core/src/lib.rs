//! Conversion between Kolab calendar objects and a native incidence model.
//!
//! - [`kolab`]: the neutral object model (events, to-dos, journals)
//! - [`kcal`]: the native calendar library model
//! - [`convert`]: the bidirectional mapping, via [`ToNative`] / [`FromNative`]
//! - [`diagnostics`]: the shared sink conversions report lossy input to

pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod kcal;
pub mod kolab;
pub mod serde_helpers;

pub use config::MapperConfig;
pub use convert::{Converter, FromNative, ToNative};
pub use diagnostics::{Diagnostic, ErrorHandler, Severity};
pub use error::{KolabCalError, KolabCalResult};
