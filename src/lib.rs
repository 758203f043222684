//! Resolves which login/signup flows an embedded authentication widget should offer by
//! reconciling the tenant's server-reported connection catalog with developer-supplied
//! presentation and behavior options.
//!
//! The crate is a pure in-memory transform: feed it a [`ConnectionCatalog`](catalog::ConnectionCatalog)
//! and an [`OptionsSnapshot`](options::OptionsSnapshot), and it produces an immutable
//! [`ResolvedConfiguration`](config::ResolvedConfiguration) that every downstream screen or
//! request layer queries instead of re-deriving the rules itself. Fetching and unwrapping the
//! tenant descriptor, rendering, and the actual authentication requests are the caller's concern.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod obs;
pub mod options;
pub mod strategy;

mod _prelude {
	pub use std::{
		borrow::Cow,
		collections::{HashMap, HashSet},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use url;
