//! Error types shared across the catalog, options, and resolution layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public constructors.
///
/// Resolution itself never fails; these variants cover malformed inputs to construction
/// (an undecodable catalog payload, invalid option overrides).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Connection catalog payload could not be decoded.
	#[error(transparent)]
	Catalog(#[from] CatalogError),
	/// Developer-supplied options failed validation.
	#[error(transparent)]
	Options(#[from] OptionsError),
}

/// Failures raised while decoding the tenant connection catalog.
#[derive(Debug, ThisError)]
pub enum CatalogError {
	/// The descriptor's connection array is not valid JSON or has the wrong shape.
	#[error("Connection catalog payload could not be deserialized.")]
	Parse {
		/// Structured parsing failure carrying the JSON path of the offending value.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Validation failures raised while building an options snapshot.
#[derive(Debug, ThisError)]
pub enum OptionsError {
	/// A legal-link override is not a parseable URL.
	#[error("The {kind} URL override is invalid.")]
	InvalidUrl {
		/// Which link failed validation (`privacy` or `terms`).
		kind: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A custom sign-up field failed validation.
	#[error(transparent)]
	Field(#[from] crate::options::SignUpFieldError),
}
