//! Tenant connection catalog as reported by the application descriptor.
//!
//! The catalog is read-only after construction and preserves the server's ordering, which the
//! resolver relies on for its "first connection wins" rules.

/// Connection value type and tenant metadata accessors.
pub mod connection;
/// Password policy levels reported by database connections.
pub mod policy;

pub use connection::*;
pub use policy::*;

// self
use crate::{_prelude::*, error::CatalogError};

/// Ordered, read-only list of the tenant's configured connections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionCatalog {
	connections: Vec<Connection>,
}
impl ConnectionCatalog {
	/// Creates a catalog from already-decoded connection records, preserving their order.
	pub fn new(connections: Vec<Connection>) -> Self {
		Self { connections }
	}

	/// Decodes a catalog from the descriptor's JSON connection array.
	///
	/// The payload is the plain JSON array, after the caller has stripped any JSONP wrapping.
	/// Failures carry the JSON path of the offending value.
	pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
		let mut deserializer = serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| CatalogError::Parse { source })
	}

	/// All connections in server order.
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	/// Number of connections in the catalog.
	pub fn len(&self) -> usize {
		self.connections.len()
	}

	/// Returns true when the tenant reported no connections.
	pub fn is_empty(&self) -> bool {
		self.connections.is_empty()
	}

	/// Iterator over the connections in server order.
	pub fn iter(&self) -> impl Iterator<Item = &Connection> {
		self.connections.iter()
	}
}
impl FromIterator<Connection> for ConnectionCatalog {
	fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
