//! Password policy levels attached to database connections.

// self
use crate::_prelude::*;

/// Password complexity level enforced by a database connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
	/// No complexity requirements.
	#[default]
	None,
	/// At least six characters.
	Low,
	/// Lower case, upper case, and digits required.
	Fair,
	/// Three character groups out of four.
	Good,
	/// All character groups, with repetition limits.
	Excellent,
}
impl PasswordStrength {
	/// Parses the tenant's `passwordPolicy` string, defaulting to [`Self::None`] for absent or
	/// unrecognized values.
	pub fn parse(value: Option<&str>) -> Self {
		match value {
			Some("low") => Self::Low,
			Some("fair") => Self::Fair,
			Some("good") => Self::Good,
			Some("excellent") => Self::Excellent,
			_ => Self::None,
		}
	}

	/// Returns the tenant-side identifier for the level.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Low => "low",
			Self::Fair => "fair",
			Self::Good => "good",
			Self::Excellent => "excellent",
		}
	}
}
impl Display for PasswordStrength {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parse_is_conservative_about_unknown_levels() {
		assert_eq!(PasswordStrength::parse(Some("excellent")), PasswordStrength::Excellent);
		assert_eq!(PasswordStrength::parse(Some("good")), PasswordStrength::Good);
		assert_eq!(PasswordStrength::parse(Some("GOOD")), PasswordStrength::None);
		assert_eq!(PasswordStrength::parse(Some("paranoid")), PasswordStrength::None);
		assert_eq!(PasswordStrength::parse(None), PasswordStrength::None);
	}

	#[test]
	fn levels_order_by_strictness() {
		assert!(PasswordStrength::None < PasswordStrength::Low);
		assert!(PasswordStrength::Low < PasswordStrength::Excellent);
	}
}
