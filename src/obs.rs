//! Optional observability helpers for response handling.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_braincube.response` with the
//!   `response` (payload kind) and `stage` (call site) fields, plus a `debug` event whenever
//!   the provider reports an error.
//! - Enable `metrics` to increment the `oauth2_braincube_response_total` counter for every
//!   success/failure, labeled by `response` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Provider payloads decoded by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseKind {
	/// Token endpoint response.
	AccessToken,
	/// Resource owner (profile) response.
	ResourceOwner,
}
impl ResponseKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResponseKind::AccessToken => "access_token",
			ResponseKind::ResourceOwner => "resource_owner",
		}
	}
}
impl Display for ResponseKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each decoded response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseOutcome {
	/// Payload decoded into the expected type.
	Success,
	/// Provider error or malformed payload propagated back to the caller.
	Failure,
}
impl ResponseOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResponseOutcome::Success => "success",
			ResponseOutcome::Failure => "failure",
		}
	}
}
impl Display for ResponseOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_are_stable() {
		assert_eq!(ResponseKind::AccessToken.to_string(), "access_token");
		assert_eq!(ResponseKind::ResourceOwner.as_str(), "resource_owner");
		assert_eq!(ResponseOutcome::Failure.to_string(), "failure");
	}
}
