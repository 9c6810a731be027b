//! Adapter-level error types shared by the provider, token, and oauth2 bridge modules.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical adapter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Provider reported an error inside an otherwise decodable response.
	#[error(transparent)]
	IdentityProvider(#[from] IdentityProviderError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Response body could not be decoded into the expected shape.
	#[error("Provider response could not be decoded at `{}`.", .source.path())]
	ResponseParse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token response carried a lifetime that is not numeric.
	#[error("Token response field `{field}` must be numeric, got `{value}`.")]
	InvalidLifetime {
		/// Offending field (`expires_in` or `expires`).
		field: &'static str,
		/// Raw value as sent by the provider.
		value: String,
	},
	/// Response body decoded to something other than a JSON object.
	#[error("Provider response must be a JSON object.")]
	InvalidResponse,
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::ResponseParse { source }
	}
}

/// Failure reported by the identity provider itself.
///
/// Structured provider errors carry `"{type}: {message}"` and the provider's numeric code.
/// Plain string errors keep the string verbatim and use
/// [`IdentityProviderError::UNSTRUCTURED_CODE`].
/// The decoded response body is retained for callers that need the raw payload.
#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("{message}")]
pub struct IdentityProviderError {
	/// Human-readable message.
	pub message: String,
	/// Provider error code, or `-1` when the provider did not supply one.
	pub code: i64,
	/// Full decoded response body that carried the error.
	pub response: Value,
}
impl IdentityProviderError {
	/// Code used for errors that carry no structured code.
	pub const UNSTRUCTURED_CODE: i64 = -1;

	/// Creates a new provider error.
	pub fn new(message: impl Into<String>, code: i64, response: Value) -> Self {
		Self { message: message.into(), code, response }
	}

	/// Returns the human-readable message.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Returns the provider error code.
	pub fn code(&self) -> i64 {
		self.code
	}

	/// Returns the decoded response body.
	pub fn response_body(&self) -> &Value {
		&self.response
	}
}

/// Configuration and validation failures raised by the adapter.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base Braincube URL cannot be turned into endpoint URLs.
	#[error("Base Braincube URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending base URL.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Operation needs a client identifier but none was configured.
	#[error("Client identifier is not configured.")]
	MissingClientId,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identity_error_displays_message_only() {
		let err = IdentityProviderError::new("OAuthException: Foo auth error", 191, Value::Null);

		assert_eq!(err.to_string(), "OAuthException: Foo auth error");
		assert_eq!(err.code(), 191);

		let wrapped = Error::from(err);

		assert_eq!(wrapped.to_string(), "OAuthException: Foo auth error");
	}

	#[test]
	fn parse_errors_report_the_failing_path() {
		#[derive(Debug, Deserialize)]
		#[allow(dead_code)]
		struct TokenFields {
			expires_in: i64,
		}

		let source = serde_path_to_error::deserialize::<_, TokenFields>(
			serde_json::json!({ "expires_in": "soon" }),
		)
		.expect_err("String should not deserialize into an integer.");
		let err = Error::from(source);

		assert_eq!(err.to_string(), "Provider response could not be decoded at `expires_in`.");
	}
}
