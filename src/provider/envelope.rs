//! Error envelope probing for provider responses.
//!
//! Braincube reports failures under a top-level `error` field, either as a plain string or
//! as an object carrying `type`, `message`, and `code`.

// self
use crate::{_prelude::*, error::IdentityProviderError};

/// Error shape found under a response's top-level `error` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorEnvelope {
	/// Unstructured error, usually a plain string.
	Scalar(String),
	/// `{type, message, code}` error object.
	Structured {
		/// Provider error type, e.g. `OAuthException`.
		kind: String,
		/// Provider message.
		message: String,
		/// Provider numeric code.
		code: i64,
	},
}
impl ErrorEnvelope {
	/// Inspects `data` and returns the error envelope, if any.
	///
	/// Missing or empty `error` values (`null`, `false`, `0`, `""`, `"0"`, `[]`, `{}`) count
	/// as success. Objects become [`ErrorEnvelope::Structured`]; every other shape becomes
	/// [`ErrorEnvelope::Scalar`] holding its string form.
	pub fn detect(data: &Value) -> Option<Self> {
		let error = data.get("error")?;

		if is_empty(error) {
			return None;
		}

		let envelope = match error {
			Value::Object(fields) => Self::Structured {
				kind: fields.get("type").map(coerce_string).unwrap_or_default(),
				message: fields.get("message").map(coerce_string).unwrap_or_default(),
				code: fields
					.get("code")
					.and_then(coerce_code)
					.unwrap_or(IdentityProviderError::UNSTRUCTURED_CODE),
			},
			other => Self::Scalar(coerce_string(other)),
		};

		Some(envelope)
	}

	/// Message surfaced to callers.
	pub fn message(&self) -> String {
		match self {
			Self::Scalar(message) => message.clone(),
			Self::Structured { kind, message, .. } => format!("{kind}: {message}"),
		}
	}

	/// Code surfaced to callers; `-1` for scalar errors.
	pub fn code(&self) -> i64 {
		match self {
			Self::Scalar(_) => IdentityProviderError::UNSTRUCTURED_CODE,
			Self::Structured { code, .. } => *code,
		}
	}

	/// Converts the envelope into an [`IdentityProviderError`] carrying `response`.
	pub fn into_error(self, response: Value) -> IdentityProviderError {
		IdentityProviderError::new(self.message(), self.code(), response)
	}
}

/// Shared `check_response` behavior for envelope-style providers.
pub fn check_error_envelope(data: &Value) -> Result<(), IdentityProviderError> {
	match ErrorEnvelope::detect(data) {
		Some(envelope) => Err(envelope.into_error(data.clone())),
		None => Ok(()),
	}
}

fn is_empty(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(flag) => !flag,
		Value::Number(number) => number.as_f64() == Some(0.),
		Value::String(text) => text.is_empty() || text == "0",
		Value::Array(items) => items.is_empty(),
		Value::Object(fields) => fields.is_empty(),
	}
}

fn coerce_string(value: &Value) -> String {
	match value {
		Value::Null | Value::Bool(false) => String::new(),
		Value::Bool(true) => "1".into(),
		Value::String(text) => text.clone(),
		Value::Number(number) => number.to_string(),
		other => other.to_string(),
	}
}

fn coerce_code(value: &Value) -> Option<i64> {
	match value {
		Value::Number(number) =>
			number.as_i64().or_else(|| number.as_f64().map(|float| float as i64)),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	}
}
