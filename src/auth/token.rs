//! Access token model decoded from token endpoint responses.

// self
use crate::_prelude::*;

/// Values above this are read as absolute Unix timestamps instead of relative seconds.
const EXPIRATION_TIMESTAMP_FLOOR: i64 = 315_537_897;

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Access token issued by the token endpoint.
///
/// Only the standard fields are lifted into typed members; everything else the
/// provider returned stays available through [`AccessToken::values`].
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessToken {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Refresh token secret, if the provider issued one.
	pub refresh_token: Option<TokenSecret>,
	/// Token type reported by the provider (usually `bearer`).
	pub token_type: Option<String>,
	/// Expiry instant, when the response carried `expires_in` or `expires`.
	pub expires_at: Option<OffsetDateTime>,
	/// Resource owner identifier embedded in the token response, if any.
	pub resource_owner_id: Option<String>,
	/// Remaining response fields.
	pub values: Map<String, Value>,
}
impl AccessToken {
	/// Creates a bare token that carries only the access token value.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: None,
			token_type: None,
			expires_at: None,
			resource_owner_id: None,
			values: Map::new(),
		}
	}

	/// Decodes a token endpoint response object.
	///
	/// `resource_owner_id_key` names the response field holding the owner id; providers
	/// that never embed identity in the token response pass `None`.
	pub fn from_response(
		response: Map<String, Value>,
		resource_owner_id_key: Option<&str>,
	) -> Result<Self> {
		Self::from_response_at(response, resource_owner_id_key, OffsetDateTime::now_utc())
	}

	/// Same as [`AccessToken::from_response`] with an explicit clock.
	pub fn from_response_at(
		response: Map<String, Value>,
		resource_owner_id_key: Option<&str>,
		now: OffsetDateTime,
	) -> Result<Self> {
		let resource_owner_id = resource_owner_id_key
			.and_then(|key| response.get(key))
			.and_then(|value| match value {
				Value::Null => None,
				Value::String(s) => Some(s.clone()),
				other => Some(other.to_string()),
			});
		let raw: RawTokenResponse = serde_path_to_error::deserialize(Value::Object(response))?;
		let expires_at = match (raw.expires_in, raw.expires) {
			(Some(seconds), _) => expires_after(now, seconds.as_i64("expires_in")?),
			(None, Some(expires)) => {
				let expires = expires.as_i64("expires")?;

				if expires > EXPIRATION_TIMESTAMP_FLOOR {
					OffsetDateTime::from_unix_timestamp(expires).ok()
				} else {
					expires_after(now, expires)
				}
			},
			(None, None) => None,
		};

		Ok(Self {
			access_token: TokenSecret::new(raw.access_token),
			refresh_token: raw.refresh_token.map(TokenSecret::new),
			token_type: raw.token_type,
			expires_at,
			resource_owner_id,
			values: raw.values,
		})
	}

	/// Returns the access token secret.
	pub fn secret(&self) -> &TokenSecret {
		&self.access_token
	}

	/// Returns `true` if the token has an expiry at or before `instant`.
	pub fn has_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Returns `true` if the token is expired relative to the current clock.
	pub fn has_expired(&self) -> bool {
		self.has_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("token_type", &self.token_type)
			.field("expires_at", &self.expires_at)
			.field("resource_owner_id", &self.resource_owner_id)
			.finish()
	}
}

#[derive(Deserialize)]
struct RawTokenResponse {
	access_token: String,
	#[serde(default)]
	refresh_token: Option<String>,
	#[serde(default)]
	token_type: Option<String>,
	#[serde(default)]
	expires_in: Option<Seconds>,
	#[serde(default)]
	expires: Option<Seconds>,
	#[serde(flatten)]
	values: Map<String, Value>,
}

/// Providers send lifetimes as JSON integers, floats, or numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Seconds {
	Integer(i64),
	Float(f64),
	Text(String),
}
impl Seconds {
	/// Fractional lifetimes are truncated toward zero.
	fn as_i64(&self, field: &'static str) -> Result<i64> {
		match self {
			Seconds::Integer(value) => Ok(*value),
			Seconds::Float(value) => Ok(value.trunc() as i64),
			Seconds::Text(text) => {
				let trimmed = text.trim();

				trimmed
					.parse::<i64>()
					.ok()
					.or_else(|| {
						trimmed
							.parse::<f64>()
							.ok()
							.filter(|value| value.is_finite())
							.map(|value| value.trunc() as i64)
					})
					.ok_or_else(|| Error::InvalidLifetime { field, value: text.clone() })
			},
		}
	}
}

fn expires_after(now: OffsetDateTime, seconds: i64) -> Option<OffsetDateTime> {
	now.checked_add(Duration::seconds(seconds))
}
