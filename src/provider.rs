//! Provider-facing contract (behavior) and the Braincube implementation.
//!
//! [`Provider`] is the capability an OAuth 2.0 client drives: it hands out endpoint URLs,
//! default scopes, and bearer headers, then turns decoded response bodies into tokens,
//! resource owners, or [`IdentityProviderError`]s. Network I/O stays with the caller.
//! `braincube` holds the only implementation; `envelope` and `request` carry the error-shape
//! probing and authorize-URL assembly shared by implementations.

pub mod braincube;
pub mod envelope;
pub mod request;

pub use braincube::*;
pub use envelope::*;
pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::IdentityProviderError,
	obs::{self, ResponseKind, ResponseOutcome, ResponseSpan},
};

/// Extra form parameters forwarded to the token endpoint.
pub type TokenParams = BTreeMap<String, String>;

/// Header name/value pairs attached to authenticated provider requests.
pub type AuthorizationHeaders = BTreeMap<String, String>;

/// Generic resource owner capability exposed by every provider profile.
pub trait ResourceOwner: Send + Sync {
	/// Identifier of the authenticated user, when the profile carries one.
	fn id(&self) -> Option<&str>;

	/// Every attribute the provider returned.
	fn to_map(&self) -> &Map<String, Value>;
}

/// Contract an OAuth 2.0 provider adapter fulfills for the hosting client.
///
/// Implementors supply the required hooks; the provided methods compose them into the
/// operations a client actually calls (`get_authorization_url`, `parse_access_token`,
/// `parse_resource_owner`).
pub trait Provider: Send + Sync {
	/// Profile type produced from resource owner responses.
	type Owner: ResourceOwner;

	/// Authorization endpoint users are redirected to.
	fn authorization_url(&self) -> &Url;

	/// Token endpoint. `params` carries the grant parameters the client is about to send.
	fn token_url(&self, params: &TokenParams) -> &Url;

	/// Endpoint returning the resource owner profile for `token`.
	fn resource_owner_url(&self, token: &AccessToken) -> &Url;

	/// Scopes requested when the caller does not pick any.
	fn default_scopes(&self) -> &[&'static str];

	/// Separator used when joining scopes into the `scope` parameter.
	fn scope_separator(&self) -> &str {
		" "
	}

	/// Headers that authenticate a request with `token`.
	fn authorization_headers(&self, token: Option<&str>) -> AuthorizationHeaders;

	/// Fails when the decoded response carries a provider error.
	fn check_response(&self, data: &Value) -> Result<(), IdentityProviderError>;

	/// Wraps a decoded profile object.
	fn create_resource_owner(&self, data: Map<String, Value>) -> Self::Owner;

	/// Token response field that names the resource owner, if the provider sends one.
	fn access_token_resource_owner_id(&self) -> Option<&str> {
		None
	}

	/// Builds the full authorize URL for `request`.
	fn get_authorization_url(&self, request: &AuthorizationRequest) -> Url {
		request.build_url(self.authorization_url(), self.default_scopes(), self.scope_separator())
	}

	/// Decodes a token endpoint response body into an [`AccessToken`].
	fn parse_access_token(&self, body: &str) -> Result<AccessToken> {
		observe(ResponseKind::AccessToken, "parse_access_token", || {
			let data = checked_body(self, ResponseKind::AccessToken, body)?;

			AccessToken::from_response(data, self.access_token_resource_owner_id())
		})
	}

	/// Decodes a resource owner response body into [`Provider::Owner`].
	fn parse_resource_owner(&self, body: &str) -> Result<Self::Owner> {
		observe(ResponseKind::ResourceOwner, "parse_resource_owner", || {
			let data = checked_body(self, ResponseKind::ResourceOwner, body)?;

			Ok(self.create_resource_owner(data))
		})
	}
}

/// Decodes `body` as JSON, keeping the failing path on errors.
pub fn decode_body(body: &str) -> Result<Value> {
	let mut de = serde_json::Deserializer::from_str(body);

	Ok(serde_path_to_error::deserialize(&mut de)?)
}

fn checked_body<P>(provider: &P, kind: ResponseKind, body: &str) -> Result<Map<String, Value>>
where
	P: ?Sized + Provider,
{
	let data = decode_body(body)?;

	if let Err(e) = provider.check_response(&data) {
		obs::trace_identity_error(kind, &e);

		return Err(e.into());
	}

	match data {
		Value::Object(map) => Ok(map),
		_ => Err(Error::InvalidResponse),
	}
}

fn observe<T, F>(kind: ResponseKind, stage: &'static str, f: F) -> Result<T>
where
	F: FnOnce() -> Result<T>,
{
	let _guard = ResponseSpan::new(kind, stage).entered();
	let result = f();

	match &result {
		Ok(_) => obs::record_response_outcome(kind, ResponseOutcome::Success),
		Err(_) => obs::record_response_outcome(kind, ResponseOutcome::Failure),
	}

	result
}
