//! Braincube SSO server adapter.

/// Endpoint templates resolved from the base URL.
pub mod endpoints;
/// Provider configuration.
pub mod options;
/// Resource owner profile.
pub mod user;

pub use endpoints::*;
pub use options::*;
pub use user::*;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, IdentityProviderError},
	provider::{
		AuthorizationHeaders, AuthorizationRequest, Provider, TokenParams, check_error_envelope,
	},
};

/// Braincube provider.
///
/// Endpoint URLs are resolved once, at construction, against the configured base URL
/// (or [`DEFAULT_BASE_URL`]) and never change afterwards.
#[derive(Clone, Debug)]
pub struct Braincube {
	options: BraincubeOptions,
	endpoints: BraincubeEndpoints,
}
impl Braincube {
	const DEFAULT_SCOPES: [&'static str; 2] = ["api", "base"];

	/// Creates the provider, substituting [`DEFAULT_BASE_URL`] when no base URL is configured.
	pub fn new(mut options: BraincubeOptions) -> Result<Self> {
		let base_url = match options.base_braincube_url.take() {
			Some(url) if !url.is_empty() => url,
			_ => DEFAULT_BASE_URL.to_owned(),
		};
		let endpoints = BraincubeEndpoints::resolve(&base_url)?;

		options.base_braincube_url = Some(base_url);

		Ok(Self { options, endpoints })
	}

	/// Base URL every endpoint was resolved against.
	pub fn base_url(&self) -> &str {
		self.options.base_braincube_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
	}

	/// Options the provider was built from, with the base URL filled in.
	pub fn options(&self) -> &BraincubeOptions {
		&self.options
	}

	/// Resolved endpoint set.
	pub fn endpoints(&self) -> &BraincubeEndpoints {
		&self.endpoints
	}

	/// Starts an [`AuthorizationRequest`] from the configured client id and redirect URI.
	pub fn authorization_request(&self, state: impl Into<String>) -> Result<AuthorizationRequest> {
		let client_id = self.options.client_id().ok_or(ConfigError::MissingClientId)?;
		let mut request = AuthorizationRequest::new(client_id, state);

		if let Some(redirect_uri) = self.options.redirect_url()? {
			request = request.with_redirect_uri(redirect_uri);
		}

		Ok(request)
	}
}
impl Provider for Braincube {
	type Owner = BraincubeUser;

	fn authorization_url(&self) -> &Url {
		&self.endpoints.authorization
	}

	fn token_url(&self, _params: &TokenParams) -> &Url {
		&self.endpoints.token
	}

	fn resource_owner_url(&self, _token: &AccessToken) -> &Url {
		&self.endpoints.resource_owner
	}

	fn default_scopes(&self) -> &[&'static str] {
		&Self::DEFAULT_SCOPES
	}

	fn scope_separator(&self) -> &str {
		" "
	}

	fn authorization_headers(&self, token: Option<&str>) -> AuthorizationHeaders {
		let value = format!("Bearer {}", token.unwrap_or_default());

		BTreeMap::from([("Authorization".to_owned(), value)])
	}

	fn check_response(&self, data: &Value) -> Result<(), IdentityProviderError> {
		check_error_envelope(data)
	}

	fn create_resource_owner(&self, data: Map<String, Value>) -> Self::Owner {
		BraincubeUser::new(data)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn provider() -> Braincube {
		Braincube::new(BraincubeOptions::default()).expect("Default options should build.")
	}

	#[test]
	fn endpoints_resolve_against_the_default_base() {
		let provider = provider();

		assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
		assert_eq!(
			provider.authorization_url().as_str(),
			"https://mybraincube.com/sso-server/vendors/braincube/authorize.jsp"
		);
		assert_eq!(
			provider.token_url(&TokenParams::new()).as_str(),
			"https://mybraincube.com/sso-server/ws/oauth2/token"
		);
		assert_eq!(
			provider.resource_owner_url(&AccessToken::new("t")).as_str(),
			"https://mybraincube.com/sso-server/ws/oauth2/me"
		);
	}

	#[test]
	fn empty_base_url_falls_back_to_the_default() {
		let provider = Braincube::new(BraincubeOptions::default().with_base_braincube_url(""))
			.expect("Empty base URL should fall back to the default.");

		assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
		assert_eq!(provider.options().base_braincube_url.as_deref(), Some(DEFAULT_BASE_URL));
	}

	#[test]
	fn zero_base_url_is_not_treated_as_empty() {
		let err = Braincube::new(BraincubeOptions::default().with_base_braincube_url("0"))
			.expect_err("A bare `0` is not an absolute base URL.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidBaseUrl { ref url, .. }) if url == "0"
		));
	}

	#[test]
	fn custom_base_url_is_used_verbatim() {
		let options =
			BraincubeOptions::default().with_base_braincube_url("https://sso.example.com/braincube");
		let provider = Braincube::new(options).expect("Custom base URL should build.");

		assert_eq!(
			provider.token_url(&TokenParams::new()).as_str(),
			"https://sso.example.com/braincube/ws/oauth2/token"
		);
	}

	#[test]
	fn headers_and_scopes_are_static() {
		let provider = provider();
		let headers = provider.authorization_headers(Some("mock_access_token"));

		assert_eq!(headers.len(), 1);
		assert_eq!(
			headers.get("Authorization").map(String::as_str),
			Some("Bearer mock_access_token")
		);
		assert_eq!(
			provider.authorization_headers(None).get("Authorization").map(String::as_str),
			Some("Bearer ")
		);
		assert_eq!(provider.default_scopes(), &["api", "base"]);
		assert_eq!(provider.scope_separator(), " ");
	}

	#[test]
	fn authorization_request_requires_a_client_id() {
		let err = provider()
			.authorization_request("state")
			.expect_err("Missing client id should be reported.");

		assert!(matches!(err, Error::Config(ConfigError::MissingClientId)));

		let provider = Braincube::new(
			BraincubeOptions::default()
				.with_client_id("mock_client_id")
				.with_redirect_uri("https://app.example.com/callback"),
		)
		.expect("Options should build.");
		let request =
			provider.authorization_request("state").expect("Configured client should build.");

		assert_eq!(request.client_id, "mock_client_id");
		assert_eq!(
			request.redirect_uri.as_ref().map(Url::as_str),
			Some("https://app.example.com/callback")
		);
	}
}
