//! Authorize URL assembly.

// self
use crate::{_prelude::*, auth::ScopeList};

/// Parameters of an authorization-code redirect.
///
/// The caller owns `state`: generate it, keep it, and compare it when the provider redirects
/// back. Scopes fall back to the provider's defaults when left unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Opaque anti-CSRF value that must round-trip via the redirect handler.
	pub state: String,
	/// Redirect URI registered for the client.
	pub redirect_uri: Option<Url>,
	/// Requested scopes; `None` or an empty list selects the provider defaults.
	pub scopes: Option<ScopeList>,
	/// Value of the `approval_prompt` parameter.
	pub approval_prompt: String,
	/// Additional query parameters appended last.
	pub extra_params: BTreeMap<String, String>,
}
impl AuthorizationRequest {
	const DEFAULT_APPROVAL_PROMPT: &'static str = "auto";

	/// Creates a request for `client_id` carrying the caller-generated `state`.
	pub fn new(client_id: impl Into<String>, state: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			state: state.into(),
			redirect_uri: None,
			scopes: None,
			approval_prompt: Self::DEFAULT_APPROVAL_PROMPT.into(),
			extra_params: BTreeMap::new(),
		}
	}

	/// Sets the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}

	/// Overrides the requested scopes.
	pub fn with_scopes(mut self, scopes: ScopeList) -> Self {
		self.scopes = Some(scopes);

		self
	}

	/// Overrides the `approval_prompt` value (defaults to `auto`).
	pub fn with_approval_prompt(mut self, approval_prompt: impl Into<String>) -> Self {
		self.approval_prompt = approval_prompt.into();

		self
	}

	/// Adds an extra query parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra_params.insert(key.into(), value.into());

		self
	}

	pub(crate) fn build_url(
		&self,
		authorization_url: &Url,
		default_scopes: &[&str],
		separator: &str,
	) -> Url {
		let mut url = authorization_url.clone();
		let scope = match &self.scopes {
			Some(scopes) if !scopes.is_empty() => scopes.join(separator),
			_ => default_scopes.join(separator),
		};
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("state", &self.state);

		if !scope.is_empty() {
			pairs.append_pair("scope", &scope);
		}

		pairs.append_pair("response_type", "code");
		pairs.append_pair("approval_prompt", &self.approval_prompt);

		if let Some(redirect_uri) = &self.redirect_uri {
			pairs.append_pair("redirect_uri", redirect_uri.as_str());
		}

		pairs.append_pair("client_id", &self.client_id);

		for (key, value) in &self.extra_params {
			pairs.append_pair(key, value);
		}

		drop(pairs);

		url
	}
}
