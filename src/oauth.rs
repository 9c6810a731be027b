//! Bridge into the `oauth2` crate, which drives the authorization-code exchange itself.
//!
//! [`Braincube::oauth2_client`] produces a [`BraincubeClient`] whose authorize and token
//! URLs come from the resolved endpoint set. Client credentials travel in the request body,
//! and [`AccessToken::from_oauth2`] maps the crate's token responses back into this crate's
//! token model.

pub use oauth2;

// crates.io
use oauth2::{
	AuthType, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl, Scope,
	TokenResponse, TokenUrl,
	basic::{BasicClient, BasicTokenResponse},
};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenSecret},
	error::ConfigError,
	provider::{Braincube, Provider, TokenParams},
};

/// `oauth2` client with the authorization and token endpoints configured.
pub type BraincubeClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

impl Braincube {
	/// Builds an `oauth2` client from the configured credentials and resolved endpoints.
	pub fn oauth2_client(&self) -> Result<BraincubeClient> {
		let options = self.options();
		let client_id = options.client_id().ok_or(ConfigError::MissingClientId)?;
		let mut client = BasicClient::new(ClientId::new(client_id.to_owned()))
			.set_auth_uri(AuthUrl::from_url(self.authorization_url().clone()))
			.set_token_uri(TokenUrl::from_url(self.token_url(&TokenParams::new()).clone()))
			.set_auth_type(AuthType::RequestBody);

		if let Some(secret) = options.client_secret() {
			client = client.set_client_secret(ClientSecret::new(secret.to_owned()));
		}
		if let Some(redirect) = options.redirect_url()? {
			client = client.set_redirect_uri(RedirectUrl::from_url(redirect));
		}

		Ok(client)
	}

	/// Default scopes as `oauth2` [`Scope`] values.
	pub fn oauth2_scopes(&self) -> Vec<Scope> {
		self.default_scopes().iter().map(|scope| Scope::new((*scope).to_owned())).collect()
	}
}

impl AccessToken {
	/// Maps an `oauth2` token response into an [`AccessToken`].
	///
	/// The resource owner id stays empty; Braincube never embeds identity in token responses.
	pub fn from_oauth2(response: &BasicTokenResponse) -> Self {
		let expires_at = response.expires_in().and_then(|lifetime| {
			let seconds = i64::try_from(lifetime.as_secs()).ok()?;

			OffsetDateTime::now_utc().checked_add(Duration::seconds(seconds))
		});
		let mut token = AccessToken::new(response.access_token().secret().to_owned());

		token.refresh_token =
			response.refresh_token().map(|refresh| TokenSecret::new(refresh.secret().to_owned()));
		token.token_type = serde_json::to_value(response.token_type())
			.ok()
			.and_then(|value| value.as_str().map(str::to_owned));
		token.expires_at = expires_at;

		token
	}
}
