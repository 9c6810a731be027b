// self
use crate::{_prelude::*, error::ConfigError};

/// Configuration bag accepted by [`Braincube::new`](super::Braincube::new).
///
/// Keys deserialize from camelCase (`clientId`, `baseBraincubeUrl`, ...) as well as
/// snake_case. Every field is optional; only the base URL is needed to resolve endpoints.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BraincubeOptions {
	/// OAuth 2.0 client identifier.
	#[serde(alias = "client_id")]
	pub client_id: Option<String>,
	/// OAuth 2.0 client secret for confidential clients.
	#[serde(alias = "client_secret")]
	pub client_secret: Option<String>,
	/// Redirect URI registered for the client.
	#[serde(alias = "redirect_uri")]
	pub redirect_uri: Option<String>,
	/// Base Braincube SSO server URL; empty or missing selects the public server.
	#[serde(alias = "base_braincube_url")]
	pub base_braincube_url: Option<String>,
}
impl BraincubeOptions {
	/// Sets the client identifier.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the client secret.
	pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Sets the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Sets the base Braincube URL.
	pub fn with_base_braincube_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_braincube_url = Some(base_url.into());

		self
	}

	/// Non-empty client identifier.
	pub fn client_id(&self) -> Option<&str> {
		non_empty(self.client_id.as_deref())
	}

	/// Non-empty client secret.
	pub fn client_secret(&self) -> Option<&str> {
		non_empty(self.client_secret.as_deref())
	}

	/// Parsed redirect URI, if one is configured.
	pub fn redirect_url(&self) -> Result<Option<Url>, ConfigError> {
		non_empty(self.redirect_uri.as_deref())
			.map(|raw| Url::parse(raw).map_err(|source| ConfigError::InvalidRedirect { source }))
			.transpose()
	}
}
impl Debug for BraincubeOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BraincubeOptions")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.field("base_braincube_url", &self.base_braincube_url)
			.finish()
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn camel_and_snake_case_keys_deserialize() {
		let camel: BraincubeOptions = serde_json::from_str(
			r#"{"clientId":"mock_client_id","clientSecret":"mock_secret","redirectUri":"none"}"#,
		)
		.expect("camelCase options should deserialize.");
		let snake: BraincubeOptions = serde_json::from_str(
			r#"{"client_id":"mock_client_id","client_secret":"mock_secret","redirect_uri":"none"}"#,
		)
		.expect("snake_case options should deserialize.");

		assert_eq!(camel, snake);
		assert_eq!(camel.client_id(), Some("mock_client_id"));
		assert!(camel.base_braincube_url.is_none());
	}

	#[test]
	fn debug_hides_the_client_secret() {
		let options = BraincubeOptions::default().with_client_secret("mock_secret");

		assert!(!format!("{options:?}").contains("mock_secret"));
		assert_eq!(options.client_secret(), Some("mock_secret"));
	}

	#[test]
	fn redirect_uri_is_parsed_on_demand() {
		let options = BraincubeOptions::default().with_redirect_uri("none");

		assert!(matches!(options.redirect_url(), Err(ConfigError::InvalidRedirect { .. })));

		let options = BraincubeOptions::default().with_redirect_uri("");

		assert!(matches!(options.redirect_url(), Ok(None)));
	}
}
