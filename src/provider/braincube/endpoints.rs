// self
use crate::{_prelude::*, error::ConfigError};

/// Base URL used when the options do not name one.
pub const DEFAULT_BASE_URL: &str = "https://mybraincube.com/sso-server";
/// Authorization endpoint path, relative to the base URL.
pub const AUTHORIZE_PATH: &str = "/vendors/braincube/authorize.jsp";
/// Token endpoint path, relative to the base URL.
pub const TOKEN_PATH: &str = "/ws/oauth2/token";
/// Resource owner endpoint path, relative to the base URL.
pub const RESOURCE_OWNER_PATH: &str = "/ws/oauth2/me";

/// Endpoint set resolved from a Braincube base URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BraincubeEndpoints {
	/// Authorization endpoint used by the Authorization Code flow.
	pub authorization: Url,
	/// Token endpoint used for code exchanges and refreshes.
	pub token: Url,
	/// Endpoint returning the authenticated user's profile.
	pub resource_owner: Url,
}
impl BraincubeEndpoints {
	/// Appends the fixed endpoint paths to `base_url`.
	///
	/// The paths are appended as text rather than resolved as relative references, so a base
	/// path such as `/sso-server` is kept. A single trailing `/` on the base is dropped first.
	pub fn resolve(base_url: &str) -> Result<Self, ConfigError> {
		let base = base_url.strip_suffix('/').unwrap_or(base_url);

		Ok(Self {
			authorization: join(base, AUTHORIZE_PATH)?,
			token: join(base, TOKEN_PATH)?,
			resource_owner: join(base, RESOURCE_OWNER_PATH)?,
		})
	}
}

fn join(base: &str, path: &str) -> Result<Url, ConfigError> {
	Url::parse(&format!("{base}{path}"))
		.map_err(|source| ConfigError::InvalidBaseUrl { url: base.to_owned(), source })
}
