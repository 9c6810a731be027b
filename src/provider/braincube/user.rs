// self
use crate::{_prelude::*, provider::ResourceOwner};

const USER_EMAIL: &str = "userEmail";
const USER_FULL_NAME: &str = "userFullName";
const ALLOWED_PRODUCTS: &str = "allowedProducts";

/// Braincube product the user may access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedProduct {
	/// Product identifier (a UUID string).
	pub id: String,
	/// Product display name.
	pub name: String,
}

/// Authenticated Braincube user.
///
/// Braincube exposes no opaque user id: the e-mail address doubles as the identifier, so
/// [`BraincubeUser::id`] and [`BraincubeUser::email`] read the same attribute. Accessors
/// never fail; missing or non-string attributes yield `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BraincubeUser {
	data: Map<String, Value>,
}
impl BraincubeUser {
	/// Wraps a decoded profile object.
	pub fn new(data: Map<String, Value>) -> Self {
		Self { data }
	}

	/// User identifier (the e-mail address).
	pub fn id(&self) -> Option<&str> {
		self.str_field(USER_EMAIL)
	}

	/// User e-mail address.
	pub fn email(&self) -> Option<&str> {
		self.str_field(USER_EMAIL)
	}

	/// User full name.
	pub fn full_name(&self) -> Option<&str> {
		self.str_field(USER_FULL_NAME)
	}

	/// Raw `allowedProducts` attribute, whatever its shape.
	pub fn allowed_products(&self) -> Option<&Value> {
		self.field(ALLOWED_PRODUCTS)
	}

	/// `allowedProducts` entries that carry a string `id` and `name`.
	pub fn products(&self) -> Vec<AllowedProduct> {
		self.allowed_products()
			.and_then(Value::as_array)
			.map(Vec::as_slice)
			.unwrap_or_default()
			.iter()
			.filter_map(|entry| AllowedProduct::deserialize(entry).ok())
			.collect()
	}

	/// Every attribute returned by the provider.
	pub fn to_map(&self) -> &Map<String, Value> {
		&self.data
	}

	/// Consumes the user and returns the attribute map.
	pub fn into_map(self) -> Map<String, Value> {
		self.data
	}

	/// Looks up any attribute by key.
	pub fn field(&self, key: &str) -> Option<&Value> {
		self.data.get(key)
	}

	fn str_field(&self, key: &str) -> Option<&str> {
		self.field(key).and_then(Value::as_str)
	}
}
impl ResourceOwner for BraincubeUser {
	fn id(&self) -> Option<&str> {
		BraincubeUser::id(self)
	}

	fn to_map(&self) -> &Map<String, Value> {
		BraincubeUser::to_map(self)
	}
}
impl From<Map<String, Value>> for BraincubeUser {
	fn from(data: Map<String, Value>) -> Self {
		Self::new(data)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn user(value: Value) -> BraincubeUser {
		serde_json::from_value(value).expect("Profile fixture should be a JSON object.")
	}

	#[test]
	fn getters_read_the_documented_keys() {
		let user = user(json!({
			"id": "foo@bar.com",
			"userEmail": "foo@bar.com",
			"userFullName": "Foo Bar",
			"allowedProducts": [{ "id": "cbf23eb1-dc44-4658-a439-fb3227713e05", "name": "demo" }]
		}));

		assert_eq!(user.id(), Some("foo@bar.com"));
		assert_eq!(user.email(), Some("foo@bar.com"));
		assert_eq!(user.full_name(), Some("Foo Bar"));
		assert_eq!(
			user.allowed_products(),
			Some(&json!([{ "id": "cbf23eb1-dc44-4658-a439-fb3227713e05", "name": "demo" }]))
		);
		assert_eq!(
			user.products(),
			vec![AllowedProduct {
				id: "cbf23eb1-dc44-4658-a439-fb3227713e05".into(),
				name: "demo".into(),
			}]
		);
		assert_eq!(user.to_map().len(), 4);
	}

	#[test]
	fn missing_attributes_yield_none() {
		let user = user(json!({ "userEmail": "foo@bar.com" }));

		assert_eq!(user.full_name(), None);
		assert_eq!(user.allowed_products(), None);
		assert!(user.products().is_empty());
		assert_eq!(ResourceOwner::id(&user), Some("foo@bar.com"));
	}

	#[test]
	fn malformed_products_are_skipped_by_the_typed_view() {
		let user = user(json!({
			"allowedProducts": [{ "id": "p1", "name": "demo" }, { "id": 3 }, "loose"]
		}));

		assert_eq!(user.allowed_products().and_then(Value::as_array).map(Vec::len), Some(3));
		assert_eq!(user.products().len(), 1);
	}

	#[test]
	fn non_array_products_are_returned_as_is() {
		let user = user(json!({ "allowedProducts": { "id": "x" } }));

		assert_eq!(user.allowed_products(), Some(&json!({ "id": "x" })));
		assert!(user.products().is_empty());
	}
}
