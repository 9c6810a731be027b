//! Scope lists and token models shared by the provider and the oauth2 bridge.

pub mod scope;
pub mod token;

pub use scope::*;
pub use token::*;
