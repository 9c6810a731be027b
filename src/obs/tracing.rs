// self
use crate::{_prelude::*, error::IdentityProviderError, obs::ResponseKind};

/// A span builder used around response decoding.
#[derive(Clone, Debug)]
pub struct ResponseSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResponseSpan {
	/// Creates a new span tagged with the provided response kind + stage.
	pub fn new(kind: ResponseKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::debug_span!("oauth2_braincube.response", response = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> ResponseSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ResponseSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ResponseSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ResponseSpan::entered`].
pub struct ResponseSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ResponseSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ResponseSpanGuard(..)")
	}
}

/// Emits a `debug` event for a provider-reported error. The response body is not logged.
pub fn trace_identity_error(kind: ResponseKind, error: &IdentityProviderError) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			response = kind.as_str(),
			code = error.code,
			error = %error.message,
			"provider reported an error"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}
