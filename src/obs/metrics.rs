// self
use crate::obs::{ResponseKind, ResponseOutcome};

/// Records a response outcome via the global metrics recorder (when enabled).
pub fn record_response_outcome(kind: ResponseKind, outcome: ResponseOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_braincube_response_total",
			"response" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
