use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for both façades.
///
/// Expected absence (a product not present in the cart, an empty result
/// list) is never an error; it surfaces as `Ok(None)` or an empty
/// collection from the operation itself.
#[derive(Debug, Error)]
pub enum Error {
	/// The auth bootstrap produced no usable bearer token.
	#[error("authentication failed: {0}")]
	Auth(String),

	/// Transport-level failure during a cart operation.
	#[error("cart request failed during {context}")]
	Transport {
		context: &'static str,
		#[source]
		source: reqwest::Error,
	},

	/// The cart API answered with a non-success status.
	#[error("cart API returned status {status} for {context}")]
	Api { context: &'static str, status: u16 },

	/// A bounded UI wait expired before its condition held.
	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	/// The browser process could not be configured or started.
	#[error("browser launch failed: {0}")]
	BrowserLaunch(String),

	#[error(transparent)]
	Browser(#[from] chromiumoxide::error::CdpError),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// True for the timeout produced when a wait condition never held.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Error::Timeout { .. })
	}
}
