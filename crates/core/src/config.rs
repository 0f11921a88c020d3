//! Configuration for both façades.
//!
//! Defaults point at the real shop; tests against a scripted service swap
//! the URLs in, tests that need a visible browser flip `headless` off.

use bookshop_protocol::endpoints;
use url::Url;

use crate::wait::WaitPolicy;

/// Explicit configuration handed to [`CartSession`](crate::CartSession) and
/// [`UiSession`](crate::UiSession) at construction.
#[derive(Debug, Clone)]
pub struct ShopConfig {
	/// Public storefront root, used for UI navigation and auth bootstrap.
	pub site_url: Url,
	/// Base of the API gateway the cart façade talks to.
	pub api_url: Url,
	/// Whether the browser runs without a visible window.
	pub headless: bool,
	/// Bounded-poll policy for asynchronous UI states.
	pub wait: WaitPolicy,
}

impl Default for ShopConfig {
	fn default() -> Self {
		Self {
			site_url: Url::parse(endpoints::SITE_URL).expect("static site URL parses"),
			api_url: Url::parse(endpoints::API_URL).expect("static API URL parses"),
			headless: true,
			wait: WaitPolicy::default(),
		}
	}
}

impl ShopConfig {
	/// Points both URLs at another host, keeping the endpoint paths.
	///
	/// Used by tests that script the remote service locally.
	pub fn with_base(site_url: Url, api_url: Url) -> Self {
		Self {
			site_url,
			api_url,
			..Self::default()
		}
	}

	/// Sets the wait policy.
	pub fn wait(mut self, wait: WaitPolicy) -> Self {
		self.wait = wait;
		self
	}

	/// Sets whether the browser runs headless.
	pub fn headless(mut self, headless: bool) -> Self {
		self.headless = headless;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_point_at_the_live_shop() {
		let config = ShopConfig::default();
		assert_eq!(config.site_url.as_str(), "https://www.chitai-gorod.ru/");
		assert_eq!(config.api_url.as_str(), "https://web-gate.chitai-gorod.ru/api/v1");
		assert!(config.headless);
		assert_eq!(config.wait.timeout.as_secs(), 60);
	}

	#[test]
	fn with_base_keeps_wait_defaults() {
		let site = Url::parse("http://127.0.0.1:9000/").unwrap();
		let api = Url::parse("http://127.0.0.1:9000/api/v1").unwrap();
		let config = ShopConfig::with_base(site.clone(), api.clone());
		assert_eq!(config.site_url, site);
		assert_eq!(config.api_url, api);
		assert_eq!(config.wait.timeout, WaitPolicy::default().timeout);
	}
}
