//! [`CartSession`] - authenticated façade over the remote cart API.
//!
//! The shop hands out a bearer token as a cookie on the storefront root;
//! [`CartSession::connect`] performs that bootstrap once, then every cart
//! operation reuses the token from the client's default headers. Failures
//! propagate as [`Error`](crate::Error) values to the test boundary, which
//! decides pass/fail; the façade itself never aborts.

use bookshop_protocol::{AddItemRequest, Cart, CartLineId, ProductId, RestoreItemRequest, endpoints};
use reqwest::Response;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, SET_COOKIE, USER_AGENT};
use tracing::debug;

use crate::config::ShopConfig;
use crate::error::{Error, Result};

/// Browser-like identity; the gateway rejects clients without one.
const USER_AGENT_VALUE: &str =
	"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Stateful session against the remote cart API.
///
/// Constructed explicitly per test run and passed to each test case; the
/// bearer token lives in the client's default headers for the session's
/// lifetime. Cart entries themselves are remote-side state, the session
/// keeps no local bookkeeping.
#[derive(Debug, Clone)]
pub struct CartSession {
	client: reqwest::Client,
	api_base: String,
}

impl CartSession {
	/// Bootstraps authentication and returns a ready session.
	///
	/// Issues a GET to the storefront root, extracts the bearer token from
	/// the `access-token` response cookie, and bakes it into the default
	/// headers of a fresh client. A missing or malformed cookie is an
	/// [`Error::Auth`]; the token is non-empty by construction.
	pub async fn connect(config: &ShopConfig) -> Result<Self> {
		let bootstrap = client_with_headers(base_headers())?;

		let response = bootstrap
			.get(config.site_url.clone())
			.send()
			.await
			.map_err(|source| Error::Transport {
				context: "auth bootstrap",
				source,
			})?;

		let token = bearer_token(response.headers())
			.ok_or_else(|| Error::Auth(format!("no usable `{}` cookie on {}", endpoints::AUTH_COOKIE, config.site_url)))?;

		let mut headers = base_headers();
		let authorization = HeaderValue::from_str(&format!("Bearer {token}"))
			.map_err(|_| Error::Auth("token contains non-header characters".to_string()))?;
		headers.insert(AUTHORIZATION, authorization);

		debug!(site = %config.site_url, "cart session authenticated");

		Ok(Self {
			client: client_with_headers(headers)?,
			api_base: config.api_url.as_str().trim_end_matches('/').to_string(),
		})
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.api_base, path)
	}

	/// Adds a product to the cart by its catalog id.
	pub async fn add_product(&self, product: ProductId) -> Result<()> {
		debug!(%product, "adding product to cart");

		let response = self
			.client
			.post(self.endpoint(endpoints::PRODUCT))
			.json(&AddItemRequest::new(product))
			.send()
			.await
			.map_err(|source| Error::Transport {
				context: "add product",
				source,
			})?;

		check_status("add product", &response)
	}

	/// Deletes a cart line by its service-assigned id.
	pub async fn delete_product(&self, line: CartLineId) -> Result<()> {
		debug!(%line, "deleting cart line");

		let response = self
			.client
			.delete(format!("{}/{}", self.endpoint(endpoints::PRODUCT), line))
			.send()
			.await
			.map_err(|source| Error::Transport {
				context: "delete product",
				source,
			})?;

		check_status("delete product", &response)
	}

	/// Restores a previously deleted cart line.
	pub async fn restore_product(&self, line: CartLineId) -> Result<()> {
		debug!(%line, "restoring cart line");

		let response = self
			.client
			.post(self.endpoint(endpoints::PRODUCT_RESTORE))
			.json(&RestoreItemRequest { product_id: line })
			.send()
			.await
			.map_err(|source| Error::Transport {
				context: "restore product",
				source,
			})?;

		check_status("restore product", &response)
	}

	/// Fetches the full cart contents.
	pub async fn cart(&self) -> Result<Cart> {
		let response = self
			.client
			.get(self.endpoint(endpoints::CART))
			.send()
			.await
			.map_err(|source| Error::Transport {
				context: "get cart",
				source,
			})?;

		check_status("get cart", &response)?;

		response.json::<Cart>().await.map_err(|source| Error::Transport {
			context: "decode cart body",
			source,
		})
	}

	/// Resolves the cart-line id holding the given catalog id.
	///
	/// Re-fetches the cart and scans it; `Ok(None)` means the product is
	/// not in the cart, which is an expected outcome rather than an error.
	pub async fn resolve_cart_line(&self, product: ProductId) -> Result<Option<CartLineId>> {
		let cart = self.cart().await?;
		let line = cart.line_for(product).map(|line| line.id);
		debug!(%product, ?line, "resolved cart line");
		Ok(line)
	}

	/// Deletes all cart contents.
	pub async fn clear_cart(&self) -> Result<()> {
		debug!("clearing cart");

		let response = self
			.client
			.delete(self.endpoint(endpoints::CART))
			.send()
			.await
			.map_err(|source| Error::Transport {
				context: "clear cart",
				source,
			})?;

		check_status("clear cart", &response)
	}
}

fn base_headers() -> HeaderMap {
	let mut headers = HeaderMap::new();
	headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
	headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
	headers
}

fn client_with_headers(headers: HeaderMap) -> Result<reqwest::Client> {
	reqwest::Client::builder()
		.default_headers(headers)
		.build()
		.map_err(|source| Error::Transport {
			context: "build http client",
			source,
		})
}

fn check_status(context: &'static str, response: &Response) -> Result<()> {
	let status = response.status();
	if status.is_success() {
		Ok(())
	} else {
		Err(Error::Api {
			context,
			status: status.as_u16(),
		})
	}
}

/// Extracts the bearer token from the response's `Set-Cookie` headers.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
	headers
		.get_all(SET_COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.find_map(token_from_set_cookie)
		.map(str::to_string)
}

/// Parses one `Set-Cookie` value, returning the token without its fixed
/// `Bearer%20` prefix. Empty tokens count as absent.
fn token_from_set_cookie(raw: &str) -> Option<&str> {
	let rest = raw.strip_prefix(endpoints::AUTH_COOKIE)?.strip_prefix('=')?;
	let value = rest.split(';').next()?.trim();
	let token = value.strip_prefix(endpoints::AUTH_COOKIE_PREFIX)?;
	(!token.is_empty()).then_some(token)
}
