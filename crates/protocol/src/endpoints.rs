//! Endpoint locations and auth-cookie constants for the remote bookshop.

/// Public storefront, navigated for UI tests and for the auth bootstrap.
pub const SITE_URL: &str = "https://www.chitai-gorod.ru/";

/// API gateway the cart façade talks to.
pub const API_URL: &str = "https://web-gate.chitai-gorod.ru/api/v1";

/// Cart collection: GET the contents, DELETE to clear everything.
pub const CART: &str = "/cart";

/// Product resource: POST to add, DELETE `{PRODUCT}/{cart-line-id}` to remove.
pub const PRODUCT: &str = "/cart/product";

/// Restore endpoint for a previously deleted cart line.
pub const PRODUCT_RESTORE: &str = "/cart/product-restore";

/// Cookie the service sets on the storefront root, carrying the bearer token.
pub const AUTH_COOKIE: &str = "access-token";

/// Fixed prefix of the cookie value (`Bearer` plus a URL-encoded space),
/// stripped before the token is reused in an `Authorization` header.
pub const AUTH_COOKIE_PREFIX: &str = "Bearer%20";
