//! Cart API scenarios against the live shop.
//!
//! These talk to the real gateway with a real bootstrap token, so they are
//! ignored by default; run them with `cargo test -- --ignored`. The same
//! properties run hermetically in `cart.rs`.

use bookshop::{CartSession, ProductId, ShopConfig, logging};
use tracing::info;

/// Fixed catalog id the scenarios operate on.
const PRODUCT: ProductId = ProductId(2968841);

async fn live_session() -> CartSession {
	logging::init();
	let session = CartSession::connect(&ShopConfig::default())
		.await
		.expect("auth bootstrap against the live shop");
	// Start every scenario from a known-empty cart.
	session.clear_cart().await.expect("clear cart");
	session
}

#[tokio::test]
#[ignore = "talks to the live shop API"]
async fn add_product_appears_in_cart() {
	let session = live_session().await;

	info!("checking the product is not in the cart yet");
	assert!(session.resolve_cart_line(PRODUCT).await.unwrap().is_none(), "product already in cart");

	info!("adding the product");
	session.add_product(PRODUCT).await.unwrap();

	info!("checking the product appeared");
	assert!(session.resolve_cart_line(PRODUCT).await.unwrap().is_some(), "product did not appear in cart");
}

#[tokio::test]
#[ignore = "talks to the live shop API"]
async fn delete_product_removes_cart_line() {
	let session = live_session().await;
	session.add_product(PRODUCT).await.unwrap();
	let line = session
		.resolve_cart_line(PRODUCT)
		.await
		.unwrap()
		.expect("product present before delete");

	info!(%line, "deleting the cart line");
	session.delete_product(line).await.unwrap();

	assert!(session.resolve_cart_line(PRODUCT).await.unwrap().is_none(), "product still in cart");
}

#[tokio::test]
#[ignore = "talks to the live shop API"]
async fn restore_returns_deleted_product() {
	let session = live_session().await;
	session.add_product(PRODUCT).await.unwrap();
	let line = session
		.resolve_cart_line(PRODUCT)
		.await
		.unwrap()
		.expect("product present before delete");

	session.delete_product(line).await.unwrap();
	assert!(session.resolve_cart_line(PRODUCT).await.unwrap().is_none(), "product still in cart");

	info!(%line, "restoring the cart line");
	session.restore_product(line).await.unwrap();

	assert!(session.resolve_cart_line(PRODUCT).await.unwrap().is_some(), "product did not come back");
}

#[tokio::test]
#[ignore = "talks to the live shop API"]
async fn cart_body_exposes_the_product_list() {
	let session = live_session().await;

	let cart = session.cart().await.unwrap();
	assert!(cart.is_empty(), "cart not empty after clear");
}

#[tokio::test]
#[ignore = "talks to the live shop API"]
async fn clear_cart_leaves_nothing_behind() {
	let session = live_session().await;
	session.add_product(PRODUCT).await.unwrap();
	assert!(session.resolve_cart_line(PRODUCT).await.unwrap().is_some(), "product missing before clear");

	info!("clearing the cart");
	session.clear_cart().await.unwrap();

	assert!(session.cart().await.unwrap().is_empty(), "products remained after clear");
}
