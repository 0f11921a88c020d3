//! Request and response bodies for the remote cart service.
//!
//! The service distinguishes two identifier spaces: the stable catalog id a
//! caller supplies when adding an item ([`ProductId`], wire name `goodsId`
//! inside cart lines), and the id the service assigns to the inserted line
//! ([`CartLineId`], wire name `id`), which delete and restore operate on.

use serde::{Deserialize, Serialize};

/// Stable catalog identifier of a product, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Identifier the cart service assigns to an inserted line.
///
/// Required for delete and restore; there is no local cache of the
/// catalog-id → cart-line-id mapping, it is re-derived from the cart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLineId(pub u64);

impl std::fmt::Display for ProductId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for CartLineId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Body of the product-add request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
	/// Catalog id of the product to insert.
	pub id: ProductId,
	/// Analytics context the site attaches to every add.
	#[serde(rename = "adData")]
	pub ad_data: AdData,
}

impl AddItemRequest {
	/// Builds the add body with the fixed `product-page` context tag.
	pub fn new(id: ProductId) -> Self {
		Self {
			id,
			ad_data: AdData {
				item_list_name: "product-page".to_string(),
			},
		}
	}
}

/// Analytics context attached to add requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdData {
	/// Name of the listing the add originated from.
	pub item_list_name: String,
}

/// Body of the product-restore request, referencing a previously deleted line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreItemRequest {
	/// Cart-line id assigned by the service on the original insert.
	#[serde(rename = "productId")]
	pub product_id: CartLineId,
}

/// Cart collection as returned by the service.
///
/// Unknown fields in the body are ignored; a body without a `products`
/// field deserializes to an empty cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
	/// Lines currently in the cart, in service order.
	#[serde(default)]
	pub products: Vec<CartLine>,
}

impl Cart {
	/// Finds the line holding the given catalog id.
	///
	/// Linear scan; carts are small enough that indexing would be noise.
	pub fn line_for(&self, product: ProductId) -> Option<&CartLine> {
		self.products.iter().find(|line| line.goods_id == product)
	}

	/// True when the cart holds no lines.
	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}
}

/// One inserted line inside the cart body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
	/// Service-assigned cart-line id.
	pub id: CartLineId,
	/// Catalog id of the product this line holds.
	#[serde(rename = "goodsId")]
	pub goods_id: ProductId,
	/// Number of copies in the line.
	#[serde(default)]
	pub quantity: u32,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn add_request_wire_shape() {
		let body = AddItemRequest::new(ProductId(2968841));
		let value = serde_json::to_value(&body).unwrap();
		assert_eq!(
			value,
			json!({
				"id": 2968841,
				"adData": { "item_list_name": "product-page" }
			})
		);
	}

	#[test]
	fn restore_request_wire_shape() {
		let body = RestoreItemRequest {
			product_id: CartLineId(133712345),
		};
		let value = serde_json::to_value(&body).unwrap();
		assert_eq!(value, json!({ "productId": 133712345 }));
	}

	#[test]
	fn cart_deserializes_with_extra_fields() {
		let cart: Cart = serde_json::from_value(json!({
			"products": [
				{ "id": 133712345, "goodsId": 2968841, "quantity": 1, "price": 599 },
				{ "id": 133712346, "goodsId": 2968842 }
			],
			"cost": { "total": 599 }
		}))
		.unwrap();

		assert_eq!(cart.products.len(), 2);
		assert_eq!(cart.products[0].id, CartLineId(133712345));
		assert_eq!(cart.products[1].quantity, 0);
	}

	#[test]
	fn cart_without_products_field_is_empty() {
		let cart: Cart = serde_json::from_value(json!({})).unwrap();
		assert!(cart.is_empty());
	}

	#[test]
	fn line_for_finds_matching_catalog_id() {
		let cart: Cart = serde_json::from_value(json!({
			"products": [
				{ "id": 1001, "goodsId": 42 },
				{ "id": 1002, "goodsId": 43 }
			]
		}))
		.unwrap();

		assert_eq!(cart.line_for(ProductId(43)).map(|l| l.id), Some(CartLineId(1002)));
		assert!(cart.line_for(ProductId(44)).is_none());
	}
}
