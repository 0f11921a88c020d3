//! Wire types for the bookshop cart API.
//!
//! This crate defines the request/response bodies exchanged with the remote
//! cart service, the identifier newtypes that keep catalog ids and
//! service-assigned cart-line ids from being mixed up, and the endpoint
//! path constants the façades build URLs from.
//!
//! # Main Types
//!
//! - [`ProductId`] / [`CartLineId`] - the two distinct identifier spaces
//! - [`AddItemRequest`] / [`RestoreItemRequest`] - mutation bodies
//! - [`Cart`] / [`CartLine`] - the cart collection as returned by the service

pub mod cart;
pub mod endpoints;

pub use cart::{AdData, AddItemRequest, Cart, CartLine, CartLineId, ProductId, RestoreItemRequest};
