//! End-to-end test façades for a third-party bookshop.
//!
//! Two independent, stateful façades over external systems, each owned and
//! driven by the test that constructs it:
//!
//! - [`CartSession`] authenticates once against the shop's API gateway and
//!   exposes cart mutations and queries over HTTP.
//! - [`UiSession`] / [`SearchPage`] drive a real browser over the Chrome
//!   DevTools Protocol and extract rendered search results from the DOM.
//!
//! Neither façade depends on the other. Both return [`Result`] values up to
//! the test boundary; there is no retry policy and no global state.

pub mod cart;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod wait;

pub use bookshop_protocol::{Cart, CartLine, CartLineId, ProductId, endpoints};
pub use cart::CartSession;
pub use config::ShopConfig;
pub use error::{Error, Result};
pub use search::{SearchOutcome, SearchPage, UiSession};
pub use wait::WaitPolicy;
