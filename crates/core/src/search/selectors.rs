//! CSS class selectors for the shop's search UI.
//!
//! The site exposes no test ids, so these track its BEM class names; a
//! frontend redeploy that renames them breaks the UI suite here first.

/// Text input of the header search form.
pub const SEARCH_INPUT: &str = ".search-form__input";

/// Submit control of the header search form.
pub const SEARCH_BUTTON: &str = ".search-form__button-search";

/// Container holding the result cards after a successful search.
pub const CATALOG: &str = ".app-catalog__content";

/// Book title inside a result card.
pub const PRODUCT_TITLE: &str = ".product-card__title";

/// Author line inside a result card.
pub const PRODUCT_SUBTITLE: &str = ".product-card__subtitle";

/// Stub shown when a search yields no matches.
pub const EMPTY_STATE: &str = ".catalog-stub";

/// Human-readable message inside the stub.
pub const EMPTY_STATE_TITLE: &str = ".catalog-stub__title";
