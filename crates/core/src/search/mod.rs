//! [`SearchPage`] - browser-driving façade over the shop's search UI.
//!
//! [`UiSession`] owns the browser process and its CDP event loop; tests
//! launch one per session, hand pages out to test cases, and close it at
//! the end. [`SearchPage`] wraps one tab plus a [`WaitPolicy`] and exposes
//! the navigation and DOM-extraction operations the search tests need.
//!
//! After a query is submitted the UI settles into one of two mutually
//! exclusive states: a results catalog or a no-results stub. Callers that
//! know which to expect await it directly; [`SearchPage::wait_for_outcome`]
//! races both and reports whichever renders first.

mod selectors;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::{Element, Page};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::ShopConfig;
use crate::error::{Error, Result};
use crate::wait::{WaitPolicy, poll_until};

/// Owns the browser process for the lifetime of a test session.
pub struct UiSession {
	browser: Browser,
	event_loop: JoinHandle<()>,
}

impl UiSession {
	/// Launches a browser according to the config.
	pub async fn launch(config: &ShopConfig) -> Result<Self> {
		let mut builder = BrowserConfig::builder().window_size(1920, 1080);
		if !config.headless {
			builder = builder.with_head();
		}
		let browser_config = builder.build().map_err(Error::BrowserLaunch)?;

		let (browser, mut handler) = Browser::launch(browser_config).await?;

		// CDP messages stop flowing if nobody drains the handler.
		let event_loop = tokio::spawn(async move { while handler.next().await.is_some() {} });

		debug!(headless = config.headless, "browser launched");

		Ok(Self { browser, event_loop })
	}

	/// Opens a new tab on the storefront and wraps it as a [`SearchPage`].
	pub async fn search_page(&self, config: &ShopConfig) -> Result<SearchPage> {
		let page = self.browser.new_page(config.site_url.as_str()).await?;
		Ok(SearchPage::new(page, config.wait))
	}

	/// Closes the browser and stops the event loop.
	pub async fn close(mut self) -> Result<()> {
		self.browser.close().await?;
		let _ = self.browser.wait().await;
		self.event_loop.abort();
		Ok(())
	}
}

/// Which of the two post-search UI states rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
	/// The results catalog is present.
	Results,
	/// The no-results stub is present.
	Empty,
}

/// One browser tab on the shop, plus the wait policy for its DOM lookups.
pub struct SearchPage {
	page: Page,
	wait: WaitPolicy,
}

impl SearchPage {
	pub fn new(page: Page, wait: WaitPolicy) -> Self {
		Self { page, wait }
	}

	/// Navigates the tab to an absolute URL.
	pub async fn open(&self, url: &str) -> Result<()> {
		debug!(url, "navigating");
		self.page.goto(url).await?;
		Ok(())
	}

	/// Focuses the search input and types the literal query text.
	///
	/// No escaping or normalization is applied to the text.
	pub async fn enter_query(&self, text: &str) -> Result<()> {
		debug!(query = text, "entering search query");
		let input = self.await_visible("search input", selectors::SEARCH_INPUT).await?;
		input.click().await?;
		input.type_str(text).await?;
		Ok(())
	}

	/// Activates the search trigger control.
	pub async fn submit_search(&self) -> Result<()> {
		debug!("submitting search");
		let button = self.await_visible("search button", selectors::SEARCH_BUTTON).await?;
		button.click().await?;
		Ok(())
	}

	/// Bounded wait for the results catalog to render.
	pub async fn wait_for_catalog(&self) -> Result<Element> {
		self.await_element("results catalog", selectors::CATALOG).await
	}

	/// Bounded wait for the no-results stub to render.
	pub async fn wait_for_empty_state(&self) -> Result<Element> {
		self.await_element("no-results stub", selectors::EMPTY_STATE).await
	}

	/// Races both post-search states and reports whichever renders first.
	///
	/// For queries where the expected outcome is unknown; sidesteps the
	/// guessing game of picking one wait and eating a 60s timeout when the
	/// other state renders.
	pub async fn wait_for_outcome(&self) -> Result<SearchOutcome> {
		tokio::select! {
			result = self.wait_for_catalog() => result.map(|_| SearchOutcome::Results),
			result = self.wait_for_empty_state() => result.map(|_| SearchOutcome::Empty),
		}
	}

	/// Collects all book titles inside the results catalog, normalized,
	/// in DOM order.
	pub async fn book_titles(&self) -> Result<Vec<String>> {
		let catalog = self.wait_for_catalog().await?;
		self.collect_texts(&catalog, selectors::PRODUCT_TITLE).await
	}

	/// Collects all author names inside the results catalog, normalized,
	/// in DOM order.
	pub async fn author_names(&self) -> Result<Vec<String>> {
		let catalog = self.wait_for_catalog().await?;
		self.collect_texts(&catalog, selectors::PRODUCT_SUBTITLE).await
	}

	/// Extracts the normalized no-results message.
	pub async fn no_results_message(&self) -> Result<String> {
		self.wait_for_empty_state().await?;
		let title = self.await_visible("no-results title", selectors::EMPTY_STATE_TITLE).await?;
		let text = title.inner_text().await?.unwrap_or_default();
		Ok(normalize(&text))
	}

	async fn collect_texts(&self, scope: &Element, selector: &str) -> Result<Vec<String>> {
		let elements = scope.find_elements(selector).await?;
		let mut texts = Vec::with_capacity(elements.len());
		for element in elements {
			if let Some(text) = element.inner_text().await? {
				texts.push(normalize(&text));
			}
		}
		debug!(selector, count = texts.len(), "collected texts");
		Ok(texts)
	}

	/// Bounded poll for the first element matching `selector`.
	async fn await_element(&self, condition: &'static str, selector: &'static str) -> Result<Element> {
		poll_until(&self.wait, condition, || {
			let page = self.page.clone();
			async move { page.find_element(selector).await.ok() }
		})
		.await
	}

	/// Bounded poll for the first *visible* element matching `selector`.
	///
	/// Presence is not enough for controls: the search form is in the DOM
	/// before layout settles, and a click on a hidden element is lost.
	/// Requiring a clickable point means the element has a laid-out box.
	async fn await_visible(&self, condition: &'static str, selector: &'static str) -> Result<Element> {
		poll_until(&self.wait, condition, || {
			let page = self.page.clone();
			async move {
				let element = page.find_element(selector).await.ok()?;
				element.clickable_point().await.ok()?;
				Some(element)
			}
		})
		.await
	}
}

/// Rendered text is compared case-insensitively with stray whitespace
/// trimmed, matching how the assertions phrase their substring checks.
fn normalize(text: &str) -> String {
	text.trim().to_lowercase()
}
