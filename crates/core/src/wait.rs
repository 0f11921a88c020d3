//! Bounded polling for asynchronous UI states.
//!
//! The remote UI renders results some time after a search is submitted, so
//! every DOM lookup is a single bounded poll-until-condition: re-probe at a
//! fixed interval until the probe yields a value or the deadline passes.
//! No cancellation, no concurrent waits from one caller.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{Error, Result};

/// Timeout and probe interval for bounded UI waits.
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
	/// Total time a condition may take before the wait fails.
	pub timeout: Duration,
	/// Pause between probes.
	pub interval: Duration,
}

impl Default for WaitPolicy {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(60),
			interval: Duration::from_millis(250),
		}
	}
}

impl WaitPolicy {
	/// Policy with a custom timeout and the default probe interval.
	pub fn with_timeout(timeout: Duration) -> Self {
		Self {
			timeout,
			..Self::default()
		}
	}
}

/// Re-probes until `probe` yields a value or the policy's deadline passes.
///
/// `condition` names what is being waited for in the timeout error.
pub(crate) async fn poll_until<T, F, Fut>(policy: &WaitPolicy, condition: &str, mut probe: F) -> Result<T>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = Option<T>>,
{
	let deadline = Instant::now() + policy.timeout;

	loop {
		if let Some(value) = probe().await {
			return Ok(value);
		}

		if Instant::now() + policy.interval > deadline {
			return Err(Error::Timeout {
				ms: policy.timeout.as_millis() as u64,
				condition: condition.to_string(),
			});
		}

		tokio::time::sleep(policy.interval).await;
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicU32, Ordering};

	use super::*;

	#[tokio::test(start_paused = true)]
	async fn resolves_once_probe_succeeds() {
		let calls = AtomicU32::new(0);
		let policy = WaitPolicy::default();

		let value = poll_until(&policy, "third probe", || {
			let n = calls.fetch_add(1, Ordering::Relaxed) + 1;
			async move { (n >= 3).then_some(n) }
		})
		.await
		.unwrap();

		assert_eq!(value, 3);
		assert_eq!(calls.load(Ordering::Relaxed), 3);
	}

	#[tokio::test(start_paused = true)]
	async fn times_out_when_condition_never_holds() {
		let policy = WaitPolicy {
			timeout: Duration::from_secs(2),
			interval: Duration::from_millis(100),
		};

		let result: Result<()> = poll_until(&policy, "unreachable state", || async { None }).await;

		match result {
			Err(Error::Timeout { ms, condition }) => {
				assert_eq!(ms, 2000);
				assert_eq!(condition, "unreachable state");
			}
			other => panic!("expected timeout, got {other:?}"),
		}
	}

	#[tokio::test(start_paused = true)]
	async fn immediate_success_needs_one_probe() {
		let calls = AtomicU32::new(0);
		let policy = WaitPolicy::with_timeout(Duration::from_millis(10));

		poll_until(&policy, "immediate", || {
			calls.fetch_add(1, Ordering::Relaxed);
			async { Some(()) }
		})
		.await
		.unwrap();

		assert_eq!(calls.load(Ordering::Relaxed), 1);
	}
}
