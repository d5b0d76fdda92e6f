//! Sliding-window cooldowns, keyed per command and per scope.
//!
//! The router consults this tracker before dispatch; handlers never carry
//! their own throttling. Each command declares an independent
//! (max, window, scope) policy, and aliases share a bucket because the
//! router resolves them to the canonical command name first.

use dashmap::DashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Rejection from the cooldown tracker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CooldownError {
    /// The invoking scope has exhausted its quota for this command.
    #[error("This command is on cooldown. Try again in {retry_after:.2}s.")]
    Active {
        /// Canonical command name.
        command: String,
        /// Precise remaining wait in seconds.
        retry_after: f64,
    },
}

/// Which identifier a command throttles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownScope {
    /// One bucket per invoking user.
    User,
    /// One bucket per channel.
    Channel,
}

/// Per-command cooldown policy.
#[derive(Debug, Clone, Copy)]
pub struct CooldownPolicy {
    /// Invocations admitted per window.
    pub max: u32,
    /// Window duration.
    pub window: Duration,
    /// Scope the command throttles on.
    pub scope: CooldownScope,
}

impl CooldownPolicy {
    /// Per-user policy.
    pub const fn user(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            scope: CooldownScope::User,
        }
    }

    /// Per-channel policy.
    pub const fn channel(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            scope: CooldownScope::Channel,
        }
    }
}

/// Cooldown policy for a command, by canonical name. Commands without an
/// entry dispatch unthrottled.
pub fn policy_for(command: &str) -> Option<CooldownPolicy> {
    let policy = match command {
        "help" => CooldownPolicy::channel(1, Duration::from_secs(5)),
        "truth" | "never" | "thisorthat" => CooldownPolicy::user(1, Duration::from_millis(2500)),
        "dare" | "wouldyourather" | "willyoupressthebutton" => {
            CooldownPolicy::user(1, Duration::from_secs(3))
        }
        _ => return None,
    };
    Some(policy)
}

/// Tracker for command cooldowns.
///
/// Buckets are created lazily per (command, scope id), hold the instants
/// of still-counted consumptions, and live for the process lifetime
/// (modulo [`prune_expired`](Self::prune_expired) sweeps).
#[derive(Debug, Default)]
pub struct CooldownManager {
    buckets: DashMap<(String, u64), VecDeque<Instant>>,
}

impl CooldownManager {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks quota for the key and consumes a slot when admitted.
    ///
    /// The check and the consumption happen under the bucket's entry
    /// lock, so two interleaved invocations of the same key cannot both
    /// pass a quota that admits only one.
    pub fn check_and_consume(
        &self,
        command: &str,
        policy: &CooldownPolicy,
        scope_id: u64,
        now: Instant,
    ) -> Result<(), CooldownError> {
        let mut bucket = self
            .buckets
            .entry((command.to_string(), scope_id))
            .or_default();

        while bucket
            .front()
            .map_or(false, |&t| now.duration_since(t) >= policy.window)
        {
            bucket.pop_front();
        }

        if (bucket.len() as u32) < policy.max {
            bucket.push_back(now);
            return Ok(());
        }

        // the oldest still-counted consumption bounds the remaining wait
        let retry_after = match bucket.front() {
            Some(&oldest) => policy.window.saturating_sub(now.duration_since(oldest)),
            None => policy.window,
        };

        debug!(
            "cooldown active for '{command}' (scope {scope_id}): {:.2}s remaining",
            retry_after.as_secs_f64()
        );

        Err(CooldownError::Active {
            command: command.to_string(),
            retry_after: retry_after.as_secs_f64(),
        })
    }

    /// Drops buckets whose newest consumption has aged out of its
    /// command's window. Run periodically for hygiene; correctness never
    /// depends on it.
    pub fn prune_expired(&self, now: Instant) {
        self.buckets.retain(|(command, _), bucket| {
            let Some(policy) = policy_for(command) else {
                return false;
            };
            bucket
                .back()
                .map_or(false, |&t| now.duration_since(t) < policy.window)
        });
    }

    /// Number of live buckets.
    pub fn active_buckets(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_admits_then_rejects() {
        let manager = CooldownManager::new();
        let policy = CooldownPolicy::user(2, Duration::from_secs(5));
        let now = Instant::now();

        assert!(manager.check_and_consume("truth", &policy, 1, now).is_ok());
        assert!(manager.check_and_consume("truth", &policy, 1, now).is_ok());

        let err = manager
            .check_and_consume("truth", &policy, 1, now)
            .unwrap_err();
        let CooldownError::Active { retry_after, .. } = err;
        assert!(retry_after > 0.0);
        assert!(retry_after <= 5.0);
    }

    #[test]
    fn test_retry_after_is_precise() {
        let manager = CooldownManager::new();
        let policy = CooldownPolicy::user(1, Duration::from_millis(2500));
        let now = Instant::now();

        manager.check_and_consume("truth", &policy, 1, now).unwrap();

        let err = manager
            .check_and_consume("truth", &policy, 1, now + Duration::from_secs(1))
            .unwrap_err();
        let CooldownError::Active { retry_after, .. } = &err;
        assert!((retry_after - 1.5).abs() < 1e-9);
        assert!(err.to_string().contains("1.50s"));
    }

    #[test]
    fn test_quota_resets_after_window() {
        let manager = CooldownManager::new();
        let policy = CooldownPolicy::user(1, Duration::from_millis(2500));
        let now = Instant::now();

        manager.check_and_consume("truth", &policy, 1, now).unwrap();
        assert!(manager
            .check_and_consume("truth", &policy, 1, now + Duration::from_millis(2500))
            .is_ok());
    }

    #[test]
    fn test_scopes_are_independent() {
        let manager = CooldownManager::new();
        let policy = CooldownPolicy::user(1, Duration::from_secs(3));
        let now = Instant::now();

        manager.check_and_consume("dare", &policy, 1, now).unwrap();
        // another user is unaffected
        assert!(manager.check_and_consume("dare", &policy, 2, now).is_ok());
    }

    #[test]
    fn test_commands_do_not_share_state() {
        let manager = CooldownManager::new();
        let policy = CooldownPolicy::user(1, Duration::from_secs(3));
        let now = Instant::now();

        manager.check_and_consume("dare", &policy, 1, now).unwrap();
        assert!(manager.check_and_consume("truth", &policy, 1, now).is_ok());
    }

    #[test]
    fn test_window_counts_from_oldest_consumption() {
        let manager = CooldownManager::new();
        let policy = CooldownPolicy::user(2, Duration::from_secs(10));
        let now = Instant::now();

        manager.check_and_consume("truth", &policy, 1, now).unwrap();
        manager
            .check_and_consume("truth", &policy, 1, now + Duration::from_secs(4))
            .unwrap();

        // quota full; wait is measured against the oldest consumption
        let err = manager
            .check_and_consume("truth", &policy, 1, now + Duration::from_secs(6))
            .unwrap_err();
        let CooldownError::Active { retry_after, .. } = err;
        assert!((retry_after - 4.0).abs() < 1e-9);

        // once the oldest ages out, one slot frees up
        assert!(manager
            .check_and_consume("truth", &policy, 1, now + Duration::from_secs(10))
            .is_ok());
    }

    #[test]
    fn test_prune_drops_stale_buckets() {
        let manager = CooldownManager::new();
        let policy = policy_for("truth").unwrap();
        let now = Instant::now();

        manager.check_and_consume("truth", &policy, 1, now).unwrap();
        assert_eq!(manager.active_buckets(), 1);

        manager.prune_expired(now + Duration::from_secs(60));
        assert_eq!(manager.active_buckets(), 0);
    }

    #[test]
    fn test_policy_table() {
        let help = policy_for("help").unwrap();
        assert_eq!(help.scope, CooldownScope::Channel);
        assert_eq!(help.window, Duration::from_secs(5));

        let truth = policy_for("truth").unwrap();
        assert_eq!(truth.scope, CooldownScope::User);
        assert_eq!(truth.window, Duration::from_millis(2500));

        let wyp = policy_for("willyoupressthebutton").unwrap();
        assert_eq!(wyp.window, Duration::from_secs(3));

        assert!(policy_for("unknown").is_none());
    }
}
