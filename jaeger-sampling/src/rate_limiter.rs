// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// A continuous token bucket rate limiter.
///
/// Credit accrues linearly with elapsed monotonic time at `credits_per_second`, up to
/// `max_balance`. Each successful [`RateLimiter::check_credit`] withdraws its cost from the
/// balance. Clones share the same bucket.
#[derive(Clone)]
pub struct RateLimiter {
    /// Accrual rate, doesn't need to be protected by the mutex
    credits_per_second: f64,

    /// Burst capacity
    max_balance: f64,

    /// Balance and last update time, updated together under the mutex
    inner: Arc<Mutex<RateLimiterState>>,
}

struct RateLimiterState {
    /// Credit currently available, always within `[0, max_balance]`
    balance: f64,

    /// Last time the balance was brought up to date
    last_tick: Instant,
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("RateLimiter")
            .field("credits_per_second", &self.credits_per_second)
            .field("max_balance", &self.max_balance)
            .field("balance", &state.balance)
            .finish()
    }
}

impl RateLimiter {
    /// Creates a new RateLimiter with a full balance.
    ///
    /// # Parameters
    /// * `credits_per_second` - steady state rate at which credit accrues
    /// * `max_balance` - the most credit the bucket can hold, which bounds bursts
    ///
    /// Both are expected to be finite and non-negative; callers validate configuration
    /// before building a limiter.
    pub fn new(credits_per_second: f64, max_balance: f64) -> Self {
        Self::new_at(credits_per_second, max_balance, Instant::now())
    }

    pub(crate) fn new_at(credits_per_second: f64, max_balance: f64, now: Instant) -> Self {
        RateLimiter {
            credits_per_second,
            max_balance,
            inner: Arc::new(Mutex::new(RateLimiterState {
                balance: max_balance,
                last_tick: now,
            })),
        }
    }

    pub fn credits_per_second(&self) -> f64 {
        self.credits_per_second
    }

    pub fn max_balance(&self) -> f64 {
        self.max_balance
    }

    /// Withdraws `cost` credits if they are available.
    ///
    /// # Returns
    /// `true` if the balance covered `cost` (and was reduced by it), `false` otherwise
    pub fn check_credit(&self, cost: f64) -> bool {
        self.check_credit_at(cost, Instant::now())
    }

    /// Same as [`RateLimiter::check_credit`], with the current time supplied by the caller.
    ///
    /// A `now` earlier than the last update accrues nothing.
    pub fn check_credit_at(&self, cost: f64, now: Instant) -> bool {
        let mut state = self.lock();

        let elapsed = now.saturating_duration_since(state.last_tick).as_secs_f64();
        state.balance =
            (state.balance + elapsed * self.credits_per_second).min(self.max_balance);
        // Don't move the tick backwards, or the same interval would be credited twice
        if now > state.last_tick {
            state.last_tick = now;
        }

        if state.balance >= cost {
            state.balance -= cost;
            true
        } else {
            false
        }
    }

    /// The poisoned case is recovered from: no code path can panic while holding the lock,
    /// and the state is valid after every statement of `check_credit_at`.
    fn lock(&self) -> MutexGuard<'_, RateLimiterState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn balance(&self) -> f64 {
        self.lock().balance
    }
}
