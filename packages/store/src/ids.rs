//! Id and timestamp helpers.
//!
//! Ids are random v4 UUIDs drawn from the platform's secure random source
//! (`crypto.getRandomValues` in the browser). If that source fails, a
//! pseudo-random base-36 string is used instead. Neither is checked against
//! existing ids; uniqueness is probabilistic.

use std::sync::atomic::{AtomicU64, Ordering};

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A new opaque id for a project or task.
pub fn new_id() -> String {
    let mut bytes = [0u8; 16];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "secure random source unavailable, using fallback id");
            fallback_id()
        }
    }
}

/// Base-36 id seeded from the clock and a process-wide counter.
pub fn fallback_id() -> String {
    let count = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let seed = (now_millis() as u64) ^ count.rotate_left(32);
    to_base36(splitmix64(seed))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
