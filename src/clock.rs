//! Wall-clock source and accrual pacing.
//!
//! The presentation layer may pump the session from a requestAnimationFrame
//! callback (~60 Hz) or a coarse interval; `Pacer` collapses either into
//! roughly one accrual per second. Accrual itself works from absolute
//! timestamps, so pacing only bounds call frequency and never loses time.

/// Milliseconds between accruals.
pub const ACCRUE_INTERVAL_MS: u64 = 1_000;

/// Current wall-clock time in milliseconds since epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Gate that fires once per interval when fed wall-clock timestamps.
pub struct Pacer {
    interval_ms: u64,
    /// Timestamp of the last fire, None until the first pump.
    last_fire_ms: Option<u64>,
}

impl Pacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    /// Feed a wall-clock timestamp. Returns true when a full interval has
    /// passed since the last fire. The first pump only arms the gate.
    pub fn due(&mut self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            None => {
                self.last_fire_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms.saturating_sub(last) >= self.interval_ms => {
                self.last_fire_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }
}
