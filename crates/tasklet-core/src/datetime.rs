use std::cell::Cell;

use chrono::Utc;

pub trait Clock {
  /// Milliseconds since the Unix epoch.
  fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_millis(&self) -> u64 {
    u64::try_from(
      Utc::now().timestamp_millis()
    )
    .unwrap_or_default()
  }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
  now: Cell<u64>
}

impl ManualClock {
  pub fn new(start_ms: u64) -> Self {
    Self {
      now: Cell::new(start_ms)
    }
  }

  pub fn set(&self, now_ms: u64) {
    self.now.set(now_ms);
  }

  pub fn advance(&self, delta_ms: u64) {
    self.now.set(
      self.now.get().saturating_add(
        delta_ms
      )
    );
  }
}

impl Clock for ManualClock {
  fn now_millis(&self) -> u64 {
    self.now.get()
  }
}
