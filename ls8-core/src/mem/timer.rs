use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use log::debug;

use crate::consts::cpu::IRQ_TIMER;
use crate::consts::timer::TIMER_PERIOD_MS;

/// Time source the CPU consults once per run-loop iteration. Injectable so
/// tests can move time by hand instead of sleeping.
pub trait Ls8Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn now_ms(&mut self) -> u64;
}

/// Production clock backed by `std::time::Instant`.
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> WallClock {
        WallClock {
            start: Instant::now(),
        }
    }
}

impl Ls8Clock for WallClock {
    fn now_ms(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-advanced clock. Cloning shares the underlying counter, so a test
/// can keep one handle and hand the other to the CPU.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock {
            now: Rc::new(Cell::new(0)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Ls8Clock for ManualClock {
    fn now_ms(&mut self) -> u64 {
        self.now.get()
    }
}

/// The LS-8 timer block. One free-running timer fires once per period,
/// measured from CPU start or the previous fire.
pub struct Ls8Timers {
    period_ms: u64,
    last_fire_ms: u64,
}

impl Ls8Timers {
    pub fn new(start_ms: u64) -> Ls8Timers {
        Ls8Timers {
            period_ms: TIMER_PERIOD_MS,
            last_fire_ms: start_ms,
        }
    }

    ///
    /// Pumps the timer block with the current clock reading and returns a
    /// mask of interrupt-status bits to latch. The mask is returned rather
    /// than delivered so the CPU decides when latched lines are serviced;
    /// firing is independent of the interrupt-enable state.
    ///
    pub fn pump(&mut self, now_ms: u64) -> u8 {
        let mut rupt = 0;
        while now_ms.saturating_sub(self.last_fire_ms) >= self.period_ms {
            self.last_fire_ms += self.period_ms;
            debug!("timer fired at {}ms", self.last_fire_ms);
            rupt |= 1 << IRQ_TIMER;
        }
        rupt
    }
}
