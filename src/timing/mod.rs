//! # Tick Timers
//!
//! Cooperative repeating timers for the per-mode update engines. The
//! host pumps [`TimerBank::advance`] once per frame; each slot reports
//! how many whole periods elapsed so the controller can run exactly that
//! many engine ticks. Cancellation is immediate: a cancelled slot never
//! reports another due tick, and restarting a slot resets its phase so
//! the first tick after a restart lands one full period later.

/// Timer classes, one per transform family.
///
/// Translate drives `Location`, every rotate variant drives `Rotation`,
/// and scale drives `Scale`. At most one slot is active per controller
/// because only one mode can be dragging at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Location,
    Rotation,
    Scale,
}

impl TimerKind {
    pub(crate) const ALL: [TimerKind; 3] =
        [TimerKind::Location, TimerKind::Rotation, TimerKind::Scale];

    pub(crate) fn index(self) -> usize {
        match self {
            TimerKind::Location => 0,
            TimerKind::Rotation => 1,
            TimerKind::Scale => 2,
        }
    }
}

// A zero period would spin the drain loop forever.
const MIN_PERIOD: f32 = 1.0e-3;

#[derive(Debug, Clone, Copy)]
struct RepeatingTimer {
    period: f32,
    accrued: f32,
}

/// Bank of the three repeating timer slots.
#[derive(Debug, Default)]
pub struct TimerBank {
    slots: [Option<RepeatingTimer>; 3],
}

impl TimerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a slot. Restarting resets the phase
    /// accumulator, so prior partial progress is discarded.
    pub fn start(&mut self, kind: TimerKind, period: f32) {
        self.slots[kind.index()] = Some(RepeatingTimer {
            period: period.max(MIN_PERIOD),
            accrued: 0.0,
        });
    }

    /// Cancel a slot. No further ticks are reported for it.
    pub fn cancel(&mut self, kind: TimerKind) {
        self.slots[kind.index()] = None;
    }

    pub fn is_active(&self, kind: TimerKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Accrue `dt` seconds on every active slot and return the number of
    /// due ticks per slot, indexed by [`TimerKind::index`].
    pub fn advance(&mut self, dt: f32) -> [u32; 3] {
        let mut due = [0u32; 3];
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(timer) = slot else { continue };
            timer.accrued += dt.max(0.0);
            while timer.accrued >= timer.period {
                timer.accrued -= timer.period;
                due[index] += 1;
            }
        }
        due
    }
}
