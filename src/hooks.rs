use bigdata_sim::{DriverConfig, ProgressDriver, TickOutcome};
use gloo_timers::callback::Timeout;
use log::error;
use yew::prelude::*;

/// Read-only view of the driver, rebuilt after every tick.
#[derive(Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Number of ticks run so far. Changes on every tick and keys the timer effect.
    pub generation: u64,
    /// Delay before the next tick, `None` once the job is done.
    pub next_delay_ms: Option<u32>,
    /// Progress on a 0–100 scale.
    pub percent: f64,
    /// `Processed: x / y` label.
    pub label: String,
    /// Terminal contents, one line per visible log entry.
    pub log_text: String,
}

impl ProgressSnapshot {
    fn capture(driver: &ProgressDriver, generation: u64, next_delay_ms: Option<u32>) -> Self {
        Self {
            generation,
            next_delay_ms,
            percent: driver.progress_percent(),
            label: driver.counter_label(),
            log_text: driver.log().to_text(),
        }
    }
}

/// Custom hook owning a [`ProgressDriver`] and chaining timer callbacks.
///
/// The first tick runs right after mount; every later tick is armed by the
/// effect of the previous render. Unmounting drops the pending `Timeout`,
/// which cancels it.
#[hook]
pub fn use_progress_driver(config: DriverConfig) -> ProgressSnapshot {
    let driver = use_mut_ref(move || {
        ProgressDriver::new(config).unwrap_or_else(|e| {
            error!("Invalid driver configuration ({}), using defaults", e);
            ProgressDriver::default()
        })
    });
    let snapshot = {
        let driver = driver.clone();
        use_state(move || ProgressSnapshot::capture(&driver.borrow(), 0, Some(0)))
    };

    {
        let driver = driver.clone();
        let snapshot_setter = snapshot.clone();
        let current = (*snapshot).clone();

        use_effect_with(current.generation, move |_| {
            let handle = current.next_delay_ms.map(|delay_ms| {
                Timeout::new(delay_ms, move || {
                    let mut driver = driver.borrow_mut();
                    let outcome = driver.tick(&mut rand::rng());
                    let next_delay_ms = match outcome {
                        TickOutcome::Reschedule { delay_ms } => Some(delay_ms),
                        TickOutcome::Finished => None,
                    };
                    snapshot_setter.set(ProgressSnapshot::capture(
                        &driver,
                        current.generation + 1,
                        next_delay_ms,
                    ));
                })
            });
            // Dropping the handle cancels a timer that has not fired yet
            move || drop(handle)
        });
    }

    (*snapshot).clone()
}
