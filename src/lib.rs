use log::{debug, info};
use std::fmt;

pub mod config;
pub mod log_buffer;
pub mod messages;
pub mod utils;

pub use log_buffer::VisibleLog;
pub use messages::MessageCatalog;

use config::{COMPLETION_NOTICE, ITEMS_PER_CYCLE, MAX_LOG_LINES, TICK_INTERVAL_MS, TOTAL_ITEMS};

// Custom error type for driver construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    EmptyCatalog,
    InvalidTemplate { index: usize, placeholders: usize },
    ZeroBatchSize,
    ZeroLogCapacity,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::EmptyCatalog => write!(f, "Message catalog cannot be empty"),
            DriverError::InvalidTemplate { index, placeholders } => write!(
                f,
                "Template #{} must contain exactly one {{}} placeholder, found {}",
                index, placeholders
            ),
            DriverError::ZeroBatchSize => write!(f, "Items per cycle must be at least 1"),
            DriverError::ZeroLogCapacity => write!(f, "Visible log must hold at least 1 line"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Source of uniformly distributed indices used to pick message templates.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Deterministic source cycling through a fixed list of indices.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        idx % len
    }
}

/// Configuration for the simulated job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub target: u64,
    pub items_per_cycle: u32,
    pub interval_ms: u32,
    pub max_log_lines: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            target: TOTAL_ITEMS,
            items_per_cycle: ITEMS_PER_CYCLE,
            interval_ms: TICK_INTERVAL_MS,
            max_log_lines: MAX_LOG_LINES,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.items_per_cycle == 0 {
            return Err(DriverError::ZeroBatchSize);
        }
        if self.max_log_lines == 0 {
            return Err(DriverError::ZeroLogCapacity);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Done,
}

/// What the scheduler should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Reschedule { delay_ms: u32 },
    Finished,
}

/// Owns the counter and visible log of the fake processing job.
///
/// The driver never touches a timer itself: each call to [`tick`](Self::tick)
/// advances one batch and reports whether the caller should schedule another
/// tick. Once the counter reaches the target a single completion notice is
/// appended and the driver stays in [`DriverState::Done`].
#[derive(Debug, Clone)]
pub struct ProgressDriver {
    config: DriverConfig,
    catalog: MessageCatalog,
    log: VisibleLog,
    counter: u64,
    state: DriverState,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        let config = DriverConfig::default();
        Self {
            log: VisibleLog::new(config.max_log_lines),
            catalog: MessageCatalog::default(),
            counter: 0,
            state: DriverState::Running,
            config,
        }
    }
}

impl ProgressDriver {
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        Self::with_catalog(config, MessageCatalog::default())
    }

    pub fn with_catalog(config: DriverConfig, catalog: MessageCatalog) -> Result<Self, DriverError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(DriverError::EmptyCatalog);
        }
        Ok(Self {
            log: VisibleLog::new(config.max_log_lines),
            catalog,
            counter: 0,
            state: DriverState::Running,
            config,
        })
    }

    /// Advance one batch.
    ///
    /// # Behavior
    /// 1. In `Done`, nothing happens.
    /// 2. If the counter already reached the target, append the completion
    ///    notice and finish.
    /// 3. Otherwise advance up to `items_per_cycle` items, one rendered line
    ///    each. The counter is clamped to the target mid-batch.
    /// 4. Finish right away if the batch hit the target, else ask for another
    ///    tick after `interval_ms`.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.state == DriverState::Done {
            return TickOutcome::Finished;
        }
        if self.counter >= self.config.target {
            self.finish();
            return TickOutcome::Finished;
        }

        if self.counter == 0 {
            info!(
                "Starting simulated processing of {} items",
                utils::format_thousands(self.config.target)
            );
        }

        for _ in 0..self.config.items_per_cycle {
            if self.counter >= self.config.target {
                break;
            }
            self.counter += 1;
            let line = self.catalog.render_random(rng, self.counter);
            self.log.push(line);
        }
        debug!("tick advanced counter to {}", self.counter);

        if self.counter >= self.config.target {
            self.finish();
            TickOutcome::Finished
        } else {
            TickOutcome::Reschedule {
                delay_ms: self.config.interval_ms,
            }
        }
    }

    fn finish(&mut self) {
        self.log.push("");
        self.log.push(COMPLETION_NOTICE);
        self.state = DriverState::Done;
        info!(
            "Processing complete: {}",
            utils::counter_label(self.counter, self.config.target)
        );
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn target(&self) -> u64 {
        self.config.target
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == DriverState::Done
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn log(&self) -> &VisibleLog {
        &self.log
    }

    /// `counter / target` in [0, 1].
    pub fn progress_ratio(&self) -> f64 {
        utils::ratio(self.counter, self.config.target)
    }

    /// Progress on the 0–100 scale used by the progress bar.
    pub fn progress_percent(&self) -> f64 {
        self.progress_ratio() * 100.0
    }

    pub fn counter_label(&self) -> String {
        utils::counter_label(self.counter, self.config.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_driver(target: u64) -> ProgressDriver {
        ProgressDriver::new(DriverConfig {
            target,
            items_per_cycle: 3,
            interval_ms: 0,
            max_log_lines: 100,
        })
        .unwrap()
    }

    fn notices(driver: &ProgressDriver) -> usize {
        driver
            .log()
            .lines()
            .filter(|l| *l == COMPLETION_NOTICE)
            .count()
    }

    #[test]
    fn default_driver_starts_running_at_zero() {
        let driver = ProgressDriver::default();
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.counter(), 0);
        assert_eq!(driver.target(), 5_000_000_000);
        assert_eq!(driver.counter_label(), "Processed: 0 / 5,000,000,000");
        assert!(driver.log().is_empty());
        assert_eq!(driver.log().cap(), 100);
        assert_eq!(driver.config(), &DriverConfig::default());
        assert_eq!(driver.catalog(), &MessageCatalog::default());
    }

    #[test]
    fn unbounded_log_capacity_builds_a_driver() {
        let mut driver = ProgressDriver::new(DriverConfig {
            target: 30,
            max_log_lines: usize::MAX,
            ..DriverConfig::default()
        })
        .unwrap();
        assert_eq!(driver.log().cap(), usize::MAX);
        let mut rng = StdRng::seed_from_u64(11);
        while driver.tick(&mut rng) != TickOutcome::Finished {}
        assert_eq!(driver.counter(), 30);
        assert_eq!(driver.log().len(), 32);
        assert_eq!(driver.log().evicted_total(), 0);
    }

    #[test]
    fn sequence_source_wraps_and_handles_empty_list() {
        let mut empty = SequenceSource::new(Vec::new());
        assert_eq!(empty.next_index(10), 0);
        assert_eq!(empty.next_index(3), 0);

        let mut seq = SequenceSource::new(vec![12, 4]);
        assert_eq!(seq.next_index(10), 2);
        assert_eq!(seq.next_index(3), 1);
        assert_eq!(seq.next_index(10), 2);
    }

    #[test]
    fn tick_advances_one_batch_and_reschedules() {
        let mut driver = ProgressDriver::default();
        let mut rng = SequenceSource::new(vec![0, 1, 2]);
        let outcome = driver.tick(&mut rng);
        assert_eq!(outcome, TickOutcome::Reschedule { delay_ms: 200 });
        assert_eq!(driver.counter(), 3);
        let lines: Vec<&str> = driver.log().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Processing record 1."));
        assert!(lines[1].starts_with("Encrypting file 2."));
        assert!(lines[2].starts_with("Hashing object 3."));
        assert_eq!(driver.counter_label(), "Processed: 3 / 5,000,000,000");
    }

    #[test]
    fn clamps_final_batch_to_target() {
        let mut driver = small_driver(10);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = Vec::new();
        loop {
            let outcome = driver.tick(&mut rng);
            seen.push(driver.counter());
            if outcome == TickOutcome::Finished {
                break;
            }
        }
        assert_eq!(seen, vec![3, 6, 9, 10]);
        assert!(driver.is_done());
        assert_eq!(driver.progress_ratio(), 1.0);
        assert_eq!(driver.counter_label(), "Processed: 10 / 10");
    }

    #[test]
    fn exactly_one_completion_notice() {
        let mut driver = small_driver(6);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            driver.tick(&mut rng);
        }
        assert_eq!(driver.counter(), 6);
        assert_eq!(notices(&driver), 1);
        assert_eq!(driver.log().last(), Some(COMPLETION_NOTICE));
        assert_eq!(driver.tick(&mut rng), TickOutcome::Finished);
        assert_eq!(driver.counter(), 6);
        assert_eq!(notices(&driver), 1);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut driver = small_driver(0);
        let mut rng = SequenceSource::new(vec![0]);
        assert_eq!(driver.tick(&mut rng), TickOutcome::Finished);
        assert_eq!(driver.counter(), 0);
        assert_eq!(driver.log().lines().collect::<Vec<_>>(), vec!["", COMPLETION_NOTICE]);
    }

    #[test]
    fn progress_is_bounded_and_monotonic() {
        let mut driver = small_driver(50);
        let mut rng = StdRng::seed_from_u64(99);
        let mut last = driver.progress_ratio();
        while driver.tick(&mut rng) != TickOutcome::Finished {
            let now = driver.progress_ratio();
            assert!((0.0..=1.0).contains(&now));
            assert!(now >= last);
            assert!(driver.counter() <= driver.target());
            last = now;
        }
        assert_eq!(driver.progress_percent(), 100.0);
    }

    #[test]
    fn visible_log_stays_within_cap() {
        let mut driver = ProgressDriver::new(DriverConfig {
            target: 1_000,
            items_per_cycle: 3,
            interval_ms: 0,
            max_log_lines: 100,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            driver.tick(&mut rng);
            assert!(driver.log().len() <= 100);
        }
        assert_eq!(driver.counter(), 150);
        assert_eq!(driver.log().len(), 100);
        assert!(driver.log().last().unwrap().contains(" 150."));
    }

    #[test]
    fn rejects_invalid_config() {
        let err = ProgressDriver::new(DriverConfig {
            items_per_cycle: 0,
            ..DriverConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, DriverError::ZeroBatchSize);

        let err = ProgressDriver::new(DriverConfig {
            max_log_lines: 0,
            ..DriverConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, DriverError::ZeroLogCapacity);
        assert_eq!(err.to_string(), "Visible log must hold at least 1 line");
    }

    #[test]
    fn custom_catalog_is_used() {
        let catalog = MessageCatalog::new(["item {}"]).unwrap();
        let mut driver = ProgressDriver::with_catalog(
            DriverConfig {
                target: 2,
                ..DriverConfig::default()
            },
            catalog,
        )
        .unwrap();
        assert_eq!(driver.catalog().len(), 1);
        assert_eq!(driver.config().target, 2);
        driver.tick(&mut SequenceSource::new(vec![5]));
        assert_eq!(
            driver.log().lines().collect::<Vec<_>>(),
            vec!["item 1", "item 2", "", COMPLETION_NOTICE]
        );
    }
}
