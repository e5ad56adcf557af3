#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the derived-analytics engine of a personal finance
//! tracker: period aggregation, trend projection, goal/target
//! synchronization, and flow decomposition over an in-memory snapshot of
//! expense, income, saving, fixed-expense, goal, and target records.

pub mod currency;
pub mod errors;
pub mod flow;
pub mod period;
pub mod records;
pub mod summary;
pub mod sync;
pub mod trend;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
