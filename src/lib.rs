#![doc(test(attr(deny(warnings))))]

//! Balancete Core turns a ledger of categorized inflows and outflows into
//! per-account balances, monthly trends, expense breakdowns and the monthly
//! balancete statement.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Balancete Core tracing initialized.");
    });
}
