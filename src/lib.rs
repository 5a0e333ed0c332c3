#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the ledger, filtering, aggregation, budgeting, and
//! reporting primitives that power personal-finance dashboards and views.

pub mod domain;
pub mod errors;
pub mod ledger;
pub mod public_api;
pub mod services;
pub mod storage;
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
