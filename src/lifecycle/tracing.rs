//! # Tracing Setup
//!
//! Structured logs come from `tracing` spans and events throughout the crate:
//!
//! - sessions open a span per operation carrying `employee` or `booking_id`
//! - the store client opens a span per repository call
//! - the store actor logs each request at `debug` and each mutation at `info`
//! - rejected operations are logged at `warn` with the error
//!
//! Filtering follows `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run                    # bookings, codes, served meals
//! RUST_LOG=debug cargo run                   # plus every store request
//! RUST_LOG=breakbuddy::store_actor=debug cargo run
//! ```
//!
//! A served meal reads like this at `info`:
//!
//! ```text
//! INFO counter:verify_code{booking_id=booking_4b1c...}:mark_served{id=...}: Served booking_id=...
//! INFO counter:verify_code{booking_id=booking_4b1c...}: Meal served employee=EMP001
//! ```

/// Installs the global compact subscriber. Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
