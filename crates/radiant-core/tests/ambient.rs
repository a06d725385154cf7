//! Logging and profiling setup.

use radiant_core::logging;
use radiant_core::profiling::{self, ProfilingBackend, profile_scope};

#[test]
fn test_logging_init_is_idempotent() {
    logging::init();
    logging::init();
    logging::init_with_filter("warn");
    tracing::debug!("still alive after repeated init");
}

#[test]
fn test_profiling_frames() {
    profiling::init_profiling(ProfilingBackend::InProcess);
    assert!(puffin::are_scopes_on());
    for _ in 0..3 {
        profile_scope!("frame");
        profiling::new_frame();
    }
}
