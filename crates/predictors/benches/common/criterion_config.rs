use std::time::Duration;

use criterion::Criterion;

/// Criterion settings shared by the component benches.
///
/// Scoring and persistence calls are microsecond-scale, so this samples more
/// and measures for less time than end-to-end suites would.
pub fn default_criterion() -> Criterion {
    let _ = env_logger::builder().is_test(true).try_init();
    Criterion::default()
        // Allows `--bench` command-line overrides.
        .configure_from_args()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(50)
}
