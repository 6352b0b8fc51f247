// Shared proptest configuration for domain property tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 32).
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.

pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
