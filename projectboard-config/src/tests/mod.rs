
/// Environment variables the tests may set; cleared before and after each test
pub(crate) const TEST_ENV_VARS: [&str; 4] = [
    "PROJECTBOARD_SERVER__PORT",
    "PROJECTBOARD_SERVER__HOST",
    "PROJECTBOARD_API__STATUS_POLICY",
    "PROJECTBOARD_DATABASE__PATH",
];

pub(crate) fn clear_env() {
    for var in TEST_ENV_VARS {
        std::env::remove_var(var);
    }
}
