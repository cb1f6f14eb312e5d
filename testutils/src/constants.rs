pub const TEST_NAMESPACE: &str = "flux-system";
pub const TEST_SOURCE_NAME: &str = "podinfo";
pub const TEST_SOURCE_UID: &str = "1234-asdf";
pub const TEST_SOURCE_URL: &str = "https://github.com/stefanprodan/podinfo";
pub const TEST_MISSING_SOURCE_NAME: &str = "ghost";
