//! Process-global runtime setup contract.

use crate::config::Config;

/// Performs process-global initialization needed before the node connection
/// and storage handle can be created — registering address prefixes, codec
/// types, and similar one-time side effects.
pub trait RuntimeSetup: Send + Sync {
    fn setup(&self, cfg: &Config);
}

/// Default runtime setup — does nothing.
#[derive(Debug, Default)]
pub struct NoopRuntimeSetup;

impl RuntimeSetup for NoopRuntimeSetup {
    fn setup(&self, _cfg: &Config) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_setup_is_safe_to_run() {
        NoopRuntimeSetup.setup(&Config::default());
    }
}
