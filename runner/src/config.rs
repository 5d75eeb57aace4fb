use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Per-harness timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// What to do when one client's run fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure. A comparison with missing clients says
    /// nothing about agreement.
    #[default]
    Abort,
    /// Record the failure and run the remaining clients.
    Continue,
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Client names in run order.
    pub clients: Vec<String>,
    /// Each client gets `<db_root>/<client>`, recreated before its run.
    pub db_root: PathBuf,
    pub harnesses_dir: PathBuf,
    /// Applied to each harness run independently.
    pub timeout: Option<Duration>,
    pub skip_build: bool,
    pub failure_policy: FailurePolicy,
    /// Prebuilt harness binaries by client name; these are never built.
    pub binary_overrides: BTreeMap<String, PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            clients: Vec::new(),
            db_root: PathBuf::from("tmp"),
            harnesses_dir: PathBuf::from("harnesses"),
            timeout: Some(DEFAULT_TIMEOUT),
            skip_build: false,
            failure_policy: FailurePolicy::Abort,
            binary_overrides: BTreeMap::new(),
        }
    }
}
