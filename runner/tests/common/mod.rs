#![allow(dead_code)]

use statebench::BenchResult;
use statebench_runner::{LaunchError, LaunchSpec, ProcessLauncher, ProcessOutput};
use std::path::PathBuf;
use std::sync::Mutex;

type Respond = dyn Fn(&LaunchSpec) -> Result<ProcessOutput, LaunchError> + Send + Sync;

/// Records every launch and answers with a canned response.
pub struct FakeLauncher {
    respond: Box<Respond>,
    pub calls: Mutex<Vec<LaunchSpec>>,
}

impl FakeLauncher {
    pub fn new(
        respond: impl Fn(&LaunchSpec) -> Result<ProcessOutput, LaunchError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<LaunchSpec> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessLauncher for FakeLauncher {
    async fn launch(&self, spec: &LaunchSpec) -> Result<ProcessOutput, LaunchError> {
        self.calls.lock().unwrap().push(spec.clone());
        (self.respond)(spec)
    }
}

pub fn ok(stdout: impl Into<Vec<u8>>) -> ProcessOutput {
    ProcessOutput {
        code: Some(0),
        stdout: stdout.into(),
        stderr: Vec::new(),
    }
}

pub fn result_json(client: &str, root: &str) -> Vec<u8> {
    serde_json::to_vec(&BenchResult {
        client: client.to_string(),
        state_root: root.to_string(),
        elapsed_ms: 10,
        ..Default::default()
    })
    .unwrap()
}

/// The directory passed after `--db`.
pub fn db_arg(spec: &LaunchSpec) -> Option<PathBuf> {
    let pos = spec.args.iter().position(|a| a == "--db")?;
    spec.args.get(pos + 1).map(PathBuf::from)
}
