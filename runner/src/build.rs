//! Turning client names into runnable harness invocations.

use crate::client::{ClientKind, Invocation};
use crate::config::RunConfig;
use crate::errors::{Result, RunnerError};
use crate::process::{LaunchSpec, ProcessLauncher};
use std::path::{Path, PathBuf};

/// Runs the client's build command and returns the built binary.
pub async fn build_harness<L: ProcessLauncher>(
    launcher: &L,
    harnesses: &Path,
    kind: &ClientKind,
) -> Result<PathBuf> {
    let step = kind
        .build_step(harnesses)
        .ok_or_else(|| RunnerError::UnknownClient(kind.name().to_string()))?;

    tracing::info!(client = %kind, source_dir = %step.cwd.display(), "building harness");

    let output = launcher
        .launch(&LaunchSpec {
            program: step.program,
            args: step.args,
            cwd: Some(step.cwd),
            ..Default::default()
        })
        .await
        .map_err(|e| RunnerError::Build {
            client: kind.to_string(),
            reason: e.to_string(),
        })?;

    if !output.success() {
        return Err(RunnerError::Build {
            client: kind.to_string(),
            reason: format!("{}\n{}", output.status(), output.stderr_lossy()),
        });
    }

    let binary = kind.binary_path(harnesses);
    if !binary.exists() {
        return Err(RunnerError::MissingBinary {
            client: kind.to_string(),
            path: binary,
        });
    }

    tracing::info!(client = %kind, binary = %binary.display(), "harness built");
    Ok(binary)
}

/// Resolves how to run `name`: an explicit binary if one is configured,
/// otherwise the conventional path, built first unless `skip_build` is set.
pub async fn resolve_invocation<L: ProcessLauncher>(
    launcher: &L,
    config: &RunConfig,
    name: &str,
) -> Result<Invocation> {
    let kind = ClientKind::from_name(name);

    if let Some(binary) = config.binary_overrides.get(name) {
        tracing::debug!(client = name, binary = %binary.display(), "using configured binary");
        return Ok(kind.invocation(binary));
    }

    let binary = if config.skip_build {
        let binary = kind.binary_path(&config.harnesses_dir);
        if !binary.exists() {
            return Err(RunnerError::MissingBinary {
                client: name.to_string(),
                path: binary,
            });
        }
        binary
    } else {
        build_harness(launcher, &config.harnesses_dir, &kind).await?
    };

    Ok(kind.invocation(&binary))
}
