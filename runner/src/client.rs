//! Known clients: where their harness binaries live, how to build them and
//! how to invoke them.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Geth,
    Erigon,
    Reth,
    Ethrex,
    Besu,
    Nethermind,
    /// Any other name. Runnable from `<harnesses>/<name>/<name>-harness`
    /// or an explicit binary, but never built.
    Custom(String),
}

/// How to start a harness binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    /// Placed before `--db <dir>`.
    pub args: Vec<OsString>,
    pub env: Vec<(String, String)>,
}

/// A build command run inside the client's source directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildStep {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

impl ClientKind {
    pub fn known() -> [ClientKind; 6] {
        [
            ClientKind::Geth,
            ClientKind::Erigon,
            ClientKind::Reth,
            ClientKind::Ethrex,
            ClientKind::Besu,
            ClientKind::Nethermind,
        ]
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "geth" => ClientKind::Geth,
            "erigon" => ClientKind::Erigon,
            "reth" => ClientKind::Reth,
            "ethrex" => ClientKind::Ethrex,
            "besu" => ClientKind::Besu,
            "nethermind" => ClientKind::Nethermind,
            other => ClientKind::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ClientKind::Geth => "geth",
            ClientKind::Erigon => "erigon",
            ClientKind::Reth => "reth",
            ClientKind::Ethrex => "ethrex",
            ClientKind::Besu => "besu",
            ClientKind::Nethermind => "nethermind",
            ClientKind::Custom(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ClientKind::Custom(_))
    }

    pub fn source_dir(&self, harnesses: &Path) -> PathBuf {
        harnesses.join(self.name())
    }

    /// Where the built harness ends up.
    pub fn binary_path(&self, harnesses: &Path) -> PathBuf {
        let src = self.source_dir(harnesses);
        match self {
            ClientKind::Geth => src.join("geth-harness"),
            ClientKind::Erigon => src.join("erigon-harness"),
            ClientKind::Reth => src.join("target/release/reth-harness"),
            ClientKind::Ethrex => src.join("target/release/ethrex-harness"),
            ClientKind::Besu => src.join("build/libs/besu-harness.jar"),
            ClientKind::Nethermind => src.join("bin/Release/net10.0/Nethermind.Harness"),
            ClientKind::Custom(name) => src.join(format!("{name}-harness")),
        }
    }

    /// `None` for custom clients, which have no known toolchain.
    pub fn build_step(&self, harnesses: &Path) -> Option<BuildStep> {
        let cwd = self.source_dir(harnesses);
        let (program, args): (PathBuf, Vec<OsString>) = match self {
            ClientKind::Geth | ClientKind::Erigon => (
                "go".into(),
                vec!["build".into(), "-o".into(), self.binary_path(harnesses).into(), ".".into()],
            ),
            ClientKind::Reth | ClientKind::Ethrex => {
                ("cargo".into(), vec!["build".into(), "--release".into()])
            }
            ClientKind::Besu => (cwd.join("gradlew"), vec!["shadowJar".into()]),
            ClientKind::Nethermind => (
                "dotnet".into(),
                vec!["build".into(), "-c".into(), "Release".into()],
            ),
            ClientKind::Custom(_) => return None,
        };
        Some(BuildStep { program, args, cwd })
    }

    /// Besu ships a jar and runs under `java -jar`; everything else is
    /// executed directly.
    pub fn invocation(&self, binary: &Path) -> Invocation {
        match self {
            ClientKind::Besu => Invocation {
                program: PathBuf::from("java"),
                args: vec!["-jar".into(), binary.into()],
                env: Vec::new(),
            },
            _ => Invocation {
                program: binary.to_path_buf(),
                args: Vec::new(),
                env: Vec::new(),
            },
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
