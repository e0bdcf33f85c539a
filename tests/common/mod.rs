use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

pub struct Workdir {
    pub dir: tempfile::TempDir,
}

impl Workdir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[allow(dead_code)]
    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        std::fs::write(self.path().join(name), contents).with_context(|| format!("write {}", name))
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_compare-outputs"))
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()
            .with_context(|| format!("run compare-outputs {:?}", args))
    }

    pub fn run_ok(&self, args: &[&str]) -> Result<String> {
        let out = self.run(args)?;
        if !out.status.success() {
            anyhow::bail!(
                "compare-outputs {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
                args,
                out.status,
                String::from_utf8_lossy(&out.stdout),
                String::from_utf8_lossy(&out.stderr)
            );
        }
        Ok(String::from_utf8_lossy(&out.stdout).to_string())
    }
}

#[allow(dead_code)]
pub fn report(total: usize, differing: usize, matching: usize, accuracy: &str) -> String {
    format!(
        "Total lines: {}\nDiffering lines: {}\nMatching lines: {}\nAccuracy: {}%\n",
        total, differing, matching, accuracy
    )
}
