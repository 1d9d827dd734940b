use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the pure rules crate must never depend on.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &[
    "bravura-engine",
    "tokio",
    "async-trait",
    "rand",
    "dashmap",
    "dotenvy",
    "tracing-subscriber",
];

/// Ambient time and randomness the domain must receive as arguments instead.
const DOMAIN_FORBIDDEN_CALLS: &str = r"Utc::now\(|thread_rng\(|SystemTime::now\(|Instant::now\(";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = check_domain_dependencies(&metadata)?;
    violations.extend(check_domain_sources(
        &metadata.workspace_root.join("crates/domain/src"),
    )?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn check_domain_dependencies(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == "bravura-domain")
        .context("bravura-domain not found in workspace")?;

    Ok(domain
        .dependencies
        .iter()
        // dev-dependencies may use anything
        .filter(|dep| dep.kind.as_deref() != Some("dev"))
        .filter(|dep| DOMAIN_FORBIDDEN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("bravura-domain depends on forbidden crate `{}`", dep.name))
        .collect())
}

fn check_domain_sources(root: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(DOMAIN_FORBIDDEN_CALLS)?;
    let mut violations = Vec::new();

    for file in rust_files(root)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let body = strip_test_module(&source);

        for (index, line) in body.lines().enumerate() {
            let code = line.split("//").next().unwrap_or_default();
            if pattern.is_match(code) {
                violations.push(format!(
                    "{}:{}: ambient time/randomness in domain: {}",
                    file.display(),
                    index + 1,
                    line.trim()
                ));
            }
        }
    }

    Ok(violations)
}

/// Source up to the first `#[cfg(test)]`; tests may read the real clock.
fn strip_test_module(source: &str) -> &str {
    source
        .find("#[cfg(test)]")
        .map_or(source, |at| &source[..at])
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).with_context(|| format!("listing {}", dir.display()))? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
