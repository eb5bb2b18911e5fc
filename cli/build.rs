//! Version metadata for `coolctl --version`

use std::process::Command;

use chrono::Utc;

fn short_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8(output.stdout).ok()?;
    let revision = revision.trim();
    (!revision.is_empty()).then(|| revision.to_string())
}

fn main() {
    let revision = short_revision().unwrap_or_else(|| "unknown".to_string());
    let built_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    println!("cargo:rustc-env=GIT_HASH={revision}");
    println!("cargo:rustc-env=BUILD_TIME={built_at}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
