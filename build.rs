use std::process::Command;
fn main() {
    let git_describe = Command::new("git")
        .args(&["describe", "--always"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|describe| describe.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=GIT_DESCRIBE={}", git_describe);
}
