#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

// A stand-in gcovr that records its arguments and exits with $FAKE_GCOVR_EXIT.
fn install_fake_gcovr(bin_dir: &Path) {
    let script = bin_dir.join("gcovr");
    fs::write(
        &script,
        "#!/bin/sh\nfor a in \"$@\"; do echo \"$a\"; done > \"$FAKE_GCOVR_LOG\"\nexit ${FAKE_GCOVR_EXIT:-0}\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
}

fn path_with(bin_dir: &Path) -> String {
    format!("{}:/bin:/usr/bin", bin_dir.display())
}

#[test]
fn runs_gcovr_through_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let bin_dir = dir.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    install_fake_gcovr(&bin_dir);
    let log = dir.path().join("args.log");

    let output = Command::new(env!("CARGO_BIN_EXE_gcovr-action"))
        .current_dir(dir.path())
        .env_remove("GCOVR_ACTION_TEST_MODE")
        .env("PATH", path_with(&bin_dir))
        .env("FAKE_GCOVR_LOG", &log)
        .args(["-O", "output=out/cov dir/cov.xml", "-O", "xml"])
        .output()
        .expect("run action");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("out/cov dir").is_dir());

    // Quoting keeps the path with a space as one argument.
    let recorded = fs::read_to_string(&log).unwrap();
    let recorded: Vec<&str> = recorded.lines().collect();
    assert_eq!(recorded, vec!["-o", "out/cov dir/cov.xml", "-x"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Generating code coverage."));
}

#[test]
fn gcovr_exit_code_is_propagated() {
    let dir = tempfile::tempdir().unwrap();
    install_fake_gcovr(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_gcovr-action"))
        .env_remove("GCOVR_ACTION_TEST_MODE")
        .env("PATH", path_with(dir.path()))
        .env("FAKE_GCOVR_LOG", dir.path().join("args.log"))
        .env("FAKE_GCOVR_EXIT", "4")
        .args(["--", "-s"])
        .output()
        .expect("run action");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gcovr -s"));
}

#[test]
fn missing_gcovr_aborts_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    fs::create_dir(&empty).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gcovr-action"))
        .current_dir(dir.path())
        .env_remove("GCOVR_ACTION_TEST_MODE")
        .env("PATH", &empty)
        .args(["-O", "output=reports/cov.xml"])
        .output()
        .expect("run action");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gcovr not installed"));
    assert!(!dir.path().join("reports").exists());
}
