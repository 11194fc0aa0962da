use std::process::{Command, Output};

fn termcolors(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termcolors"))
        .args(args)
        .output()
        .expect("could not run termcolors")
}

#[track_caller]
fn check(args: &[&str], expected_stdout: &str) {
    let output = termcolors(args);
    assert!(output.status.success(), "termcolors {args:?} failed");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, expected_stdout, "termcolors {args:?}");
}

#[test]
fn test_plain() {
    check(&["Plain text."], "Plain text.\n");
}

#[test]
fn test_colors() {
    check(&["--fg", "red", "Red text."], "\x1b[31mRed text.\x1b[0m\n");
    check(
        &["-f", "blue", "-b", "yellow", "Blue on Yellow."],
        "\x1b[34;43mBlue on Yellow.\x1b[0m\n",
    );
    check(&["--fg=bright-cyan", "Bold Cyan."], "\x1b[96mBold Cyan.\x1b[0m\n");
    check(
        &["--bg", "BOLD-Magenta", "On Bold Magenta."],
        "\x1b[105mOn Bold Magenta.\x1b[0m\n",
    );
}

#[test]
fn test_terminator() {
    check(&["-n", "--fg", "red", "No newline"], "\x1b[31mNo newline\x1b[0m");
    check(&["--end", "!\n", "--flush", "hi"], "hi!\n");
}

#[test]
fn test_color_never() {
    check(&["--color=never", "--fg", "red", "Red text."], "Red text.\n");
}

#[test]
fn test_stderr() {
    let output = termcolors(&["--stderr", "--fg", "green", "err"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, b"\x1b[32merr\x1b[0m\n");
}

#[test]
fn test_stderr_plain() {
    let output = termcolors(&["--stderr", "--color=never", "-b", "red", "-n", "err"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, b"err");
}

#[test]
fn test_demo_conflicts() {
    #[track_caller]
    fn check_rejected(args: &[&str]) {
        let output = termcolors(args);
        assert!(!output.status.success(), "termcolors {args:?} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--demo cannot be combined"), "{stderr}");
    }

    check_rejected(&["--demo", "--fg", "red"]);
    check_rejected(&["-b", "blue", "--demo"]);
    check_rejected(&["--demo", "-n"]);
    check_rejected(&["--demo", "--end", "!"]);

    // leftover TEXT is rejected too
    let output = termcolors(&["--demo", "hello"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_failures() {
    #[track_caller]
    fn check_fails(args: &[&str]) -> Output {
        let output = termcolors(args);
        assert!(!output.status.success(), "termcolors {args:?} should fail");
        output
    }

    let output = check_fails(&["--fg", "orange", "x"]);
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid color name: 'orange'"), "{stderr}");

    check_fails(&["--bogus", "x"]);
    check_fails(&["--color=sometimes", "x"]);
    check_fails(&[]);
    check_fails(&["one", "two"]);
}

#[test]
fn test_version() {
    let output = termcolors(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let version = stdout.trim().strip_prefix("Termcolors version ").unwrap();
    semver::Version::parse(version).unwrap();
}

#[test]
fn test_demo() {
    let output = termcolors(&["--demo"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\x1b[97;40m--- Terminal Colors Demo ---\x1b[0m\n"));
}
