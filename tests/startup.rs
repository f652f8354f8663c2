use std::process::Command;
use tempfile::TempDir;

/// Without a credential the binary exits 1 and prints the two diagnostic lines first
#[test]
fn test_missing_credential_exits() {
    let home = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DASHSCOPE_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lingo");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Error: DASHSCOPE_API_KEY environment variable not set.",
            "Please set the environment variable and try again.",
        ]
    );

    // No log file or config is created before the check
    assert!(!home.path().join(".config").exists());
}

/// The variable name follows the config file
#[test]
fn test_missing_credential_uses_configured_env_name() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("lingo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[llm]\napi_key_env = \"LINGO_STARTUP_TEST_KEY\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("LINGO_STARTUP_TEST_KEY")
        .output()
        .expect("Failed to run lingo");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: LINGO_STARTUP_TEST_KEY environment variable not set."));
}

/// A broken config file is reported instead of silently ignored
#[test]
fn test_invalid_config_exits() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("lingo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("DASHSCOPE_API_KEY", "sk-test")
        .output()
        .expect("Failed to run lingo");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"));
}

/// A broken config file does not hide the credential diagnostic
#[test]
fn test_missing_credential_with_invalid_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("lingo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DASHSCOPE_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lingo");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Error: DASHSCOPE_API_KEY environment variable not set.");
    assert_eq!(lines[1], "Please set the environment variable and try again.");
    assert!(lines[2].contains("tick_rate_ms"));
}

/// The key variable is still taken from an otherwise invalid config
#[test]
fn test_invalid_config_keeps_configured_env_name() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("lingo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[llm]\napi_key_env = \"LINGO_STARTUP_TEST_KEY\"\n\n[logging]\nlevel = \"chatty\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("LINGO_STARTUP_TEST_KEY")
        .output()
        .expect("Failed to run lingo");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with(
        "Error: LINGO_STARTUP_TEST_KEY environment variable not set.\nPlease set the environment variable and try again.\n"
    ));
    assert!(stderr.contains("logging.level"));
}
