use chrono::{Duration, Local};

use crate::common::{
    assert_has_line, build_context, make_temp_dir, read_log_contents, run_with_args,
    run_with_input, stdout_lines, write_config,
};

#[test]
fn configured_window_widens_birthdays() {
    let dir = make_temp_dir("config");
    write_config(&dir, 14, false);
    let later = (Local::now().date_naive() + Duration::days(10)).format("%d.%m.2000");
    let input = format!("add Bob 0987654321\nadd-birthday Bob {later}\nbirthdays\nexit\n");
    let output = run_with_input(&dir, &input);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_has_line(&lines, "Bob in 10 days");
    assert_has_line(&lines, "BIRTHDAY_WINDOW_DAYS = 14  (window)");
}

#[test]
fn explicit_window_argument_overrides_config() {
    let dir = make_temp_dir("config");
    write_config(&dir, 14, false);
    let mut ctx = build_context(&dir);
    assert_eq!(ctx.config.birthday_window_days(), 14);

    let later = (Local::now().date_naive() + Duration::days(10)).format("%d.%m.2000");
    crate::common::execute_command("add Bob 0987654321", &mut ctx);
    crate::common::execute_command(&format!("add-birthday Bob {later}"), &mut ctx);
    assert_eq!(
        crate::common::execute_command("birthdays 5", &mut ctx),
        "No birthdays in the next 5 days."
    );
}

#[test]
fn file_logging_records_commands_and_failures() {
    let dir = make_temp_dir("config");
    write_config(&dir, 7, true);
    let output = run_with_input(&dir, "add Ann 1234567890\nphone\nexit\n");

    assert!(output.status.success());
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Command run: add Ann 1234567890"), "{log}");
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("Command execution failed for 'phone'"), "{log}");
}

#[test]
fn file_logging_is_off_by_default() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, "add Ann 1234567890\nexit\n");

    assert!(output.status.success());
    assert!(!dir.join("logs").exists());
}

#[test]
fn logs_flag_moves_log_directory() {
    let dir = make_temp_dir("config");
    write_config(&dir, 7, true);
    let custom = dir.join("custom-logs");
    let output = run_with_args(
        &dir,
        &["--logs", custom.to_str().unwrap()],
        "hello\nexit\n",
    );

    assert!(output.status.success());
    assert!(custom.exists());
    assert!(!dir.join("logs").exists());
}

#[test]
fn invalid_config_is_a_startup_error() {
    let dir = make_temp_dir("config");
    std::fs::write(dir.join("config.json"), "{").unwrap();
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON error"), "stderr was: {stderr}");
}

#[test]
fn unknown_flag_is_a_startup_error() {
    let dir = make_temp_dir("config");
    let output = run_with_args(&dir, &["--verbose"], "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --verbose"), "stderr was: {stderr}");
}
