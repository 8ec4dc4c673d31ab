use chrono::{Duration, Local};

use crate::common::{
    assert_has_line, build_context, execute_command, make_temp_dir, run_with_bytes, run_with_input,
    stdout_lines,
};

#[test]
fn greets_and_says_goodbye() {
    let dir = make_temp_dir("command");
    let output = run_with_input(&dir, "hello\nexit\n");

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_has_line(&lines, "Welcome to the assistant bot!");
    assert_has_line(&lines, "How can I help you?");
    assert_has_line(&lines, "Good bye!");
}

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("command");
    let output = run_with_input(&dir, "frobnicate\nhello\nclose\n");

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(
        lines.iter().any(|l| l.starts_with("Invalid command.")),
        "stdout was: {}",
        lines.join("\n")
    );
    assert_has_line(&lines, "How can I help you?");
}

#[test]
fn end_of_input_ends_session_cleanly() {
    let dir = make_temp_dir("command");
    let output = run_with_input(&dir, "add Ann 1234567890\n");

    assert!(output.status.success());
    assert_has_line(&stdout_lines(&output), "Contact added.");
}

#[test]
fn contacts_can_be_added_changed_and_listed() {
    let dir = make_temp_dir("command");
    let input = "add Ann 1234567890\n\
                 add Ann 0987654321\n\
                 add Bob 380501234567\n\
                 phone Ann\n\
                 change Ann 1234567890 1112223334\n\
                 change Ann 5555555555 1112223334\n\
                 all\n\
                 exit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_has_line(&lines, "Contact added.");
    assert_has_line(&lines, "Contact updated.");
    assert_has_line(&lines, "Phones of Ann: 1234567890, 0987654321");
    assert_has_line(&lines, "Phone number changed.");
    assert_has_line(&lines, "Old phone number not found.");
    assert_has_line(&lines, "Ann: 1112223334, 0987654321");
    assert_has_line(&lines, "Bob: 380501234567");
}

#[test]
fn handler_errors_are_printed_and_session_continues() {
    let dir = make_temp_dir("command");
    let input = "add Ann\nadd Ann 123\nadd-birthday\nall\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_has_line(&lines, "Error: Missing argument(s). Usage: add <name> <phone>");
    assert_has_line(
        &lines,
        "Error: Invalid phone number '123'. Expected 10 or 12 digits.",
    );
    assert_has_line(
        &lines,
        "Error: Missing argument(s). Usage: add-birthday <name> <DD.MM.YYYY>",
    );
    assert_has_line(&lines, "Address book is empty.");
    assert_has_line(&lines, "Good bye!");
}

#[test]
fn birthdays_lists_only_contacts_inside_window() {
    let dir = make_temp_dir("command");
    let today = Local::now().date_naive();
    let soon = (today + Duration::days(3)).format("%d.%m.2000");
    let later = (today + Duration::days(10)).format("%d.%m.2000");
    let input = format!(
        "add Ann 1234567890\nadd-birthday Ann {soon}\n\
         add Bob 0987654321\nadd-birthday Bob {later}\n\
         show-birthday Ann\nbirthdays\nexit\n"
    );
    let output = run_with_input(&dir, &input);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_has_line(&lines, &format!("Birthday of Ann: {soon}"));
    assert_has_line(&lines, "Ann in 3 days");
    assert!(!lines.iter().any(|l| l.starts_with("Bob in")));
}

#[test]
fn birthdays_without_matches_is_informational() {
    let dir = make_temp_dir("command");
    let output = run_with_input(&dir, "add Ann 1234567890\nbirthdays\nexit\n");

    assert_has_line(&stdout_lines(&output), "No birthdays in the next 7 days.");
}

#[test]
fn library_registry_shares_book_across_commands() {
    let dir = make_temp_dir("command");
    let mut ctx = build_context(&dir);

    assert_eq!(execute_command("add Ann 1234567890", &mut ctx), "Contact added.");
    assert_eq!(
        execute_command("add-birthday Ann 01.01.1990", &mut ctx),
        "Birthday added for Ann."
    );
    assert_eq!(
        execute_command("show-birthday Ann", &mut ctx),
        "Birthday of Ann: 01.01.1990"
    );
    assert_eq!(execute_command("exit", &mut ctx), "Good bye!");
    assert_eq!(ctx.book.len(), 1);
}

#[test]
fn non_utf8_line_is_rejected_as_a_command() {
    let dir = make_temp_dir("command");
    let output = run_with_bytes(
        &dir,
        &[],
        b"add Ann 1234567890\n\xff\xfe\nadd Bob 1111111111\nall\nexit\n",
    );

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l.starts_with("Invalid command.")));
    assert_has_line(&lines, "Bob: 1111111111");
    assert_has_line(&lines, "Good bye!");
}
