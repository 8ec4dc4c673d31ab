//! One function per REPL command. Each takes the positional arguments and
//! the address book and returns the text to print. Failures come back as
//! `Err` and are rendered by the registry.

use chrono::{Local, NaiveDate};
use strum::IntoEnumIterator;

use crate::config::MAX_WINDOW_DAYS;
use crate::core::address_book::AddressBook;
use crate::core::fields::Name;
use crate::core::models::{PhoneChange, Record};
use crate::core::types::CommandKind;
use crate::errors::{Error, Result, require_arg};

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

fn arg(args: &[String], index: usize, kind: CommandKind) -> Result<&str> {
    require_arg(args.get(index).map(String::as_str), kind.usage())
}

pub fn hello(_args: &[String], _book: &mut AddressBook) -> Result<String> {
    Ok("How can I help you?".to_string())
}

pub fn help(_args: &[String], _book: &mut AddressBook) -> Result<String> {
    let lines = CommandKind::iter()
        .map(|kind| format!("  {:<38} {}", kind.usage(), kind.summary()))
        .collect::<Vec<_>>();
    Ok(format!("Commands:\n{}", lines.join("\n")))
}

pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let name = arg(args, 0, CommandKind::Add)?;
    let phone = arg(args, 1, CommandKind::Add)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Validate before inserting so a bad phone never leaves an empty contact behind.
    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let name = arg(args, 0, CommandKind::Change)?;
    let old_phone = arg(args, 1, CommandKind::Change)?;
    let new_phone = arg(args, 2, CommandKind::Change)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    let msg = match record.change_phone(old_phone, new_phone)? {
        PhoneChange::Changed => "Phone number changed.",
        PhoneChange::NotFound => "Old phone number not found.",
    };
    Ok(msg.to_string())
}

pub fn show_phone(args: &[String], book: &mut AddressBook) -> Result<String> {
    let name = arg(args, 0, CommandKind::Phone)?;
    Ok(match book.find(name) {
        Some(record) => format!("Phones of {name}: {}", record.phones_csv()),
        None => CONTACT_NOT_FOUND.to_string(),
    })
}

pub fn show_all(_args: &[String], book: &mut AddressBook) -> Result<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book
        .records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String> {
    let name = arg(args, 0, CommandKind::AddBirthday)?;
    let date = arg(args, 1, CommandKind::AddBirthday)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.add_birthday(date)?;
    Ok(format!("Birthday added for {name}."))
}

pub fn show_birthday(args: &[String], book: &mut AddressBook) -> Result<String> {
    let name = arg(args, 0, CommandKind::ShowBirthday)?;
    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("Birthday of {name}: {birthday}"),
            None => format!("Birthday is not set for {name}."),
        },
        None => CONTACT_NOT_FOUND.to_string(),
    })
}

pub fn upcoming_birthdays(
    args: &[String],
    book: &mut AddressBook,
    default_days: u32,
) -> Result<String> {
    upcoming_birthdays_on(Local::now().date_naive(), args, book, default_days)
}

pub fn upcoming_birthdays_on(
    today: NaiveDate,
    args: &[String],
    book: &AddressBook,
    default_days: u32,
) -> Result<String> {
    let days = match args.first() {
        Some(raw) => parse_window(raw)?,
        None => default_days,
    };

    let upcoming = book.get_upcoming_birthdays_on(today, days);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {days} days."));
    }
    Ok(upcoming
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn parse_window(raw: &str) -> Result<u32> {
    raw.parse::<u32>()
        .ok()
        .filter(|days| *days <= MAX_WINDOW_DAYS)
        .ok_or_else(|| {
            Error::invalid_argument(format!(
                "window '{raw}' must be a whole number of days between 0 and {MAX_WINDOW_DAYS}."
            ))
        })
}
