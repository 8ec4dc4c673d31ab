use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use chrono::{Local, NaiveDate};

use crate::core::models::Record;

/// Window used by the `birthdays` command when nothing else is configured.
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub days: i64,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days {
            0 => write!(f, "{} today", self.name),
            1 => write!(f, "{} in 1 day", self.name),
            n => write!(f, "{} in {} days", self.name, n),
        }
    }
}

/// Records keyed by name. Iteration follows first insertion of each name;
/// overwriting a name keeps its position.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add_record(&mut self, record: Record) -> &mut Record {
        match self.records.entry(record.name().as_str().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(record)
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays_on(Local::now().date_naive(), days)
    }

    pub fn get_upcoming_birthdays_on(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let left = record.days_to_birthday_on(today)?;
                (0..=i64::from(days)).contains(&left).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    days: left,
                })
            })
            .collect()
    }
}
