use crate::core::fields::{Birthday, Name, Phone};
use crate::errors::ValidationError;
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Result of [`Record::change_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneChange {
    Changed,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Replaces the first phone equal to `old`. `new` is only validated when
    /// a match exists.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<PhoneChange, ValidationError> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = Phone::new(new)?;
                Ok(PhoneChange::Changed)
            }
            None => Ok(PhoneChange::NotFound),
        }
    }

    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days from `today` until the next anniversary of the birthday, 0 when
    /// it is today.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday?.date();
        let mut next = born.anniversary_in(today.year());
        if next < today {
            next = born.anniversary_in(today.year() + 1);
        }
        Some((next - today).num_days())
    }

    pub fn phones_csv(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_csv())
    }
}
