use std::fmt;

use crate::error::Result;
use crate::models::{CalendarDate, ClientId};

/// Identity document text, stored and shown exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub document: Document,
    pub surname: String,
    pub first_name: String,
    pub patronymic: String,
    pub birthday: CalendarDate,
}

impl Client {
    /// Column values in table order, as shown in the clients screen.
    pub fn columns(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.document.to_string(),
            self.surname.clone(),
            self.first_name.clone(),
            self.patronymic.clone(),
            self.birthday.to_string(),
        ]
    }
}

/// A validated client that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub document: Document,
    pub surname: String,
    pub first_name: String,
    pub patronymic: String,
    pub birthday: CalendarDate,
}

impl NewClient {
    /// Build a client from raw form input.
    ///
    /// Text fields are accepted as given. Only the `YYYYMMDD` birthday is
    /// checked, so nothing downstream sees a malformed date.
    pub fn new(
        document: &str,
        surname: &str,
        first_name: &str,
        patronymic: &str,
        birthday: &str,
    ) -> Result<Self> {
        Ok(Self {
            document: Document::new(document),
            surname: surname.to_string(),
            first_name: first_name.to_string(),
            patronymic: patronymic.to_string(),
            birthday: CalendarDate::parse(birthday)?,
        })
    }
}
