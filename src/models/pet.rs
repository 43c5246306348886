use crate::error::Result;
use crate::models::{CalendarDate, ClientId, PetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: PetId,
    pub client_id: ClientId,
    pub name: String,
    pub birthday: CalendarDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub client_id: ClientId,
    pub name: String,
    pub birthday: CalendarDate,
}

impl NewPet {
    pub fn new(client_id: ClientId, name: &str, birthday: &str) -> Result<Self> {
        Ok(Self {
            client_id,
            name: name.to_string(),
            birthday: CalendarDate::parse(birthday)?,
        })
    }
}
