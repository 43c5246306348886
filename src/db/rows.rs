//! Raw row shapes and their conversion into domain types

use crate::error::{Error, Result};
use crate::models::{
    CalendarDate, Client, ClientId, Consultation, ConsultationId, Document, Pet, PetId,
};

// Text columns are nullable in files written by the desktop version; NULL
// reads back as an empty string.

#[derive(sqlx::FromRow, Debug)]
#[sqlx(rename_all = "PascalCase")]
pub(super) struct ClientRow {
    pub client_id: i64,
    pub document: Option<String>,
    pub sur_name: Option<String>,
    pub first_name: Option<String>,
    pub patronymic: Option<String>,
    pub birthday: Option<i64>,
}

#[derive(sqlx::FromRow, Debug)]
#[sqlx(rename_all = "PascalCase")]
pub(super) struct PetRow {
    pub pet_id: i64,
    pub client_id: Option<i64>,
    pub name: Option<String>,
    pub birthday: Option<i64>,
}

#[derive(sqlx::FromRow, Debug)]
#[sqlx(rename_all = "PascalCase")]
pub(super) struct ConsultationRow {
    pub consultation_id: i64,
    pub client_id: Option<i64>,
    pub pet_id: Option<i64>,
    pub consultation_date: Option<i64>,
    pub description: Option<String>,
}

fn corrupt(table: &'static str) -> impl Fn(Error) -> Error {
    move |e| Error::CorruptRow {
        table,
        reason: e.to_string(),
    }
}

fn required(table: &'static str, column: &'static str, value: Option<i64>) -> Result<i64> {
    value.ok_or_else(|| Error::CorruptRow {
        table,
        reason: format!("{} is NULL", column),
    })
}

fn date(table: &'static str, column: &'static str, value: Option<i64>) -> Result<CalendarDate> {
    CalendarDate::from_storage(required(table, column, value)?).map_err(corrupt(table))
}

impl TryFrom<ClientRow> for Client {
    type Error = Error;

    fn try_from(row: ClientRow) -> Result<Self> {
        Ok(Client {
            id: ClientId::new(row.client_id).map_err(corrupt("Clients"))?,
            document: Document::new(row.document.unwrap_or_default()),
            surname: row.sur_name.unwrap_or_default(),
            first_name: row.first_name.unwrap_or_default(),
            patronymic: row.patronymic.unwrap_or_default(),
            birthday: date("Clients", "Birthday", row.birthday)?,
        })
    }
}

impl TryFrom<PetRow> for Pet {
    type Error = Error;

    fn try_from(row: PetRow) -> Result<Self> {
        let client_id = required("Pets", "ClientId", row.client_id)?;
        Ok(Pet {
            id: PetId::new(row.pet_id).map_err(corrupt("Pets"))?,
            client_id: ClientId::new(client_id).map_err(corrupt("Pets"))?,
            name: row.name.unwrap_or_default(),
            birthday: date("Pets", "Birthday", row.birthday)?,
        })
    }
}

impl TryFrom<ConsultationRow> for Consultation {
    type Error = Error;

    fn try_from(row: ConsultationRow) -> Result<Self> {
        let client_id = required("Consultations", "ClientId", row.client_id)?;
        let pet_id = required("Consultations", "PetId", row.pet_id)?;
        Ok(Consultation {
            id: ConsultationId::new(row.consultation_id).map_err(corrupt("Consultations"))?,
            client_id: ClientId::new(client_id).map_err(corrupt("Consultations"))?,
            pet_id: PetId::new(pet_id).map_err(corrupt("Consultations"))?,
            date: date("Consultations", "ConsultationDate", row.consultation_date)?,
            description: row.description.unwrap_or_default(),
        })
    }
}
