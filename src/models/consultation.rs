use crate::models::{CalendarDate, ClientId, ConsultationId, PetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub id: ConsultationId,
    pub client_id: ClientId,
    pub pet_id: PetId,
    pub date: CalendarDate,
    pub description: String,
}

/// A visit to record. The owning client is taken from the pet on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsultation {
    pub pet_id: PetId,
    pub date: CalendarDate,
    pub description: String,
}
