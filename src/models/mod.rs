mod client;
mod consultation;
mod date;
mod id;
mod pet;

pub use client::{Client, Document, NewClient};
pub use consultation::{Consultation, NewConsultation};
pub use date::CalendarDate;
pub use id::{ClientId, ConsultationId, PetId};
pub use pet::{NewPet, Pet};
