//! Vet clinic client records
//!
//! A SQLite-backed store of clinic clients, their pets and consultations,
//! plus the terminal screens used by the `vet_clinic` binary.
//!
//! ```no_run
//! use vet_clinic::{Database, NewClient};
//!
//! # async fn demo() -> vet_clinic::Result<()> {
//! let db = Database::connect("sqlite://vet_clinic.db").await?;
//! let client = NewClient::new("123456789", "Doe", "John", "Smith", "19900101")?;
//! db.add_client(&client).await?;
//! for row in db.get_clients().await? {
//!     println!("{:?}", row.columns());
//! }
//! db.close().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    CalendarDate, Client, ClientId, Consultation, ConsultationId, Document, NewClient,
    NewConsultation, NewPet, Pet, PetId,
};
