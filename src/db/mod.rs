mod rows;
mod schema;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    Client, ClientId, Consultation, ConsultationId, NewClient, NewConsultation, NewPet, Pet, PetId,
};
use rows::{ClientRow, ConsultationRow, PetRow};

/// Owned handle to the clinic database
///
/// The pool holds a single connection, so every statement runs on the same
/// SQLite connection for the lifetime of the handle.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database at `url` and ensure the schema exists
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // An in-memory database lives only as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.create_tables().await?;

        tracing::info!(url, "database ready");
        Ok(db)
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn create_tables(&self) -> Result<()> {
        for statement in schema::ALL {
            sqlx::query(statement).execute(self.get_pool()).await?;
        }
        tracing::debug!("schema ensured");
        Ok(())
    }

    /// Release the connection
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("database closed");
    }

    // Client operations
    pub async fn add_client(&self, client: &NewClient) -> Result<ClientId> {
        let result = sqlx::query(
            r#"
            INSERT INTO Clients (Document, SurName, FirstName, Patronymic, Birthday)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(client.document.as_str())
        .bind(&client.surname)
        .bind(&client.first_name)
        .bind(&client.patronymic)
        .bind(client.birthday.to_storage())
        .execute(self.get_pool())
        .await?;

        let id = ClientId::new(result.last_insert_rowid())?;
        tracing::info!(client_id = %id, "client added");
        Ok(id)
    }

    /// All clients in insertion order
    pub async fn get_clients(&self) -> Result<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT ClientId, Document, SurName, FirstName, Patronymic, Birthday
            FROM Clients
            ORDER BY ClientId
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;

        tracing::debug!(count = rows.len(), "clients loaded");
        rows.into_iter().map(Client::try_from).collect()
    }

    pub async fn get_client(&self, id: ClientId) -> Result<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT ClientId, Document, SurName, FirstName, Patronymic, Birthday
            FROM Clients
            WHERE ClientId = ?
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.get_pool())
        .await?;

        row.map(Client::try_from).transpose()
    }

    /// Delete a client; absent ids are ignored. The cleanup trigger removes
    /// the client's pets and consultations within the same statement.
    pub async fn remove_client(&self, id: ClientId) -> Result<()> {
        let result = sqlx::query("DELETE FROM Clients WHERE ClientId = ?")
            .bind(id.get())
            .execute(self.get_pool())
            .await?;

        tracing::info!(client_id = %id, removed = result.rows_affected(), "client removed");
        Ok(())
    }

    // Pet operations
    pub async fn add_pet(&self, pet: &NewPet) -> Result<PetId> {
        let result = sqlx::query(
            r#"
            INSERT INTO Pets (ClientId, Name, Birthday)
            SELECT ClientId, ?, ? FROM Clients WHERE ClientId = ?
            "#,
        )
        .bind(&pet.name)
        .bind(pet.birthday.to_storage())
        .bind(pet.client_id.get())
        .execute(self.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::ClientNotFound(pet.client_id.get()));
        }

        let id = PetId::new(result.last_insert_rowid())?;
        tracing::info!(pet_id = %id, client_id = %pet.client_id, "pet added");
        Ok(id)
    }

    pub async fn get_pets_by_client(&self, client_id: ClientId) -> Result<Vec<Pet>> {
        let rows = sqlx::query_as::<_, PetRow>(
            "SELECT PetId, ClientId, Name, Birthday FROM Pets WHERE ClientId = ? ORDER BY PetId",
        )
        .bind(client_id.get())
        .fetch_all(self.get_pool())
        .await?;

        rows.into_iter().map(Pet::try_from).collect()
    }

    pub async fn get_pet(&self, id: PetId) -> Result<Option<Pet>> {
        let row = sqlx::query_as::<_, PetRow>(
            "SELECT PetId, ClientId, Name, Birthday FROM Pets WHERE PetId = ?",
        )
        .bind(id.get())
        .fetch_optional(self.get_pool())
        .await?;

        row.map(Pet::try_from).transpose()
    }

    pub async fn remove_pet(&self, id: PetId) -> Result<()> {
        let result = sqlx::query("DELETE FROM Pets WHERE PetId = ?")
            .bind(id.get())
            .execute(self.get_pool())
            .await?;

        tracing::info!(pet_id = %id, removed = result.rows_affected(), "pet removed");
        Ok(())
    }

    // Consultation operations
    pub async fn add_consultation(&self, consultation: &NewConsultation) -> Result<ConsultationId> {
        let result = sqlx::query(
            r#"
            INSERT INTO Consultations (ClientId, PetId, ConsultationDate, Description)
            SELECT ClientId, PetId, ?, ? FROM Pets WHERE PetId = ?
            "#,
        )
        .bind(consultation.date.to_storage())
        .bind(&consultation.description)
        .bind(consultation.pet_id.get())
        .execute(self.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::PetNotFound(consultation.pet_id.get()));
        }

        let id = ConsultationId::new(result.last_insert_rowid())?;
        tracing::info!(consultation_id = %id, pet_id = %consultation.pet_id, "consultation added");
        Ok(id)
    }

    pub async fn get_consultations_by_pet(&self, pet_id: PetId) -> Result<Vec<Consultation>> {
        let rows = sqlx::query_as::<_, ConsultationRow>(
            r#"
            SELECT ConsultationId, ClientId, PetId, ConsultationDate, Description
            FROM Consultations
            WHERE PetId = ?
            ORDER BY ConsultationDate, ConsultationId
            "#,
        )
        .bind(pet_id.get())
        .fetch_all(self.get_pool())
        .await?;

        rows.into_iter().map(Consultation::try_from).collect()
    }

    pub async fn remove_consultation(&self, id: ConsultationId) -> Result<()> {
        let result = sqlx::query("DELETE FROM Consultations WHERE ConsultationId = ?")
            .bind(id.get())
            .execute(self.get_pool())
            .await?;

        tracing::info!(consultation_id = %id, removed = result.rows_affected(), "consultation removed");
        Ok(())
    }
}

/// Initialize the database from configuration
pub async fn init(config: &Config) -> Result<Database> {
    Database::connect(config.database_url()).await
}
