//! Table definitions, applied idempotently on every open
//!
//! Table and column names match the files written by the earlier desktop
//! version of the app, so an existing `vet_clinic.db` opens unchanged. Such
//! files have no foreign keys, so cleanup of dependent rows lives in triggers,
//! which `IF NOT EXISTS` adds to old and new files alike.

pub const CREATE_CLIENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS Clients (
        ClientId INTEGER PRIMARY KEY AUTOINCREMENT,
        Document TEXT,
        SurName TEXT,
        FirstName TEXT,
        Patronymic TEXT,
        Birthday INTEGER
    )
"#;

pub const CREATE_PETS: &str = r#"
    CREATE TABLE IF NOT EXISTS Pets (
        PetId INTEGER PRIMARY KEY AUTOINCREMENT,
        ClientId INTEGER,
        Name TEXT,
        Birthday INTEGER
    )
"#;

pub const CREATE_CONSULTATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS Consultations (
        ConsultationId INTEGER PRIMARY KEY AUTOINCREMENT,
        ClientId INTEGER,
        PetId INTEGER,
        ConsultationDate INTEGER,
        Description TEXT
    )
"#;

pub const CLIENT_CLEANUP: &str = r#"
    CREATE TRIGGER IF NOT EXISTS clients_cleanup
    AFTER DELETE ON Clients
    BEGIN
        DELETE FROM Consultations WHERE ClientId = OLD.ClientId;
        DELETE FROM Pets WHERE ClientId = OLD.ClientId;
    END
"#;

pub const PET_CLEANUP: &str = r#"
    CREATE TRIGGER IF NOT EXISTS pets_cleanup
    AFTER DELETE ON Pets
    BEGIN
        DELETE FROM Consultations WHERE PetId = OLD.PetId;
    END
"#;

/// Statements in dependency order
pub const ALL: [&str; 5] = [
    CREATE_CLIENTS,
    CREATE_PETS,
    CREATE_CONSULTATIONS,
    CLIENT_CLEANUP,
    PET_CLEANUP,
];
