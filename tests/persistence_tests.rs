//! Integration tests for the clinic database
//!
//! Most tests run against `sqlite::memory:`; the reopen test uses a file in a
//! temporary directory.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use tempfile::TempDir;
use vet_clinic::{
    CalendarDate, ClientId, Database, Error, NewClient, NewConsultation, NewPet, PetId,
};

async fn memory_db() -> Database {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

fn new_client(document: &str, surname: &str) -> NewClient {
    NewClient::new(document, surname, "John", "Smith", "19900101").unwrap()
}

#[tokio::test]
async fn test_empty_store_has_no_clients() {
    let db = memory_db().await;
    assert!(db.get_clients().await.unwrap().is_empty());
    db.close().await;
}

#[tokio::test]
async fn test_add_client_scenario() {
    let db = memory_db().await;

    let client = NewClient::new("123456789", "Doe", "John", "Smith", "19900101").unwrap();
    let id = db.add_client(&client).await.unwrap();
    assert_eq!(id.get(), 1);

    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(
        clients[0].columns(),
        ["1", "123456789", "Doe", "John", "Smith", "19900101"].map(String::from)
    );
}

#[tokio::test]
async fn test_added_values_are_verbatim_with_fresh_ids() {
    let db = memory_db().await;

    let first = NewClient::new(" AB-12 ", "", "Анна", "O'Neil", "20000229").unwrap();
    let second = new_client("2", "Roe");
    let first_id = db.add_client(&first).await.unwrap();
    let second_id = db.add_client(&second).await.unwrap();
    assert_ne!(first_id, second_id);

    let stored = db.get_client(first_id).await.unwrap().unwrap();
    assert_eq!(stored.document, first.document);
    assert_eq!(stored.surname, "");
    assert_eq!(stored.first_name, "Анна");
    assert_eq!(stored.patronymic, "O'Neil");
    assert_eq!(stored.birthday, first.birthday);
}

#[tokio::test]
async fn test_blank_document_round_trips() {
    let db = memory_db().await;
    let id = db
        .add_client(&NewClient::new("", "Doe", "John", "Smith", "19900101").unwrap())
        .await
        .unwrap();

    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, id);
    assert_eq!(clients[0].document.as_str(), "");
}

#[tokio::test]
async fn test_rows_written_outside_the_app_still_load() {
    let db = memory_db().await;
    db.add_client(&new_client("123456789", "Doe")).await.unwrap();
    sqlx::query(
        "INSERT INTO Clients (Document, SurName, FirstName, Patronymic, Birthday) VALUES ('', NULL, 'Ann', '', 20000229)",
    )
    .execute(db.get_pool())
    .await
    .unwrap();

    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[1].document.as_str(), "");
    assert_eq!(clients[1].surname, "");
    assert_eq!(clients[1].first_name, "Ann");
}

#[tokio::test]
async fn test_clients_come_back_in_insertion_order() {
    let db = memory_db().await;
    for (doc, surname) in [("3", "Zed"), ("1", "Abe"), ("2", "Moe")] {
        db.add_client(&new_client(doc, surname)).await.unwrap();
    }

    let surnames: Vec<String> = db
        .get_clients()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.surname)
        .collect();
    assert_eq!(surnames, ["Zed", "Abe", "Moe"]);
}

#[tokio::test]
async fn test_remove_first_of_two() {
    let db = memory_db().await;
    let first = db.add_client(&new_client("1", "Doe")).await.unwrap();
    let second = db.add_client(&new_client("2", "Roe")).await.unwrap();

    db.remove_client(first).await.unwrap();

    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, second);
    assert_eq!(clients[0].surname, "Roe");
    assert!(db.get_client(first).await.unwrap().is_none());
}

#[tokio::test]
async fn test_remove_missing_id_is_noop() {
    let db = memory_db().await;
    db.add_client(&new_client("1", "Doe")).await.unwrap();
    let before = db.get_clients().await.unwrap();

    db.remove_client(ClientId::new(999).unwrap()).await.unwrap();

    assert_eq!(db.get_clients().await.unwrap(), before);
}

#[tokio::test]
async fn test_insert_then_remove_all_empties_store() {
    let db = memory_db().await;
    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(db.add_client(&new_client(&i.to_string(), "Doe")).await.unwrap());
    }

    for id in &ids {
        db.remove_client(*id).await.unwrap();
        let remaining = db.get_clients().await.unwrap();
        assert!(remaining.iter().all(|c| c.id != *id));
    }
    assert!(db.get_clients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_removed_ids_are_not_reused() {
    let db = memory_db().await;
    let first = db.add_client(&new_client("1", "Doe")).await.unwrap();
    db.remove_client(first).await.unwrap();
    let second = db.add_client(&new_client("2", "Roe")).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_reopen_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("vet_clinic.db").display());

    let db = Database::connect(&url).await.unwrap();
    db.add_client(&new_client("123456789", "Doe")).await.unwrap();
    db.close().await;

    // Schema creation runs again on the existing file
    let db = Database::connect(&url).await.unwrap();
    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].document.as_str(), "123456789");
    db.close().await;
}

#[tokio::test]
async fn test_pets_and_consultations() {
    let db = memory_db().await;
    let owner = db.add_client(&new_client("1", "Doe")).await.unwrap();

    let rex = db
        .add_pet(&NewPet::new(owner, "Rex", "20180301").unwrap())
        .await
        .unwrap();
    let tom = db
        .add_pet(&NewPet::new(owner, "Tom", "20190704").unwrap())
        .await
        .unwrap();

    let pets = db.get_pets_by_client(owner).await.unwrap();
    assert_eq!(pets.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["Rex", "Tom"]);

    let later = NewConsultation {
        pet_id: rex,
        date: CalendarDate::parse("20240610").unwrap(),
        description: "Checkup".into(),
    };
    let earlier = NewConsultation {
        pet_id: rex,
        date: CalendarDate::parse("20240105").unwrap(),
        description: "Vaccination".into(),
    };
    let later_id = db.add_consultation(&later).await.unwrap();
    db.add_consultation(&earlier).await.unwrap();

    let visits = db.get_consultations_by_pet(rex).await.unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].description, "Vaccination");
    assert!(visits.iter().all(|v| v.client_id == owner && v.pet_id == rex));
    assert!(db.get_consultations_by_pet(tom).await.unwrap().is_empty());

    db.remove_consultation(later_id).await.unwrap();
    assert_eq!(db.get_consultations_by_pet(rex).await.unwrap().len(), 1);

    db.remove_pet(tom).await.unwrap();
    assert!(db.get_pet(tom).await.unwrap().is_none());
    assert_eq!(db.get_pet(rex).await.unwrap().unwrap().name, "Rex");
}

#[tokio::test]
async fn test_consultation_for_unknown_pet() {
    let db = memory_db().await;
    let visit = NewConsultation {
        pet_id: PetId::new(42).unwrap(),
        date: CalendarDate::parse("20240610").unwrap(),
        description: "Checkup".into(),
    };

    let err = db.add_consultation(&visit).await.unwrap_err();
    assert!(matches!(err, Error::PetNotFound(42)));
}

#[tokio::test]
async fn test_pet_for_unknown_client_is_rejected() {
    let db = memory_db().await;
    let pet = NewPet::new(ClientId::new(5).unwrap(), "Ghost", "20200101").unwrap();

    let err = db.add_pet(&pet).await.unwrap_err();
    assert!(matches!(err, Error::ClientNotFound(5)));
    assert!(db.get_pets_by_client(ClientId::new(5).unwrap()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_client_removes_pets_and_consultations() {
    let db = memory_db().await;
    let owner = db.add_client(&new_client("1", "Doe")).await.unwrap();
    let other = db.add_client(&new_client("2", "Roe")).await.unwrap();
    let rex = db
        .add_pet(&NewPet::new(owner, "Rex", "20180301").unwrap())
        .await
        .unwrap();
    let kept = db
        .add_pet(&NewPet::new(other, "Kit", "20200101").unwrap())
        .await
        .unwrap();
    db.add_consultation(&NewConsultation {
        pet_id: rex,
        date: CalendarDate::parse("20240105").unwrap(),
        description: "Vaccination".into(),
    })
    .await
    .unwrap();

    db.remove_client(owner).await.unwrap();

    assert!(db.get_pets_by_client(owner).await.unwrap().is_empty());
    assert!(db.get_pet(rex).await.unwrap().is_none());
    assert!(db.get_consultations_by_pet(rex).await.unwrap().is_empty());
    assert!(db.get_pet(kept).await.unwrap().is_some());
}

/// Lay out a file the way the earlier desktop version of the app did
async fn write_desktop_era_file(path: &std::path::Path) {
    let mut conn = SqliteConnectOptions::from_str(&format!("sqlite://{}", path.display()))
        .unwrap()
        .create_if_missing(true)
        .connect()
        .await
        .unwrap();

    for statement in [
        "CREATE TABLE Clients(ClientId INTEGER PRIMARY KEY, Document TEXT, SurName TEXT, FirstName TEXT, Patronymic TEXT, Birthday INTEGER)",
        "CREATE TABLE Pets(PetId INTEGER PRIMARY KEY, ClientId INTEGER, Name TEXT, Birthday INTEGER)",
        "CREATE TABLE Consultations(ConsultationId INTEGER PRIMARY KEY, ClientId INTEGER, PetId INTEGER, ConsultationDate INTEGER, Description TEXT)",
        "INSERT INTO Clients (Document, SurName, FirstName, Patronymic, Birthday) VALUES ('123456789', 'Doe', 'John', 'Smith', '19900101')",
        "INSERT INTO Pets (ClientId, Name, Birthday) VALUES (1, 'Rex', 20180301)",
        "INSERT INTO Consultations (ClientId, PetId, ConsultationDate, Description) VALUES (1, 1, 20240105, 'Vaccination')",
    ] {
        sqlx::query(statement).execute(&mut conn).await.unwrap();
    }
    conn.close().await.unwrap();
}

#[tokio::test]
async fn test_opens_desktop_era_database() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vet_clinic.db");
    write_desktop_era_file(&path).await;

    let db = Database::connect(&format!("sqlite://{}", path.display()))
        .await
        .unwrap();

    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(
        clients[0].columns(),
        ["1", "123456789", "Doe", "John", "Smith", "19900101"].map(String::from)
    );

    let owner = clients[0].id;
    let pets = db.get_pets_by_client(owner).await.unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(db.get_consultations_by_pet(pets[0].id).await.unwrap().len(), 1);

    let added = db.add_client(&new_client("2", "Roe")).await.unwrap();
    assert_eq!(added.get(), 2);

    // Cleanup triggers also apply to tables created by the older version
    db.remove_client(owner).await.unwrap();
    assert!(db.get_pet(pets[0].id).await.unwrap().is_none());
    assert!(db.get_consultations_by_pet(pets[0].id).await.unwrap().is_empty());
    assert_eq!(db.get_clients().await.unwrap().len(), 1);
    db.close().await;
}
