use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use vet_clinic::{
    config, db, logging,
    models::{ClientId, PetId},
    ui::{
        client_wizard::{
            handle_input as handle_client_wizard_input, render_client_wizard, ClientWizardAction,
            ClientWizardState,
        },
        clients::{handle_input as handle_clients_input, render_clients, ClientAction, ClientsState},
        consultation_wizard::{
            handle_input as handle_consultation_wizard_input, render_consultation_wizard,
            ConsultationWizardAction, ConsultationWizardState,
        },
        consultations::{
            handle_input as handle_consultations_input, render_consultations, ConsultationAction,
            ConsultationsState,
        },
        pet_wizard::{handle_input as handle_pet_wizard_input, render_pet_wizard, PetWizardAction, PetWizardState},
        pets::{handle_input as handle_pets_input, render_pets, PetAction, PetsState},
    },
};

/// Terminal front end for the vet clinic client records
#[derive(Parser, Debug)]
#[command(name = "vet_clinic", version, about)]
struct Cli {
    /// SQLite URL, overrides DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,

    /// Log file path, overrides LOG_FILE
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// Represents the current screen in the app
enum AppScreen {
    Clients,
    ClientWizard,
    Pets(ClientId),
    PetWizard(ClientId),
    Consultations(PetId),
    ConsultationWizard(PetId),
}

// Main application state
struct AppState {
    db: db::Database,
    screen: AppScreen,
    clients_state: ClientsState,
    client_wizard_state: Option<ClientWizardState>,
    pets_state: Option<PetsState>,
    pet_wizard_state: Option<PetWizardState>,
    consultations_state: Option<ConsultationsState>,
    consultation_wizard_state: Option<ConsultationWizardState>,
}

impl AppState {
    fn new(db: db::Database, clients_state: ClientsState) -> Self {
        Self {
            db,
            screen: AppScreen::Clients,
            clients_state,
            client_wizard_state: None,
            pets_state: None,
            pet_wizard_state: None,
            consultations_state: None,
            consultation_wizard_state: None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::init()?.with_overrides(cli.database_url, cli.log_file);
    logging::init(&config)?;
    println!("Opening {}...", config.database_url());

    let db = db::init(&config).await?;
    let clients = db.get_clients().await?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(db, ClientsState::new(clients));

    let result = run_app(&mut terminal, &mut app_state).await;

    // Restore terminal; a failure here must not skip closing the database
    let restored = restore_terminal(&mut terminal);

    shut_down(app_state.db, result, restored).await
}

/// Undo raw mode and the alternate screen, attempting every step
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = terminal::disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
    let cursor = terminal.show_cursor();

    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Close the database, then report the run error ahead of a restore error
async fn shut_down(db: db::Database, result: Result<()>, restored: Result<()>) -> Result<()> {
    db.close().await;

    if let Err(err) = &restored {
        tracing::warn!(error = %err, "terminal restore failed");
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, "application stopped");
        eprintln!("Error: {:#}", err);
    }

    result.and(restored)
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| match app_state.screen {
            AppScreen::Clients => render_clients(f, &mut app_state.clients_state),
            AppScreen::ClientWizard => {
                if let Some(state) = &app_state.client_wizard_state {
                    render_client_wizard(f, state);
                }
            }
            AppScreen::Pets(_) => {
                if let Some(state) = &mut app_state.pets_state {
                    render_pets(f, state);
                }
            }
            AppScreen::PetWizard(_) => {
                if let Some(state) = &app_state.pet_wizard_state {
                    render_pet_wizard(f, state);
                }
            }
            AppScreen::Consultations(_) => {
                if let Some(state) = &mut app_state.consultations_state {
                    render_consultations(f, state);
                }
            }
            AppScreen::ConsultationWizard(_) => {
                if let Some(state) = &app_state.consultation_wizard_state {
                    render_consultation_wizard(f, state);
                }
            }
        })?;

        let should_quit = match app_state.screen {
            AppScreen::Clients => handle_clients_screen(app_state).await?,
            AppScreen::ClientWizard => handle_client_wizard_screen(app_state).await?,
            AppScreen::Pets(_) => handle_pets_screen(app_state).await?,
            AppScreen::PetWizard(_) => handle_pet_wizard_screen(app_state).await?,
            AppScreen::Consultations(_) => handle_consultations_screen(app_state).await?,
            AppScreen::ConsultationWizard(_) => handle_consultation_wizard_screen(app_state).await?,
        };

        if should_quit {
            break;
        }
    }

    Ok(())
}

async fn show_clients(app_state: &mut AppState) -> Result<()> {
    let clients = app_state.db.get_clients().await?;
    app_state.clients_state.replace_clients(clients);
    app_state.pets_state = None;
    app_state.screen = AppScreen::Clients;
    Ok(())
}

async fn show_pets(app_state: &mut AppState, client_id: ClientId) -> Result<()> {
    let Some(owner) = app_state.db.get_client(client_id).await? else {
        return show_clients(app_state).await;
    };
    let pets = app_state.db.get_pets_by_client(client_id).await?;

    match &mut app_state.pets_state {
        Some(state) if state.client_id() == client_id => state.replace_pets(pets),
        _ => app_state.pets_state = Some(PetsState::new(owner, pets)),
    }
    app_state.consultations_state = None;
    app_state.screen = AppScreen::Pets(client_id);
    Ok(())
}

async fn show_consultations(app_state: &mut AppState, pet_id: PetId) -> Result<()> {
    let Some(pet) = app_state.db.get_pet(pet_id).await? else {
        let client_id = app_state.pets_state.as_ref().map(|s| s.client_id());
        return match client_id {
            Some(id) => show_pets(app_state, id).await,
            None => show_clients(app_state).await,
        };
    };
    let consultations = app_state.db.get_consultations_by_pet(pet_id).await?;

    match &mut app_state.consultations_state {
        Some(state) if state.pet().id == pet_id => state.replace_consultations(consultations),
        _ => app_state.consultations_state = Some(ConsultationsState::new(pet, consultations)),
    }
    app_state.screen = AppScreen::Consultations(pet_id);
    Ok(())
}

async fn handle_clients_screen(app_state: &mut AppState) -> Result<bool> {
    match handle_clients_input(&mut app_state.clients_state)? {
        Some(ClientAction::Quit) => return Ok(true),
        Some(ClientAction::NewClient) => {
            app_state.client_wizard_state = Some(ClientWizardState::new());
            app_state.screen = AppScreen::ClientWizard;
        }
        Some(ClientAction::RemoveClient(client_id)) => {
            app_state.db.remove_client(client_id).await?;
            show_clients(app_state).await?;
        }
        Some(ClientAction::ViewPets(client_id)) => {
            show_pets(app_state, client_id).await?;
        }
        None => {}
    }

    Ok(false)
}

async fn handle_client_wizard_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.client_wizard_state {
        Some(state) => handle_client_wizard_input(state)?,
        None => Some(ClientWizardAction::Cancel),
    };

    match action {
        Some(ClientWizardAction::Cancel) => {
            app_state.client_wizard_state = None;
            app_state.screen = AppScreen::Clients;
        }
        Some(ClientWizardAction::Save(client)) => {
            app_state.db.add_client(&client).await?;
            app_state.client_wizard_state = None;
            show_clients(app_state).await?;
        }
        None => {}
    }

    Ok(false)
}

async fn handle_pets_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.pets_state {
        Some(state) => handle_pets_input(state)?,
        None => Some(PetAction::Back),
    };

    match action {
        Some(PetAction::Back) => show_clients(app_state).await?,
        Some(PetAction::NewPet(client_id)) => {
            app_state.pet_wizard_state = Some(PetWizardState::new(client_id));
            app_state.screen = AppScreen::PetWizard(client_id);
        }
        Some(PetAction::RemovePet(pet_id)) => {
            app_state.db.remove_pet(pet_id).await?;
            if let AppScreen::Pets(client_id) = app_state.screen {
                show_pets(app_state, client_id).await?;
            }
        }
        Some(PetAction::ViewConsultations(pet_id)) => {
            show_consultations(app_state, pet_id).await?;
        }
        None => {}
    }

    Ok(false)
}

async fn handle_pet_wizard_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.pet_wizard_state {
        Some(state) => handle_pet_wizard_input(state)?,
        None => Some(PetWizardAction::Cancel),
    };

    if let AppScreen::PetWizard(client_id) = app_state.screen {
        match action {
            Some(PetWizardAction::Cancel) => {
                app_state.pet_wizard_state = None;
                show_pets(app_state, client_id).await?;
            }
            Some(PetWizardAction::Save(pet)) => {
                app_state.db.add_pet(&pet).await?;
                app_state.pet_wizard_state = None;
                show_pets(app_state, client_id).await?;
            }
            None => {}
        }
    }

    Ok(false)
}

async fn handle_consultations_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.consultations_state {
        Some(state) => handle_consultations_input(state)?,
        None => Some(ConsultationAction::Back),
    };

    match action {
        Some(ConsultationAction::Back) => {
            let client_id = app_state.consultations_state.as_ref().map(|s| s.pet().client_id);
            match client_id {
                Some(id) => show_pets(app_state, id).await?,
                None => show_clients(app_state).await?,
            }
        }
        Some(ConsultationAction::NewConsultation(pet_id)) => {
            app_state.consultation_wizard_state = Some(ConsultationWizardState::new(pet_id));
            app_state.screen = AppScreen::ConsultationWizard(pet_id);
        }
        Some(ConsultationAction::RemoveConsultation(consultation_id)) => {
            app_state.db.remove_consultation(consultation_id).await?;
            if let AppScreen::Consultations(pet_id) = app_state.screen {
                show_consultations(app_state, pet_id).await?;
            }
        }
        None => {}
    }

    Ok(false)
}

async fn handle_consultation_wizard_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.consultation_wizard_state {
        Some(state) => handle_consultation_wizard_input(state)?,
        None => Some(ConsultationWizardAction::Cancel),
    };

    if let AppScreen::ConsultationWizard(pet_id) = app_state.screen {
        match action {
            Some(ConsultationWizardAction::Cancel) => {
                app_state.consultation_wizard_state = None;
                show_consultations(app_state, pet_id).await?;
            }
            Some(ConsultationWizardAction::Save(consultation)) => {
                app_state.db.add_consultation(&consultation).await?;
                app_state.consultation_wizard_state = None;
                show_consultations(app_state, pet_id).await?;
            }
            None => {}
        }
    }

    Ok(false)
}
