use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::error::Result;
use crate::models::{Client, ClientId};
use crate::ui::components::selection::{clamp_index, next_index, previous_index};
use crate::ui::read_key;

const HEADERS: [&str; 6] = ["ClientId", "Document", "Surname", "Firstname", "Patronymic", "Birthday"];

// Represents the state of the client table screen
pub struct ClientsState {
    clients: Vec<Client>,
    table_state: TableState,
}

impl ClientsState {
    pub fn new(clients: Vec<Client>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(clamp_index(None, clients.len()));

        Self {
            clients,
            table_state,
        }
    }

    /// Swap in a freshly loaded row set, keeping the cursor near where it was
    pub fn replace_clients(&mut self, clients: Vec<Client>) {
        let selected = clamp_index(self.table_state.selected(), clients.len());
        self.clients = clients;
        self.table_state.select(selected);
    }

    pub fn next(&mut self) {
        let i = next_index(self.table_state.selected(), self.clients.len());
        self.table_state.select(i);
    }

    pub fn previous(&mut self) {
        let i = previous_index(self.table_state.selected(), self.clients.len());
        self.table_state.select(i);
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.table_state.selected().and_then(|i| self.clients.get(i))
    }

    pub fn selected_client_id(&self) -> Option<ClientId> {
        self.selected_client().map(|c| c.id)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ClientAction> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(ClientAction::Quit),
            KeyCode::Char('a') => Some(ClientAction::NewClient),
            KeyCode::Char('d') => self.selected_client_id().map(ClientAction::RemoveClient),
            KeyCode::Enter => self.selected_client_id().map(ClientAction::ViewPets),
            KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Up => {
                self.previous();
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ClientAction {
    Quit,
    NewClient,
    RemoveClient(ClientId),
    ViewPets(ClientId),
}

pub fn render_clients<B: Backend>(frame: &mut Frame<B>, state: &mut ClientsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(frame.size());

    let title = Paragraph::new("Vet Clinic App")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let header_cells = HEADERS
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = state
        .clients
        .iter()
        .map(|client| Row::new(client.columns().map(Cell::from)).height(1));

    let table = Table::new(rows)
        .header(header)
        .block(Block::default().title("Clients").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .widths(&[
            Constraint::Percentage(10),
            Constraint::Percentage(20),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
        ]);

    frame.render_stateful_widget(table, chunks[1], &mut state.table_state);

    let buttons_text = if state.selected_client().is_some() {
        "<A> Add Client | <D> Remove Client | <Enter> View Pets | <Q> Quit"
    } else {
        "<A> Add Client | <Q> Quit"
    };

    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));

    frame.render_widget(buttons, chunks[2]);
}

pub fn handle_input(state: &mut ClientsState) -> Result<Option<ClientAction>> {
    Ok(read_key()?.and_then(|key| state.handle_key(key)))
}
