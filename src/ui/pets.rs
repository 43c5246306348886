use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::error::Result;
use crate::models::{Client, ClientId, Pet, PetId};
use crate::ui::components::selection::{clamp_index, next_index, previous_index};
use crate::ui::read_key;

// Pets belonging to one client
pub struct PetsState {
    owner: Client,
    pets: Vec<Pet>,
    list_state: ListState,
}

impl PetsState {
    pub fn new(owner: Client, pets: Vec<Pet>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(clamp_index(None, pets.len()));

        Self {
            owner,
            pets,
            list_state,
        }
    }

    pub fn replace_pets(&mut self, pets: Vec<Pet>) {
        let selected = clamp_index(self.list_state.selected(), pets.len());
        self.pets = pets;
        self.list_state.select(selected);
    }

    pub fn client_id(&self) -> ClientId {
        self.owner.id
    }

    pub fn selected_pet_id(&self) -> Option<PetId> {
        self.list_state
            .selected()
            .and_then(|i| self.pets.get(i))
            .map(|p| p.id)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<PetAction> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(PetAction::Back),
            KeyCode::Char('a') => Some(PetAction::NewPet(self.client_id())),
            KeyCode::Char('d') => self.selected_pet_id().map(PetAction::RemovePet),
            KeyCode::Enter => self.selected_pet_id().map(PetAction::ViewConsultations),
            KeyCode::Down => {
                let i = next_index(self.list_state.selected(), self.pets.len());
                self.list_state.select(i);
                None
            }
            KeyCode::Up => {
                let i = previous_index(self.list_state.selected(), self.pets.len());
                self.list_state.select(i);
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PetAction {
    Back,
    NewPet(ClientId),
    RemovePet(PetId),
    ViewConsultations(PetId),
}

pub fn render_pets<B: Backend>(frame: &mut Frame<B>, state: &mut PetsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(frame.size());

    let items: Vec<ListItem> = state
        .pets
        .iter()
        .map(|pet| {
            ListItem::new(Spans::from(vec![
                Span::raw(pet.name.as_str()),
                Span::styled(
                    format!("  born {}", pet.birthday),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let title = format!(
        "Pets of {} {} ({})",
        state.owner.first_name, state.owner.surname, state.owner.document
    );
    let pets_list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(pets_list, chunks[0], &mut state.list_state);

    let buttons_text = if state.selected_pet_id().is_some() {
        "<A> Add Pet | <D> Remove Pet | <Enter> Consultations | <Esc> Back"
    } else {
        "<A> Add Pet | <Esc> Back"
    };

    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));

    frame.render_widget(buttons, chunks[1]);
}

pub fn handle_input(state: &mut PetsState) -> Result<Option<PetAction>> {
    Ok(read_key()?.and_then(|key| state.handle_key(key)))
}
