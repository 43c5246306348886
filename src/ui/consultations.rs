use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::error::Result;
use crate::models::{Consultation, ConsultationId, Pet, PetId};
use crate::ui::components::selection::{clamp_index, next_index, previous_index};
use crate::ui::read_key;

// Visit history of one pet
pub struct ConsultationsState {
    pet: Pet,
    consultations: Vec<Consultation>,
    table_state: TableState,
}

impl ConsultationsState {
    pub fn new(pet: Pet, consultations: Vec<Consultation>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(clamp_index(None, consultations.len()));

        Self {
            pet,
            consultations,
            table_state,
        }
    }

    pub fn replace_consultations(&mut self, consultations: Vec<Consultation>) {
        let selected = clamp_index(self.table_state.selected(), consultations.len());
        self.consultations = consultations;
        self.table_state.select(selected);
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn selected_consultation_id(&self) -> Option<ConsultationId> {
        self.table_state
            .selected()
            .and_then(|i| self.consultations.get(i))
            .map(|c| c.id)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ConsultationAction> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(ConsultationAction::Back),
            KeyCode::Char('a') => Some(ConsultationAction::NewConsultation(self.pet.id)),
            KeyCode::Char('d') => self
                .selected_consultation_id()
                .map(ConsultationAction::RemoveConsultation),
            KeyCode::Down => {
                let i = next_index(self.table_state.selected(), self.consultations.len());
                self.table_state.select(i);
                None
            }
            KeyCode::Up => {
                let i = previous_index(self.table_state.selected(), self.consultations.len());
                self.table_state.select(i);
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConsultationAction {
    Back,
    NewConsultation(PetId),
    RemoveConsultation(ConsultationId),
}

pub fn render_consultations<B: Backend>(frame: &mut Frame<B>, state: &mut ConsultationsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(frame.size());

    let header_cells = ["Date", "Description"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = state.consultations.iter().map(|visit| {
        Row::new(vec![
            Cell::from(visit.date.to_string()),
            Cell::from(visit.description.as_str()),
        ])
    });

    let title = format!("Consultations for {}", state.pet.name);
    let table = Table::new(rows)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .widths(&[Constraint::Percentage(20), Constraint::Percentage(80)]);

    frame.render_stateful_widget(table, chunks[0], &mut state.table_state);

    let buttons_text = if state.selected_consultation_id().is_some() {
        "<A> Add Consultation | <D> Remove Consultation | <Esc> Back"
    } else {
        "<A> Add Consultation | <Esc> Back"
    };

    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));

    frame.render_widget(buttons, chunks[1]);
}

pub fn handle_input(state: &mut ConsultationsState) -> Result<Option<ConsultationAction>> {
    Ok(read_key()?.and_then(|key| state.handle_key(key)))
}
