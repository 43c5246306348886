use chrono::{Local, NaiveDate};
use crossterm::event::KeyCode;
use tui::{backend::Backend, Frame};

use crate::error::Result;
use crate::models::{CalendarDate, NewConsultation, PetId};
use crate::ui::components::prompt::{render_prompt, PromptChain, PromptOutcome, PromptStep};
use crate::ui::read_key;

#[derive(Debug)]
pub enum ConsultationWizardAction {
    Cancel,
    Save(NewConsultation),
}

pub struct ConsultationWizardState {
    pet_id: PetId,
    chain: PromptChain,
}

impl ConsultationWizardState {
    /// Start with today's date in the date editor
    pub fn new(pet_id: PetId) -> Self {
        Self::starting_on(pet_id, Local::now().date_naive())
    }

    pub fn starting_on(pet_id: PetId, date: NaiveDate) -> Self {
        let steps = vec![
            PromptStep::date("Date", date),
            PromptStep::text("Description"),
        ];

        Self {
            pet_id,
            chain: PromptChain::new("Add Consultation", steps),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ConsultationWizardAction> {
        match self.chain.handle_key(key) {
            PromptOutcome::Pending => None,
            PromptOutcome::Cancelled => Some(ConsultationWizardAction::Cancel),
            PromptOutcome::Completed => match CalendarDate::parse(&self.chain.value(0)) {
                Ok(date) => Some(ConsultationWizardAction::Save(NewConsultation {
                    pet_id: self.pet_id,
                    date,
                    description: self.chain.value(1),
                })),
                Err(e) => {
                    self.chain.set_error(e.to_string());
                    None
                }
            },
        }
    }
}

pub fn render_consultation_wizard<B: Backend>(f: &mut Frame<B>, state: &ConsultationWizardState) {
    render_prompt(f, &state.chain);
}

pub fn handle_input(state: &mut ConsultationWizardState) -> Result<Option<ConsultationWizardAction>> {
    Ok(read_key()?.and_then(|key| state.handle_key(key)))
}
