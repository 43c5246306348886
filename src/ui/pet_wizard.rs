use crossterm::event::KeyCode;
use tui::{backend::Backend, Frame};

use crate::error::Result;
use crate::models::{CalendarDate, ClientId, NewPet};
use crate::ui::components::prompt::{render_prompt, PromptChain, PromptOutcome, PromptStep};
use crate::ui::read_key;

#[derive(Debug)]
pub enum PetWizardAction {
    Cancel,
    Save(NewPet),
}

pub struct PetWizardState {
    client_id: ClientId,
    chain: PromptChain,
}

impl PetWizardState {
    pub fn new(client_id: ClientId) -> Self {
        let steps = vec![
            PromptStep::text("Enter Name"),
            PromptStep::validated("Enter Birthday (YYYYMMDD)", |v| {
                CalendarDate::parse(v).map(|_| ())
            }),
        ];

        Self {
            client_id,
            chain: PromptChain::new("Add Pet", steps),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<PetWizardAction> {
        match self.chain.handle_key(key) {
            PromptOutcome::Pending => None,
            PromptOutcome::Cancelled => Some(PetWizardAction::Cancel),
            PromptOutcome::Completed => {
                match NewPet::new(self.client_id, &self.chain.value(0), &self.chain.value(1)) {
                    Ok(pet) => Some(PetWizardAction::Save(pet)),
                    Err(e) => {
                        self.chain.set_error(e.to_string());
                        None
                    }
                }
            }
        }
    }
}

pub fn render_pet_wizard<B: Backend>(f: &mut Frame<B>, state: &PetWizardState) {
    render_prompt(f, &state.chain);
}

pub fn handle_input(state: &mut PetWizardState) -> Result<Option<PetWizardAction>> {
    Ok(read_key()?.and_then(|key| state.handle_key(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saves_pet_for_owner() {
        let owner = ClientId::new(7).unwrap();
        let mut state = PetWizardState::new(owner);
        for c in "Rex".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Enter);
        for c in "20200202".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        match state.handle_key(KeyCode::Enter) {
            Some(PetWizardAction::Save(pet)) => {
                assert_eq!(pet.client_id, owner);
                assert_eq!(pet.name, "Rex");
                assert_eq!(pet.birthday.to_string(), "20200202");
            }
            other => panic!("expected save, got {:?}", other),
        }
    }
}
