use crossterm::event::KeyCode;
use tui::{backend::Backend, Frame};

use crate::error::Result;
use crate::models::{CalendarDate, NewClient};
use crate::ui::components::prompt::{render_prompt, PromptChain, PromptOutcome, PromptStep};
use crate::ui::read_key;

#[derive(Debug)]
pub enum ClientWizardAction {
    Cancel,
    Save(NewClient),
}

const DOCUMENT: usize = 0;
const SURNAME: usize = 1;
const FIRST_NAME: usize = 2;
const PATRONYMIC: usize = 3;
const BIRTHDAY: usize = 4;

pub struct ClientWizardState {
    chain: PromptChain,
}

impl Default for ClientWizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientWizardState {
    pub fn new() -> Self {
        let steps = vec![
            PromptStep::text("Enter Document"),
            PromptStep::text("Enter Surname"),
            PromptStep::text("Enter Firstname"),
            PromptStep::text("Enter Patronymic"),
            PromptStep::validated("Enter Birthday (YYYYMMDD)", |v| {
                CalendarDate::parse(v).map(|_| ())
            }),
        ];

        Self {
            chain: PromptChain::new("Add Client", steps),
        }
    }

    pub fn chain(&self) -> &PromptChain {
        &self.chain
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ClientWizardAction> {
        match self.chain.handle_key(key) {
            PromptOutcome::Pending => None,
            PromptOutcome::Cancelled => Some(ClientWizardAction::Cancel),
            PromptOutcome::Completed => {
                let chain = &self.chain;
                match NewClient::new(
                    &chain.value(DOCUMENT),
                    &chain.value(SURNAME),
                    &chain.value(FIRST_NAME),
                    &chain.value(PATRONYMIC),
                    &chain.value(BIRTHDAY),
                ) {
                    Ok(client) => Some(ClientWizardAction::Save(client)),
                    Err(e) => {
                        self.chain.set_error(e.to_string());
                        None
                    }
                }
            }
        }
    }
}

pub fn render_client_wizard<B: Backend>(f: &mut Frame<B>, state: &ClientWizardState) {
    render_prompt(f, state.chain());
}

pub fn handle_input(state: &mut ClientWizardState) -> Result<Option<ClientWizardAction>> {
    Ok(read_key()?.and_then(|key| state.handle_key(key)))
}
