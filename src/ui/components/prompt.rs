use chrono::NaiveDate;
use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::error::Result;
use crate::ui::components::date_input::DateInputState;

/// Check run on a step's value before the chain moves past it
pub type Validator = fn(&str) -> Result<()>;

enum StepInput {
    Text(String),
    Date(DateInputState),
}

pub struct PromptStep {
    label: &'static str,
    input: StepInput,
    validator: Option<Validator>,
}

impl PromptStep {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            input: StepInput::Text(String::new()),
            validator: None,
        }
    }

    pub fn validated(label: &'static str, validator: Validator) -> Self {
        Self {
            validator: Some(validator),
            ..Self::text(label)
        }
    }

    pub fn date(label: &'static str, initial: NaiveDate) -> Self {
        Self {
            label,
            input: StepInput::Date(DateInputState::new(initial)),
            validator: None,
        }
    }

    pub fn value(&self) -> String {
        match &self.input {
            StepInput::Text(text) => text.clone(),
            StepInput::Date(date) => date.date().to_string(),
        }
    }

    fn display(&self, active: bool) -> String {
        match &self.input {
            StepInput::Text(text) if active => format!("{}|", text),
            StepInput::Text(text) => text.clone(),
            StepInput::Date(date) if active => date.get_display_string(),
            StepInput::Date(date) => date.date().to_string(),
        }
    }

    fn edit(&mut self, key: KeyCode) {
        match &mut self.input {
            StepInput::Text(text) => match key {
                KeyCode::Char(c) => text.push(c),
                KeyCode::Backspace => {
                    text.pop();
                }
                _ => {}
            },
            StepInput::Date(date) => date.handle_key(key),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Cancelled,
    Completed,
}

/// A dialog that asks for one field at a time.
///
/// `Esc` abandons the whole chain from any step. `Enter` accepts the current
/// step once its validator passes; accepting the last step completes the
/// chain.
pub struct PromptChain {
    title: &'static str,
    steps: Vec<PromptStep>,
    current: usize,
    error: Option<String>,
}

impl PromptChain {
    pub fn new(title: &'static str, steps: Vec<PromptStep>) -> Self {
        Self {
            title,
            steps,
            current: 0,
            error: None,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn value(&self, index: usize) -> String {
        self.steps.get(index).map(PromptStep::value).unwrap_or_default()
    }

    pub fn handle_key(&mut self, key: KeyCode) -> PromptOutcome {
        let Some(step) = self.steps.get_mut(self.current) else {
            return PromptOutcome::Completed;
        };

        match key {
            KeyCode::Esc => PromptOutcome::Cancelled,
            KeyCode::Enter => {
                if let Some(validate) = step.validator {
                    if let Err(e) = validate(&step.value()) {
                        self.error = Some(e.to_string());
                        return PromptOutcome::Pending;
                    }
                }
                self.error = None;
                if self.current + 1 == self.steps.len() {
                    PromptOutcome::Completed
                } else {
                    self.current += 1;
                    PromptOutcome::Pending
                }
            }
            other => {
                step.edit(other);
                PromptOutcome::Pending
            }
        }
    }
}

pub fn render_prompt<B: Backend>(f: &mut Frame<B>, chain: &PromptChain) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new(chain.title)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Only steps up to the current one are shown, as in a dialog sequence.
    let items: Vec<ListItem> = chain
        .steps
        .iter()
        .take(chain.current + 1)
        .enumerate()
        .map(|(i, step)| {
            let active = i == chain.current;
            let label_style = if active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let value_style = if active {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Spans::from(vec![
                Span::styled(format!("{}: ", step.label), label_style),
                Span::styled(step.display(active), value_style),
            ]))
        })
        .collect();

    let form = List::new(items).block(Block::default().borders(Borders::ALL).title("Details"));
    f.render_widget(form, chunks[1]);

    let error = Paragraph::new(chain.error().unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(error, chunks[2]);

    let help = Paragraph::new("Enter - Accept | Esc - Cancel")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
