pub mod client_wizard;
pub mod clients;
pub mod components;
pub mod consultation_wizard;
pub mod consultations;
pub mod pet_wizard;
pub mod pets;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::error::Result;

/// Block until the next key press; other terminal events yield `None`.
pub fn read_key() -> Result<Option<KeyCode>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}
