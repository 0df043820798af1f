//! In-memory collaborator
//!
//! A [`Transcript`] records every notice and dispense command a machine
//! sends, in order. Clones share the same log, so one transcript can serve
//! as both the display sink and the dispenser.

use crate::core::traits::{Dispenser, DisplaySink};
use crate::types::{DispenseCommand, Notice};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineEvent {
    Notice(Notice),
    Dispense(DispenseCommand),
}

impl MachineEvent {
    /// The line a console collaborator would print for this event
    pub fn line(&self) -> String {
        match self {
            MachineEvent::Notice(notice) => notice.to_string(),
            MachineEvent::Dispense(command) => command.to_string(),
        }
    }
}

/// Shared, append-only log of machine events
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    events: Rc<RefCell<Vec<MachineEvent>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event recorded so far
    pub fn events(&self) -> Vec<MachineEvent> {
        self.events.borrow().clone()
    }

    /// Only the display notices
    pub fn notices(&self) -> Vec<Notice> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                MachineEvent::Notice(notice) => Some(notice.clone()),
                MachineEvent::Dispense(_) => None,
            })
            .collect()
    }

    /// Only the dispense commands
    pub fn dispensed(&self) -> Vec<DispenseCommand> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                MachineEvent::Dispense(command) => Some(command.clone()),
                MachineEvent::Notice(_) => None,
            })
            .collect()
    }

    /// Events rendered with the default console wording
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(MachineEvent::line).collect()
    }

    /// Forget all recorded events
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DisplaySink for Transcript {
    fn show(&mut self, notice: &Notice) {
        self.events
            .borrow_mut()
            .push(MachineEvent::Notice(notice.clone()));
    }
}

impl Dispenser for Transcript {
    fn dispense(&mut self, command: &DispenseCommand) {
        self.events
            .borrow_mut()
            .push(MachineEvent::Dispense(command.clone()));
    }
}
