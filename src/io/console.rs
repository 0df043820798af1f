//! Console collaborator
//!
//! Writes one line per notice or dispense command to a shared writer.
//! Write failures are logged and otherwise ignored: the machine never
//! consults its collaborators' results.

use crate::core::traits::{Dispenser, DisplaySink};
use crate::types::{DispenseCommand, Notice};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::Write;
use std::rc::Rc;
use tracing::warn;

/// Line-oriented display and dispenser over one writer
///
/// Clones write to the same underlying writer, so the same console can be
/// handed to a machine as both collaborators.
pub struct Console<W: Write> {
    out: Rc<RefCell<W>>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console {
            out: Rc::new(RefCell::new(out)),
        }
    }

    /// Recover the writer once every clone has been dropped
    pub fn into_inner(self) -> Option<W> {
        Rc::try_unwrap(self.out).ok().map(RefCell::into_inner)
    }

    fn write_line(&self, line: &dyn Display) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", line) {
            warn!(error = %e, "failed to write machine output");
        }
    }
}

impl<W: Write> Clone for Console<W> {
    fn clone(&self) -> Self {
        Console {
            out: Rc::clone(&self.out),
        }
    }
}

impl<W: Write> DisplaySink for Console<W> {
    fn show(&mut self, notice: &Notice) {
        self.write_line(notice);
    }
}

impl<W: Write> Dispenser for Console<W> {
    fn dispense(&mut self, command: &DispenseCommand) {
        self.write_line(command);
    }
}
