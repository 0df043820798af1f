//! Script runner
//!
//! Replays a sequence of machine commands against a fresh machine whose
//! display and dispenser both write to one output. This is the glue between
//! script input and the core; the machine itself never sees a file.
//!
//! # Error Handling
//!
//! Fatal errors (invalid machine dimensions, unreadable script, failing
//! output) are returned. A command the machine rejects, or a script row that
//! cannot be parsed, is logged and skipped, and the run continues with the
//! next command.

use crate::core::{InventoryAdmin, UserTransaction, VendingMachine};
use crate::io::{Console, ScriptReader};
use crate::types::{MachineCommand, MachineConfig, Shelf, VendingError};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Apply one command to a machine
///
/// Coin and button outcomes are reported through the machine's collaborators,
/// so only errors are returned here.
pub fn apply_command<M>(machine: &mut M, command: MachineCommand) -> Result<(), VendingError>
where
    M: InventoryAdmin + UserTransaction + ?Sized,
{
    match command {
        MachineCommand::AddProduct {
            slot,
            name,
            price_cents,
            quantity,
        } => machine.add_new_product(slot, &name, price_cents, quantity),
        MachineCommand::Refill { slot, quantity } => {
            machine.refill_existing_product(slot, quantity)
        }
        MachineCommand::InsertCoin { cents } => machine.add_user_money(cents).map(|_| ()),
        MachineCommand::PressButton { slot } => machine.button_press(slot).map(|_| ()),
    }
}

/// The built-in demonstration
///
/// An admin stocks two products and refills one, a user checks a price, then
/// buys a 45-cent product with two quarters and receives a nickel in change.
pub fn demo_script() -> Vec<MachineCommand> {
    vec![
        MachineCommand::AddProduct {
            slot: 1,
            name: "Skittles".to_string(),
            price_cents: 45,
            quantity: 2,
        },
        MachineCommand::AddProduct {
            slot: 3,
            name: "Lay's".to_string(),
            price_cents: 80,
            quantity: 7,
        },
        MachineCommand::Refill {
            slot: 1,
            quantity: 3,
        },
        MachineCommand::PressButton { slot: 3 },
        MachineCommand::InsertCoin { cents: 25 },
        MachineCommand::InsertCoin { cents: 25 },
        MachineCommand::PressButton { slot: 1 },
    ]
}

/// Replays scripts against machines of one configuration
#[derive(Debug, Clone, Copy)]
pub struct ScriptRunner {
    config: MachineConfig,
}

impl ScriptRunner {
    pub fn new(config: MachineConfig) -> Self {
        ScriptRunner { config }
    }

    pub fn config(&self) -> MachineConfig {
        self.config
    }

    /// Replay commands against a new machine
    ///
    /// Machine output is written to `output`, one line per notice or
    /// dispense command.
    ///
    /// # Returns
    ///
    /// The machine's inventory after the last command, sorted by slot id
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `output` cannot be
    /// flushed. Errors from individual commands are logged and skipped.
    pub fn run<I>(&self, commands: I, output: &mut dyn Write) -> Result<Vec<Shelf>, VendingError>
    where
        I: IntoIterator<Item = Result<MachineCommand, VendingError>>,
    {
        let console = Console::new(&mut *output);
        let mut machine = VendingMachine::new(self.config, console.clone(), console)?;

        for result in commands {
            let command = match result {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "skipping script row");
                    continue;
                }
            };

            let action = command.action();
            debug!(action, "replaying command");
            if let Err(e) = apply_command(&mut machine, command) {
                warn!(action, error = %e, "command rejected");
            }
        }

        let shelves: Vec<Shelf> = machine.shelves().into_iter().cloned().collect();
        drop(machine);

        output.flush()?;
        Ok(shelves)
    }

    /// Replay a CSV script file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `IoError` if the file cannot be opened, plus
    /// the fatal errors of [`ScriptRunner::run`].
    pub fn run_file(&self, path: &Path, output: &mut dyn Write) -> Result<Vec<Shelf>, VendingError> {
        let reader = ScriptReader::open(path)?;
        self.run(reader, output)
    }

    /// Replay the built-in demonstration
    pub fn run_demo(&self, output: &mut dyn Write) -> Result<Vec<Shelf>, VendingError> {
        self.run(demo_script().into_iter().map(Ok), output)
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Transcript;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_run_demo_output() {
        let mut output = Vec::new();

        let shelves = ScriptRunner::default().run_demo(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "Selected product Lay's $0.80\n\
             Your balance is $0.25\n\
             Your balance is $0.50\n\
             Selected product Skittles $0.45\n\
             Dispensing Skittles from position 1\n\
             Dispensing 5 cents\n"
        );
        assert_eq!(
            shelves,
            vec![Shelf::new(1, "Skittles", 45, 4), Shelf::new(3, "Lay's", 80, 7)]
        );
    }

    #[test]
    fn test_run_skips_failing_commands() {
        let commands = vec![
            Ok(MachineCommand::AddProduct {
                slot: 1,
                name: "Mars".to_string(),
                price_cents: 200,
                quantity: 10,
            }),
            // Over capacity
            Ok(MachineCommand::Refill {
                slot: 1,
                quantity: 1,
            }),
            Err(VendingError::invalid_command(Some(3), "Unknown action 'kick'")),
            Ok(MachineCommand::InsertCoin { cents: 0 }),
            Ok(MachineCommand::PressButton { slot: 1 }),
        ];
        let mut output = Vec::new();

        let shelves = ScriptRunner::new(MachineConfig::new(10, 10))
            .run(commands, &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Selected product Mars $2.00\n"
        );
        assert_eq!(shelves[0].quantity, 10);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut output = Vec::new();

        let result = ScriptRunner::new(MachineConfig::new(0, 10)).run_demo(&mut output);

        assert!(matches!(
            result,
            Err(VendingError::InvalidConstruction { .. })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_file() {
        let file = create_temp_csv(
            "action,slot,name,price,quantity,amount\n\
             add,1,Bounty,15,5,\n\
             coin,,,,,25\n\
             press,1,,,,\n",
        );
        let mut output = Vec::new();

        let shelves = ScriptRunner::new(MachineConfig::new(10, 10))
            .run_file(file.path(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Your balance is $0.25\n\
             Selected product Bounty $0.15\n\
             Dispensing Bounty from position 1\n\
             Dispensing 10 cents\n"
        );
        assert_eq!(shelves, vec![Shelf::new(1, "Bounty", 15, 4)]);
    }

    #[test]
    fn test_run_file_missing() {
        let mut output = Vec::new();

        let result = ScriptRunner::default().run_file(Path::new("nonexistent.csv"), &mut output);

        assert!(matches!(result, Err(VendingError::FileNotFound { .. })));
    }

    #[test]
    fn test_apply_command_through_capabilities() {
        let transcript = Transcript::new();
        let mut machine = VendingMachine::new(
            MachineConfig::new(10, 10),
            transcript.clone(),
            transcript.clone(),
        )
        .unwrap();

        for command in demo_script() {
            apply_command(&mut machine, command).unwrap();
        }

        assert_eq!(transcript.dispensed().len(), 2);
        assert_eq!(machine.balance(), 0);
    }
}
