//! Unsigned programmable transaction

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Argument, CallArg, Command, MoveCall, TransactionDescriptor};
use crate::shared::errors::TransactionError;

/// Version tag of the serialized transaction data
pub const TRANSACTION_DATA_VERSION: u8 = 2;

/// Unsigned transaction: an input table plus the commands that use it.
/// Sender and gas budget are optional and normally filled in by the signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTransaction")]
pub struct Transaction {
    version: u8,
    sender: Option<String>,
    gas_budget: Option<u64>,
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    pub fn new() -> Self {
        Self {
            version: TRANSACTION_DATA_VERSION,
            sender: None,
            gas_budget: None,
            inputs: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn set_sender(&mut self, sender: impl Into<String>) {
        self.sender = Some(sender.into());
    }

    pub fn set_gas_budget(&mut self, gas_budget: u64) {
        self.gas_budget = Some(gas_budget);
    }

    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn gas_budget(&self) -> Option<u64> {
        self.gas_budget
    }

    pub fn inputs(&self) -> &[CallArg] {
        &self.inputs
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn move_calls(&self) -> impl Iterator<Item = &MoveCall> {
        self.commands.iter().map(|command| match command {
            Command::MoveCall(call) => call,
        })
    }

    /// Reference an existing object by id. Referencing the same id again
    /// returns the input already registered for it.
    pub fn object(&mut self, id: &str) -> Result<Argument, TransactionError> {
        if id.trim().is_empty() {
            return Err(TransactionError::InvalidArgumentEncoding(
                "object id is empty".to_string(),
            ));
        }

        if let Some(index) = self.inputs.iter().position(|input| input.object_id() == id) {
            return Ok(Argument::Input(index_u16(index, "inputs")?));
        }

        let index = index_u16(self.inputs.len(), "inputs")?;
        self.inputs.push(CallArg::UnresolvedObject {
            object_id: id.to_string(),
        });
        debug!(object_id = id, input = index, "registered object input");

        Ok(Argument::Input(index))
    }

    /// Append a Move call and return the handle of its result
    pub fn move_call(
        &mut self,
        target: &str,
        arguments: Vec<Argument>,
    ) -> Result<Argument, TransactionError> {
        for argument in &arguments {
            self.check_argument(argument)?;
        }

        let index = index_u16(self.commands.len(), "commands")?;
        let call = MoveCall::from_target(target, arguments)?;
        debug!(
            call_target = %call.target(),
            arguments = call.arguments.len(),
            command = index,
            "registered move call"
        );
        self.commands.push(Command::MoveCall(call));

        Ok(Argument::Result(index))
    }

    fn check_argument(&self, argument: &Argument) -> Result<(), TransactionError> {
        let in_range = match *argument {
            Argument::GasCoin => true,
            Argument::Input(i) => usize::from(i) < self.inputs.len(),
            Argument::Result(i) | Argument::NestedResult(i, _) => usize::from(i) < self.commands.len(),
        };

        if in_range {
            Ok(())
        } else {
            Err(TransactionError::Construction(format!(
                "argument {:?} does not refer to an existing input or command",
                argument
            )))
        }
    }
}

/// Transaction as read off the wire; rebuilt through the same checks as
/// [`Transaction::object`] and [`Transaction::move_call`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    version: u8,
    sender: Option<String>,
    gas_budget: Option<u64>,
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = TransactionError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        if raw.version != TRANSACTION_DATA_VERSION {
            return Err(TransactionError::Construction(format!(
                "unsupported transaction data version: {}",
                raw.version
            )));
        }

        let mut tx = Transaction::new();
        tx.sender = raw.sender;
        tx.gas_budget = raw.gas_budget;

        for input in raw.inputs {
            if input.object_id().trim().is_empty() {
                return Err(TransactionError::InvalidArgumentEncoding(
                    "object id is empty".to_string(),
                ));
            }
            index_u16(tx.inputs.len(), "inputs")?;
            tx.inputs.push(input);
        }

        for command in raw.commands {
            let Command::MoveCall(call) = &command;
            for argument in &call.arguments {
                tx.check_argument(argument)?;
            }
            index_u16(tx.commands.len(), "commands")?;
            tx.commands.push(command);
        }

        Ok(tx)
    }
}

fn index_u16(index: usize, table: &str) -> Result<u16, TransactionError> {
    u16::try_from(index)
        .map_err(|_| TransactionError::Construction(format!("too many {}: {}", table, index)))
}

impl TransactionDescriptor for Transaction {
    type Argument = Argument;
    type Error = TransactionError;

    fn empty() -> Result<Self, Self::Error> {
        Ok(Self::new())
    }

    fn object(&mut self, id: &str) -> Result<Self::Argument, Self::Error> {
        Transaction::object(self, id)
    }

    fn move_call(
        &mut self,
        target: &str,
        arguments: Vec<Self::Argument>,
    ) -> Result<Self::Argument, Self::Error> {
        Transaction::move_call(self, target, arguments)
    }
}
