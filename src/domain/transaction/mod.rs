//! Transaction domain - programmable transaction model and builder seam

mod transaction_builder;

pub use transaction_builder::{Transaction, TRANSACTION_DATA_VERSION};

use serde::{Deserialize, Serialize};

use crate::shared::errors::TransactionError;

/// Separator between package, module and function in a call target
pub const TARGET_SEPARATOR: &str = "::";

/// Reference to a value available to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Argument {
    /// The coin paying for gas
    GasCoin,
    /// Index into the transaction inputs
    Input(u16),
    /// Result of an earlier command
    Result(u16),
    /// One value of an earlier command returning several
    NestedResult(u16, u16),
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// Object given by id only; version and digest are resolved by the signer
    #[serde(rename_all = "camelCase")]
    UnresolvedObject { object_id: String },
}

impl CallArg {
    pub fn object_id(&self) -> &str {
        match self {
            CallArg::UnresolvedObject { object_id } => object_id,
        }
    }
}

/// Call of a Move entry function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMoveCall")]
pub struct MoveCall {
    pub package: String,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Argument>,
}

impl MoveCall {
    /// Split `package::module::function` from the right, so the package part
    /// is kept verbatim whatever it contains.
    pub fn from_target(target: &str, arguments: Vec<Argument>) -> Result<Self, TransactionError> {
        let mut parts = target.rsplitn(3, TARGET_SEPARATOR);
        let function = parts.next().unwrap_or_default();
        let module = parts.next();
        let package = parts.next();

        match (package, module) {
            (Some(package), Some(module)) if !module.is_empty() && !function.is_empty() => Ok(Self {
                package: package.to_string(),
                module: module.to_string(),
                function: function.to_string(),
                type_arguments: Vec::new(),
                arguments,
            }),
            _ => Err(TransactionError::Construction(format!(
                "malformed move call target: {:?}",
                target
            ))),
        }
    }

    pub fn target(&self) -> String {
        [self.package.as_str(), self.module.as_str(), self.function.as_str()].join(TARGET_SEPARATOR)
    }
}

/// Move call as read off the wire, before the target is checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMoveCall {
    package: String,
    module: String,
    function: String,
    #[serde(default)]
    type_arguments: Vec<String>,
    arguments: Vec<Argument>,
}

impl TryFrom<RawMoveCall> for MoveCall {
    type Error = TransactionError;

    fn try_from(raw: RawMoveCall) -> Result<Self, Self::Error> {
        let target = [raw.package.as_str(), raw.module.as_str(), raw.function.as_str()]
            .join(TARGET_SEPARATOR);
        let mut call = MoveCall::from_target(&target, raw.arguments)?;

        // module or function holding a separator would split differently
        if call.module != raw.module || call.function != raw.function {
            return Err(TransactionError::Construction(format!(
                "malformed move call target: {:?}",
                target
            )));
        }

        call.type_arguments = raw.type_arguments;
        Ok(call)
    }
}

/// Command executed by the transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveCall(MoveCall),
}

/// Narrow builder interface over a transaction SDK
///
/// Entry-point helpers are written against this trait only, so any binding
/// that can create an empty descriptor, turn an id into an object argument
/// and register a call can be used in place of [`Transaction`].
pub trait TransactionDescriptor: Sized {
    type Argument;
    type Error;

    /// Create an empty descriptor
    fn empty() -> Result<Self, Self::Error>;

    /// Encode an object id as a call argument
    fn object(&mut self, id: &str) -> Result<Self::Argument, Self::Error>;

    /// Append a call to `target` and return a handle to its result
    fn move_call(
        &mut self,
        target: &str,
        arguments: Vec<Self::Argument>,
    ) -> Result<Self::Argument, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_round_trip() {
        let call = MoveCall::from_target("0xABC::arena::create_arena", vec![]).unwrap();
        assert_eq!(call.package, "0xABC");
        assert_eq!(call.module, "arena");
        assert_eq!(call.function, "create_arena");
        assert_eq!(call.target(), "0xABC::arena::create_arena");
    }

    #[test]
    fn test_target_keeps_odd_package_verbatim() {
        let call = MoveCall::from_target("::arena::create_arena", vec![]).unwrap();
        assert_eq!(call.package, "");
        assert_eq!(call.target(), "::arena::create_arena");

        let call = MoveCall::from_target("a::b::arena::create_arena", vec![]).unwrap();
        assert_eq!(call.package, "a::b");
        assert_eq!(call.target(), "a::b::arena::create_arena");
    }

    #[test]
    fn test_malformed_targets() {
        for target in ["", "create_arena", "arena::create_arena", "0x1::arena::", "0x1::::create_arena"] {
            let err = MoveCall::from_target(target, vec![]).unwrap_err();
            assert!(matches!(err, TransactionError::Construction(_)), "{}", target);
        }
    }

    #[test]
    fn test_deserialize_rejects_malformed_move_call() {
        for value in [
            serde_json::json!({ "package": "", "module": "", "function": "", "typeArguments": [], "arguments": [] }),
            serde_json::json!({ "package": "0x1", "module": "arena", "function": "", "arguments": [] }),
            serde_json::json!({ "package": "0x1", "module": "a::b", "function": "create_arena", "arguments": [] }),
        ] {
            assert!(serde_json::from_value::<MoveCall>(value.clone()).is_err(), "{}", value);
        }
    }

    #[test]
    fn test_deserialize_move_call() {
        let call: MoveCall = serde_json::from_value(serde_json::json!({
            "package": "",
            "module": "arena",
            "function": "create_arena",
            "typeArguments": ["0x2::sui::SUI"],
            "arguments": [{ "Input": 0 }]
        }))
        .unwrap();

        assert_eq!(call.target(), "::arena::create_arena");
        assert_eq!(call.type_arguments, vec!["0x2::sui::SUI".to_string()]);
        assert_eq!(call.arguments, vec![Argument::Input(0)]);
    }

    #[test]
    fn test_argument_json_shape() {
        assert_eq!(serde_json::to_value(Argument::Input(0)).unwrap(), serde_json::json!({ "Input": 0 }));
        assert_eq!(serde_json::to_value(Argument::GasCoin).unwrap(), serde_json::json!("GasCoin"));
        assert_eq!(
            serde_json::to_value(Argument::NestedResult(1, 2)).unwrap(),
            serde_json::json!({ "NestedResult": [1, 2] })
        );
    }
}
