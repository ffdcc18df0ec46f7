//! Shared wire types for the Quantum Bluff simulation service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of state labels the game deals in, in ket notation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateLabel {
    #[serde(rename = "|0>")]
    Zero,
    #[serde(rename = "|1>")]
    One,
    #[serde(rename = "|+>")]
    Plus,
    #[serde(rename = "|->")]
    Minus,
    #[serde(rename = "|error>")]
    Error,
}

impl StateLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateLabel::Zero => "|0>",
            StateLabel::One => "|1>",
            StateLabel::Plus => "|+>",
            StateLabel::Minus => "|->",
            StateLabel::Error => "|error>",
        }
    }

    /// Parses a label from the wire. The game server sends bare `0`/`1`;
    /// clients sometimes echo full ket labels back, so both forms are
    /// accepted. `|error>` is a response-only sentinel and does not parse.
    pub fn parse(s: &str) -> Option<StateLabel> {
        match s.trim() {
            "0" | "|0>" => Some(StateLabel::Zero),
            "1" | "|1>" => Some(StateLabel::One),
            "+" | "|+>" => Some(StateLabel::Plus),
            "-" | "|->" => Some(StateLabel::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-qubit gates the simulation endpoint recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    Identity,
    PauliX,
    PauliZ,
    Hadamard,
}

impl GateKind {
    /// Case-insensitive gate name lookup. Accepts the one-letter card names
    /// (`I`, `X`, `Z`, `H`) as well as the long forms.
    pub fn parse(s: &str) -> Option<GateKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "id" | "identity" => Some(GateKind::Identity),
            "x" | "pauli-x" | "pauli_x" | "paulix" => Some(GateKind::PauliX),
            "z" | "pauli-z" | "pauli_z" | "pauliz" => Some(GateKind::PauliZ),
            "h" | "hadamard" => Some(GateKind::Hadamard),
            _ => None,
        }
    }
}

/// Body of `POST /simulate`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimulateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<String>,
    pub gate: String,
}

/// Response of `POST /simulate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SimulateResponse {
    pub final_state: StateLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_as_ket_strings() {
        let json = serde_json::to_string(&SimulateResponse {
            final_state: StateLabel::Plus,
        })
        .unwrap();
        assert_eq!(json, r#"{"final_state":"|+>"}"#);
    }

    #[test]
    fn label_parse_accepts_bare_and_ket_forms() {
        assert_eq!(StateLabel::parse("0"), Some(StateLabel::Zero));
        assert_eq!(StateLabel::parse("|1>"), Some(StateLabel::One));
        assert_eq!(StateLabel::parse("+"), Some(StateLabel::Plus));
        assert_eq!(StateLabel::parse("|->"), Some(StateLabel::Minus));
        assert_eq!(StateLabel::parse("|error>"), None);
        assert_eq!(StateLabel::parse("2"), None);
    }

    #[test]
    fn gate_names_are_case_insensitive() {
        assert_eq!(GateKind::parse("H"), Some(GateKind::Hadamard));
        assert_eq!(GateKind::parse("hadamard"), Some(GateKind::Hadamard));
        assert_eq!(GateKind::parse("Pauli-X"), Some(GateKind::PauliX));
        assert_eq!(GateKind::parse("pauli_z"), Some(GateKind::PauliZ));
        assert_eq!(GateKind::parse("ID"), Some(GateKind::Identity));
        assert_eq!(GateKind::parse("toffoli"), None);
    }

    #[test]
    fn request_initial_state_is_optional() {
        let req: SimulateRequest = serde_json::from_str(r#"{"gate":"H"}"#).unwrap();
        assert!(req.initial_state.is_none());
        assert_eq!(req.gate, "H");
    }
}
