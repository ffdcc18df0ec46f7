//! The simulation adapter: maps wire labels to a one-qubit circuit, runs it
//! on the engine, and maps the measured bit back to a ket label.

use bluff_sim::{Circuit, Gate, SimError, run_and_measure};
use bluff_types::{GateKind, StateLabel};

/// Applies one gate to an optional initial basis-state label and returns the
/// resulting label. Never fails: engine errors become the `|error>` sentinel.
pub fn apply_gate(initial_state: Option<&str>, gate: &str) -> StateLabel {
    let prep = basis_prep(initial_state);

    let kind = GateKind::parse(gate);
    if kind.is_none() {
        tracing::warn!(gate, "unrecognized gate name, treating as identity");
    }

    // Hadamard on a basis state has a closed-form result; skip the engine.
    if kind == Some(GateKind::Hadamard) {
        let label = if prep == 0 {
            StateLabel::Plus
        } else {
            StateLabel::Minus
        };
        tracing::debug!(gate, prep, %label, "analytic shortcut");
        return label;
    }

    measurement_label(simulate(prep, kind))
}

/// Maps the engine's measurement result to a response label. Engine errors
/// never propagate to the caller; they become the `|error>` sentinel.
fn measurement_label(result: Result<u8, SimError>) -> StateLabel {
    match result {
        Ok(0) => StateLabel::Zero,
        Ok(_) => StateLabel::One,
        Err(err) => {
            tracing::error!(error = %err, "simulation failed");
            StateLabel::Error
        }
    }
}

/// Resolves the declared initial state to a basis preparation bit.
/// Superposition labels collapse to their basis counterpart (|+> -> 0,
/// |-> -> 1) before any gate is applied; anything unparseable counts as
/// unset, i.e. |0>.
fn basis_prep(initial_state: Option<&str>) -> u8 {
    match initial_state {
        None => 0,
        Some(raw) => match StateLabel::parse(raw) {
            Some(StateLabel::Zero) | Some(StateLabel::Plus) => 0,
            Some(StateLabel::One) | Some(StateLabel::Minus) => 1,
            Some(StateLabel::Error) | None => {
                tracing::warn!(initial_state = raw, "unrecognized initial state, assuming |0>");
                0
            }
        },
    }
}

/// Builds the one-qubit circuit (X preparation + requested gate) and asks
/// the engine for the measured bit.
fn simulate(prep: u8, kind: Option<GateKind>) -> Result<u8, SimError> {
    let mut circuit = Circuit::new(1);
    if prep == 1 {
        circuit.push(Gate::X { qubit: 0 })?;
    }
    let gate = match kind {
        Some(GateKind::PauliX) => Gate::X { qubit: 0 },
        Some(GateKind::PauliZ) => Gate::Z { qubit: 0 },
        Some(GateKind::Hadamard) => Gate::H { qubit: 0 },
        Some(GateKind::Identity) | None => Gate::I { qubit: 0 },
    };
    circuit.push(gate)?;
    run_and_measure(&circuit, 0)
}
