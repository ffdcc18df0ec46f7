use crate::circuit::Circuit;
use crate::gates::Gate;
use crate::state::StateVector;
use rand::thread_rng;
use std::collections::HashMap;

/// Errors the engine reports to callers. Kept small so callers don't depend
/// on internals.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("qubit index {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    #[error("register must have at least one qubit")]
    EmptyRegister,
    #[error("measurement sampling failed: {0}")]
    Sampling(String),
}

/// Dense statevector simulator.
pub struct StatevectorSimulator {
    num_qubits: usize,
    state: StateVector,
}

impl StatevectorSimulator {
    pub fn new(num_qubits: usize) -> Result<Self, SimError> {
        if num_qubits == 0 {
            return Err(SimError::EmptyRegister);
        }
        Ok(Self {
            num_qubits,
            state: StateVector::new(num_qubits),
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn statevector(&self) -> &StateVector {
        &self.state
    }

    /// Runs a circuit from a fresh |0...0> state, resizing the register if
    /// the circuit is a different width.
    pub fn run(&mut self, circuit: &Circuit) -> Result<(), SimError> {
        if circuit.num_qubits == 0 {
            return Err(SimError::EmptyRegister);
        }
        if self.num_qubits != circuit.num_qubits {
            self.num_qubits = circuit.num_qubits;
            self.state = StateVector::new(circuit.num_qubits);
        } else {
            self.state.reset();
        }
        for gate in &circuit.gates {
            self.apply_gate(gate)?;
        }
        Ok(())
    }

    fn apply_gate(&mut self, gate: &Gate) -> Result<(), SimError> {
        if gate.max_qubit() >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit: gate.max_qubit(),
                num_qubits: self.num_qubits,
            });
        }
        match *gate {
            Gate::I { .. } => {}
            Gate::CX { control, target } => self.state.apply_cx(control, target),
            Gate::H { qubit } | Gate::X { qubit } | Gate::Y { qubit } | Gate::Z { qubit } => {
                // matrix() is Some for every single-qubit variant
                if let Some(m) = gate.matrix() {
                    self.state.apply_single_qubit_gate(m, qubit);
                }
            }
        }
        Ok(())
    }

    /// Z-basis measurement of one qubit; collapses the state.
    pub fn measure(&mut self, qubit: usize) -> Result<u8, SimError> {
        if qubit >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(self.state.measure_qubit(qubit, &mut thread_rng()))
    }

    /// Samples computational-basis shots from the current state without
    /// collapsing it. Keys are bitstrings, most significant qubit first.
    pub fn sample(&self, shots: u32) -> Result<HashMap<String, u32>, SimError> {
        use rand::distributions::{Distribution, WeightedIndex};

        let probabilities: Vec<f64> = self.state.amplitudes.iter().map(|a| a.norm_sqr()).collect();
        let dist = WeightedIndex::new(&probabilities).map_err(|e| SimError::Sampling(e.to_string()))?;

        let mut rng = thread_rng();
        let mut counts = HashMap::new();
        let width = self.num_qubits;
        for _ in 0..shots {
            let idx = dist.sample(&mut rng);
            let bitstring = format!("{idx:0width$b}");
            *counts.entry(bitstring).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Runs `circuit` on a fresh simulator and measures one qubit. This is the
/// whole surface the game backend needs.
pub fn run_and_measure(circuit: &Circuit, qubit: usize) -> Result<u8, SimError> {
    let mut sim = StatevectorSimulator::new(circuit.num_qubits)?;
    sim.run(circuit)?;
    sim.measure(qubit)
}
