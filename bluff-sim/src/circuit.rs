use crate::gates::Gate;
use crate::simulator::SimError;

/// An ordered list of gates on a fixed-width register.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub num_qubits: usize,
    pub gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Appends a gate, rejecting qubit indices outside the register.
    pub fn push(&mut self, gate: Gate) -> Result<(), SimError> {
        if gate.max_qubit() >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit: gate.max_qubit(),
                num_qubits: self.num_qubits,
            });
        }
        self.gates.push(gate);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejects_out_of_range_qubits() {
        let mut circuit = Circuit::new(1);
        assert!(circuit.push(Gate::H { qubit: 0 }).is_ok());
        assert!(matches!(
            circuit.push(Gate::X { qubit: 1 }),
            Err(SimError::QubitOutOfRange { qubit: 1, num_qubits: 1 })
        ));
        assert!(matches!(
            circuit.push(Gate::CX { control: 0, target: 2 }),
            Err(SimError::QubitOutOfRange { qubit: 2, .. })
        ));
        assert_eq!(circuit.gates.len(), 1);
    }
}
