use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

/// 2x2 unitary acting on a single qubit.
pub type GateMatrix = [[Complex<f64>; 2]; 2];

pub const IDENTITY: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
];

pub const HADAMARD: GateMatrix = [
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(FRAC_1_SQRT_2, 0.0),
    ],
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(-FRAC_1_SQRT_2, 0.0),
    ],
];

pub const PAULI_X: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Y: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Z: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
];

/// A gate placed on specific qubits of a register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    I { qubit: usize },
    H { qubit: usize },
    X { qubit: usize },
    Y { qubit: usize },
    Z { qubit: usize },
    CX { control: usize, target: usize },
}

impl Gate {
    /// The 2x2 matrix for single-qubit gates; `None` for CX, which is
    /// applied structurally rather than via a matrix.
    pub fn matrix(&self) -> Option<&'static GateMatrix> {
        match self {
            Gate::I { .. } => Some(&IDENTITY),
            Gate::H { .. } => Some(&HADAMARD),
            Gate::X { .. } => Some(&PAULI_X),
            Gate::Y { .. } => Some(&PAULI_Y),
            Gate::Z { .. } => Some(&PAULI_Z),
            Gate::CX { .. } => None,
        }
    }

    /// Highest qubit index this gate touches.
    pub fn max_qubit(&self) -> usize {
        match *self {
            Gate::I { qubit }
            | Gate::H { qubit }
            | Gate::X { qubit }
            | Gate::Y { qubit }
            | Gate::Z { qubit } => qubit,
            Gate::CX { control, target } => control.max(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_are_unitary() {
        for m in [&IDENTITY, &HADAMARD, &PAULI_X, &PAULI_Y, &PAULI_Z] {
            // M * M^dagger == I, entry by entry
            for r in 0..2 {
                for c in 0..2 {
                    let mut acc = Complex::new(0.0, 0.0);
                    for k in 0..2 {
                        acc += m[r][k] * m[c][k].conj();
                    }
                    let expected = if r == c { 1.0 } else { 0.0 };
                    assert!((acc.re - expected).abs() < 1e-12);
                    assert!(acc.im.abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn max_qubit_covers_both_cx_operands() {
        assert_eq!(Gate::CX { control: 3, target: 1 }.max_qubit(), 3);
        assert_eq!(Gate::H { qubit: 2 }.max_qubit(), 2);
    }
}
