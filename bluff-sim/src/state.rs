use crate::gates::GateMatrix;
use crate::simulator::SimError;
use num_complex::Complex;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use serde::Serialize;

/// Full statevector of an n-qubit register. Amplitude `i` corresponds to the
/// computational basis state whose bit `k` is qubit `k` of index `i`.
#[derive(Serialize, Clone, Debug)]
pub struct StateVector {
    pub num_qubits: usize,
    pub amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// A register initialized to |0...0>.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    pub fn reset(&mut self) {
        for amp in &mut self.amplitudes {
            *amp = Complex::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex::new(1.0, 0.0);
    }

    /// Applies a 2x2 unitary to `target`. Amplitude pairs differing only in
    /// the target bit are disjoint, so the update is done in place.
    pub fn apply_single_qubit_gate(&mut self, m: &GateMatrix, target: usize) {
        let mask = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    /// Controlled-X: flips the target bit wherever the control bit is set.
    pub fn apply_cx(&mut self, control: usize, target: usize) {
        let control_mask = 1usize << control;
        let target_mask = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }

    /// Probability of measuring `qubit` as 1 in the Z basis.
    pub fn probability_of_one(&self, qubit: usize) -> f64 {
        let mask = 1usize << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Z-basis measurement of a single qubit. Collapses the state onto the
    /// observed outcome and renormalizes, leaving other qubits intact.
    pub fn measure_qubit(&mut self, qubit: usize, rng: &mut impl Rng) -> u8 {
        let p_one = self.probability_of_one(qubit).clamp(0.0, 1.0);
        let outcome = u8::from(rng.gen_bool(p_one));

        let mask = 1usize << qubit;
        let keep_set = outcome == 1;
        let mut norm_sqr = 0.0;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) == keep_set {
                norm_sqr += amp.norm_sqr();
            } else {
                *amp = Complex::new(0.0, 0.0);
            }
        }
        let scale = 1.0 / norm_sqr.sqrt();
        for amp in &mut self.amplitudes {
            *amp *= scale;
        }
        outcome
    }

    /// Measures the whole register, collapsing onto one basis state.
    /// Returns the basis-state index.
    pub fn measure_all(&mut self, rng: &mut impl Rng) -> Result<usize, SimError> {
        let probabilities: Vec<f64> = self.amplitudes.iter().map(|a| a.norm_sqr()).collect();
        let dist = WeightedIndex::new(&probabilities).map_err(|e| SimError::Sampling(e.to_string()))?;
        let measured = dist.sample(rng);

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp = if i == measured {
                Complex::new(1.0, 0.0)
            } else {
                Complex::new(0.0, 0.0)
            };
        }
        Ok(measured)
    }
}
