pub mod circuit;
pub mod gates;
pub mod simulator;
pub mod state;

// Re-export the surface callers actually use.
pub use circuit::Circuit;
pub use gates::{Gate, GateMatrix};
pub use simulator::{SimError, StatevectorSimulator, run_and_measure};
pub use state::StateVector;
