//! HTTP backend for the Quantum Bluff game: a thin adapter between the game
//! server's gate requests and the statevector engine in `bluff-sim`.

pub mod adapter;
pub mod routes;

pub use routes::create_router;
