//! Core of a browser egg-farm idle game.
//!
//! Eggs accrue from wall-clock time, machines level up for eggs, and state
//! persists to a key-value store (localStorage on wasm). Rendering and input
//! live in an external presentation layer that drives a [`Session`] and
//! subscribes to its mutation events.

pub mod clock;
pub mod ledger;
pub mod logic;
pub mod machines;
pub mod save;
pub mod session;

mod simulator;

pub use ledger::{Ledger, Machine};
pub use machines::MachineKind;
pub use session::{Command, Event, Notice, Session};
