//! Tic-tac-toe engine - pure game logic, no rendering.
//!
//! The engine owns a single round of two-player tic-tac-toe and reports
//! every visible change as a [`ViewUpdate`]. A front-end applies those
//! updates to whatever it draws with (see the [`View`] trait).
//!
//! # Architecture
//!
//! - **Types**: [`Marker`], [`CellValue`], [`Board`], [`Cell`]
//! - **Rules**: pure win and draw checks in [`rules`]
//! - **Engine**: [`GameEngine`] with `play` and `reset`
//! - **Contracts**: pre/postconditions checked around every move
//! - **View**: [`ViewUpdate`] values, the [`View`] trait and [`TextView`]
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, Status, TextView, View};
//!
//! # fn example() -> Result<(), tictac_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! let mut view = TextView::new();
//!
//! for index in [0, 3, 1, 4, 2] {
//!     let outcome = engine.play(index)?;
//!     view.apply_all(&outcome.updates());
//! }
//!
//! assert_eq!(engine.status(), Status::Won(tictac_engine::Marker::X));
//! assert_eq!(view.status(), "X wins!");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod contracts;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
mod state;
mod types;
mod update;
mod view;

pub use cell::Cell;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalPlay, PlayContract};
pub use engine::GameEngine;
pub use error::{EngineError, EngineErrorKind};
pub use state::GameState;
pub use types::{Board, CellValue, Marker};
pub use update::{Ignored, Placement, PlayOutcome, Status, ViewUpdate};
pub use view::{TextView, View};
