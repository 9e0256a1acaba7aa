//! Role-tagged value holders for factored-observation stochastic games.
//!
//! Game authors bring their own action, chance outcome, observation and state types.
//! Algorithms only ever see them wrapped in one of the six holders, so a solver written
//! against `InfostateHolder<I>` works for any game that supplies an `I`.
//!
//! Holders of different roles never convert into each other:
//!
//! ```compile_fail
//! use fosg::{ActionHolder, ObservationHolder};
//!
//! fn observe(_: ObservationHolder<u8>) {}
//!
//! let action: ActionHolder<u8> = ActionHolder::new(3);
//! observe(action);
//! ```
//!
//! and a holder only offers hashing when its options can hash the wrapped type:
//!
//! ```compile_fail
//! use fosg::{ActionHolder, Keyed};
//!
//! #[derive(PartialEq)]
//! struct Move(u8);
//!
//! let _: ActionHolder<Move, Keyed> = ActionHolder::new(Move(1));
//! ```

pub mod concepts;
pub mod game_defs;
pub mod holder;
pub mod prelude;
pub mod states;
pub mod traits;
pub mod utils;
pub mod variant;

pub use concepts::*;
pub use game_defs::*;
pub use holder::*;
pub use states::*;
pub use traits::*;
pub use variant::*;
