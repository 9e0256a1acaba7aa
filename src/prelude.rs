//! Names only: import this to refer to holders and their traits without reaching into
//! the modules that define them.
//!
//! ```
//! use fosg::prelude::*;
//!
//! fn rounds<I: Publicstate<Observation = String>>(
//!     state: &PublicstateHolder<I>,
//! ) -> usize {
//!     state.len()
//! }
//! ```

pub use crate::concepts::{
    Action, ChanceOutcome, Infostate, Observation, Publicstate, Worldstate,
};
pub use crate::game_defs::{Player, Stochasticity};
pub use crate::holder::role::{self, Role};
pub use crate::holder::{
    ActionHolder, Auto, ChanceOutcomeHolder, Custom, Holder, InfostateHolder, Keyed,
    ObservationHolder, Options, Opts, PublicstateHolder, Shared, WorldstateHolder,
};
pub use crate::traits::{
    ActionOf, AutoAction, AutoActionVariant, AutoChanceOutcome, AutoInfostate,
    AutoObservation, AutoPublicstate, AutoWorldstate, ChanceOutcomeOf, FosgEq, FosgHash,
    FosgTraits, InfostateOf, ObservationOf, PublicstateOf, WorldstateOf,
};
pub use crate::variant::{ActionOrOutcome, History};
