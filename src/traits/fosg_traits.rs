use crate::holder::{
    ActionHolder, Auto, ChanceOutcomeHolder, InfostateHolder, ObservationHolder,
    PublicstateHolder, WorldstateHolder,
};
use crate::variant::ActionOrOutcome;

/// The role types of a game, declared once by its author.
///
/// Roles a game does not have (e.g. chance outcomes in a deterministic game) are declared
/// as `std::convert::Infallible`.
pub trait FosgTraits {
    type Action;
    type ChanceOutcome;
    type Observation;
    type Infostate;
    type Publicstate;
    type Worldstate;
}

pub type AutoAction<G> = <G as FosgTraits>::Action;
pub type AutoChanceOutcome<G> = <G as FosgTraits>::ChanceOutcome;
pub type AutoObservation<G> = <G as FosgTraits>::Observation;
pub type AutoInfostate<G> = <G as FosgTraits>::Infostate;
pub type AutoPublicstate<G> = <G as FosgTraits>::Publicstate;
pub type AutoWorldstate<G> = <G as FosgTraits>::Worldstate;
pub type AutoActionVariant<G> = ActionOrOutcome<AutoAction<G>, AutoChanceOutcome<G>>;

pub type ActionOf<G, O = Auto> = ActionHolder<AutoAction<G>, O>;
pub type ChanceOutcomeOf<G, O = Auto> = ChanceOutcomeHolder<AutoChanceOutcome<G>, O>;
pub type ObservationOf<G, O = Auto> = ObservationHolder<AutoObservation<G>, O>;
pub type InfostateOf<G, O = Auto> = InfostateHolder<AutoInfostate<G>, O>;
pub type PublicstateOf<G, O = Auto> = PublicstateHolder<AutoPublicstate<G>, O>;
pub type WorldstateOf<G, O = Auto> = WorldstateHolder<AutoWorldstate<G>, O>;
