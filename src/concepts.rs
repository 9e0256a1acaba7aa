//! What a concrete type has to provide to play a given role.

use crate::game_defs::Player;
use crate::holder::ObservationHolder;
use std::hash::Hash;

pub trait Action: Hash + Eq + Clone {}
impl<T: Hash + Eq + Clone> Action for T {}

pub trait ChanceOutcome: Hash + Eq + Clone {}
impl<T: Hash + Eq + Clone> ChanceOutcome for T {}

pub trait Observation: Hash + Eq + Clone {}
impl<T: Hash + Eq + Clone> Observation for T {}

pub trait Worldstate: Clone {}
impl<T: Clone> Worldstate for T {}

/// One player's private view, grown by a public and a private observation per step.
pub trait Infostate: Hash + Eq + Clone {
    type Observation: Observation;

    fn player(&self) -> Player;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(
        &mut self,
        public: ObservationHolder<Self::Observation>,
        private: ObservationHolder<Self::Observation>,
    );
}

/// The commonly known view, grown by one public observation per step.
pub trait Publicstate: Hash + Eq + Clone {
    type Observation: Observation;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(&mut self, public: ObservationHolder<Self::Observation>);
}
