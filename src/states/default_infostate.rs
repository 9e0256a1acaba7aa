use crate::concepts::{Infostate, Observation};
use crate::game_defs::Player;
use crate::holder::ObservationHolder;
use crate::utils::{fx_hash, hash_combine, ConstView, Cursor};
use std::fmt::{Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::ops::Index;

pub type ObservationPair<Obs> = (ObservationHolder<Obs>, ObservationHolder<Obs>);

/// One player's infostate as the sequence of (public, private) observation pairs they saw.
///
/// The hash starts from the owning player, so two players with the same history differ.
#[derive(Debug, Clone)]
pub struct DefaultInfostate<Obs> {
    player: Player,
    history: Vec<ObservationPair<Obs>>,
    hash_cache: u64,
}

impl<Obs> DefaultInfostate<Obs> {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            history: Vec::new(),
            hash_cache: fx_hash(&i32::from(player)),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn latest(&self) -> Option<&ObservationPair<Obs>> {
        self.history.last()
    }

    pub fn history(&self) -> ConstView<Cursor<'_, ObservationPair<Obs>>> {
        ConstView::from_slice(&self.history)
    }
}

impl<Obs: Hash> DefaultInfostate<Obs> {
    pub fn update(
        &mut self,
        public: impl Into<ObservationHolder<Obs>>,
        private: impl Into<ObservationHolder<Obs>>,
    ) {
        let (public, private) = (public.into(), private.into());
        hash_combine(&mut self.hash_cache, &public);
        hash_combine(&mut self.hash_cache, &private);
        self.history.push((public, private));
        log::trace!(
            "infostate of {} at {} observations",
            self.player,
            self.history.len()
        );
    }
}

impl<Obs: Display> DefaultInfostate<Obs> {
    /// Each pair as `{public<sep>private}`, every pair followed by `delim`.
    pub fn to_string_with(&self, delim: &str, sep: &str) -> String {
        let mut s = String::new();
        for (public, private) in &self.history {
            let _ = write!(s, "{{{public}{sep}{private}}}{delim}");
        }
        s
    }
}

impl<Obs> Index<usize> for DefaultInfostate<Obs> {
    type Output = ObservationPair<Obs>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.history[index]
    }
}

impl<Obs: PartialEq> PartialEq for DefaultInfostate<Obs> {
    fn eq(&self, other: &Self) -> bool {
        self.player == other.player
            && self.hash_cache == other.hash_cache
            && self.history == other.history
    }
}

impl<Obs: Eq> Eq for DefaultInfostate<Obs> {}

impl<Obs> Hash for DefaultInfostate<Obs> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_cache)
    }
}

impl<Obs: Display> Display for DefaultInfostate<Obs> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player, self.to_string_with(" ", ","))
    }
}

impl<Obs: Observation> Infostate for DefaultInfostate<Obs> {
    type Observation = Obs;

    fn player(&self) -> Player {
        self.player
    }

    fn len(&self) -> usize {
        self.history.len()
    }

    fn update(&mut self, public: ObservationHolder<Obs>, private: ObservationHolder<Obs>) {
        DefaultInfostate::update(self, public, private)
    }
}

#[cfg(test)]
mod test {
    use crate::game_defs::Player;
    use crate::holder::InfostateHolder;
    use crate::states::DefaultInfostate;
    use crate::utils::fx_hash;
    use dashmap::DashMap;
    use rayon::prelude::*;
    use rustc_hash::FxHasher;
    use std::hash::BuildHasherDefault;

    fn replay(player: Player, steps: &[(&str, &str)]) -> DefaultInfostate<String> {
        let mut state = DefaultInfostate::new(player);
        for (public, private) in steps {
            state.update(public.to_string(), private.to_string());
        }
        state
    }

    #[test]
    fn equal_histories_hash_equal() {
        let a = replay(Player::Alex, &[("deal", "K"), ("bet", "")]);
        let b = replay(Player::Alex, &[("deal", "K"), ("bet", "")]);
        assert_eq!(a, b);
        assert_eq!(fx_hash(&a), fx_hash(&b));
    }

    #[test]
    fn owner_is_part_of_identity() {
        let alex = replay(Player::Alex, &[("deal", "K")]);
        let bob = replay(Player::Bob, &[("deal", "K")]);
        assert_ne!(alex, bob);
        assert_ne!(fx_hash(&alex), fx_hash(&bob));
        assert_ne!(
            fx_hash(&DefaultInfostate::<String>::new(Player::Alex)),
            fx_hash(&DefaultInfostate::<String>::new(Player::Bob))
        );
    }

    #[test]
    fn public_and_private_are_not_interchangeable() {
        let a = replay(Player::Alex, &[("J", "Q")]);
        let b = replay(Player::Alex, &[("Q", "J")]);
        assert_ne!(a, b);
    }

    #[test]
    fn history_and_indexing() {
        let state = replay(Player::Cedric, &[("deal", "A"), ("raise", "")]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.player(), Player::Cedric);
        assert_eq!(state[0].1.as_str(), "A");
        let publics: Vec<&str> = state.history().iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(publics, ["deal", "raise"]);
        assert_eq!(state.latest().map(|(p, _)| p.as_str()), Some("raise"));
    }

    #[test]
    fn renders_pairs() {
        let state = replay(Player::Dexter, &[("deal", "A"), ("check", "")]);
        assert_eq!(state.to_string_with("\n", ","), "{deal,A}\n{check,}\n");
        assert_eq!(state.to_string(), "dexter: {deal,A} {check,} ");
    }

    #[test]
    fn holders_key_a_concurrent_table() {
        let table: DashMap<
            InfostateHolder<DefaultInfostate<String>>,
            usize,
            BuildHasherDefault<FxHasher>,
        > = DashMap::default();

        (0..1_000usize).into_par_iter().for_each(|i| {
            let card = ["J", "Q", "K"][i % 3];
            let key = InfostateHolder::new(replay(Player::Alex, &[("deal", card)]));
            *table.entry(key).or_insert(0) += 1;
        });

        assert_eq!(table.len(), 3);
        let kings = InfostateHolder::new(replay(Player::Alex, &[("deal", "K")]));
        assert_eq!(*table.get(&kings).unwrap(), 333);
    }
}
