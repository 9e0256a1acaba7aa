use crate::concepts::{Infostate, Publicstate};
use crate::game_defs::Player;
use crate::holder::options::Options;
use crate::holder::role;
use crate::holder::{Holder, ObservationHolder};

impl<T: Infostate, O: Options<T>> Holder<role::Infostate, T, O> {
    pub fn player(&self) -> Player {
        self.get().player()
    }

    pub fn len(&self) -> usize {
        self.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }

    pub fn update(
        &mut self,
        public: ObservationHolder<T::Observation>,
        private: ObservationHolder<T::Observation>,
    ) {
        self.get_mut().update(public, private)
    }
}

impl<T: Publicstate, O: Options<T>> Holder<role::Publicstate, T, O> {
    pub fn len(&self) -> usize {
        self.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }

    pub fn update(&mut self, public: ObservationHolder<T::Observation>) {
        self.get_mut().update(public)
    }
}

#[cfg(test)]
mod test {
    use crate::game_defs::Player;
    use crate::holder::{InfostateHolder, ObservationHolder, PublicstateHolder, Shared};
    use crate::states::{DefaultInfostate, DefaultPublicstate};
    use crate::utils::fx_hash;

    fn obs(s: &str) -> ObservationHolder<String> {
        ObservationHolder::new(s.to_string())
    }

    #[test]
    fn infostate_holder_forwards_updates() {
        let mut holder: InfostateHolder<DefaultInfostate<String>> =
            DefaultInfostate::new(Player::Bob).into();
        assert!(holder.is_empty());
        assert_eq!(holder.player(), Player::Bob);

        holder.update(obs("deal"), obs("J"));
        holder.update(obs("check"), obs(""));
        assert_eq!(holder.len(), 2);
        assert_eq!(holder[1].0, obs("check"));
    }

    #[test]
    fn shared_infostates_diverge_on_update() {
        let mut root: InfostateHolder<DefaultInfostate<String>, Shared> =
            DefaultInfostate::new(Player::Alex).into();
        root.update(obs("deal"), obs("Q"));

        let mut left = root.clone();
        let mut right = root.clone();
        left.update(obs("bet"), obs(""));
        right.update(obs("check"), obs(""));

        assert_eq!(root.len(), 1);
        assert_ne!(left, right);
        assert_ne!(fx_hash(&left), fx_hash(&right));

        let mut again = root.copy();
        again.update(obs("bet"), obs(""));
        assert_eq!(again, left);
        assert_eq!(fx_hash(&again), fx_hash(&left));
    }

    #[test]
    fn publicstate_holder_forwards_updates() {
        let mut holder: PublicstateHolder<DefaultPublicstate<String>> = Default::default();
        holder.update(obs("deal"));
        holder.update(obs("bet"));
        assert_eq!(holder.len(), 2);
        assert_eq!(holder.latest(), Some(&obs("bet")));
    }
}
