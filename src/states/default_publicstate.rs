use crate::concepts::{Observation, Publicstate};
use crate::holder::ObservationHolder;
use crate::utils::{hash_combine, ConstView, Cursor};
use std::fmt::{Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// A publicstate that is nothing more than the sequence of public observations so far.
///
/// The hash is folded in as observations arrive, so hashing a long history is constant time.
#[derive(Debug, Clone)]
pub struct DefaultPublicstate<Obs> {
    history: Vec<ObservationHolder<Obs>>,
    hash_cache: u64,
}

impl<Obs> Default for DefaultPublicstate<Obs> {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            hash_cache: 0,
        }
    }
}

impl<Obs> DefaultPublicstate<Obs> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn latest(&self) -> Option<&ObservationHolder<Obs>> {
        self.history.last()
    }

    pub fn history(&self) -> ConstView<Cursor<'_, ObservationHolder<Obs>>> {
        ConstView::from_slice(&self.history)
    }
}

impl<Obs: Hash> DefaultPublicstate<Obs> {
    pub fn update(&mut self, public: impl Into<ObservationHolder<Obs>>) {
        let public = public.into();
        hash_combine(&mut self.hash_cache, &public);
        self.history.push(public);
        log::trace!("publicstate at {} observations", self.history.len());
    }
}

impl<Obs: Display> DefaultPublicstate<Obs> {
    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for (round, public) in self.history.iter().enumerate() {
            let _ = writeln!(s, "pub_obs_{round}: {public}");
        }
        s
    }
}

impl<Obs> Index<usize> for DefaultPublicstate<Obs> {
    type Output = ObservationHolder<Obs>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.history[index]
    }
}

impl<Obs: PartialEq> PartialEq for DefaultPublicstate<Obs> {
    fn eq(&self, other: &Self) -> bool {
        self.hash_cache == other.hash_cache && self.history == other.history
    }
}

impl<Obs: Eq> Eq for DefaultPublicstate<Obs> {}

impl<Obs> Hash for DefaultPublicstate<Obs> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_cache)
    }
}

impl<Obs: Display> Display for DefaultPublicstate<Obs> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for public in &self.history {
            writeln!(f, "{public}")?;
        }
        Ok(())
    }
}

impl<Obs: Observation> Publicstate for DefaultPublicstate<Obs> {
    type Observation = Obs;

    fn len(&self) -> usize {
        self.history.len()
    }

    fn update(&mut self, public: ObservationHolder<Obs>) {
        DefaultPublicstate::update(self, public)
    }
}
