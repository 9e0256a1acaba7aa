use crate::holder::options::{
    Auto, EqStrategy, HashStrategy, Options, SharedStorage, Storage, TotalEq,
};
use crate::holder::role::{self, Role};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

type Cell<T, O> = <<O as Options<T>>::Storage as Storage<T>>::Cell;

/// Owns exactly one `T` in the game-model role `R`, with behaviour picked by `O`.
pub struct Holder<R: Role, T, O: Options<T> = Auto> {
    cell: Cell<T, O>,
    marker: PhantomData<fn() -> (R, O)>,
}

pub type ActionHolder<T, O = Auto> = Holder<role::Action, T, O>;
pub type ChanceOutcomeHolder<T, O = Auto> = Holder<role::ChanceOutcome, T, O>;
pub type ObservationHolder<T, O = Auto> = Holder<role::Observation, T, O>;
pub type InfostateHolder<T, O = Auto> = Holder<role::Infostate, T, O>;
pub type PublicstateHolder<T, O = Auto> = Holder<role::Publicstate, T, O>;
pub type WorldstateHolder<T, O = Auto> = Holder<role::Worldstate, T, O>;

impl<R: Role, T, O: Options<T>> Holder<R, T, O> {
    pub fn new(value: T) -> Self {
        Self {
            cell: O::Storage::store(value),
            marker: PhantomData,
        }
    }

    pub fn get(&self) -> &T {
        O::Storage::load(&self.cell)
    }

    pub fn get_mut(&mut self) -> &mut T {
        O::Storage::load_mut(&mut self.cell)
    }

    pub fn into_inner(self) -> T {
        O::Storage::unload(self.cell)
    }

    /// Swaps in a new value and hands back the old one.
    pub fn replace(&mut self, value: T) -> T {
        let old = std::mem::replace(&mut self.cell, O::Storage::store(value));
        O::Storage::unload(old)
    }

    /// Compares by value against a bare `T`.
    pub fn equals(&self, other: &T) -> bool
    where
        O::Eq: EqStrategy<T>,
    {
        O::Eq::eq(self.get(), other)
    }

    /// Object identity: true only if both holders read the very same value.
    ///
    /// Zero-sized values stored inline have no address of their own, so they are never
    /// identical, not even to themselves. Shared storage gives them one.
    pub fn is(&self, other: &Self) -> bool {
        O::Storage::same(&self.cell, &other.cell)
    }

    /// A holder with its own freshly cloned value, never sharing storage with `self`.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self::new(self.get().clone())
    }

    /// Moves the value into a holder of the same role with different options.
    pub fn with_options<P: Options<T>>(self) -> Holder<R, T, P> {
        Holder::new(self.into_inner())
    }
}

impl<R: Role, T, O> Holder<R, T, O>
where
    O: Options<T, Storage = SharedStorage>,
    T: Clone,
{
    /// Takes over an existing allocation without copying it.
    pub fn from_arc(value: Arc<T>) -> Self {
        Self {
            cell: value,
            marker: PhantomData,
        }
    }

    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.cell)
    }
}

impl<R: Role, T, O: Options<T>> From<T> for Holder<R, T, O> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<R: Role, T, O: Options<T>> Deref for Holder<R, T, O> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<R: Role, T, O: Options<T>> DerefMut for Holder<R, T, O> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<R: Role, T, O: Options<T>> AsRef<T> for Holder<R, T, O> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<R: Role, T, O> Clone for Holder<R, T, O>
where
    O: Options<T>,
    Cell<T, O>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            marker: PhantomData,
        }
    }
}

impl<R: Role, T: Default, O: Options<T>> Default for Holder<R, T, O> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<R: Role, T, O> PartialEq for Holder<R, T, O>
where
    O: Options<T>,
    O::Eq: EqStrategy<T>,
{
    fn eq(&self, other: &Self) -> bool {
        O::Eq::eq(self.get(), other.get())
    }
}

impl<R: Role, T, O> Eq for Holder<R, T, O>
where
    O: Options<T>,
    O::Eq: TotalEq<T>,
{
}

impl<R: Role, T, O> Hash for Holder<R, T, O>
where
    O: Options<T>,
    O::Hash: HashStrategy<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        O::Hash::hash(self.get(), state)
    }
}

impl<R: Role, T: Debug, O: Options<T>> Debug for Holder<R, T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(R::NAME).field(self.get()).finish()
    }
}

impl<R: Role, T: Display, O: Options<T>> Display for Holder<R, T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.get(), f)
    }
}

impl<R: Role, T: Serialize, O: Options<T>> Serialize for Holder<R, T, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, R: Role, T: Deserialize<'de>, O: Options<T>> Deserialize<'de> for Holder<R, T, O> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
