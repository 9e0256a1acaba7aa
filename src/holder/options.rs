//! Compile-time options of a holder.
//!
//! An options type picks one strategy per dimension: how to compare the wrapped value,
//! how to hash it, and how to store it. `Opts<E, H, S>` composes them; every dimension
//! defaults to the permissive choice, so `Auto = Opts` behaves like the bare holder.
//!
//! A strategy has two sides. Its *slot* impl says whether the strategy may be named for
//! a type at all (a failing slot is a compile error where the holder type is written).
//! Its *strategy* impl says whether it actually provides the operation (a missing
//! strategy impl just means the holder does not offer it).

use crate::traits::{Comparable, FosgEq, FosgHash, Hashable};
use std::hash::Hasher;
use std::marker::PhantomData;
use std::sync::Arc;

pub trait EqStrategy<T: ?Sized> {
    fn eq(a: &T, b: &T) -> bool;
}

/// Marks equality strategies that are reflexive for `T`, which lets the holder be `Eq`.
pub trait TotalEq<T: ?Sized>: EqStrategy<T> {}

pub trait HashStrategy<T: ?Sized> {
    fn hash<H: Hasher>(value: &T, state: &mut H);
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot decide equality of `{T}`",
    label = "equality strategy not admissible for `{T}`"
)]
pub trait EqSlot<T: ?Sized> {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot hash `{T}`",
    label = "hash strategy not admissible for `{T}`"
)]
pub trait HashSlot<T: ?Sized> {}

/// Pairs a hash strategy with the equality strategy `E` it agrees with.
///
/// The wrapped type's own `Hash` only agrees with its own `PartialEq`, and an author's
/// `FosgHash` only with their `FosgEq`. `Disabled` on either side pairs with anything.
///
/// ```compile_fail
/// use fosg::{ActionHolder, Declared, Detected, FosgEq, Opts};
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct Bid(u32, bool);
///
/// impl FosgEq for Bid {
///     fn fosg_eq(&self, other: &Self) -> bool {
///         self.0 == other.0
///     }
/// }
///
/// let _: ActionHolder<Bid, Opts<Declared, Detected>> = ActionHolder::new(Bid(5, true));
/// ```
#[diagnostic::on_unimplemented(
    message = "hashing with `{Self}` can disagree with `{E}` equality",
    label = "equal values could hash differently",
    note = "use `Declared` for both equality and hashing, or for neither"
)]
pub trait HashFor<E> {}

/// Offers the operation whenever the wrapped type has it. Never fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Detected;

/// Offers the operation through the wrapped type's own impl and refuses types without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required;

/// Offers the operation through the author's `FosgEq` / `FosgHash` impls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Declared;

/// Never offers the operation, even if the wrapped type has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Disabled;

impl<T: ?Sized> EqSlot<T> for Detected {}
impl<T: Comparable + ?Sized> EqSlot<T> for Required {}
impl<T: FosgEq + ?Sized> EqSlot<T> for Declared {}
impl<T: ?Sized> EqSlot<T> for Disabled {}

impl<T: ?Sized> HashSlot<T> for Detected {}
impl<T: Hashable + ?Sized> HashSlot<T> for Required {}
impl<T: FosgHash + ?Sized> HashSlot<T> for Declared {}
impl<T: ?Sized> HashSlot<T> for Disabled {}

impl HashFor<Detected> for Detected {}
impl HashFor<Required> for Detected {}
impl HashFor<Disabled> for Detected {}
impl HashFor<Detected> for Required {}
impl HashFor<Required> for Required {}
impl HashFor<Disabled> for Required {}
impl HashFor<Declared> for Declared {}
impl HashFor<Disabled> for Declared {}
impl<E> HashFor<E> for Disabled {}

impl<T: PartialEq + ?Sized> EqStrategy<T> for Detected {
    fn eq(a: &T, b: &T) -> bool {
        a.compare(b)
    }
}

impl<T: PartialEq + ?Sized> EqStrategy<T> for Required {
    fn eq(a: &T, b: &T) -> bool {
        a.compare(b)
    }
}

impl<T: FosgEq + ?Sized> EqStrategy<T> for Declared {
    fn eq(a: &T, b: &T) -> bool {
        a.fosg_eq(b)
    }
}

impl<T: Eq + ?Sized> TotalEq<T> for Detected {}
impl<T: Eq + ?Sized> TotalEq<T> for Required {}
impl<T: FosgEq + ?Sized> TotalEq<T> for Declared {}

impl<T: std::hash::Hash + ?Sized> HashStrategy<T> for Detected {
    fn hash<H: Hasher>(value: &T, state: &mut H) {
        value.digest(state)
    }
}

impl<T: std::hash::Hash + ?Sized> HashStrategy<T> for Required {
    fn hash<H: Hasher>(value: &T, state: &mut H) {
        value.digest(state)
    }
}

impl<T: FosgHash + ?Sized> HashStrategy<T> for Declared {
    fn hash<H: Hasher>(value: &T, state: &mut H) {
        value.fosg_hash(state)
    }
}

/// Where the holder keeps its value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot store `{T}`",
    label = "storage strategy not admissible for `{T}`",
    note = "shared storage copies on write and needs `{T}: Clone`"
)]
pub trait Storage<T> {
    type Cell;

    fn store(value: T) -> Self::Cell;
    fn load(cell: &Self::Cell) -> &T;
    fn load_mut(cell: &mut Self::Cell) -> &mut T;
    fn unload(cell: Self::Cell) -> T;

    /// Whether both cells hold the very same value.
    fn same(a: &Self::Cell, b: &Self::Cell) -> bool;
}

/// The value sits inside the holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inline;

/// The value sits behind an `Arc`; clones share it until one of them writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SharedStorage;

impl<T> Storage<T> for Inline {
    type Cell = T;

    fn store(value: T) -> T {
        value
    }

    fn load(cell: &T) -> &T {
        cell
    }

    fn load_mut(cell: &mut T) -> &mut T {
        cell
    }

    fn unload(cell: T) -> T {
        cell
    }

    fn same(a: &T, b: &T) -> bool {
        std::mem::size_of::<T>() != 0 && std::ptr::eq(a, b)
    }
}

impl<T: Clone> Storage<T> for SharedStorage {
    type Cell = Arc<T>;

    fn store(value: T) -> Arc<T> {
        Arc::new(value)
    }

    fn load(cell: &Arc<T>) -> &T {
        cell
    }

    fn load_mut(cell: &mut Arc<T>) -> &mut T {
        if Arc::strong_count(cell) > 1 {
            log::trace!(
                "detaching shared {} from {} other holders",
                std::any::type_name::<T>(),
                Arc::strong_count(cell) - 1
            );
        }
        Arc::make_mut(cell)
    }

    fn unload(cell: Arc<T>) -> T {
        Arc::try_unwrap(cell).unwrap_or_else(|shared| T::clone(&shared))
    }

    fn same(a: &Arc<T>, b: &Arc<T>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

/// The full option set of a holder wrapping `T`.
///
/// Implemented for `Opts` whenever every chosen strategy is admissible for `T`; game
/// authors may also implement it on their own marker types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` are not valid holder options for `{T}`",
    label = "a required capability of `{T}` is missing"
)]
pub trait Options<T> {
    type Eq: EqSlot<T>;
    type Hash: HashSlot<T> + HashFor<Self::Eq>;
    type Storage: Storage<T>;
}

/// Options built from one strategy per dimension.
pub struct Opts<E = Detected, H = Detected, S = Inline>(PhantomData<fn() -> (E, H, S)>);

impl<T, E, H, S> Options<T> for Opts<E, H, S>
where
    E: EqSlot<T>,
    H: HashSlot<T> + HashFor<E>,
    S: Storage<T>,
{
    type Eq = E;
    type Hash = H;
    type Storage = S;
}

/// Whatever the wrapped type supports, stored inline.
pub type Auto = Opts;

/// Usable as a lookup key: equality and hashing are both required.
pub type Keyed = Opts<Required, Required>;

/// Like `Auto`, but clones share one copy-on-write allocation.
pub type Shared = Opts<Detected, Detected, SharedStorage>;

/// Equality and hashing come from the author's `FosgEq` / `FosgHash` impls.
pub type Custom = Opts<Declared, Declared>;
