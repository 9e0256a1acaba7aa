use std::hash::{Hash, Hasher};

/// Equality as found by automatic detection: anything with `PartialEq`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not equality comparable, but the holder options require equality",
    label = "no `PartialEq` implementation for `{Self}`",
    note = "derive `PartialEq` for `{Self}`, or implement `FosgEq` and use the `Declared` strategy"
)]
pub trait Comparable {
    fn compare(&self, other: &Self) -> bool;
}

impl<T: PartialEq + ?Sized> Comparable for T {
    fn compare(&self, other: &Self) -> bool {
        self == other
    }
}

/// Hashing as found by automatic detection: anything with `Hash`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not hashable, but the holder options require hashing",
    label = "no `Hash` implementation for `{Self}`",
    note = "derive `Hash` for `{Self}`, or implement `FosgHash` and use the `Declared` strategy"
)]
pub trait Hashable {
    fn digest<H: Hasher>(&self, state: &mut H);
}

impl<T: Hash + ?Sized> Hashable for T {
    fn digest<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }
}

/// Equality declared by the game author, overriding whatever detection would find.
///
/// Must be an equivalence relation and agree with `FosgHash` if both are declared.
#[diagnostic::on_unimplemented(
    message = "`{Self}` declares no equality, but the holder options use `Declared` equality",
    label = "missing `FosgEq` implementation for `{Self}`"
)]
pub trait FosgEq {
    fn fosg_eq(&self, other: &Self) -> bool;
}

/// Hashing declared by the game author, overriding whatever detection would find.
#[diagnostic::on_unimplemented(
    message = "`{Self}` declares no hash, but the holder options use `Declared` hashing",
    label = "missing `FosgHash` implementation for `{Self}`"
)]
pub trait FosgHash {
    fn fosg_hash<H: Hasher>(&self, state: &mut H);
}
