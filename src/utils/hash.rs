use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

pub fn fx_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Folds the hash of `value` into `seed`. Order matters: combining `a` then `b` differs
/// from `b` then `a`.
pub fn hash_combine<T: Hash + ?Sized>(seed: &mut u64, value: &T) {
    *seed ^= fx_hash(value)
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}
