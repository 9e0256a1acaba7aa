mod holder;
pub mod options;
pub mod role;
mod role_ops;

pub use holder::*;
pub use options::{
    Auto, Custom, Declared, Detected, Disabled, EqSlot, EqStrategy, HashFor, HashSlot,
    HashStrategy, Inline, Keyed, Options, Opts, Required, Shared, SharedStorage, Storage,
    TotalEq,
};
