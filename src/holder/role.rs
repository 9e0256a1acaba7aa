//! Zero-sized role markers. A holder's role lives only in its type.

mod sealed {
    pub trait Sealed {}
}

/// One of the six game-model categories a holder is permanently tagged with.
pub trait Role: sealed::Sealed + 'static {
    /// Name of the holder alias for this role, used by `Debug`.
    const NAME: &'static str;
}

macro_rules! roles {
    ($($(#[$doc:meta])* $role:ident => $name:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $role;

            impl sealed::Sealed for $role {}

            impl Role for $role {
                const NAME: &'static str = $name;
            }
        )*
    };
}

roles! {
    /// A move chosen by a player.
    Action => "ActionHolder",
    /// A move chosen by nature.
    ChanceOutcome => "ChanceOutcomeHolder",
    /// What a player (or everyone) learns from a transition.
    Observation => "ObservationHolder",
    /// One player's private view of play so far.
    Infostate => "InfostateHolder",
    /// The commonly known view of play so far.
    Publicstate => "PublicstateHolder",
    /// The full underlying state of the game.
    Worldstate => "WorldstateHolder",
}
