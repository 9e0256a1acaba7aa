use crate::holder::{ActionHolder, ChanceOutcomeHolder};
use std::fmt::{Debug, Display, Formatter};

/// One step of a history: a player's action or a draw by chance.
#[derive(PartialEq, Eq, Hash)]
pub enum ActionOrOutcome<A, C> {
    Action(ActionHolder<A>),
    Outcome(ChanceOutcomeHolder<C>),
}

pub type History<A, C> = Vec<ActionOrOutcome<A, C>>;

impl<A, C> ActionOrOutcome<A, C> {
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    pub fn is_outcome(&self) -> bool {
        matches!(self, Self::Outcome(_))
    }

    pub fn action(&self) -> Option<&ActionHolder<A>> {
        match self {
            Self::Action(action) => Some(action),
            Self::Outcome(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&ChanceOutcomeHolder<C>> {
        match self {
            Self::Action(_) => None,
            Self::Outcome(outcome) => Some(outcome),
        }
    }
}

impl<A, C> From<ActionHolder<A>> for ActionOrOutcome<A, C> {
    fn from(action: ActionHolder<A>) -> Self {
        Self::Action(action)
    }
}

impl<A, C> From<ChanceOutcomeHolder<C>> for ActionOrOutcome<A, C> {
    fn from(outcome: ChanceOutcomeHolder<C>) -> Self {
        Self::Outcome(outcome)
    }
}

// derive would put the bounds on A and C instead of on the holders
impl<A: Clone, C: Clone> Clone for ActionOrOutcome<A, C> {
    fn clone(&self) -> Self {
        match self {
            Self::Action(action) => Self::Action(action.clone()),
            Self::Outcome(outcome) => Self::Outcome(outcome.clone()),
        }
    }
}

impl<A: Debug, C: Debug> Debug for ActionOrOutcome<A, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(action) => action.fmt(f),
            Self::Outcome(outcome) => outcome.fmt(f),
        }
    }
}

impl<A: Display, C: Display> Display for ActionOrOutcome<A, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(action) => write!(f, "{action}"),
            Self::Outcome(outcome) => write!(f, "?{outcome}"),
        }
    }
}
