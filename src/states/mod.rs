mod default_infostate;
mod default_publicstate;

pub use default_infostate::*;
pub use default_publicstate::*;
