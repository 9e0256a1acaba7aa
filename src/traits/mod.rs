mod auto;
mod capability;
mod fosg_traits;

pub use auto::*;
pub use capability::*;
pub use fosg_traits::*;
