pub mod allocation;
pub mod registry;
pub mod user_profile;
pub mod vault;

pub use allocation::*;
pub use registry::*;
pub use user_profile::*;
pub use vault::*;
