pub mod events;
pub mod vault;

pub use events::*;
pub use vault::*;
