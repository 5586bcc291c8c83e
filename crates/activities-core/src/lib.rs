pub mod activity;
pub mod directory;
pub mod error;

pub use activity::Activity;
pub use directory::ActivityDirectory;
pub use error::{ActivityError, Result};
