pub mod lookup;
pub mod modal;

pub use lookup::LogContentLookup;
pub use modal::LogContentModal;
