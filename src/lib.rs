pub mod clipboard;
pub mod error;
pub mod model;
pub mod provider;
pub mod services;
pub mod settings;
pub mod shortcut;
pub mod state_machine;
pub mod store;
pub mod toast;

pub use error::RewriteError;
pub use state_machine::{RewriteController, UiBindings};
