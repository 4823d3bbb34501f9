pub mod maps_loader;
pub mod notifier;

pub use maps_loader::{placeholder, LoaderStatus};
pub use notifier::{AlertNotifier, ClickNotifier, SiteClicked};
