pub mod use_maps_loader;
pub mod use_overlay;

pub use use_maps_loader::use_maps_loader;
pub use use_overlay::use_overlay;
