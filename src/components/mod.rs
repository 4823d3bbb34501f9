pub mod map_view;
pub mod maps_wrapper;
pub mod root;

pub use map_view::MapView;
pub use maps_wrapper::MapsWrapper;
pub use root::{Root, RootProps};
