// Sincronización del overlay: máquina de estados independiente de la
// plataforma y la implementación web de sus dos traits.

pub mod synchronizer;
pub mod traits;
pub mod web;

pub use synchronizer::{OverlaySynchronizer, SyncState};
pub use traits::{HostMap, LayerOverlay, OverlayError};
pub use web::{DeckOverlay, WebHostMap};
