// Helpers compartidos y FFI

pub mod constants;
pub mod deck_ffi;
pub mod google_maps_ffi;
