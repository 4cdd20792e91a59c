/// iced integration
///
/// Board components paint into a `RasterSurface`; this module turns that buffer
/// into an iced image handle and keeps it in step with the component's revision.

pub mod painted;

pub use painted::Painted;
