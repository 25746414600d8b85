//! Sinks persist extracted items to the local filesystem.

pub mod images;
pub mod titles;

pub use images::ImageSink;
pub use titles::TitleSink;
