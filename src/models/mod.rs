// Domain models shared by the aggregation, decimation and image parsing code

mod image;
mod snapshot;

pub use image::ImageReference;
pub use snapshot::Snapshot;
