mod bbox;
mod matrix;
mod transform_attr;
mod types;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use matrix::Matrix;
pub use transform_attr::TransformList;
pub use types::{Point, Size};
