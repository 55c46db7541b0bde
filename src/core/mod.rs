pub mod normalize;
pub mod path;
pub mod primitives;
pub mod series;
pub mod types;

pub use normalize::{DEGENERATE_AXIS_COORDINATE, ValueRange, normalize, value_range};
pub use path::{CurvePath, LineSegment, LineStyle, QuadSegment, build_path};
pub use series::ChartSeries;
pub use types::{DataPoint, NormalizedPoint, PixelPoint, Viewport};
