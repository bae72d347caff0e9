use geo::Point;

/// A coordinate pair carrying a reference to the record it was taken from.
///
/// Spatial points only live inside an ordering strategy: they are built from
/// entities, fed to an index, and dropped once the order is known. The payload
/// is usually a borrowed entity or an arena index, never an owned copy.
///
/// # Examples
///
/// ```
/// use linea_types::point::SpatialPoint;
///
/// let p = SpatialPoint::new(10.0, 20.0, "a");
/// assert_eq!(p.x(), 10.0);
/// assert!(p.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialPoint<T> {
    pub point: Point<f64>,
    pub payload: T,
}

impl<T> SpatialPoint<T> {
    pub fn new(x: f64, y: f64, payload: T) -> Self {
        Self {
            point: Point::new(x, y),
            payload,
        }
    }

    pub fn from_point(point: Point<f64>, payload: T) -> Self {
        Self { point, payload }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.point.x().is_finite() && self.point.y().is_finite()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SpatialPoint<U> {
        SpatialPoint {
            point: self.point,
            payload: f(self.payload),
        }
    }
}
