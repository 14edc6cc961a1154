pub mod reader;
pub mod store;

use crate::coords::initial_bearing;

/// A directed segment between two geopoints, each (latitude, longitude)
/// in decimal degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Segment {
    /// The initial bearing along the segment, in degrees in [0, 360).
    pub fn bearing(&self) -> f64 {
        initial_bearing(&self.from, &self.to)
    }
}
