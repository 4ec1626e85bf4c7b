//! Aliases for the mathematical types used throughout this crate.

pub use na::{Isometry3, Point3, UnitVector3, Vector3};

/// The scalar type used throughout this crate.
pub use f32 as Real;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The unit vector type.
pub use UnitVector3 as UnitVector;

/// The transformation matrix type.
pub use Isometry3 as Isometry;
