use crate::scalar::Scalar;
use crate::Vector;

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    type Scalar: Scalar;

    /// Unit normal on the left-hand side of the curve at its start.
    fn start_normal(&self) -> Vector<Self::Scalar>;

    /// Unit normal on the left-hand side of the curve at its end.
    fn end_normal(&self) -> Vector<Self::Scalar>;
}

macro_rules! impl_segment {
    ($S:ty) => {
        type Scalar = $S;
        fn start_normal(&self) -> Vector<$S> {
            self.start_normal()
        }
        fn end_normal(&self) -> Vector<$S> {
            self.end_normal()
        }
    };
}
