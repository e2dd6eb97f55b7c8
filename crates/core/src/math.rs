use std::iter::FusedIterator;

use crate::vector::{Axis, Scalar, Vector};

/// Component-wise signum: `-1`, `0` or `1` on each axis.
pub fn sign<T: Scalar>(vec: Vector<T>) -> Vector<T> {
    vec.map(|c| {
        if c > T::ZERO {
            T::ONE
        } else if c < T::ZERO {
            -T::ONE
        } else {
            T::ZERO
        }
    })
}

/// Axes sorted by the magnitude of their component, smallest first. Ties keep x, y, z order.
fn axes_by_magnitude<T: Scalar>(vec: Vector<T>) -> [Axis; 3] {
    let vec = vec.abs();
    let mut axes = Axis::ALL;
    // Stable sort, so ties keep their relative order.
    axes.sort_by(|a, b| {
        vec.axis(*a)
            .partial_cmp(&vec.axis(*b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    axes
}

/// The axis along which `vec` travels the furthest. On ties, the later axis wins.
pub fn dominant_axis<T: Scalar>(vec: Vector<T>) -> Axis {
    axes_by_magnitude(vec)[2]
}

/// Every voxel on the straight line from `start` to `end`, both inclusive, using a 3d
/// Bresenham walk.
///
/// The dominant axis advances on every step, the other two only when their error term
/// overflows.
pub fn line(start: Vector, end: Vector) -> Line {
    let delta = end - start;
    let error_inc = delta.abs() << 1;

    let [sub_a, sub_b, dominant] = axes_by_magnitude(error_inc);
    let error_dec = error_inc.axis(dominant);

    Line {
        pos: start.to_array(),
        end: end.axis(dominant),
        inc: sign(delta).to_array(),
        error: (error_inc - (error_dec >> 1)).to_array(),
        error_inc: error_inc.to_array(),
        error_dec,
        dominant,
        subs: [sub_a, sub_b],
        done: false,
    }
}

/// Iterator returned by [`line`].
#[derive(Debug, Clone)]
pub struct Line {
    pos: [i32; 3],
    end: i32,
    inc: [i32; 3],
    error: [i32; 3],
    error_inc: [i32; 3],
    error_dec: i32,
    dominant: Axis,
    subs: [Axis; 2],
    done: bool,
}

impl Iterator for Line {
    type Item = Vector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = Vector::from(self.pos);

        let d = self.dominant.index();
        if self.pos[d] == self.end {
            self.done = true;
            return Some(current);
        }

        self.pos[d] += self.inc[d];
        for sub in self.subs.map(Axis::index) {
            if self.error[sub] >= 0 {
                self.pos[sub] += self.inc[sub];
                self.error[sub] -= self.error_dec;
            }
            self.error[sub] += self.error_inc[sub];
        }

        Some(current)
    }
}

impl FusedIterator for Line {}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32, z: i32) -> Vector {
        Vector::new(x, y, z)
    }

    #[test]
    fn sign() {
        assert_eq!(super::sign(v(-5, 0, 12)), v(-1, 0, 1));
        assert_eq!(super::sign(Vector::<i32>::ZERO), Vector::ZERO);
        assert_eq!(
            super::sign(Vector::new(-0.3, 2.0, 0.0)),
            Vector::new(-1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn dominant_axis() {
        assert_eq!(super::dominant_axis(v(-5, 4, 3)), Axis::X);
        assert_eq!(super::dominant_axis(v(5, -7, 3)), Axis::Y);
        assert_eq!(super::dominant_axis(v(0, 0, 0)), Axis::Z);
        assert_eq!(super::dominant_axis(v(2, 2, 0)), Axis::Y);
    }

    #[test]
    fn line_single_point() {
        assert_eq!(line(v(1, 2, 3), v(1, 2, 3)).collect::<Vec<_>>(), vec![v(1, 2, 3)]);
    }

    #[test]
    fn line_straight() {
        assert_eq!(
            line(v(0, 0, 0), v(3, 0, 0)).collect::<Vec<_>>(),
            vec![v(0, 0, 0), v(1, 0, 0), v(2, 0, 0), v(3, 0, 0)]
        );
        assert_eq!(
            line(v(0, 2, 0), v(0, -1, 0)).collect::<Vec<_>>(),
            vec![v(0, 2, 0), v(0, 1, 0), v(0, 0, 0), v(0, -1, 0)]
        );
    }

    #[test]
    fn line_diagonal() {
        assert_eq!(
            line(v(0, 0, 0), v(2, 2, 2)).collect::<Vec<_>>(),
            vec![v(0, 0, 0), v(1, 1, 1), v(2, 2, 2)]
        );
        assert_eq!(
            line(v(0, 0, 0), v(4, 2, 0)).collect::<Vec<_>>(),
            vec![v(0, 0, 0), v(1, 1, 0), v(2, 1, 0), v(3, 2, 0), v(4, 2, 0)]
        );
    }

    #[test]
    fn line_is_connected() {
        let start = v(-3, 7, 2);
        let end = v(9, -4, 5);
        let points = line(start, end).collect::<Vec<_>>();

        assert_eq!(points.first(), Some(&start));
        assert_eq!(points.last(), Some(&end));
        assert_eq!(points.len(), 13);
        for pair in points.windows(2) {
            let step = (pair[1] - pair[0]).abs();
            assert!(step.x <= 1 && step.y <= 1 && step.z <= 1, "{pair:?} isn't adjacent");
        }
    }
}
