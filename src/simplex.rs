//! The GJK simplex and its update rules.
//!
//! Points are named `a`, `b`, `c`, `d`; `a` is always the most recently added
//! point. Depending on the stage, the live points are:
//!
//! | len | points        |
//! |-----|---------------|
//! | 2   | `b c`         |
//! | 3   | `a b c` after a push, `b c d` after a reduction |
//! | 4   | `a b c d`     |

use glam::Vec3;

use crate::support::SupportPoint;

/// Terminal GJK simplex handed to EPA, ordered `a b c d`.
pub type Tetrahedron = [SupportPoint; 4];

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;

/// Fixed-capacity simplex of up to four support points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplex {
    points: [SupportPoint; 4],
    len: usize,
}

impl Simplex {
    /// Start from a segment. `c` is the first support point, `b` the second.
    pub fn line(b: SupportPoint, c: SupportPoint) -> Self {
        Self {
            points: [b, b, c, c],
            len: 2,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The four points, if the simplex is a tetrahedron.
    pub fn tetrahedron(&self) -> Option<Tetrahedron> {
        (self.len == 4).then_some(self.points)
    }

    /// Add a new point as `a`, growing the simplex by one.
    ///
    /// Must only be called while the simplex has two or three points.
    pub fn push(&mut self, point: SupportPoint) {
        debug_assert!(self.len == 2 || self.len == 3);
        self.points[A] = point;
        self.len += 1;
    }

    /// Reduce the simplex toward the origin after a push and update the
    /// search direction. Returns `true` if the tetrahedron encloses the
    /// origin.
    pub fn update(&mut self, direction: &mut Vec3) -> bool {
        match self.len {
            3 => {
                self.update_triangle(direction);
                false
            }
            4 => self.update_tetrahedron(direction),
            _ => false,
        }
    }

    fn update_triangle(&mut self, direction: &mut Vec3) {
        let (a, b, c) = (self.points[A], self.points[B], self.points[C]);
        let ab = b.point - a.point;
        let ac = c.point - a.point;
        let ao = -a.point;
        let n = ab.cross(ac);

        // Origin outside edge AB: keep the segment A-B
        if ab.cross(n).dot(ao) > 0.0 {
            self.points[C] = a;
            self.len = 2;
            *direction = triple_cross(ab, ao, ab);
            return;
        }
        // Origin outside edge AC: keep the segment A-C
        if n.cross(ac).dot(ao) > 0.0 {
            self.points[B] = a;
            self.len = 2;
            *direction = triple_cross(ac, ao, ac);
            return;
        }

        // Origin above or below the triangle: wind it so the next point
        // becomes the apex of a tetrahedron with outward faces ABC, ACD, ADB.
        if n.dot(ao) > 0.0 {
            self.points = [a, a, b, c];
            *direction = n;
        } else {
            self.points = [a, a, c, b];
            *direction = -n;
        }
    }

    fn update_tetrahedron(&mut self, direction: &mut Vec3) -> bool {
        let (a, b, c, d) = (self.points[A], self.points[B], self.points[C], self.points[D]);
        let ab = b.point - a.point;
        let ac = c.point - a.point;
        let ad = d.point - a.point;
        let ao = -a.point;

        let abc = ab.cross(ac);
        let acd = ac.cross(ad);
        let adb = ad.cross(ab);

        if abc.dot(ao) > 0.0 {
            self.points = [a, a, b, c];
            self.len = 3;
            *direction = abc;
            return false;
        }
        if acd.dot(ao) > 0.0 {
            self.points = [a, a, c, d];
            self.len = 3;
            *direction = acd;
            return false;
        }
        if adb.dot(ao) > 0.0 {
            self.points = [a, a, d, b];
            self.len = 3;
            *direction = adb;
            return false;
        }

        // Origin is inside the tetrahedron
        true
    }
}

/// Triple cross product: (a x b) x c
#[inline]
pub(crate) fn triple_cross(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a.cross(b).cross(c)
}
