/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rect::*;
use super::vector::*;

use std::ops::Mul;

///
/// A 2D affine transform
///
/// This is a 3x3 matrix, stored as the 4x4 column-major matrix that the driver expects to be
/// passed to `load_matrix`, so it can be uploaded without conversion.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform([f32; 16]);

impl Transform {
    pub const IDENTITY: Transform = Transform([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    ///
    /// Creates a transform from the 9 elements of a 3x3 matrix, given in row order
    ///
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a00: f32,
        a01: f32,
        a02: f32,
        a10: f32,
        a11: f32,
        a12: f32,
        a20: f32,
        a21: f32,
        a22: f32,
    ) -> Transform {
        Transform([
            a00, a10, 0.0, a20, //
            a01, a11, 0.0, a21, //
            0.0, 0.0, 1.0, 0.0, //
            a02, a12, 0.0, a22, //
        ])
    }

    ///
    /// The 4x4 column-major matrix for this transform
    ///
    #[inline]
    pub fn matrix(&self) -> &[f32; 16] {
        &self.0
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn transform_point(&self, point: Vector2f) -> Vector2f {
        let m = &self.0;

        Vector2f::new(
            m[0] * point.x + m[4] * point.y + m[12],
            m[1] * point.x + m[5] * point.y + m[13],
        )
    }

    ///
    /// Returns the inverse of this transform, or the identity transform if it can't be inverted
    ///
    pub fn inverse(&self) -> Transform {
        let m = &self.0;

        let det = m[0] * (m[15] * m[5] - m[7] * m[13]) - m[1] * (m[15] * m[4] - m[7] * m[12])
            + m[3] * (m[13] * m[4] - m[5] * m[12]);

        if det == 0.0 {
            return Transform::IDENTITY;
        }

        Transform::new(
            (m[15] * m[5] - m[7] * m[13]) / det,
            -(m[15] * m[4] - m[7] * m[12]) / det,
            (m[13] * m[4] - m[5] * m[12]) / det,
            -(m[15] * m[1] - m[3] * m[13]) / det,
            (m[15] * m[0] - m[3] * m[12]) / det,
            -(m[13] * m[0] - m[1] * m[12]) / det,
            (m[7] * m[1] - m[3] * m[5]) / det,
            -(m[7] * m[0] - m[3] * m[4]) / det,
            (m[5] * m[0] - m[1] * m[4]) / det,
        )
    }

    ///
    /// Combines this transform with another one: the result applies `other` first, then `self`
    ///
    pub fn combine(&self, other: &Transform) -> Transform {
        let a = &self.0;
        let b = &other.0;

        Transform::new(
            a[0] * b[0] + a[4] * b[1] + a[12] * b[3],
            a[0] * b[4] + a[4] * b[5] + a[12] * b[7],
            a[0] * b[12] + a[4] * b[13] + a[12] * b[15],
            a[1] * b[0] + a[5] * b[1] + a[13] * b[3],
            a[1] * b[4] + a[5] * b[5] + a[13] * b[7],
            a[1] * b[12] + a[5] * b[13] + a[13] * b[15],
            a[3] * b[0] + a[7] * b[1] + a[15] * b[3],
            a[3] * b[4] + a[7] * b[5] + a[15] * b[7],
            a[3] * b[12] + a[7] * b[13] + a[15] * b[15],
        )
    }

    pub fn translate(&self, offset: Vector2f) -> Transform {
        self.combine(&Transform::new(
            1.0, 0.0, offset.x, //
            0.0, 1.0, offset.y, //
            0.0, 0.0, 1.0,
        ))
    }

    ///
    /// Rotates by an angle in degrees around the origin
    ///
    pub fn rotate(&self, degrees: f32) -> Transform {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();

        self.combine(&Transform::new(
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    pub fn scale(&self, factors: Vector2f) -> Transform {
        self.combine(&Transform::new(
            factors.x, 0.0, 0.0, //
            0.0, factors.y, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    ///
    /// Transforms a rectangle, returning the axis-aligned bounding box of the result
    ///
    pub fn transform_rect(&self, rect: &FloatRect) -> FloatRect {
        let points = [
            self.transform_point(Vector2f::new(rect.left, rect.top)),
            self.transform_point(Vector2f::new(rect.left, rect.top + rect.height)),
            self.transform_point(Vector2f::new(rect.left + rect.width, rect.top)),
            self.transform_point(Vector2f::new(rect.left + rect.width, rect.top + rect.height)),
        ];

        let (mut left, mut top) = (points[0].x, points[0].y);
        let (mut right, mut bottom) = (points[0].x, points[0].y);

        for point in points.iter().skip(1) {
            left = left.min(point.x);
            right = right.max(point.x);
            top = top.min(point.y);
            bottom = bottom.max(point.y);
        }

        FloatRect::new(left, top, right - left, bottom - top)
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::IDENTITY
    }
}

impl Mul<Vector2f> for Transform {
    type Output = Vector2f;

    fn mul(self, point: Vector2f) -> Vector2f {
        self.transform_point(point)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, other: Transform) -> Transform {
        self.combine(&other)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: Vector2f, b: Vector2f) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let point = Vector2f::new(12.0, -3.5);

        assert!(Transform::IDENTITY.transform_point(point) == point);
    }

    #[test]
    fn translate_then_invert() {
        let transform = Transform::IDENTITY
            .translate(Vector2f::new(10.0, 20.0))
            .scale(Vector2f::new(2.0, 4.0));
        let point = Vector2f::new(3.0, 5.0);

        let moved = transform.transform_point(point);
        assert!(close(moved, Vector2f::new(16.0, 40.0)));
        assert!(close(transform.inverse().transform_point(moved), point));
    }

    #[test]
    fn combine_applies_right_hand_side_first() {
        let scale = Transform::IDENTITY.scale(Vector2f::new(2.0, 2.0));
        let translate = Transform::IDENTITY.translate(Vector2f::new(1.0, 0.0));

        let combined = scale * translate;
        assert!(close(
            combined.transform_point(Vector2f::new(0.0, 0.0)),
            Vector2f::new(2.0, 0.0)
        ));
    }

    #[test]
    fn singular_transform_inverts_to_identity() {
        let flat = Transform::IDENTITY.scale(Vector2f::new(0.0, 1.0));

        assert!(flat.inverse() == Transform::IDENTITY);
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = Transform::IDENTITY.rotate(90.0);

        assert!(close(
            rotated.transform_point(Vector2f::new(1.0, 0.0)),
            Vector2f::new(0.0, 1.0)
        ));
    }
}
