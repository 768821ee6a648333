/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rect::*;
use super::transform::*;
use super::vector::*;

use std::cell::Cell;

///
/// A 2D camera: maps a region of the logical coordinate space onto a region of a render target
///
/// The region of the target is the viewport, given as fractions of the target's size (so it stays
/// valid when the target is resized). The transform from logical coordinates to clip coordinates,
/// and its inverse, are derived from the other properties and only computed when they're needed.
///
#[derive(Clone, Debug)]
pub struct View {
    center: Vector2f,
    size: Vector2f,
    rotation: f32,
    viewport: FloatRect,

    /// Memoized logical to clip-space transform
    transform: Cell<Option<Transform>>,

    /// Memoized clip-space to logical transform
    inverse_transform: Cell<Option<Transform>>,
}

impl View {
    ///
    /// Creates a view centered on a point, covering an area of the specified size
    ///
    pub fn new(center: Vector2f, size: Vector2f) -> View {
        View {
            center,
            size,
            rotation: 0.0,
            viewport: FloatRect::new(0.0, 0.0, 1.0, 1.0),
            transform: Cell::new(None),
            inverse_transform: Cell::new(None),
        }
    }

    ///
    /// Creates a view that covers the specified rectangle
    ///
    pub fn from_rect(rect: FloatRect) -> View {
        let mut view = View::default();
        view.reset(rect);
        view
    }

    ///
    /// Makes this view cover a rectangle, and clears any rotation
    ///
    /// The viewport is left as it is.
    ///
    pub fn reset(&mut self, rect: FloatRect) {
        self.center = Vector2f::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0);
        self.size = Vector2f::new(rect.width, rect.height);
        self.rotation = 0.0;

        self.invalidate();
    }

    #[inline]
    pub fn center(&self) -> Vector2f {
        self.center
    }

    #[inline]
    pub fn size(&self) -> Vector2f {
        self.size
    }

    ///
    /// The rotation of this view, in degrees (0-360)
    ///
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn viewport(&self) -> FloatRect {
        self.viewport
    }

    pub fn set_center(&mut self, center: Vector2f) {
        self.center = center;
        self.invalidate();
    }

    pub fn set_size(&mut self, size: Vector2f) {
        self.size = size;
        self.invalidate();
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        let mut rotation = degrees % 360.0;
        if rotation < 0.0 {
            rotation += 360.0;
        }

        self.rotation = rotation;
        self.invalidate();
    }

    ///
    /// Sets the area of the render target that this view is displayed in, as fractions of its size
    ///
    pub fn set_viewport(&mut self, viewport: FloatRect) {
        self.viewport = viewport;
    }

    pub fn move_by(&mut self, offset: Vector2f) {
        self.set_center(self.center + offset);
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.set_rotation(self.rotation + degrees);
    }

    ///
    /// Resizes the view relative to its current size (values above 1 zoom out)
    ///
    pub fn zoom(&mut self, factor: f32) {
        self.set_size(self.size * factor);
    }

    ///
    /// The transform from logical coordinates to clip space ([-1, 1] on both axes, y pointing up)
    ///
    pub fn transform(&self) -> Transform {
        if let Some(transform) = self.transform.get() {
            return transform;
        }

        let (sine, cosine) = self.rotation.to_radians().sin_cos();
        let center = self.center;

        let tx = -center.x * cosine - center.y * sine + center.x;
        let ty = center.x * sine - center.y * cosine + center.y;

        let a = 2.0 / self.size.x;
        let b = -2.0 / self.size.y;
        let c = -a * center.x;
        let d = -b * center.y;

        let transform = Transform::new(
            a * cosine,
            a * sine,
            a * tx + c,
            -b * sine,
            b * cosine,
            b * ty + d,
            0.0,
            0.0,
            1.0,
        );

        self.transform.set(Some(transform));
        transform
    }

    ///
    /// The transform from clip space back to logical coordinates
    ///
    pub fn inverse_transform(&self) -> Transform {
        if let Some(inverse) = self.inverse_transform.get() {
            return inverse;
        }

        let inverse = self.transform().inverse();
        self.inverse_transform.set(Some(inverse));
        inverse
    }

    fn invalidate(&mut self) {
        self.transform.set(None);
        self.inverse_transform.set(None);
    }
}

impl Default for View {
    fn default() -> View {
        View::new(Vector2f::new(500.0, 500.0), Vector2f::new(1000.0, 1000.0))
    }
}

impl PartialEq for View {
    fn eq(&self, other: &View) -> bool {
        self.center == other.center
            && self.size == other.size
            && self.rotation == other.rotation
            && self.viewport == other.viewport
    }
}
