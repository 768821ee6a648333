/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// A rectangle with floating-point coordinates, described by its top-left corner and its size
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct FloatRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

///
/// A rectangle with integer coordinates, described by its top-left corner and its size
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl FloatRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> FloatRect {
        FloatRect {
            left,
            top,
            width,
            height,
        }
    }

    ///
    /// True if the point is inside this rectangle (the right and bottom edges are excluded)
    ///
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (min_x, max_x) = min_max(self.left, self.left + self.width);
        let (min_y, max_y) = min_max(self.top, self.top + self.height);

        x >= min_x && x < max_x && y >= min_y && y < max_y
    }
}

impl IntRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> IntRect {
        IntRect {
            left,
            top,
            width,
            height,
        }
    }

    ///
    /// True if the point is inside this rectangle (the right and bottom edges are excluded)
    ///
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (min_x, max_x) = min_max(self.left, self.left + self.width);
        let (min_y, max_y) = min_max(self.top, self.top + self.height);

        x >= min_x && x < max_x && y >= min_y && y < max_y
    }
}

#[inline]
fn min_max<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
