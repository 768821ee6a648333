/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

///
/// A 2D vector with floating-point components
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

///
/// A 2D vector with signed integer components (typically a pixel position)
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

///
/// A 2D vector with unsigned integer components (typically a size in pixels)
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Vector2u {
    pub x: u32,
    pub y: u32,
}

impl Vector2f {
    pub const fn new(x: f32, y: f32) -> Vector2f {
        Vector2f { x, y }
    }
}

impl Vector2i {
    pub const fn new(x: i32, y: i32) -> Vector2i {
        Vector2i { x, y }
    }
}

impl Vector2u {
    pub const fn new(x: u32, y: u32) -> Vector2u {
        Vector2u { x, y }
    }
}

impl Add for Vector2f {
    type Output = Vector2f;

    fn add(self, other: Vector2f) -> Vector2f {
        Vector2f::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2f {
    type Output = Vector2f;

    fn sub(self, other: Vector2f) -> Vector2f {
        Vector2f::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2f {
    type Output = Vector2f;

    fn neg(self) -> Vector2f {
        Vector2f::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2f {
    type Output = Vector2f;

    fn mul(self, factor: f32) -> Vector2f {
        Vector2f::new(self.x * factor, self.y * factor)
    }
}

impl From<(f32, f32)> for Vector2f {
    fn from((x, y): (f32, f32)) -> Vector2f {
        Vector2f::new(x, y)
    }
}

impl From<(i32, i32)> for Vector2i {
    fn from((x, y): (i32, i32)) -> Vector2i {
        Vector2i::new(x, y)
    }
}

impl From<(u32, u32)> for Vector2u {
    fn from((x, y): (u32, u32)) -> Vector2u {
        Vector2u::new(x, y)
    }
}
