/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::action::*;
use crate::geometry::*;

///
/// A point with a colour and texture coordinates
///
/// The layout is fixed: the driver reads vertices directly out of slices of this type using the
/// offsets defined in the GL renderer.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vertex {
    pub position: Vector2f,
    pub color: Rgba8,
    pub tex_coords: Vector2f,
}

impl Vertex {
    pub const fn new(position: Vector2f, color: Rgba8, tex_coords: Vector2f) -> Vertex {
        Vertex {
            position,
            color,
            tex_coords,
        }
    }

    ///
    /// A white vertex with no texture coordinates
    ///
    pub const fn with_position(position: Vector2f) -> Vertex {
        Vertex {
            position,
            color: Rgba8::WHITE,
            tex_coords: Vector2f::new(0.0, 0.0),
        }
    }
}
