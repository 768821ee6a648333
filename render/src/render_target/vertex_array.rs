/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::drawable::*;
use super::render_surface::*;
use super::render_target::*;
use crate::action::*;
use crate::buffer::*;
use crate::geometry::*;

use std::ops::{Deref, DerefMut};

///
/// A list of vertices that are drawn as a single batch
///
#[derive(Clone, Debug, PartialEq)]
pub struct VertexArray {
    vertices: Vec<Vertex>,
    primitive_type: PrimitiveType,
}

impl VertexArray {
    ///
    /// Creates a new, empty vertex array
    ///
    pub fn new(primitive_type: PrimitiveType) -> VertexArray {
        VertexArray {
            vertices: vec![],
            primitive_type,
        }
    }

    pub fn from_vertices(primitive_type: PrimitiveType, vertices: Vec<Vertex>) -> VertexArray {
        VertexArray {
            vertices,
            primitive_type,
        }
    }

    #[inline]
    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) {
        self.primitive_type = primitive_type;
    }

    ///
    /// The bounding rectangle of the vertex positions
    ///
    pub fn bounds(&self) -> FloatRect {
        let first = match self.vertices.first() {
            Some(vertex) => vertex.position,
            None => return FloatRect::default(),
        };

        let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);

        for vertex in self.vertices.iter().skip(1) {
            left = left.min(vertex.position.x);
            right = right.max(vertex.position.x);
            top = top.min(vertex.position.y);
            bottom = bottom.max(vertex.position.y);
        }

        FloatRect::new(left, top, right - left, bottom - top)
    }
}

impl Deref for VertexArray {
    type Target = Vec<Vertex>;

    fn deref(&self) -> &Vec<Vertex> {
        &self.vertices
    }
}

impl DerefMut for VertexArray {
    fn deref_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.vertices
    }
}

impl Drawable for VertexArray {
    fn draw<TSurface: RenderSurface>(&self, target: &mut RenderTarget<TSurface>, states: &RenderStates) {
        target.draw_vertices(&self.vertices, self.primitive_type, states);
    }
}
