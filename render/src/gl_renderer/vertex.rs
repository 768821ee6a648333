/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::gl_api::*;
use super::gl_check::*;
use crate::buffer::*;

use gl;
use gl::types::*;

use std::mem;

/// Byte offset of the colour within a vertex
pub const VERTEX_COLOR_OFFSET: usize = 2 * mem::size_of::<f32>();

/// Byte offset of the texture coordinates within a vertex
pub const VERTEX_TEX_COORDS_OFFSET: usize = VERTEX_COLOR_OFFSET + 4 * mem::size_of::<u8>();

impl Vertex {
    ///
    /// Points the driver's position, colour and texture coordinate arrays at a block of vertices
    ///
    /// # Safety
    ///
    /// The vertices must stay at the same address until the pointers are replaced or the last draw
    /// that uses them has been issued.
    ///
    pub unsafe fn set_client_pointers(api: &dyn GlApi, vertices: *const Vertex) {
        let stride = mem::size_of::<Self>() as GLsizei;
        let data = vertices as *const u8;

        gl_check!(api, api.vertex_pointer(2, gl::FLOAT, stride, data as *const GLvoid));
        gl_check!(
            api,
            api.color_pointer(
                4,
                gl::UNSIGNED_BYTE,
                stride,
                data.add(VERTEX_COLOR_OFFSET) as *const GLvoid
            )
        );
        gl_check!(
            api,
            api.tex_coord_pointer(
                2,
                gl::FLOAT,
                stride,
                data.add(VERTEX_TEX_COORDS_OFFSET) as *const GLvoid
            )
        );
    }
}
