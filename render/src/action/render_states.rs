/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::blend_mode::*;
use crate::geometry::*;
use crate::render_target::{Shader, Texture};

use std::fmt;

///
/// The states used for a single draw call
///
/// The texture and shader are borrowed for the duration of the call: the render target never keeps
/// hold of them, it only remembers the texture's cache identifier.
///
#[derive(Clone, Copy)]
pub struct RenderStates<'a> {
    /// Transform applied to the vertex positions
    pub transform: Transform,

    /// How the new pixels are combined with the existing ones
    pub blend_mode: BlendMode,

    /// The texture to draw with, if any
    pub texture: Option<&'a dyn Texture>,

    /// The shader to draw with, if any
    pub shader: Option<&'a dyn Shader>,
}

impl<'a> RenderStates<'a> {
    ///
    /// The default render states: identity transform, alpha blending, no texture and no shader
    ///
    pub fn new() -> RenderStates<'a> {
        RenderStates {
            transform: Transform::IDENTITY,
            blend_mode: BLEND_ALPHA,
            texture: None,
            shader: None,
        }
    }

    pub fn with_transform(self, transform: Transform) -> RenderStates<'a> {
        RenderStates { transform, ..self }
    }

    pub fn with_blend_mode(self, blend_mode: BlendMode) -> RenderStates<'a> {
        RenderStates { blend_mode, ..self }
    }

    pub fn with_texture(self, texture: &'a dyn Texture) -> RenderStates<'a> {
        RenderStates {
            texture: Some(texture),
            ..self
        }
    }

    pub fn with_shader(self, shader: &'a dyn Shader) -> RenderStates<'a> {
        RenderStates {
            shader: Some(shader),
            ..self
        }
    }
}

impl<'a> Default for RenderStates<'a> {
    fn default() -> RenderStates<'a> {
        RenderStates::new()
    }
}

impl<'a> fmt::Debug for RenderStates<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("RenderStates")
            .field("transform", &self.transform)
            .field("blend_mode", &self.blend_mode)
            .field("texture", &self.texture.map(|texture| texture.cache_id()))
            .field("shader", &self.shader.is_some())
            .finish()
    }
}
