/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::action::*;
use crate::geometry::*;
use crate::gl_renderer::*;
use crate::gl_renderer::compat;

use gl;
use gl::types::*;

///
/// How texture coordinates are interpreted when a texture is bound
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CoordinateType {
    /// Texture coordinates are in the range 0.0-1.0
    Normalized,

    /// Texture coordinates are in pixels
    Pixels,
}

///
/// The part of a texture that render targets need
///
pub trait Texture {
    ///
    /// An identifier that is unique to this texture for the lifetime of the process
    ///
    fn cache_id(&self) -> TextureCacheId;

    ///
    /// True if this texture is the colour attachment of an offscreen framebuffer
    ///
    fn is_fbo_attachment(&self) -> bool {
        false
    }

    ///
    /// Binds this texture to the 2D texture target and sets up the texture matrix
    ///
    fn bind(&self, api: &dyn GlApi, coordinates: CoordinateType);
}

///
/// Binds a texture, or unbinds the current one if `texture` is None
///
pub fn bind_texture(api: &dyn GlApi, texture: Option<&dyn Texture>, coordinates: CoordinateType) {
    match texture {
        Some(texture) => texture.bind(api, coordinates),
        None => {
            gl_check!(api, api.bind_texture(gl::TEXTURE_2D, 0));

            gl_check!(api, api.matrix_mode(compat::TEXTURE));
            gl_check!(api, api.load_identity());
            gl_check!(api, api.matrix_mode(compat::MODELVIEW));
        }
    }
}

///
/// A texture that has already been created in the driver
///
/// The size of the texture in the driver can be larger than the size of the image (when only
/// power-of-two textures are supported, for example), so both are kept so that pixel coordinates
/// can be converted.
///
#[derive(Clone, Debug, PartialEq)]
pub struct TextureHandle {
    texture: GLuint,
    cache_id: TextureCacheId,
    size: Vector2u,
    actual_size: Vector2u,
    pixels_flipped: bool,
    fbo_attachment: bool,
}

impl TextureHandle {
    ///
    /// Describes a texture with the specified driver name
    ///
    pub fn new(texture: GLuint, size: Vector2u, actual_size: Vector2u) -> TextureHandle {
        TextureHandle {
            texture,
            cache_id: TextureCacheId::next(),
            size,
            actual_size,
            pixels_flipped: false,
            fbo_attachment: false,
        }
    }

    ///
    /// Describes a texture that is the colour attachment of a framebuffer (whose rows are stored bottom to top)
    ///
    pub fn for_framebuffer(texture: GLuint, size: Vector2u, actual_size: Vector2u) -> TextureHandle {
        TextureHandle {
            pixels_flipped: true,
            fbo_attachment: true,
            ..TextureHandle::new(texture, size, actual_size)
        }
    }

    #[inline]
    pub fn native_handle(&self) -> GLuint {
        self.texture
    }

    #[inline]
    pub fn size(&self) -> Vector2u {
        self.size
    }

    ///
    /// Marks the contents of this texture as changed, so render targets will rebind it
    ///
    pub fn invalidate(&mut self) {
        self.cache_id = TextureCacheId::next();
    }

    ///
    /// The texture matrix to use with this texture, or None if the identity matrix is fine
    ///
    pub fn texture_matrix(&self, coordinates: CoordinateType) -> Option<[GLfloat; 16]> {
        if coordinates != CoordinateType::Pixels && !self.pixels_flipped {
            return None;
        }

        let mut matrix = *Transform::IDENTITY.matrix();

        if coordinates == CoordinateType::Pixels {
            matrix[0] = 1.0 / self.actual_size.x as f32;
            matrix[5] = 1.0 / self.actual_size.y as f32;
        }

        if self.pixels_flipped {
            matrix[5] = -matrix[5];
            matrix[13] = self.size.y as f32 / self.actual_size.y as f32;
        }

        Some(matrix)
    }
}

impl Texture for TextureHandle {
    fn cache_id(&self) -> TextureCacheId {
        self.cache_id
    }

    fn is_fbo_attachment(&self) -> bool {
        self.fbo_attachment
    }

    fn bind(&self, api: &dyn GlApi, coordinates: CoordinateType) {
        gl_check!(api, api.bind_texture(gl::TEXTURE_2D, self.texture));

        if let Some(matrix) = self.texture_matrix(coordinates) {
            gl_check!(api, api.matrix_mode(compat::TEXTURE));
            gl_check!(api, api.load_matrix(&matrix));
            gl_check!(api, api.matrix_mode(compat::MODELVIEW));
        }
    }
}
