/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::capabilities::*;

use gl::types::*;

///
/// The set of driver calls issued by the render targets
///
/// Every call goes to whichever context is current on the calling thread, so callers must activate
/// the right context first. `GlDriver` forwards these to OpenGL; anything else implementing this
/// trait (a recording driver, for instance) sees exactly the calls the render targets issue.
///
/// Functions from an extension are passed the entry points the capability prober resolved for it,
/// and a driver calls through those rather than looking the function up again.
///
pub trait GlApi: Send + Sync {
    fn get_error(&self) -> GLenum;
    fn get_integer(&self, name: GLenum) -> GLint;
    fn get_string(&self, name: GLenum) -> Option<String>;
    fn get_string_indexed(&self, name: GLenum, index: GLuint) -> Option<String>;

    fn enable(&self, capability: GLenum);
    fn disable(&self, capability: GLenum);
    fn enable_client_state(&self, array: GLenum);

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn clear(&self, mask: GLbitfield);
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn flush(&self);

    fn matrix_mode(&self, mode: GLenum);
    fn load_matrix(&self, matrix: &[GLfloat; 16]);
    fn load_identity(&self);
    fn push_matrix(&self);
    fn pop_matrix(&self);
    fn push_attrib(&self, mask: GLbitfield);
    fn pop_attrib(&self);
    fn push_client_attrib(&self, mask: GLbitfield);
    fn pop_client_attrib(&self);

    fn active_texture(&self, functions: &Multitexture, unit: GLenum);
    fn client_active_texture(&self, functions: &Multitexture, unit: GLenum);
    fn bind_texture(&self, target: GLenum, texture: GLuint);

    fn blend_func(&self, src: GLenum, dst: GLenum);
    fn blend_func_separate(
        &self,
        functions: &BlendFuncSeparate,
        color_src: GLenum,
        color_dst: GLenum,
        alpha_src: GLenum,
        alpha_dst: GLenum,
    );
    fn blend_equation(&self, functions: &BlendMinmax, equation: GLenum);
    fn blend_equation_separate(&self, functions: &BlendEquationSeparate, color_equation: GLenum, alpha_equation: GLenum);

    fn use_program(&self, program: GLuint);

    ///
    /// Sets where vertex positions are read from
    ///
    /// # Safety
    ///
    /// The driver keeps the pointer and reads from it during later calls to `draw_arrays`, so the
    /// memory it points at must stay valid until the pointer is replaced.
    ///
    unsafe fn vertex_pointer(&self, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const GLvoid);

    /// # Safety
    ///
    /// As for `vertex_pointer`
    unsafe fn color_pointer(&self, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const GLvoid);

    /// # Safety
    ///
    /// As for `vertex_pointer`
    unsafe fn tex_coord_pointer(&self, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const GLvoid);

    ///
    /// Draws primitives using the current client pointers
    ///
    /// # Safety
    ///
    /// The current vertex, colour and texture coordinate pointers must each point at at least `first + count`
    /// valid elements.
    ///
    unsafe fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei);

    fn gen_framebuffer(&self, functions: &FramebufferObject) -> GLuint;
    fn bind_framebuffer(&self, functions: &FramebufferObject, target: GLenum, framebuffer: GLuint);
    fn delete_framebuffer(&self, functions: &FramebufferObject, framebuffer: GLuint);
    fn check_framebuffer_status(&self, functions: &FramebufferObject, target: GLenum) -> GLenum;
    fn framebuffer_texture_2d(
        &self,
        functions: &FramebufferObject,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: GLuint,
        level: GLint,
    );
    fn framebuffer_renderbuffer(
        &self,
        functions: &FramebufferObject,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    );

    fn gen_renderbuffer(&self, functions: &FramebufferObject) -> GLuint;
    fn bind_renderbuffer(&self, functions: &FramebufferObject, target: GLenum, renderbuffer: GLuint);
    fn delete_renderbuffer(&self, functions: &FramebufferObject, renderbuffer: GLuint);
    fn renderbuffer_storage(
        &self,
        functions: &FramebufferObject,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
}
