/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::capabilities::*;
use super::gl_api::*;
use crate::context::*;

use gl;
use gl::types::*;

use std::ffi::{c_void, CStr};
use std::mem;

type EnumFn = unsafe extern "system" fn(GLenum);
type BitfieldFn = unsafe extern "system" fn(GLbitfield);
type VoidFn = unsafe extern "system" fn();
type LoadMatrixFn = unsafe extern "system" fn(*const GLfloat);
type PointerFn = unsafe extern "system" fn(GLint, GLenum, GLsizei, *const GLvoid);

///
/// Fixed-function entry points, which the `gl` crate does not load as it only covers the core profile
///
struct FixedFunctionEntryPoints {
    matrix_mode: Option<EnumFn>,
    load_matrix: Option<LoadMatrixFn>,
    load_identity: Option<VoidFn>,
    push_matrix: Option<VoidFn>,
    pop_matrix: Option<VoidFn>,
    push_attrib: Option<BitfieldFn>,
    pop_attrib: Option<VoidFn>,
    push_client_attrib: Option<BitfieldFn>,
    pop_client_attrib: Option<VoidFn>,
    enable_client_state: Option<EnumFn>,
    vertex_pointer: Option<PointerFn>,
    color_pointer: Option<PointerFn>,
    tex_coord_pointer: Option<PointerFn>,
}

///
/// Resolves a function as an optional function pointer of the requested type
///
/// # Safety
///
/// `TFn` must be an `Option<unsafe extern "system" fn(...)>` matching the real signature of the function
///
unsafe fn resolve<TFn: Copy>(loader: &dyn GlLoader, name: &str) -> TFn {
    debug_assert!(mem::size_of::<TFn>() == mem::size_of::<*const c_void>());

    let address = loader.get_function(name);
    mem::transmute_copy::<*const c_void, TFn>(&address)
}

impl FixedFunctionEntryPoints {
    fn load(loader: &dyn GlLoader) -> FixedFunctionEntryPoints {
        unsafe {
            FixedFunctionEntryPoints {
                matrix_mode: resolve(loader, "glMatrixMode"),
                load_matrix: resolve(loader, "glLoadMatrixf"),
                load_identity: resolve(loader, "glLoadIdentity"),
                push_matrix: resolve(loader, "glPushMatrix"),
                pop_matrix: resolve(loader, "glPopMatrix"),
                push_attrib: resolve(loader, "glPushAttrib"),
                pop_attrib: resolve(loader, "glPopAttrib"),
                push_client_attrib: resolve(loader, "glPushClientAttrib"),
                pop_client_attrib: resolve(loader, "glPopClientAttrib"),
                enable_client_state: resolve(loader, "glEnableClientState"),
                vertex_pointer: resolve(loader, "glVertexPointer"),
                color_pointer: resolve(loader, "glColorPointer"),
                tex_coord_pointer: resolve(loader, "glTexCoordPointer"),
            }
        }
    }
}

///
/// `GlApi` implementation that calls OpenGL
///
/// Core functions are loaded into the `gl` crate, so creating one of these replaces the global
/// function table: all contexts created by a platform layer are expected to share entry points.
/// Extension functions are called through the entry points passed in by the render targets, which
/// are the ones the capability prober resolved.
///
pub struct GlDriver {
    fixed: FixedFunctionEntryPoints,
}

impl GlDriver {
    ///
    /// Loads the driver functions using the specified loader (a context should be active)
    ///
    pub fn load(loader: &dyn GlLoader) -> GlDriver {
        gl::load_with(|name| loader.get_function(name));

        GlDriver {
            fixed: FixedFunctionEntryPoints::load(loader),
        }
    }
}

///
/// Reads a string returned by the driver
///
unsafe fn driver_string(string: *const GLubyte) -> Option<String> {
    if string.is_null() {
        None
    } else {
        Some(
            CStr::from_ptr(string as *const _)
                .to_string_lossy()
                .into_owned(),
        )
    }
}

impl GlApi for GlDriver {
    fn get_error(&self) -> GLenum {
        unsafe { gl::GetError() }
    }

    fn get_integer(&self, name: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetIntegerv(name, &mut value) };
        value
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        unsafe { driver_string(gl::GetString(name)) }
    }

    fn get_string_indexed(&self, name: GLenum, index: GLuint) -> Option<String> {
        if !gl::GetStringi::is_loaded() {
            return None;
        }

        unsafe { driver_string(gl::GetStringi(name, index)) }
    }

    fn enable(&self, capability: GLenum) {
        unsafe { gl::Enable(capability) }
    }

    fn disable(&self, capability: GLenum) {
        unsafe { gl::Disable(capability) }
    }

    fn enable_client_state(&self, array: GLenum) {
        if let Some(enable_client_state) = self.fixed.enable_client_state {
            unsafe { enable_client_state(array) }
        }
    }

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { gl::ClearColor(red, green, blue, alpha) }
    }

    fn clear(&self, mask: GLbitfield) {
        unsafe { gl::Clear(mask) }
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn flush(&self) {
        unsafe { gl::Flush() }
    }

    fn matrix_mode(&self, mode: GLenum) {
        if let Some(matrix_mode) = self.fixed.matrix_mode {
            unsafe { matrix_mode(mode) }
        }
    }

    fn load_matrix(&self, matrix: &[GLfloat; 16]) {
        if let Some(load_matrix) = self.fixed.load_matrix {
            unsafe { load_matrix(matrix.as_ptr()) }
        }
    }

    fn load_identity(&self) {
        if let Some(load_identity) = self.fixed.load_identity {
            unsafe { load_identity() }
        }
    }

    fn push_matrix(&self) {
        if let Some(push_matrix) = self.fixed.push_matrix {
            unsafe { push_matrix() }
        }
    }

    fn pop_matrix(&self) {
        if let Some(pop_matrix) = self.fixed.pop_matrix {
            unsafe { pop_matrix() }
        }
    }

    fn push_attrib(&self, mask: GLbitfield) {
        if let Some(push_attrib) = self.fixed.push_attrib {
            unsafe { push_attrib(mask) }
        }
    }

    fn pop_attrib(&self) {
        if let Some(pop_attrib) = self.fixed.pop_attrib {
            unsafe { pop_attrib() }
        }
    }

    fn push_client_attrib(&self, mask: GLbitfield) {
        if let Some(push_client_attrib) = self.fixed.push_client_attrib {
            unsafe { push_client_attrib(mask) }
        }
    }

    fn pop_client_attrib(&self) {
        if let Some(pop_client_attrib) = self.fixed.pop_client_attrib {
            unsafe { pop_client_attrib() }
        }
    }

    fn active_texture(&self, functions: &Multitexture, unit: GLenum) {
        unsafe { (functions.active_texture.function())(unit) }
    }

    fn client_active_texture(&self, functions: &Multitexture, unit: GLenum) {
        unsafe { (functions.client_active_texture.function())(unit) }
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        unsafe { gl::BindTexture(target, texture) }
    }

    fn blend_func(&self, src: GLenum, dst: GLenum) {
        unsafe { gl::BlendFunc(src, dst) }
    }

    fn blend_func_separate(
        &self,
        functions: &BlendFuncSeparate,
        color_src: GLenum,
        color_dst: GLenum,
        alpha_src: GLenum,
        alpha_dst: GLenum,
    ) {
        unsafe { (functions.blend_func_separate.function())(color_src, color_dst, alpha_src, alpha_dst) }
    }

    fn blend_equation(&self, functions: &BlendMinmax, equation: GLenum) {
        unsafe { (functions.blend_equation.function())(equation) }
    }

    fn blend_equation_separate(&self, functions: &BlendEquationSeparate, color_equation: GLenum, alpha_equation: GLenum) {
        unsafe { (functions.blend_equation_separate.function())(color_equation, alpha_equation) }
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }

    unsafe fn vertex_pointer(&self, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const GLvoid) {
        if let Some(vertex_pointer) = self.fixed.vertex_pointer {
            unsafe { vertex_pointer(size, kind, stride, pointer) }
        }
    }

    unsafe fn color_pointer(&self, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const GLvoid) {
        if let Some(color_pointer) = self.fixed.color_pointer {
            unsafe { color_pointer(size, kind, stride, pointer) }
        }
    }

    unsafe fn tex_coord_pointer(&self, size: GLint, kind: GLenum, stride: GLsizei, pointer: *const GLvoid) {
        if let Some(tex_coord_pointer) = self.fixed.tex_coord_pointer {
            unsafe { tex_coord_pointer(size, kind, stride, pointer) }
        }
    }

    unsafe fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        gl::DrawArrays(mode, first, count)
    }

    fn gen_framebuffer(&self, functions: &FramebufferObject) -> GLuint {
        let mut framebuffer = 0;
        unsafe { (functions.gen_framebuffers.function())(1, &mut framebuffer) };
        framebuffer
    }

    fn bind_framebuffer(&self, functions: &FramebufferObject, target: GLenum, framebuffer: GLuint) {
        unsafe { (functions.bind_framebuffer.function())(target, framebuffer) }
    }

    fn delete_framebuffer(&self, functions: &FramebufferObject, framebuffer: GLuint) {
        unsafe { (functions.delete_framebuffers.function())(1, &framebuffer) }
    }

    fn check_framebuffer_status(&self, functions: &FramebufferObject, target: GLenum) -> GLenum {
        unsafe { (functions.check_framebuffer_status.function())(target) }
    }

    fn framebuffer_texture_2d(
        &self,
        functions: &FramebufferObject,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe { (functions.framebuffer_texture_2d.function())(target, attachment, texture_target, texture, level) }
    }

    fn framebuffer_renderbuffer(
        &self,
        functions: &FramebufferObject,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    ) {
        unsafe { (functions.framebuffer_renderbuffer.function())(target, attachment, renderbuffer_target, renderbuffer) }
    }

    fn gen_renderbuffer(&self, functions: &FramebufferObject) -> GLuint {
        let mut renderbuffer = 0;
        unsafe { (functions.gen_renderbuffers.function())(1, &mut renderbuffer) };
        renderbuffer
    }

    fn bind_renderbuffer(&self, functions: &FramebufferObject, target: GLenum, renderbuffer: GLuint) {
        unsafe { (functions.bind_renderbuffer.function())(target, renderbuffer) }
    }

    fn delete_renderbuffer(&self, functions: &FramebufferObject, renderbuffer: GLuint) {
        unsafe { (functions.delete_renderbuffers.function())(1, &renderbuffer) }
    }

    fn renderbuffer_storage(
        &self,
        functions: &FramebufferObject,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe { (functions.renderbuffer_storage.function())(target, internal_format, width, height) }
    }
}
