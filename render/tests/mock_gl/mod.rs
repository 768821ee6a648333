/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(dead_code)]

//!
//! A driver that records the calls made to it instead of rendering anything
//!

use flo_render_target::gl;
use flo_render_target::gl::types::*;
use flo_render_target::*;

use std::collections::{HashSet, VecDeque};
use std::ffi::c_void;
use std::ptr;
use std::sync::*;

///
/// A state-changing call made to the mock driver
///
#[derive(Clone, PartialEq, Debug)]
pub enum GlCall {
    Enable(GLenum),
    Disable(GLenum),
    EnableClientState(GLenum),
    ClearColor([f32; 4]),
    Clear(GLbitfield),
    Viewport(GLint, GLint, GLsizei, GLsizei),
    Flush,

    MatrixMode(GLenum),
    LoadMatrix([f32; 16]),
    LoadIdentity,
    PushMatrix,
    PopMatrix,
    PushAttrib(GLbitfield),
    PopAttrib,
    PushClientAttrib(GLbitfield),
    PopClientAttrib,

    ActiveTexture(GLenum),
    ClientActiveTexture(GLenum),
    BindTexture(GLenum, GLuint),

    BlendFunc(GLenum, GLenum),
    BlendFuncSeparate(GLenum, GLenum, GLenum, GLenum),
    BlendEquation(GLenum),
    BlendEquationSeparate(GLenum, GLenum),

    UseProgram(GLuint),

    VertexPointer(usize),
    ColorPointer(usize),
    TexCoordPointer(usize),

    /// The vertices are read back from the vertex pointer at the time of the draw
    DrawArrays(GLenum, GLint, Vec<Vertex>),

    GenFramebuffer(GLuint),
    BindFramebuffer(GLenum, GLuint),
    DeleteFramebuffer(GLuint),
    CheckFramebufferStatus,
    FramebufferTexture2D(GLenum, GLuint, GLint),
    FramebufferRenderbuffer(GLenum, GLuint),
    GenRenderbuffer(GLuint),
    BindRenderbuffer(GLuint),
    DeleteRenderbuffer(GLuint),
    RenderbufferStorage(GLenum, GLsizei, GLsizei),

    /// A mock context was activated or deactivated
    SetActive(bool),

    /// A mock context was dropped
    DestroyContext,

    /// A context factory was asked to make sure a context is active
    EnsureContext,
}

impl GlCall {
    pub fn is_blend_update(&self) -> bool {
        match self {
            GlCall::BlendFunc(..) | GlCall::BlendFuncSeparate(..) | GlCall::BlendEquation(..) | GlCall::BlendEquationSeparate(..) => true,
            _ => false,
        }
    }

    pub fn is_draw(&self) -> bool {
        match self {
            GlCall::DrawArrays(..) => true,
            _ => false,
        }
    }
}

/// The log shared by the mock driver and the mock contexts
pub type CallLog = Arc<Mutex<Vec<GlCall>>>;

struct MockGlState {
    /// The result of the integer version queries (None to report INVALID_ENUM)
    integer_version: Option<(GLint, GLint)>,
    version_string: Option<String>,
    extensions: Vec<String>,

    /// Errors returned by get_error, oldest first
    errors: VecDeque<GLenum>,

    next_name: GLuint,
    fail_framebuffer_gen: bool,
    fail_renderbuffer_gen: bool,
    framebuffer_status: GLenum,

    vertex_pointer: usize,
}

///
/// A `GlApi` that records everything it's asked to do
///
pub struct MockGl {
    log: CallLog,
    state: Mutex<MockGlState>,
}

impl MockGl {
    pub fn new() -> MockGl {
        MockGl {
            log: Arc::new(Mutex::new(vec![])),
            state: Mutex::new(MockGlState {
                integer_version: Some((2, 1)),
                version_string: Some("2.1 Mock".to_string()),
                extensions: vec![],
                errors: VecDeque::new(),
                next_name: 1,
                fail_framebuffer_gen: false,
                fail_renderbuffer_gen: false,
                framebuffer_status: gl::FRAMEBUFFER_COMPLETE,
                vertex_pointer: 0,
            }),
        }
    }

    pub fn with_integer_version(self, version: Option<(GLint, GLint)>) -> MockGl {
        self.state.lock().unwrap().integer_version = version;
        self
    }

    pub fn with_version_string(self, version: Option<&str>) -> MockGl {
        self.state.lock().unwrap().version_string = version.map(|version| version.to_string());
        self
    }

    pub fn with_extensions(self, extensions: &[&str]) -> MockGl {
        self.state.lock().unwrap().extensions = extensions.iter().map(|ext| ext.to_string()).collect();
        self
    }

    pub fn with_framebuffer_status(self, status: GLenum) -> MockGl {
        self.state.lock().unwrap().framebuffer_status = status;
        self
    }

    pub fn failing_framebuffer_gen(self) -> MockGl {
        self.state.lock().unwrap().fail_framebuffer_gen = true;
        self
    }

    pub fn failing_renderbuffer_gen(self) -> MockGl {
        self.state.lock().unwrap().fail_renderbuffer_gen = true;
        self
    }

    ///
    /// Queues an error to be returned by the next call to get_error
    ///
    pub fn push_error(&self, error: GLenum) {
        self.state.lock().unwrap().errors.push_back(error);
    }

    pub fn pending_errors(&self) -> usize {
        self.state.lock().unwrap().errors.len()
    }

    pub fn log(&self) -> CallLog {
        Arc::clone(&self.log)
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.log.lock().unwrap().clone()
    }

    ///
    /// Returns the calls recorded so far and clears the log
    ///
    pub fn take_calls(&self) -> Vec<GlCall> {
        self.log.lock().unwrap().drain(..).collect()
    }

    fn record(&self, call: GlCall) {
        self.log.lock().unwrap().push(call);
    }

    fn gen_name(&self, fail: bool) -> GLuint {
        let mut state = self.state.lock().unwrap();
        if fail {
            0
        } else {
            let name = state.next_name;
            state.next_name += 1;
            name
        }
    }
}

///
/// Creates a driver for a mock, with a capability registry of its own
///
pub fn mock_driver(mock: &Arc<MockGl>) -> Driver {
    let api: Arc<dyn GlApi> = mock.clone();
    Driver::with_registry(api, Arc::new(CapabilityRegistry::new()))
}

impl GlApi for MockGl {
    fn get_error(&self) -> GLenum {
        self.state.lock().unwrap().errors.pop_front().unwrap_or(gl::NO_ERROR)
    }

    fn get_integer(&self, name: GLenum) -> GLint {
        let mut state = self.state.lock().unwrap();

        match name {
            gl::MAJOR_VERSION | gl::MINOR_VERSION => match state.integer_version {
                Some((major, minor)) => {
                    if name == gl::MAJOR_VERSION {
                        major
                    } else {
                        minor
                    }
                }
                None => {
                    if !state.errors.contains(&gl::INVALID_ENUM) {
                        state.errors.push_back(gl::INVALID_ENUM);
                    }
                    0
                }
            },
            gl::NUM_EXTENSIONS => state.extensions.len() as GLint,
            _ => 0,
        }
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        let state = self.state.lock().unwrap();

        match name {
            gl::VERSION => state.version_string.clone(),
            gl::EXTENSIONS => Some(state.extensions.join(" ")),
            _ => None,
        }
    }

    fn get_string_indexed(&self, name: GLenum, index: GLuint) -> Option<String> {
        let state = self.state.lock().unwrap();

        match name {
            gl::EXTENSIONS => state.extensions.get(index as usize).cloned(),
            _ => None,
        }
    }

    fn enable(&self, capability: GLenum) { self.record(GlCall::Enable(capability)); }
    fn disable(&self, capability: GLenum) { self.record(GlCall::Disable(capability)); }
    fn enable_client_state(&self, array: GLenum) { self.record(GlCall::EnableClientState(array)); }

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.record(GlCall::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: GLbitfield) { self.record(GlCall::Clear(mask)); }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn flush(&self) { self.record(GlCall::Flush); }

    fn matrix_mode(&self, mode: GLenum) { self.record(GlCall::MatrixMode(mode)); }
    fn load_matrix(&self, matrix: &[GLfloat; 16]) { self.record(GlCall::LoadMatrix(*matrix)); }
    fn load_identity(&self) { self.record(GlCall::LoadIdentity); }
    fn push_matrix(&self) { self.record(GlCall::PushMatrix); }
    fn pop_matrix(&self) { self.record(GlCall::PopMatrix); }
    fn push_attrib(&self, mask: GLbitfield) { self.record(GlCall::PushAttrib(mask)); }
    fn pop_attrib(&self) { self.record(GlCall::PopAttrib); }
    fn push_client_attrib(&self, mask: GLbitfield) { self.record(GlCall::PushClientAttrib(mask)); }
    fn pop_client_attrib(&self) { self.record(GlCall::PopClientAttrib); }

    fn active_texture(&self, _functions: &Multitexture, unit: GLenum) { self.record(GlCall::ActiveTexture(unit)); }
    fn client_active_texture(&self, _functions: &Multitexture, unit: GLenum) { self.record(GlCall::ClientActiveTexture(unit)); }
    fn bind_texture(&self, target: GLenum, texture: GLuint) { self.record(GlCall::BindTexture(target, texture)); }

    fn blend_func(&self, src: GLenum, dst: GLenum) { self.record(GlCall::BlendFunc(src, dst)); }

    fn blend_func_separate(&self, _functions: &BlendFuncSeparate, color_src: GLenum, color_dst: GLenum, alpha_src: GLenum, alpha_dst: GLenum) {
        self.record(GlCall::BlendFuncSeparate(color_src, color_dst, alpha_src, alpha_dst));
    }

    fn blend_equation(&self, _functions: &BlendMinmax, equation: GLenum) { self.record(GlCall::BlendEquation(equation)); }

    fn blend_equation_separate(&self, _functions: &BlendEquationSeparate, color_equation: GLenum, alpha_equation: GLenum) {
        self.record(GlCall::BlendEquationSeparate(color_equation, alpha_equation));
    }

    fn use_program(&self, program: GLuint) { self.record(GlCall::UseProgram(program)); }

    unsafe fn vertex_pointer(&self, _size: GLint, _kind: GLenum, _stride: GLsizei, pointer: *const GLvoid) {
        self.state.lock().unwrap().vertex_pointer = pointer as usize;
        self.record(GlCall::VertexPointer(pointer as usize));
    }

    unsafe fn color_pointer(&self, _size: GLint, _kind: GLenum, _stride: GLsizei, pointer: *const GLvoid) {
        self.record(GlCall::ColorPointer(pointer as usize));
    }

    unsafe fn tex_coord_pointer(&self, _size: GLint, _kind: GLenum, _stride: GLsizei, pointer: *const GLvoid) {
        self.record(GlCall::TexCoordPointer(pointer as usize));
    }

    unsafe fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        let vertex_pointer = self.state.lock().unwrap().vertex_pointer as *const Vertex;

        // Vertices start at the position, so the vertex pointer is also the address of the vertex
        let vertices = if vertex_pointer.is_null() {
            vec![]
        } else {
            std::slice::from_raw_parts(vertex_pointer.add(first as usize), count as usize).to_vec()
        };

        self.record(GlCall::DrawArrays(mode, first, vertices));
    }

    fn gen_framebuffer(&self, _functions: &FramebufferObject) -> GLuint {
        let fail = self.state.lock().unwrap().fail_framebuffer_gen;
        let name = self.gen_name(fail);
        self.record(GlCall::GenFramebuffer(name));
        name
    }

    fn bind_framebuffer(&self, _functions: &FramebufferObject, target: GLenum, framebuffer: GLuint) { self.record(GlCall::BindFramebuffer(target, framebuffer)); }
    fn delete_framebuffer(&self, _functions: &FramebufferObject, framebuffer: GLuint) { self.record(GlCall::DeleteFramebuffer(framebuffer)); }

    fn check_framebuffer_status(&self, _functions: &FramebufferObject, _target: GLenum) -> GLenum {
        self.record(GlCall::CheckFramebufferStatus);
        self.state.lock().unwrap().framebuffer_status
    }

    fn framebuffer_texture_2d(&self, _functions: &FramebufferObject, _target: GLenum, attachment: GLenum, _texture_target: GLenum, texture: GLuint, level: GLint) {
        self.record(GlCall::FramebufferTexture2D(attachment, texture, level));
    }

    fn framebuffer_renderbuffer(&self, _functions: &FramebufferObject, _target: GLenum, attachment: GLenum, _renderbuffer_target: GLenum, renderbuffer: GLuint) {
        self.record(GlCall::FramebufferRenderbuffer(attachment, renderbuffer));
    }

    fn gen_renderbuffer(&self, _functions: &FramebufferObject) -> GLuint {
        let fail = self.state.lock().unwrap().fail_renderbuffer_gen;
        let name = self.gen_name(fail);
        self.record(GlCall::GenRenderbuffer(name));
        name
    }

    fn bind_renderbuffer(&self, _functions: &FramebufferObject, _target: GLenum, renderbuffer: GLuint) { self.record(GlCall::BindRenderbuffer(renderbuffer)); }
    fn delete_renderbuffer(&self, _functions: &FramebufferObject, renderbuffer: GLuint) { self.record(GlCall::DeleteRenderbuffer(renderbuffer)); }

    fn renderbuffer_storage(&self, _functions: &FramebufferObject, _target: GLenum, internal_format: GLenum, width: GLsizei, height: GLsizei) {
        self.record(GlCall::RenderbufferStorage(internal_format, width, height));
    }
}

/// Every extension the capability prober looks for
pub const ALL_EXTENSIONS: &[&str] = &[
    "GL_ARB_multitexture",
    "GL_EXT_blend_minmax",
    "GL_EXT_blend_subtract",
    "GL_EXT_blend_func_separate",
    "GL_EXT_blend_equation_separate",
    "GL_EXT_framebuffer_object",
    "GL_ARB_shading_language_100",
    "GL_ARB_shader_objects",
    "GL_ARB_vertex_shader",
    "GL_ARB_fragment_shader",
];

///
/// Loader that advertises a fixed set of extensions, and resolves every function except the ones it's told are missing
///
#[derive(Clone, Debug)]
pub struct MockLoader {
    extensions: HashSet<String>,
    missing_functions: HashSet<String>,
}

impl MockLoader {
    pub fn new(extensions: &[&str]) -> MockLoader {
        MockLoader {
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            missing_functions: HashSet::new(),
        }
    }

    /// A loader for a driver that supports everything
    pub fn full() -> MockLoader {
        MockLoader::new(ALL_EXTENSIONS)
    }

    pub fn without_extension(mut self, extension: &str) -> MockLoader {
        self.extensions.remove(extension);
        self
    }

    pub fn without_function(mut self, function: &str) -> MockLoader {
        self.missing_functions.insert(function.to_string());
        self
    }
}

impl GlLoader for MockLoader {
    fn get_function(&self, name: &str) -> *const c_void {
        if self.missing_functions.contains(name) {
            ptr::null()
        } else {
            1 as *const c_void
        }
    }

    fn is_extension_available(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

///
/// A window-like surface that's always the same size
///
pub struct MockSurface {
    pub size: Vector2u,
    pub loader: MockLoader,
    pub can_activate: bool,
    pub activations: usize,
}

impl MockSurface {
    pub fn new(width: u32, height: u32, loader: MockLoader) -> MockSurface {
        MockSurface {
            size: Vector2u::new(width, height),
            loader,
            can_activate: true,
            activations: 0,
        }
    }
}

impl RenderSurface for MockSurface {
    fn size(&self) -> Vector2u {
        self.size
    }

    fn activate(&mut self, _active: bool) -> bool {
        self.activations += 1;
        self.can_activate
    }

    fn loader(&self) -> &dyn GlLoader {
        &self.loader
    }
}

///
/// Creates a render target on a mock surface, along with the mock that records its calls
///
pub fn mock_target(width: u32, height: u32, loader: MockLoader) -> (Arc<MockGl>, RenderTarget<MockSurface>) {
    let mock = Arc::new(MockGl::new());
    let driver = mock_driver(&mock);
    let target = RenderTarget::new(MockSurface::new(width, height, loader), driver);

    (mock, target)
}

///
/// A context that records its activations and destruction in the driver's call log
///
pub struct MockContext {
    log: CallLog,
    can_activate: bool,
}

impl GlLoader for MockContext {
    fn get_function(&self, _name: &str) -> *const c_void {
        1 as *const c_void
    }

    fn is_extension_available(&self, _name: &str) -> bool {
        false
    }
}

impl GlContext for MockContext {
    fn set_active(&mut self, active: bool) -> bool {
        self.log.lock().unwrap().push(GlCall::SetActive(active));
        self.can_activate
    }
}

impl Drop for MockContext {
    fn drop(&mut self) {
        self.log.lock().unwrap().push(GlCall::DestroyContext);
    }
}

///
/// Context factory that creates mock contexts
///
pub struct MockFactory {
    pub log: CallLog,
    pub loader: MockLoader,
    pub fail_creation: bool,
    pub contexts_can_activate: bool,
}

impl MockFactory {
    pub fn new(mock: &MockGl, loader: MockLoader) -> MockFactory {
        MockFactory {
            log: mock.log(),
            loader,
            fail_creation: false,
            contexts_can_activate: true,
        }
    }
}

impl GlLoader for MockFactory {
    fn get_function(&self, name: &str) -> *const c_void {
        self.loader.get_function(name)
    }

    fn is_extension_available(&self, name: &str) -> bool {
        self.loader.is_extension_available(name)
    }
}

impl ContextFactory for MockFactory {
    type Context = MockContext;

    fn ensure_context(&self) -> bool {
        self.log.lock().unwrap().push(GlCall::EnsureContext);
        true
    }

    fn create_context(&self) -> Result<MockContext, ContextError> {
        if self.fail_creation {
            Err(ContextError::CreationFailed("mock context creation failure".to_string()))
        } else {
            Ok(MockContext {
                log: Arc::clone(&self.log),
                can_activate: self.contexts_can_activate,
            })
        }
    }
}

///
/// Vertex at a position with the default colour and texture coordinates
///
pub fn vertex(x: f32, y: f32) -> Vertex {
    Vertex::with_position(Vector2f::new(x, y))
}
