/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::gl_api::*;
use super::version::*;
use crate::context::*;

use gl::types::*;
use log::*;
use once_cell::sync::{Lazy, OnceCell};

use std::ffi::c_void;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::*;

/// Contexts older than this need `GL_EXT_framebuffer_object` to render offscreen
#[cfg(not(feature = "gles"))]
const FRAMEBUFFER_CORE_VERSION: GlVersion = GlVersion::new(3, 0);

pub type ActiveTextureFn = unsafe extern "system" fn(GLenum);
pub type BlendEquationFn = unsafe extern "system" fn(GLenum);
pub type BlendFuncSeparateFn = unsafe extern "system" fn(GLenum, GLenum, GLenum, GLenum);
pub type BlendEquationSeparateFn = unsafe extern "system" fn(GLenum, GLenum);
pub type BindBufferObjectFn = unsafe extern "system" fn(GLenum, GLuint);
pub type GenBufferObjectsFn = unsafe extern "system" fn(GLsizei, *mut GLuint);
pub type DeleteBufferObjectsFn = unsafe extern "system" fn(GLsizei, *const GLuint);
pub type CheckFramebufferStatusFn = unsafe extern "system" fn(GLenum) -> GLenum;
pub type FramebufferTexture2DFn = unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint, GLint);
pub type FramebufferRenderbufferFn = unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint);
pub type RenderbufferStorageFn = unsafe extern "system" fn(GLenum, GLenum, GLsizei, GLsizei);

///
/// A driver function that has been resolved, along with the name it was resolved from
///
/// `TFn` is the `unsafe extern "system" fn` type of the function. The only way to make one of
/// these is to resolve it, so holding an entry point means the driver supplied the function.
///
#[derive(Clone, Copy)]
pub struct EntryPoint<TFn: Copy> {
    name: &'static str,
    function: TFn,
}

impl<TFn: Copy> EntryPoint<TFn> {
    ///
    /// Looks up a function, returning None if the driver doesn't supply it
    ///
    /// # Safety
    ///
    /// `TFn` must be a function pointer type matching the real signature of the named function
    ///
    pub unsafe fn resolve(loader: &dyn GlLoader, name: &'static str) -> Option<EntryPoint<TFn>> {
        debug_assert!(mem::size_of::<TFn>() == mem::size_of::<*const c_void>());

        let address = loader.get_function(name);
        if address.is_null() {
            return None;
        }

        Some(EntryPoint {
            name,
            function: mem::transmute_copy::<*const c_void, TFn>(&address),
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    ///
    /// The function to call
    ///
    #[inline]
    pub fn function(&self) -> TFn {
        self.function
    }

    ///
    /// The address the function was resolved to
    ///
    pub fn address(&self) -> *const c_void {
        unsafe { mem::transmute_copy::<TFn, *const c_void>(&self.function) }
    }
}

impl<TFn: Copy> PartialEq for EntryPoint<TFn> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.address() == other.address()
    }
}

impl<TFn: Copy> Eq for EntryPoint<TFn> {}

impl<TFn: Copy> fmt::Debug for EntryPoint<TFn> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} ({:p})", self.name, self.address())
    }
}

/// `GL_ARB_multitexture`: selecting the active texture unit
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Multitexture {
    pub active_texture: EntryPoint<ActiveTextureFn>,
    pub client_active_texture: EntryPoint<ActiveTextureFn>,
}

/// `GL_EXT_blend_minmax`: choosing the blend equation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlendMinmax {
    pub blend_equation: EntryPoint<BlendEquationFn>,
}

/// `GL_EXT_blend_func_separate`: separate blend factors for the alpha channel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlendFuncSeparate {
    pub blend_func_separate: EntryPoint<BlendFuncSeparateFn>,
}

/// `GL_EXT_blend_equation_separate`: separate blend equation for the alpha channel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlendEquationSeparate {
    pub blend_equation_separate: EntryPoint<BlendEquationSeparateFn>,
}

/// `GL_EXT_framebuffer_object`: offscreen framebuffers and renderbuffers
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FramebufferObject {
    pub bind_framebuffer: EntryPoint<BindBufferObjectFn>,
    pub bind_renderbuffer: EntryPoint<BindBufferObjectFn>,
    pub check_framebuffer_status: EntryPoint<CheckFramebufferStatusFn>,
    pub delete_framebuffers: EntryPoint<DeleteBufferObjectsFn>,
    pub delete_renderbuffers: EntryPoint<DeleteBufferObjectsFn>,
    pub framebuffer_renderbuffer: EntryPoint<FramebufferRenderbufferFn>,
    pub framebuffer_texture_2d: EntryPoint<FramebufferTexture2DFn>,
    pub gen_framebuffers: EntryPoint<GenBufferObjectsFn>,
    pub gen_renderbuffers: EntryPoint<GenBufferObjectsFn>,
    pub renderbuffer_storage: EntryPoint<RenderbufferStorageFn>,
}

impl Multitexture {
    fn resolve(loader: &dyn GlLoader, active_texture: &'static str, client_active_texture: &'static str) -> Option<Multitexture> {
        unsafe {
            Some(Multitexture {
                active_texture: EntryPoint::resolve(loader, active_texture)?,
                client_active_texture: EntryPoint::resolve(loader, client_active_texture)?,
            })
        }
    }
}

impl BlendMinmax {
    fn resolve(loader: &dyn GlLoader, blend_equation: &'static str) -> Option<BlendMinmax> {
        unsafe {
            Some(BlendMinmax {
                blend_equation: EntryPoint::resolve(loader, blend_equation)?,
            })
        }
    }
}

impl BlendFuncSeparate {
    fn resolve(loader: &dyn GlLoader, blend_func_separate: &'static str) -> Option<BlendFuncSeparate> {
        unsafe {
            Some(BlendFuncSeparate {
                blend_func_separate: EntryPoint::resolve(loader, blend_func_separate)?,
            })
        }
    }
}

impl BlendEquationSeparate {
    fn resolve(loader: &dyn GlLoader, blend_equation_separate: &'static str) -> Option<BlendEquationSeparate> {
        unsafe {
            Some(BlendEquationSeparate {
                blend_equation_separate: EntryPoint::resolve(loader, blend_equation_separate)?,
            })
        }
    }
}

///
/// Generates the function that resolves the framebuffer group from names with a particular suffix
///
macro_rules! framebuffer_object_resolver {
    ($fn_name: ident, $suffix: literal) => {
        fn $fn_name(loader: &dyn GlLoader) -> Option<FramebufferObject> {
            unsafe {
                Some(FramebufferObject {
                    bind_framebuffer: EntryPoint::resolve(loader, concat!("glBindFramebuffer", $suffix))?,
                    bind_renderbuffer: EntryPoint::resolve(loader, concat!("glBindRenderbuffer", $suffix))?,
                    check_framebuffer_status: EntryPoint::resolve(loader, concat!("glCheckFramebufferStatus", $suffix))?,
                    delete_framebuffers: EntryPoint::resolve(loader, concat!("glDeleteFramebuffers", $suffix))?,
                    delete_renderbuffers: EntryPoint::resolve(loader, concat!("glDeleteRenderbuffers", $suffix))?,
                    framebuffer_renderbuffer: EntryPoint::resolve(loader, concat!("glFramebufferRenderbuffer", $suffix))?,
                    framebuffer_texture_2d: EntryPoint::resolve(loader, concat!("glFramebufferTexture2D", $suffix))?,
                    gen_framebuffers: EntryPoint::resolve(loader, concat!("glGenFramebuffers", $suffix))?,
                    gen_renderbuffers: EntryPoint::resolve(loader, concat!("glGenRenderbuffers", $suffix))?,
                    renderbuffer_storage: EntryPoint::resolve(loader, concat!("glRenderbufferStorage", $suffix))?,
                })
            }
        }
    };
}

impl FramebufferObject {
    #[cfg(not(feature = "gles"))]
    framebuffer_object_resolver!(resolve_ext, "EXT");
    framebuffer_object_resolver!(resolve_oes, "OES");
}

///
/// The optional driver features available to the render targets
///
/// Each feature that needs driver functions is stored along with those functions, so a feature is
/// only ever reported as present if all of its entry points were resolved.
///
#[derive(Debug)]
pub struct Capabilities {
    version: GlVersion,
    multitexture: Option<Multitexture>,
    blend_minmax: Option<BlendMinmax>,
    blend_subtract: bool,
    blend_func_separate: Option<BlendFuncSeparate>,
    blend_equation_separate: Option<BlendEquationSeparate>,
    framebuffer_object: Option<FramebufferObject>,
    shaders: bool,

    /// Set once the 'blend equations are unavailable' diagnostic has been reported
    blend_equation_warning_issued: AtomicBool,
}

///
/// Resolves the entry points for an extension, if the driver advertises it
///
#[cfg(not(feature = "gles"))]
fn resolve_extension<TGroup>(
    loader: &dyn GlLoader,
    extension: &str,
    resolve: impl FnOnce(&dyn GlLoader) -> Option<TGroup>,
) -> Option<TGroup> {
    if !loader.is_extension_available(extension) {
        return None;
    }

    let group = resolve(loader);
    if group.is_none() {
        warn!(
            "Driver advertises {} but its functions could not be loaded: disabling it",
            extension
        );
    }

    group
}

impl Capabilities {
    ///
    /// Probes the driver for the capabilities of the current context
    ///
    #[cfg(not(feature = "gles"))]
    pub fn probe(loader: &dyn GlLoader, api: &dyn GlApi) -> Capabilities {
        let version = GlVersion::query(api);

        if version < GlVersion::FALLBACK {
            error!("flo_render_target requires support for OpenGL 1.1 or greater (found {}.{})", version.major, version.minor);
            error!("Ensure that hardware acceleration is enabled if available");
        }

        let multitexture = resolve_extension(loader, "GL_ARB_multitexture", |loader| {
            Multitexture::resolve(loader, "glActiveTextureARB", "glClientActiveTextureARB")
        });

        let blend_minmax = resolve_extension(loader, "GL_EXT_blend_minmax", |loader| {
            BlendMinmax::resolve(loader, "glBlendEquationEXT")
        });

        let blend_subtract = loader.is_extension_available("GL_EXT_blend_subtract");

        let blend_func_separate = resolve_extension(loader, "GL_EXT_blend_func_separate", |loader| {
            BlendFuncSeparate::resolve(loader, "glBlendFuncSeparateEXT")
        });

        let blend_equation_separate = resolve_extension(loader, "GL_EXT_blend_equation_separate", |loader| {
            BlendEquationSeparate::resolve(loader, "glBlendEquationSeparateEXT")
        });

        let framebuffer_object = resolve_extension(loader, "GL_EXT_framebuffer_object", FramebufferObject::resolve_ext);

        if framebuffer_object.is_none() && version < FRAMEBUFFER_CORE_VERSION {
            warn!(
                "OpenGL {}.{} without GL_EXT_framebuffer_object: offscreen render targets are unavailable",
                version.major, version.minor
            );
        }

        let shaders = [
            "GL_ARB_shading_language_100",
            "GL_ARB_shader_objects",
            "GL_ARB_vertex_shader",
            "GL_ARB_fragment_shader",
        ]
        .iter()
        .all(|extension| loader.is_extension_available(extension));

        let capabilities = Capabilities {
            version,
            multitexture,
            blend_minmax,
            blend_subtract,
            blend_func_separate,
            blend_equation_separate,
            framebuffer_object,
            shaders,
            blend_equation_warning_issued: AtomicBool::new(false),
        };

        debug!("Driver capabilities: {:?}", capabilities);

        capabilities
    }

    ///
    /// On the fixed minimal profile every capability is part of the driver, so extensions aren't checked
    ///
    #[cfg(feature = "gles")]
    pub fn probe(loader: &dyn GlLoader, _api: &dyn GlApi) -> Capabilities {
        Capabilities::fixed_profile(loader)
    }

    ///
    /// The capabilities of the fixed minimal (OpenGL ES 1) profile
    ///
    /// The functions are still resolved through the loader, and a group whose functions are missing is
    /// reported as absent.
    ///
    pub fn fixed_profile(loader: &dyn GlLoader) -> Capabilities {
        // Separate blending breaks transparency on some Android devices
        let separate_blending = !cfg!(target_os = "android");

        let capabilities = Capabilities {
            version: GlVersion::new(1, 1),
            multitexture: Multitexture::resolve(loader, "glActiveTexture", "glClientActiveTexture"),
            blend_minmax: BlendMinmax::resolve(loader, "glBlendEquationOES"),
            blend_subtract: true,
            blend_func_separate: if separate_blending {
                BlendFuncSeparate::resolve(loader, "glBlendFuncSeparateOES")
            } else {
                None
            },
            blend_equation_separate: if separate_blending {
                BlendEquationSeparate::resolve(loader, "glBlendEquationSeparateOES")
            } else {
                None
            },
            framebuffer_object: FramebufferObject::resolve_oes(loader),
            shaders: false,
            blend_equation_warning_issued: AtomicBool::new(false),
        };

        debug!("Driver capabilities: {:?}", capabilities);

        capabilities
    }

    #[inline]
    pub fn version(&self) -> GlVersion {
        self.version
    }

    #[inline]
    pub fn multitexture(&self) -> Option<&Multitexture> {
        self.multitexture.as_ref()
    }

    #[inline]
    pub fn blend_minmax(&self) -> Option<&BlendMinmax> {
        self.blend_minmax.as_ref()
    }

    #[inline]
    pub fn has_blend_subtract(&self) -> bool {
        self.blend_subtract
    }

    #[inline]
    pub fn blend_func_separate(&self) -> Option<&BlendFuncSeparate> {
        self.blend_func_separate.as_ref()
    }

    #[inline]
    pub fn blend_equation_separate(&self) -> Option<&BlendEquationSeparate> {
        self.blend_equation_separate.as_ref()
    }

    #[inline]
    pub fn framebuffer_object(&self) -> Option<&FramebufferObject> {
        self.framebuffer_object.as_ref()
    }

    #[inline]
    pub fn has_shaders(&self) -> bool {
        self.shaders
    }

    ///
    /// True if blend equations other than 'add' can be selected
    ///
    pub fn can_select_blend_equation(&self) -> bool {
        self.blend_equation_selection().is_some()
    }

    ///
    /// The functions for selecting a blend equation, if equations other than 'add' are supported
    ///
    pub fn blend_equation_selection(&self) -> Option<&BlendMinmax> {
        self.blend_minmax.as_ref().filter(|_| self.blend_subtract)
    }

    ///
    /// Reports that a blend equation was requested but can't be selected (only the first time this is called)
    ///
    pub(crate) fn warn_unsupported_blend_equation(&self) {
        if !self.blend_equation_warning_issued.swap(true, Ordering::Relaxed) {
            error!("OpenGL extension EXT_blend_minmax and/or EXT_blend_subtract unavailable");
            error!("Selecting a blend equation not possible");
            error!("Ensure that hardware acceleration is enabled if available");
        }
    }

    ///
    /// True if the 'unsupported blend equation' diagnostic has been reported
    ///
    pub fn blend_equation_warning_issued(&self) -> bool {
        self.blend_equation_warning_issued.load(Ordering::Relaxed)
    }
}

/// The process-wide capability registry
static GLOBAL_REGISTRY: Lazy<Arc<CapabilityRegistry>> =
    Lazy::new(|| Arc::new(CapabilityRegistry::new()));

///
/// Holds the capabilities of the driver once they've been probed
///
/// The first call to `ensure_initialized()` probes the driver, and every later call returns the same
/// result, even when it's made from another thread.
///
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    capabilities: OnceCell<Arc<Capabilities>>,
}

impl CapabilityRegistry {
    ///
    /// Creates an empty registry (the driver is probed the first time it's used)
    ///
    pub const fn new() -> CapabilityRegistry {
        CapabilityRegistry {
            capabilities: OnceCell::new(),
        }
    }

    ///
    /// The registry shared by the whole process
    ///
    pub fn global() -> Arc<CapabilityRegistry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    ///
    /// Retrieves the capabilities, probing the driver if this is the first request
    ///
    /// A context must be active when this is called for the first time.
    ///
    pub fn ensure_initialized(&self, loader: &dyn GlLoader, api: &dyn GlApi) -> Arc<Capabilities> {
        Arc::clone(
            self.capabilities
                .get_or_init(|| Arc::new(Capabilities::probe(loader, api))),
        )
    }

    ///
    /// The capabilities, if they've been probed already
    ///
    pub fn get(&self) -> Option<Arc<Capabilities>> {
        self.capabilities.get().cloned()
    }
}
