/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::context_error::*;

use std::ffi::c_void;

///
/// Resolves driver entry points and reports which driver extensions are available
///
/// This is implemented by the platform layer (whatever created the OpenGL context), which is
/// outside of this crate.
///
pub trait GlLoader {
    ///
    /// Returns the address of a driver function, or null if it isn't available
    ///
    fn get_function(&self, name: &str) -> *const c_void;

    ///
    /// True if the driver advertises the named extension (eg, 'GL_EXT_framebuffer_object')
    ///
    fn is_extension_available(&self, name: &str) -> bool;
}

///
/// A driver context that can be made current on the calling thread
///
pub trait GlContext: GlLoader {
    ///
    /// Activates or deactivates this context, returning false if this wasn't possible
    ///
    fn set_active(&mut self, active: bool) -> bool;
}

///
/// Creates driver contexts
///
/// Offscreen render targets use this to create a context of their own, so that their framebuffer
/// does not interfere with whatever context the caller has active.
///
pub trait ContextFactory: GlLoader {
    type Context: GlContext;

    ///
    /// Makes sure that some context is active on the current thread (creating one if necessary)
    ///
    fn ensure_context(&self) -> bool;

    ///
    /// Creates a new context that shares its resources with the other contexts from this factory
    ///
    fn create_context(&self) -> Result<Self::Context, ContextError>;
}
