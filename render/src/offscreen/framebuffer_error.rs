/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::*;

use gl::types::*;
use thiserror::Error;

///
/// Reasons an offscreen framebuffer could not be created
///
/// Once `create()` has failed, the framebuffer target should be dropped rather than used again.
///
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FramebufferError {
    /// The dedicated context for the framebuffer could not be set up
    #[error("Impossible to create render texture (failed to create the framebuffer context): {0}")]
    Context(#[from] ContextError),

    /// The driver does not support framebuffer objects
    #[error("Impossible to create render texture (framebuffer objects are not supported)")]
    Unsupported,

    /// `create()` has already been called on this target
    #[error("Impossible to create render texture (the framebuffer has already been created)")]
    AlreadyCreated,

    #[error("Impossible to create render texture (failed to create the frame buffer object)")]
    FramebufferCreation,

    #[error("Impossible to create render texture (failed to create the attached depth buffer)")]
    DepthBufferCreation,

    /// The framebuffer status check failed (the status code reported by the driver is included)
    #[error("Impossible to create render texture (failed to link the target texture to the frame buffer, status 0x{0:x})")]
    Incomplete(GLenum),
}
