/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_render_target
//!
//! Immediate-mode 2D render targets for fixed-function OpenGL drivers. A `RenderTarget` turns
//! vertex batches, textures, shaders and transforms into driver calls, remembering the state it
//! has already applied so that only the changes are sent. `FramebufferRenderTarget` does the same
//! for an offscreen framebuffer whose colour attachment is a texture.
//!
//! All driver calls go through the `GlApi` trait: `GlDriver` implements it on top of the `gl` crate
//! (with the `opengl` feature), and the capabilities of the driver are probed once per process.
//!

mod action;
mod buffer;
mod context;
mod geometry;
mod gl_renderer;
mod offscreen;
mod render_target;

pub use self::action::*;
pub use self::buffer::*;
pub use self::context::*;
pub use self::geometry::*;
pub use self::gl_renderer::*;
pub use self::offscreen::*;
pub use self::render_target::*;

pub use gl;
