/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::framebuffer_error::*;
use crate::context::*;
use crate::geometry::*;
use crate::gl_renderer::*;
use crate::render_target::*;

use gl;
use gl::types::*;
use log::*;

use std::sync::*;

///
/// A render surface that draws into a texture via an offscreen framebuffer
///
/// The framebuffer lives in a context of its own, so drawing to it does not disturb the context
/// the caller has active. The depth buffer, framebuffer and context are released (in that order)
/// when the target is dropped.
///
pub struct FramebufferTarget<TFactory: ContextFactory> {
    /// Creates the context for this framebuffer, and activates a context when it's freed
    factory: Arc<TFactory>,

    driver: Driver,

    /// The context the framebuffer was created in (None until `create()` is called)
    context: Option<TFactory::Context>,

    /// The framebuffer object (0 if it hasn't been created)
    framebuffer: GLuint,

    /// The depth renderbuffer (0 if there isn't one)
    depth_buffer: GLuint,

    /// The driver functions used to manage the framebuffer (None until the framebuffer is created)
    functions: Option<FramebufferObject>,

    size: Vector2u,
}

///
/// A render target that draws into a texture
///
pub type FramebufferRenderTarget<TFactory> = RenderTarget<FramebufferTarget<TFactory>>;

impl<TFactory: ContextFactory> FramebufferTarget<TFactory> {
    ///
    /// Creates a framebuffer target (no driver resources are allocated until `create()` is called)
    ///
    pub fn new(factory: Arc<TFactory>, driver: Driver) -> FramebufferTarget<TFactory> {
        FramebufferTarget {
            factory,
            driver,
            context: None,
            framebuffer: 0,
            depth_buffer: 0,
            functions: None,
            size: Vector2u::new(0, 0),
        }
    }

    ///
    /// True if the driver supports offscreen framebuffers
    ///
    pub fn is_available(factory: &TFactory, driver: &Driver) -> bool {
        if !factory.ensure_context() {
            return false;
        }

        driver.capabilities(factory).framebuffer_object().is_some()
    }

    ///
    /// Creates the framebuffer and attaches a texture to it
    ///
    /// `texture` is the driver name of a texture with at least `width` x `height` pixels. If this
    /// fails, the target should be dropped: any resources that were allocated are freed at that point.
    ///
    pub fn create(&mut self, width: u32, height: u32, texture: GLuint, depth_buffer: bool) -> Result<(), FramebufferError> {
        let result = self.create_framebuffer(width, height, texture, depth_buffer);

        if let Err(err) = &result {
            error!("{}", err);
        }

        result
    }

    fn create_framebuffer(&mut self, width: u32, height: u32, texture: GLuint, depth_buffer: bool) -> Result<(), FramebufferError> {
        if self.context.is_some() {
            return Err(FramebufferError::AlreadyCreated);
        }

        // Framebuffers aren't shared between contexts, so this one needs a context of its own
        let context = self.context.insert(self.factory.create_context()?);
        if !context.set_active(true) {
            return Err(ContextError::ActivationFailed.into());
        }

        let functions = match self.driver.capabilities(&*self.factory).framebuffer_object() {
            Some(functions) => *self.functions.insert(*functions),
            None => return Err(FramebufferError::Unsupported),
        };

        let api = self.driver.api();

        self.framebuffer = gl_check!(api, api.gen_framebuffer(&functions));
        if self.framebuffer == 0 {
            return Err(FramebufferError::FramebufferCreation);
        }
        gl_check!(api, api.bind_framebuffer(&functions, gl::FRAMEBUFFER, self.framebuffer));

        if depth_buffer {
            self.depth_buffer = gl_check!(api, api.gen_renderbuffer(&functions));
            if self.depth_buffer == 0 {
                return Err(FramebufferError::DepthBufferCreation);
            }

            gl_check!(api, api.bind_renderbuffer(&functions, gl::RENDERBUFFER, self.depth_buffer));
            gl_check!(api, api.renderbuffer_storage(&functions, gl::RENDERBUFFER, gl::DEPTH_COMPONENT, width as GLsizei, height as GLsizei));
            gl_check!(api, api.framebuffer_renderbuffer(&functions, gl::FRAMEBUFFER, gl::DEPTH_ATTACHMENT, gl::RENDERBUFFER, self.depth_buffer));
        }

        gl_check!(api, api.framebuffer_texture_2d(&functions, gl::FRAMEBUFFER, gl::COLOR_ATTACHMENT0, gl::TEXTURE_2D, texture, 0));

        let status = gl_check!(api, api.check_framebuffer_status(&functions, gl::FRAMEBUFFER));
        if status != gl::FRAMEBUFFER_COMPLETE {
            gl_check!(api, api.bind_framebuffer(&functions, gl::FRAMEBUFFER, 0));
            return Err(FramebufferError::Incomplete(status));
        }

        self.size = Vector2u::new(width, height);

        debug!("Created {}x{} framebuffer {} (depth buffer: {})", width, height, self.framebuffer, self.depth_buffer);

        Ok(())
    }

    ///
    /// Activates or deactivates the framebuffer's context
    ///
    pub fn activate(&mut self, active: bool) -> bool {
        match &mut self.context {
            Some(context) => context.set_active(active),
            None => false,
        }
    }

    ///
    /// Makes sure everything drawn so far has reached the texture
    ///
    /// The texture is attached to the framebuffer, so it doesn't need to be copied.
    ///
    pub fn update_texture(&self, _texture: GLuint) {
        let api = self.driver.api();
        gl_check!(api, api.flush());
    }

    #[inline]
    pub fn framebuffer(&self) -> GLuint {
        self.framebuffer
    }

    #[inline]
    pub fn depth_buffer(&self) -> GLuint {
        self.depth_buffer
    }

    #[inline]
    pub fn factory(&self) -> &Arc<TFactory> {
        &self.factory
    }
}

impl<TFactory: ContextFactory> RenderSurface for FramebufferTarget<TFactory> {
    fn size(&self) -> Vector2u {
        self.size
    }

    fn activate(&mut self, active: bool) -> bool {
        FramebufferTarget::activate(self, active)
    }

    fn loader(&self) -> &dyn GlLoader {
        &*self.factory
    }
}

impl<TFactory: ContextFactory> Drop for FramebufferTarget<TFactory> {
    fn drop(&mut self) {
        // The handles are freed in whatever context is available, but before our own context goes away
        self.factory.ensure_context();

        // Handles are only ever allocated once the functions are known
        if let Some(functions) = self.functions.take() {
            let api = self.driver.api();

            if self.depth_buffer != 0 {
                gl_check!(api, api.delete_renderbuffer(&functions, self.depth_buffer));
                self.depth_buffer = 0;
            }

            if self.framebuffer != 0 {
                gl_check!(api, api.delete_framebuffer(&functions, self.framebuffer));
                self.framebuffer = 0;
            }
        }

        self.context.take();
    }
}

///
/// Creates a render target that draws into a texture
///
pub fn create_framebuffer_render_target<TFactory: ContextFactory>(
    factory: Arc<TFactory>,
    driver: Driver,
    width: u32,
    height: u32,
    texture: GLuint,
    depth_buffer: bool,
) -> Result<FramebufferRenderTarget<TFactory>, FramebufferError> {
    let mut surface = FramebufferTarget::new(factory, driver.clone());
    surface.create(width, height, texture, depth_buffer)?;

    Ok(RenderTarget::new(surface, driver))
}

impl<TFactory: ContextFactory> RenderTarget<FramebufferTarget<TFactory>> {
    ///
    /// Finishes drawing to the framebuffer, so its texture can be used elsewhere
    ///
    pub fn display(&mut self) {
        if self.set_active(true) {
            let framebuffer = self.surface();
            framebuffer.update_texture(0);
        }
    }
}
