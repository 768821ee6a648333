/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::drawable::*;
use super::render_surface::*;
use super::shader::*;
use super::states_cache::*;
use super::texture::*;
use crate::action::*;
use crate::buffer::*;
use crate::geometry::*;
use crate::gl_renderer::compat;
use crate::gl_renderer::*;

use gl;
use gl::types::*;
use log::*;

use std::sync::*;

///
/// Something that can be drawn on: a window or an offscreen framebuffer
///
/// The render target keeps track of the driver state it has applied, so only the state that differs
/// from the previous draw call is sent to the driver. Every operation starts by activating the
/// surface's context: if that fails the operation does nothing at all.
///
pub struct RenderTarget<TSurface: RenderSurface> {
    /// Where the rendering ends up
    surface: TSurface,

    /// The driver that the render target issues its calls to
    driver: Driver,

    /// The view that covers the whole surface
    default_view: View,

    /// The view applied to the next draw call
    view: View,

    /// The state that was last sent to the driver
    cache: StatesCache,
}

impl<TSurface: RenderSurface> RenderTarget<TSurface> {
    ///
    /// Creates a render target that draws on a surface
    ///
    pub fn new(surface: TSurface, driver: Driver) -> RenderTarget<TSurface> {
        let mut target = RenderTarget {
            surface,
            driver,
            default_view: View::default(),
            view: View::default(),
            cache: StatesCache::new(),
        };

        target.initialize();
        target
    }

    ///
    /// Sets the default view to cover the surface, and makes it the current view
    ///
    /// This should be called again whenever the surface changes size. The driver states are only
    /// applied when the first draw call is made, so anything the caller has set up in the meantime
    /// is left alone.
    ///
    pub fn initialize(&mut self) {
        let size = self.surface.size();

        self.default_view
            .reset(FloatRect::new(0.0, 0.0, size.x as f32, size.y as f32));
        self.view = self.default_view.clone();

        self.cache.gl_states_set = false;
    }

    #[inline]
    pub fn size(&self) -> Vector2u {
        self.surface.size()
    }

    #[inline]
    pub fn surface(&self) -> &TSurface {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut TSurface {
        &mut self.surface
    }

    #[inline]
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    ///
    /// The driver state this render target believes is currently applied
    ///
    #[inline]
    pub fn cache(&self) -> &StatesCache {
        &self.cache
    }

    ///
    /// Activates or deactivates the context for this render target
    ///
    pub fn set_active(&mut self, active: bool) -> bool {
        self.surface.activate(active)
    }

    ///
    /// Fills the whole surface with a colour
    ///
    pub fn clear(&mut self, color: Rgba8) {
        if !self.surface.activate(true) {
            return;
        }

        // A bound framebuffer texture can stop the clear from taking effect on some drivers
        self.apply_texture(None);

        let [red, green, blue, alpha] = color.to_normalized();
        let api = self.driver.api();

        gl_check!(api, api.clear_color(red, green, blue, alpha));
        gl_check!(api, api.clear(gl::COLOR_BUFFER_BIT));
    }

    ///
    /// Changes the current view (it's applied to the driver on the next draw call)
    ///
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.cache.view_changed = true;
    }

    #[inline]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[inline]
    pub fn default_view(&self) -> &View {
        &self.default_view
    }

    ///
    /// The area of the surface, in pixels, covered by a view
    ///
    pub fn viewport(&self, view: &View) -> IntRect {
        let size = self.surface.size();
        let width = size.x as f32;
        let height = size.y as f32;
        let viewport = view.viewport();

        IntRect::new(
            (0.5 + width * viewport.left) as i32,
            (0.5 + height * viewport.top) as i32,
            (0.5 + width * viewport.width) as i32,
            (0.5 + height * viewport.height) as i32,
        )
    }

    ///
    /// Converts a pixel position on the surface to a position in the current view's coordinates
    ///
    pub fn map_pixel_to_coords(&self, pixel: Vector2i) -> Vector2f {
        self.map_pixel_to_coords_with_view(pixel, &self.view)
    }

    ///
    /// Converts a pixel position on the surface to a position in a view's coordinates
    ///
    pub fn map_pixel_to_coords_with_view(&self, pixel: Vector2i, view: &View) -> Vector2f {
        // Pixel rows grow downwards, but clip space grows upwards
        let viewport = self.viewport(view);
        let normalized = Vector2f::new(
            -1.0 + 2.0 * (pixel.x - viewport.left) as f32 / viewport.width as f32,
            1.0 - 2.0 * (pixel.y - viewport.top) as f32 / viewport.height as f32,
        );

        view.inverse_transform().transform_point(normalized)
    }

    ///
    /// Converts a position in the current view's coordinates to a pixel position on the surface
    ///
    pub fn map_coords_to_pixel(&self, point: Vector2f) -> Vector2i {
        self.map_coords_to_pixel_with_view(point, &self.view)
    }

    ///
    /// Converts a position in a view's coordinates to a pixel position on the surface
    ///
    /// The result is truncated rather than rounded.
    ///
    pub fn map_coords_to_pixel_with_view(&self, point: Vector2f, view: &View) -> Vector2i {
        let normalized = view.transform().transform_point(point);
        let viewport = self.viewport(view);

        Vector2i::new(
            ((normalized.x + 1.0) / 2.0 * viewport.width as f32 + viewport.left as f32) as i32,
            ((-normalized.y + 1.0) / 2.0 * viewport.height as f32 + viewport.top as f32) as i32,
        )
    }

    ///
    /// Draws a drawable object
    ///
    pub fn draw<TDrawable: Drawable>(&mut self, drawable: &TDrawable, states: &RenderStates) {
        drawable.draw(self, states);
    }

    ///
    /// Draws a batch of vertices
    ///
    pub fn draw_vertices(
        &mut self,
        vertices: &[Vertex],
        primitive_type: PrimitiveType,
        states: &RenderStates,
    ) {
        if vertices.is_empty() {
            return;
        }

        if cfg!(feature = "gles") && primitive_type == PrimitiveType::Quads {
            error!("PrimitiveType::Quads is not supported on OpenGL ES platforms, drawing skipped");
            return;
        }

        if !self.surface.activate(true) {
            return;
        }

        // The persistent states are set on the first draw
        if !self.cache.gl_states_set {
            self.reset_gl_states();
        }

        // Small batches are transformed here so the driver can keep using the identity transform
        let use_vertex_cache = vertices.len() <= VERTEX_CACHE_SIZE;

        if use_vertex_cache {
            for (cached, vertex) in self.cache.vertex_cache.iter_mut().zip(vertices.iter()) {
                *cached = Vertex {
                    position: states.transform.transform_point(vertex.position),
                    ..*vertex
                };
            }

            if !self.cache.use_vertex_cache {
                self.apply_transform(&Transform::IDENTITY);
            }
        } else {
            self.apply_transform(&states.transform);
        }

        if self.cache.view_changed {
            self.apply_current_view();
        }

        if states.blend_mode != self.cache.last_blend_mode {
            self.apply_blend_mode(states.blend_mode);
        }

        let texture_id = states
            .texture
            .map(|texture| texture.cache_id())
            .unwrap_or(TextureCacheId::NONE);
        if texture_id != self.cache.last_texture_id {
            self.apply_texture(states.texture);
        }

        // Shaders are never cached: there are too many parameters to track
        if let Some(shader) = states.shader {
            self.apply_shader(Some(shader));
        }

        // When the vertex cache was already in use, the driver is still pointing at it
        let vertex_source = if use_vertex_cache {
            if self.cache.use_vertex_cache {
                None
            } else {
                Some(self.cache.vertex_cache.as_ptr())
            }
        } else {
            Some(vertices.as_ptr())
        };

        let api = self.driver.api();
        let mode = primitive_to_gl(primitive_type);

        unsafe {
            if let Some(vertex_source) = vertex_source {
                Vertex::set_client_pointers(api, vertex_source);
            }

            gl_check!(api, api.draw_arrays(mode, 0, vertices.len() as GLsizei));
        }

        if states.shader.is_some() {
            self.apply_shader(None);
        }

        // Some drivers fail to clear framebuffers whose texture is still bound
        if states.texture.map(|texture| texture.is_fbo_attachment()).unwrap_or(false) {
            self.apply_texture(None);
        }

        self.cache.use_vertex_cache = use_vertex_cache;
    }

    ///
    /// Saves the driver state so that driver calls made outside of this render target can't interfere with it
    ///
    /// The driver state is reset to this render target's defaults afterwards.
    ///
    pub fn push_gl_states(&mut self) {
        if self.surface.activate(true) {
            let api = self.driver.api();

            #[cfg(debug_assertions)]
            {
                if let Some(error) = GlError::from_code(api.get_error()) {
                    error!(
                        "OpenGL error ({}) detected in user code, you should check for errors with glGetError()",
                        error.name()
                    );
                }
            }

            if !cfg!(feature = "gles") {
                gl_check!(api, api.push_client_attrib(compat::CLIENT_ALL_ATTRIB_BITS));
                gl_check!(api, api.push_attrib(compat::ALL_ATTRIB_BITS));
            }

            gl_check!(api, api.matrix_mode(compat::MODELVIEW));
            gl_check!(api, api.push_matrix());
            gl_check!(api, api.matrix_mode(compat::PROJECTION));
            gl_check!(api, api.push_matrix());
            gl_check!(api, api.matrix_mode(compat::TEXTURE));
            gl_check!(api, api.push_matrix());
        }

        self.reset_gl_states();
    }

    ///
    /// Restores the driver state saved by `push_gl_states()`
    ///
    pub fn pop_gl_states(&mut self) {
        if !self.surface.activate(true) {
            return;
        }

        let api = self.driver.api();

        gl_check!(api, api.matrix_mode(compat::PROJECTION));
        gl_check!(api, api.pop_matrix());
        gl_check!(api, api.matrix_mode(compat::MODELVIEW));
        gl_check!(api, api.pop_matrix());
        gl_check!(api, api.matrix_mode(compat::TEXTURE));
        gl_check!(api, api.pop_matrix());

        if !cfg!(feature = "gles") {
            gl_check!(api, api.pop_client_attrib());
            gl_check!(api, api.pop_attrib());
        }
    }

    ///
    /// Sets every driver state that this render target depends on to its default value
    ///
    pub fn reset_gl_states(&mut self) {
        if !self.surface.activate(true) {
            return;
        }

        let capabilities = self.capabilities();
        let api = self.driver.api();

        // Texture unit 0 is the only one in use
        if let Some(multitexture) = capabilities.multitexture() {
            gl_check!(api, api.client_active_texture(multitexture, gl::TEXTURE0));
            gl_check!(api, api.active_texture(multitexture, gl::TEXTURE0));
        }

        gl_check!(api, api.disable(gl::CULL_FACE));
        gl_check!(api, api.disable(compat::LIGHTING));
        gl_check!(api, api.disable(gl::DEPTH_TEST));
        gl_check!(api, api.disable(compat::ALPHA_TEST));
        gl_check!(api, api.enable(gl::TEXTURE_2D));
        gl_check!(api, api.enable(gl::BLEND));
        gl_check!(api, api.matrix_mode(compat::MODELVIEW));
        gl_check!(api, api.enable_client_state(compat::VERTEX_ARRAY));
        gl_check!(api, api.enable_client_state(compat::COLOR_ARRAY));
        gl_check!(api, api.enable_client_state(compat::TEXTURE_COORD_ARRAY));

        self.cache.gl_states_set = true;

        self.apply_blend_mode(BLEND_ALPHA);
        self.apply_transform(&Transform::IDENTITY);
        self.apply_texture(None);
        if shaders_available(&capabilities) {
            self.apply_shader(None);
        }

        self.cache.use_vertex_cache = false;

        // The view is applied on the next draw
        self.cache.view_changed = true;
    }

    ///
    /// The capabilities of the driver (probed the first time this is called)
    ///
    fn capabilities(&self) -> Arc<Capabilities> {
        self.driver.capabilities(self.surface.loader())
    }

    ///
    /// Sends the viewport and projection matrix for the current view to the driver
    ///
    fn apply_current_view(&mut self) {
        let viewport = self.viewport(&self.view);
        let top = self.surface.size().y as i32 - (viewport.top + viewport.height);
        let api = self.driver.api();

        gl_check!(api, api.viewport(viewport.left, top, viewport.width, viewport.height));

        gl_check!(api, api.matrix_mode(compat::PROJECTION));
        gl_check!(api, api.load_matrix(self.view.transform().matrix()));

        // Model-view is always left as the current matrix
        gl_check!(api, api.matrix_mode(compat::MODELVIEW));

        self.cache.view_changed = false;
    }

    fn apply_blend_mode(&mut self, mode: BlendMode) {
        let capabilities = self.capabilities();
        let api = self.driver.api();

        if let Some(blend_func_separate) = capabilities.blend_func_separate() {
            gl_check!(
                api,
                api.blend_func_separate(
                    blend_func_separate,
                    factor_to_gl(mode.color_src_factor),
                    factor_to_gl(mode.color_dst_factor),
                    factor_to_gl(mode.alpha_src_factor),
                    factor_to_gl(mode.alpha_dst_factor),
                )
            );
        } else {
            gl_check!(
                api,
                api.blend_func(
                    factor_to_gl(mode.color_src_factor),
                    factor_to_gl(mode.color_dst_factor),
                )
            );
        }

        if let Some(blend_minmax) = capabilities.blend_equation_selection() {
            if let Some(blend_equation_separate) = capabilities.blend_equation_separate() {
                gl_check!(
                    api,
                    api.blend_equation_separate(
                        blend_equation_separate,
                        equation_to_gl(mode.color_equation),
                        equation_to_gl(mode.alpha_equation),
                    )
                );
            } else {
                gl_check!(api, api.blend_equation(blend_minmax, equation_to_gl(mode.color_equation)));
            }
        } else if !mode.is_additive() {
            capabilities.warn_unsupported_blend_equation();
        }

        self.cache.last_blend_mode = mode;
    }

    fn apply_transform(&mut self, transform: &Transform) {
        let api = self.driver.api();

        // The model-view matrix is always the current matrix
        gl_check!(api, api.load_matrix(transform.matrix()));
    }

    fn apply_texture(&mut self, texture: Option<&dyn Texture>) {
        bind_texture(self.driver.api(), texture, CoordinateType::Pixels);

        self.cache.last_texture_id = texture
            .map(|texture| texture.cache_id())
            .unwrap_or(TextureCacheId::NONE);
    }

    fn apply_shader(&mut self, shader: Option<&dyn Shader>) {
        bind_shader(self.driver.api(), shader);
    }
}
