/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::action::*;
use crate::buffer::*;

///
/// Batches with this many vertices or fewer are transformed before they're sent to the driver, leaving
/// the model-view matrix untouched
///
pub const VERTEX_CACHE_SIZE: usize = 4;

///
/// The driver state last applied by a render target
///
#[derive(Debug)]
pub struct StatesCache {
    /// True once the persistent states have been applied to the target's context
    pub(crate) gl_states_set: bool,

    /// True if the view has changed since it was last applied
    pub(crate) view_changed: bool,

    pub(crate) last_blend_mode: BlendMode,
    pub(crate) last_texture_id: TextureCacheId,

    /// True if the last draw used the vertex cache (so the driver's model-view matrix is the identity)
    pub(crate) use_vertex_cache: bool,

    /// Pre-transformed vertices; boxed as the driver can keep pointing at them between draws
    pub(crate) vertex_cache: Box<[Vertex; VERTEX_CACHE_SIZE]>,
}

impl StatesCache {
    pub fn new() -> StatesCache {
        StatesCache {
            gl_states_set: false,
            view_changed: false,
            last_blend_mode: BLEND_ALPHA,
            last_texture_id: TextureCacheId::NONE,
            use_vertex_cache: false,
            vertex_cache: Box::new([Vertex::default(); VERTEX_CACHE_SIZE]),
        }
    }

    #[inline]
    pub fn gl_states_set(&self) -> bool {
        self.gl_states_set
    }

    #[inline]
    pub fn view_changed(&self) -> bool {
        self.view_changed
    }

    #[inline]
    pub fn last_blend_mode(&self) -> BlendMode {
        self.last_blend_mode
    }

    #[inline]
    pub fn last_texture_id(&self) -> TextureCacheId {
        self.last_texture_id
    }

    #[inline]
    pub fn use_vertex_cache(&self) -> bool {
        self.use_vertex_cache
    }

    ///
    /// The address of the vertex cache (the driver's vertex pointers refer to this while it's in use)
    ///
    pub fn vertex_cache_ptr(&self) -> *const Vertex {
        self.vertex_cache.as_ptr()
    }
}

impl Default for StatesCache {
    fn default() -> StatesCache {
        StatesCache::new()
    }
}
