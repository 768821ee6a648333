/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// The next cache identifier to hand out (0 is reserved for 'no texture')
static NEXT_TEXTURE_CACHE_ID: AtomicU64 = AtomicU64::new(1);

///
/// An identifier used by render targets to decide whether or not a texture needs to be re-bound
///
/// Unlike driver texture names, identifiers are never reused, so a new texture can't be mistaken for
/// one that was bound earlier.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct TextureCacheId(pub u64);

impl TextureCacheId {
    /// The identifier used when no texture is bound
    pub const NONE: TextureCacheId = TextureCacheId(0);

    ///
    /// Allocates a new identifier, unique for the lifetime of the process
    ///
    pub fn next() -> TextureCacheId {
        TextureCacheId(NEXT_TEXTURE_CACHE_ID.fetch_add(1, Ordering::Relaxed))
    }

    ///
    /// True if this is the 'no texture' identifier
    ///
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TextureCacheId {
    fn default() -> TextureCacheId {
        TextureCacheId::NONE
    }
}
