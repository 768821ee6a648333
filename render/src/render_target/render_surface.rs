/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::*;
use crate::geometry::*;

///
/// Trait implemented by things that a `RenderTarget` can draw on (windows, offscreen framebuffers)
///
pub trait RenderSurface {
    ///
    /// The size of this surface in pixels
    ///
    fn size(&self) -> Vector2u;

    ///
    /// Makes the context for this surface current (or releases it), returning false on failure
    ///
    fn activate(&mut self, active: bool) -> bool;

    ///
    /// The loader used to probe the driver that this surface renders with
    ///
    fn loader(&self) -> &dyn GlLoader;
}
