/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::render_surface::*;
use super::render_target::*;
use crate::action::*;

///
/// Trait implemented by objects that know how to draw themselves on a render target
///
pub trait Drawable {
    ///
    /// Draws this object on a render target
    ///
    fn draw<TSurface: RenderSurface>(&self, target: &mut RenderTarget<TSurface>, states: &RenderStates);
}
