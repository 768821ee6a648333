/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod drawable;
mod render_surface;
mod render_target;
mod shader;
mod states_cache;
mod texture;
mod vertex_array;

pub use self::drawable::*;
pub use self::render_surface::*;
pub use self::render_target::*;
pub use self::shader::*;
pub use self::states_cache::*;
pub use self::texture::*;
pub use self::vertex_array::*;
