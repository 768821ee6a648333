/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod blend_mode;
mod color;
mod identities;
mod primitive_type;
mod render_states;

pub use self::blend_mode::*;
pub use self::color::*;
pub use self::identities::*;
pub use self::primitive_type::*;
pub use self::render_states::*;
