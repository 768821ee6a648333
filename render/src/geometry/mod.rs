/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod rect;
mod transform;
mod vector;
mod view;

pub use self::rect::*;
pub use self::transform::*;
pub use self::vector::*;
pub use self::view::*;
