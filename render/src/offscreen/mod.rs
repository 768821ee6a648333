/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod framebuffer_error;
mod framebuffer_target;

pub use self::framebuffer_error::*;
pub use self::framebuffer_target::*;
