/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod gl_check;

mod capabilities;
pub mod compat;
mod driver;
mod enum_mapping;
mod extensions;
mod gl_api;
#[cfg(feature = "opengl")]
mod gl_driver;
mod version;
mod vertex;

pub use self::capabilities::*;
pub use self::driver::*;
pub use self::enum_mapping::*;
pub use self::extensions::*;
pub use self::gl_api::*;
pub use self::gl_check::{check_gl_error, GlError};
#[cfg(feature = "opengl")]
pub use self::gl_driver::*;
pub use self::version::*;
pub use self::vertex::*;

pub(crate) use self::gl_check::gl_check;
