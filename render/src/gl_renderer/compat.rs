/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Fixed-function (compatibility profile) constants
//!
//! The `gl` crate only generates the core profile, which leaves these out.
//!

use gl::types::*;

pub const QUADS: GLenum = 0x0007;

pub const LIGHTING: GLenum = 0x0B50;
pub const ALPHA_TEST: GLenum = 0x0BC0;

pub const MODELVIEW: GLenum = 0x1700;
pub const PROJECTION: GLenum = 0x1701;
pub const TEXTURE: GLenum = 0x1702;

pub const VERTEX_ARRAY: GLenum = 0x8074;
pub const COLOR_ARRAY: GLenum = 0x8076;
pub const TEXTURE_COORD_ARRAY: GLenum = 0x8078;

pub const ALL_ATTRIB_BITS: GLbitfield = 0xFFFF_FFFF;
pub const CLIENT_ALL_ATTRIB_BITS: GLbitfield = 0xFFFF_FFFF;
