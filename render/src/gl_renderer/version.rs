/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::gl_api::*;

use gl;

///
/// The version of the driver's graphics API
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    /// The version assumed when the driver won't say which version it is
    pub const FALLBACK: GlVersion = GlVersion { major: 1, minor: 1 };

    pub const fn new(major: u32, minor: u32) -> GlVersion {
        GlVersion { major, minor }
    }

    ///
    /// Asks the driver for the version of the current context
    ///
    /// Drivers older than 3.0 reject the integer queries with `INVALID_ENUM`, in which case the
    /// version string ('major.minor[.release] [vendor info]') is used instead.
    ///
    pub fn query(api: &dyn GlApi) -> GlVersion {
        let major = api.get_integer(gl::MAJOR_VERSION);
        let minor = api.get_integer(gl::MINOR_VERSION);

        if api.get_error() != gl::INVALID_ENUM {
            return GlVersion::new(major.max(0) as u32, minor.max(0) as u32);
        }

        api.get_string(gl::VERSION)
            .and_then(|version| GlVersion::parse(&version))
            .unwrap_or(GlVersion::FALLBACK)
    }

    ///
    /// Reads the version from the start of a driver version string
    ///
    pub fn parse(version: &str) -> Option<GlVersion> {
        let bytes = version.as_bytes();
        if bytes.len() < 3 {
            return None;
        }

        let major = (bytes[0] as char).to_digit(10)?;
        let minor = (bytes[2] as char).to_digit(10)?;

        Some(GlVersion::new(major, minor))
    }
}
