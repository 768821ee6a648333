/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::gl_api::*;
use super::version::*;
use crate::context::*;

use gl;

use std::collections::HashSet;

///
/// The list of extensions advertised by a driver
///
/// Platform layers can use this to implement `GlLoader::is_extension_available()`
///
#[derive(Clone, Debug, Default)]
pub struct ExtensionList {
    extensions: HashSet<String>,
}

impl ExtensionList {
    ///
    /// Reads the extensions supported by the current context
    ///
    /// Before version 3 the driver reports a single space-separated string; from 3 onwards the
    /// extensions are read one at a time by index (which needs `glGetStringi`).
    ///
    pub fn query(loader: &dyn GlLoader, api: &dyn GlApi) -> ExtensionList {
        let version = GlVersion::query(api);

        if version.major < 3 {
            let extensions = api.get_string(gl::EXTENSIONS).unwrap_or_default();
            return ExtensionList::parse(&extensions);
        }

        let mut extensions = HashSet::new();

        if !loader.get_function("glGetStringi").is_null() {
            let num_extensions = api.get_integer(gl::NUM_EXTENSIONS).max(0) as u32;

            for index in 0..num_extensions {
                if let Some(extension) = api.get_string_indexed(gl::EXTENSIONS, index) {
                    extensions.insert(extension);
                }
            }
        }

        ExtensionList { extensions }
    }

    ///
    /// Creates an extension list from a space-separated string
    ///
    pub fn parse(extensions: &str) -> ExtensionList {
        ExtensionList {
            extensions: extensions
                .split(' ')
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = &str> {
        self.extensions.iter().map(|name| name.as_str())
    }
}
