/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::gl_renderer::*;

use gl::types::*;

///
/// The part of a shader program that render targets need
///
pub trait Shader {
    ///
    /// Makes this shader current, along with any parameters it has
    ///
    fn bind(&self, api: &dyn GlApi);
}

///
/// Binds a shader, or returns to the fixed-function pipeline if `shader` is None
///
pub fn bind_shader(api: &dyn GlApi, shader: Option<&dyn Shader>) {
    match shader {
        Some(shader) => shader.bind(api),
        None => gl_check!(api, api.use_program(0)),
    }
}

///
/// True if the driver can run shaders
///
pub fn shaders_available(capabilities: &Capabilities) -> bool {
    capabilities.has_shaders()
}

///
/// A shader program that has already been linked by the driver
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShaderProgram(pub GLuint);

impl Shader for ShaderProgram {
    fn bind(&self, api: &dyn GlApi) {
        gl_check!(api, api.use_program(self.0));
    }
}
