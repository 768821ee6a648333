/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::gl_api::*;

use gl;
use gl::types::*;
use log::*;

///
/// Errors reported by the driver
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum GlError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,

    /// An error code that isn't in the list above
    Unknown(GLenum),
}

impl GlError {
    ///
    /// Converts a driver error code (None for `NO_ERROR`)
    ///
    pub fn from_code(code: GLenum) -> Option<GlError> {
        match code {
            gl::NO_ERROR => None,
            gl::INVALID_ENUM => Some(GlError::InvalidEnum),
            gl::INVALID_VALUE => Some(GlError::InvalidValue),
            gl::INVALID_OPERATION => Some(GlError::InvalidOperation),
            gl::STACK_OVERFLOW => Some(GlError::StackOverflow),
            gl::STACK_UNDERFLOW => Some(GlError::StackUnderflow),
            gl::OUT_OF_MEMORY => Some(GlError::OutOfMemory),
            gl::INVALID_FRAMEBUFFER_OPERATION => Some(GlError::InvalidFramebufferOperation),
            other => Some(GlError::Unknown(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GlError::InvalidEnum => "GL_INVALID_ENUM",
            GlError::InvalidValue => "GL_INVALID_VALUE",
            GlError::InvalidOperation => "GL_INVALID_OPERATION",
            GlError::StackOverflow => "GL_STACK_OVERFLOW",
            GlError::StackUnderflow => "GL_STACK_UNDERFLOW",
            GlError::OutOfMemory => "GL_OUT_OF_MEMORY",
            GlError::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            GlError::Unknown(_) => "Unknown error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GlError::InvalidEnum => "An unacceptable value has been specified for an enumerated argument.",
            GlError::InvalidValue => "A numeric argument is out of range.",
            GlError::InvalidOperation => "The specified operation is not allowed in the current state.",
            GlError::StackOverflow => "This command would cause a stack overflow.",
            GlError::StackUnderflow => "This command would cause a stack underflow.",
            GlError::OutOfMemory => "There is not enough memory left to execute the command.",
            GlError::InvalidFramebufferOperation => {
                "The object bound to FRAMEBUFFER_BINDING is not \"framebuffer complete\"."
            }
            GlError::Unknown(_) => "The driver reported an error code that isn't recognised.",
        }
    }
}

///
/// Reports any error the driver has recorded since the last check
///
pub fn check_gl_error(api: &dyn GlApi, file: &str, line: u32, expression: &str) -> Option<GlError> {
    let error = GlError::from_code(api.get_error())?;

    error!(
        "An internal OpenGL call failed in {}({}).\nExpression:\n   {}\nError description:\n   {}\n   {}",
        file,
        line,
        expression,
        error.name(),
        error.description()
    );

    Some(error)
}

///
/// Evaluates a driver call, and in debug builds reports any error that it raised
///
macro_rules! gl_check {
    ($api:expr, $call:expr) => {{
        let result = $call;

        #[cfg(debug_assertions)]
        {
            $crate::gl_renderer::check_gl_error($api, file!(), line!(), stringify!($call));
        }

        result
    }};
}

pub(crate) use gl_check;
