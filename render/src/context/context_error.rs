/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///
/// Errors that can occur while creating a driver context
///
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ContextError {
    /// The platform could not create the context
    #[error("failed to create a rendering context: {0}")]
    CreationFailed(String),

    /// The context was created but could not be made current
    #[error("failed to activate the rendering context")]
    ActivationFailed,
}
