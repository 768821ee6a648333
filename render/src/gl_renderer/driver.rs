/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::capabilities::*;
use super::gl_api::*;
use crate::context::*;

use std::fmt;
use std::sync::*;

///
/// The driver used by a render target, along with the registry its capabilities are stored in
///
#[derive(Clone)]
pub struct Driver {
    api: Arc<dyn GlApi>,
    registry: Arc<CapabilityRegistry>,
}

impl Driver {
    ///
    /// Creates a driver that shares the process-wide capability registry
    ///
    pub fn new(api: Arc<dyn GlApi>) -> Driver {
        Driver {
            api,
            registry: CapabilityRegistry::global(),
        }
    }

    ///
    /// Creates a driver with its own capability registry
    ///
    pub fn with_registry(api: Arc<dyn GlApi>, registry: Arc<CapabilityRegistry>) -> Driver {
        Driver { api, registry }
    }

    #[inline]
    pub fn api(&self) -> &dyn GlApi {
        &*self.api
    }

    #[inline]
    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    ///
    /// Retrieves the driver's capabilities, probing them if they haven't been probed yet
    ///
    pub fn capabilities(&self, loader: &dyn GlLoader) -> Arc<Capabilities> {
        self.registry.ensure_initialized(loader, &*self.api)
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Driver")
            .field("registry", &self.registry)
            .finish()
    }
}
