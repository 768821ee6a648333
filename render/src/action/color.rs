/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Represents an RGBA colour as 8-bit values
///
/// The layout matches what the driver expects for an `UNSIGNED_BYTE` colour array, so this can be
/// stored directly in a vertex.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(C)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8([0, 0, 0, 255]);
    pub const WHITE: Rgba8 = Rgba8([255, 255, 255, 255]);
    pub const TRANSPARENT: Rgba8 = Rgba8([0, 0, 0, 0]);

    ///
    /// Creates a colour from its components
    ///
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
        Rgba8([r, g, b, a])
    }

    ///
    /// Returns the colour as normalized floating point components, in the range 0.0-1.0
    ///
    pub fn to_normalized(&self) -> [f32; 4] {
        let Rgba8([r, g, b, a]) = *self;

        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }
}

impl Default for Rgba8 {
    fn default() -> Rgba8 {
        Rgba8::WHITE
    }
}
