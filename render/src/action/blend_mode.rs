/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// A factor in the blending equation, applied to either the source or the destination colour
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// (0, 0, 0, 0)
    Zero,
    /// (1, 1, 1, 1)
    One,
    /// (src.r, src.g, src.b, src.a)
    SrcColor,
    /// (1, 1, 1, 1) - (src.r, src.g, src.b, src.a)
    OneMinusSrcColor,
    /// (dst.r, dst.g, dst.b, dst.a)
    DstColor,
    /// (1, 1, 1, 1) - (dst.r, dst.g, dst.b, dst.a)
    OneMinusDstColor,
    /// (src.a, src.a, src.a, src.a)
    SrcAlpha,
    /// (1, 1, 1, 1) - (src.a, src.a, src.a, src.a)
    OneMinusSrcAlpha,
    /// (dst.a, dst.a, dst.a, dst.a)
    DstAlpha,
    /// (1, 1, 1, 1) - (dst.a, dst.a, dst.a, dst.a)
    OneMinusDstAlpha,
}

///
/// How the weighted source and destination values are combined
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendEquation {
    /// src * src_factor + dst * dst_factor
    Add,
    /// src * src_factor - dst * dst_factor
    Subtract,
}

///
/// Describes how pixels being drawn are combined with the pixels already in the render target
///
/// The colour and alpha channels are described separately. Two blend modes are equal only if all
/// six of their components are equal, which is what render targets rely on to skip redundant updates.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlendMode {
    pub color_src_factor: BlendFactor,
    pub color_dst_factor: BlendFactor,
    pub color_equation: BlendEquation,
    pub alpha_src_factor: BlendFactor,
    pub alpha_dst_factor: BlendFactor,
    pub alpha_equation: BlendEquation,
}

/// Blend source and destination according to the source alpha
pub const BLEND_ALPHA: BlendMode = BlendMode {
    color_src_factor: BlendFactor::SrcAlpha,
    color_dst_factor: BlendFactor::OneMinusSrcAlpha,
    color_equation: BlendEquation::Add,
    alpha_src_factor: BlendFactor::One,
    alpha_dst_factor: BlendFactor::OneMinusSrcAlpha,
    alpha_equation: BlendEquation::Add,
};

/// Add the source to the destination
pub const BLEND_ADD: BlendMode = BlendMode {
    color_src_factor: BlendFactor::SrcAlpha,
    color_dst_factor: BlendFactor::One,
    color_equation: BlendEquation::Add,
    alpha_src_factor: BlendFactor::One,
    alpha_dst_factor: BlendFactor::One,
    alpha_equation: BlendEquation::Add,
};

/// Multiply the source and the destination
pub const BLEND_MULTIPLY: BlendMode = BlendMode {
    color_src_factor: BlendFactor::DstColor,
    color_dst_factor: BlendFactor::Zero,
    color_equation: BlendEquation::Add,
    alpha_src_factor: BlendFactor::DstColor,
    alpha_dst_factor: BlendFactor::Zero,
    alpha_equation: BlendEquation::Add,
};

/// Overwrite the destination with the source
pub const BLEND_NONE: BlendMode = BlendMode {
    color_src_factor: BlendFactor::One,
    color_dst_factor: BlendFactor::Zero,
    color_equation: BlendEquation::Add,
    alpha_src_factor: BlendFactor::One,
    alpha_dst_factor: BlendFactor::Zero,
    alpha_equation: BlendEquation::Add,
};

impl BlendMode {
    ///
    /// Creates a blend mode that uses the same factors and equation for the colour and alpha channels
    ///
    pub const fn new(
        src_factor: BlendFactor,
        dst_factor: BlendFactor,
        equation: BlendEquation,
    ) -> BlendMode {
        BlendMode {
            color_src_factor: src_factor,
            color_dst_factor: dst_factor,
            color_equation: equation,
            alpha_src_factor: src_factor,
            alpha_dst_factor: dst_factor,
            alpha_equation: equation,
        }
    }

    ///
    /// Creates a blend mode with separate settings for the colour and alpha channels
    ///
    pub const fn separate(
        color_src_factor: BlendFactor,
        color_dst_factor: BlendFactor,
        color_equation: BlendEquation,
        alpha_src_factor: BlendFactor,
        alpha_dst_factor: BlendFactor,
        alpha_equation: BlendEquation,
    ) -> BlendMode {
        BlendMode {
            color_src_factor,
            color_dst_factor,
            color_equation,
            alpha_src_factor,
            alpha_dst_factor,
            alpha_equation,
        }
    }

    ///
    /// True if both channels use the additive equation (which every driver supports)
    ///
    pub fn is_additive(&self) -> bool {
        self.color_equation == BlendEquation::Add && self.alpha_equation == BlendEquation::Add
    }
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BLEND_ALPHA
    }
}
