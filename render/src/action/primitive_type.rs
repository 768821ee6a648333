/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// The kinds of primitive that a batch of vertices can describe
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PrimitiveType {
    /// Each vertex is a separate point
    Points,

    /// Every two vertices form a separate line
    Lines,

    /// Each vertex is joined to the previous one by a line
    LineStrip,

    /// Every three vertices form a separate triangle
    Triangles,

    /// Each vertex forms a triangle with the two vertices before it
    TriangleStrip,

    /// Each vertex forms a triangle with the vertex before it and the first vertex
    TriangleFan,

    /// Every four vertices form a quad (not available on OpenGL ES)
    Quads,
}
