/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix
#![cfg(not(feature = "gles"))]

mod mock_gl;

use self::mock_gl::*;

use flo_render_target::*;

use std::sync::*;

#[test]
fn version_from_integer_query() {
    let mock = MockGl::new().with_integer_version(Some((3, 3)));
    let capabilities = Capabilities::probe(&MockLoader::full(), &mock);

    assert!(capabilities.version() == GlVersion::new(3, 3));
}

#[test]
fn version_from_string_when_integer_query_is_rejected() {
    let mock = MockGl::new()
        .with_integer_version(None)
        .with_version_string(Some("1.5.0 NVIDIA 2.1"));
    let capabilities = Capabilities::probe(&MockLoader::full(), &mock);

    assert!(capabilities.version() == GlVersion::new(1, 5));
    assert!(mock.pending_errors() == 0);
}

#[test]
fn version_falls_back_to_1_1() {
    let mock = MockGl::new().with_integer_version(None).with_version_string(None);
    let capabilities = Capabilities::probe(&MockLoader::full(), &mock);

    assert!(capabilities.version() == GlVersion::FALLBACK);
    assert!(GlVersion::FALLBACK == GlVersion::new(1, 1));
}

#[test]
fn unreadable_version_string_falls_back_to_1_1() {
    let mock = MockGl::new().with_integer_version(None).with_version_string(Some("OpenGL ES"));

    assert!(GlVersion::query(&mock) == GlVersion::new(1, 1));
}

#[test]
fn full_driver_has_every_capability() {
    let capabilities = Capabilities::probe(&MockLoader::full(), &MockGl::new());

    assert!(capabilities.multitexture().is_some());
    assert!(capabilities.blend_minmax().is_some());
    assert!(capabilities.has_blend_subtract());
    assert!(capabilities.blend_func_separate().is_some());
    assert!(capabilities.blend_equation_separate().is_some());
    assert!(capabilities.framebuffer_object().is_some());
    assert!(capabilities.has_shaders());
    assert!(capabilities.can_select_blend_equation());
}

#[test]
fn driver_without_extensions_has_no_capabilities() {
    let capabilities = Capabilities::probe(&MockLoader::new(&[]), &MockGl::new());

    assert!(capabilities.multitexture().is_none());
    assert!(capabilities.blend_minmax().is_none());
    assert!(!capabilities.has_blend_subtract());
    assert!(capabilities.blend_func_separate().is_none());
    assert!(capabilities.blend_equation_separate().is_none());
    assert!(capabilities.framebuffer_object().is_none());
    assert!(!capabilities.has_shaders());
    assert!(!capabilities.can_select_blend_equation());
}

#[test]
fn any_missing_framebuffer_function_disables_framebuffers() {
    let functions = [
        "glBindFramebufferEXT",
        "glBindRenderbufferEXT",
        "glCheckFramebufferStatusEXT",
        "glDeleteFramebuffersEXT",
        "glDeleteRenderbuffersEXT",
        "glFramebufferRenderbufferEXT",
        "glFramebufferTexture2DEXT",
        "glGenFramebuffersEXT",
        "glGenRenderbuffersEXT",
        "glRenderbufferStorageEXT",
    ];

    for function in functions.iter() {
        let loader = MockLoader::full().without_function(function);
        let capabilities = Capabilities::probe(&loader, &MockGl::new());

        assert!(capabilities.framebuffer_object().is_none(), "{} missing", function);

        // The other groups are unaffected
        assert!(capabilities.multitexture().is_some());
        assert!(capabilities.blend_func_separate().is_some());
    }
}

#[test]
fn missing_function_disables_only_its_group() {
    let loader = MockLoader::full().without_function("glBlendEquationSeparateEXT");
    let capabilities = Capabilities::probe(&loader, &MockGl::new());

    assert!(capabilities.blend_equation_separate().is_none());
    assert!(capabilities.blend_func_separate().is_some());
    assert!(capabilities.can_select_blend_equation());
}

#[test]
fn resolved_entry_points_are_reported() {
    let capabilities = Capabilities::probe(&MockLoader::full(), &MockGl::new());
    let multitexture = capabilities.multitexture().unwrap();

    assert!(multitexture.active_texture.name() == "glActiveTextureARB");
    assert!(!multitexture.active_texture.address().is_null());
}

#[test]
fn registry_probes_once() {
    let registry = CapabilityRegistry::new();
    assert!(registry.get().is_none());

    let first = registry.ensure_initialized(&MockLoader::full(), &MockGl::new());
    let second = registry.ensure_initialized(&MockLoader::new(&[]), &MockGl::new());

    assert!(Arc::ptr_eq(&first, &second));
    assert!(second.framebuffer_object().is_some());
    assert!(Arc::ptr_eq(&first, &registry.get().unwrap()));
}

#[test]
fn registry_is_shared_between_threads() {
    let registry = Arc::new(CapabilityRegistry::new());

    let threads = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.ensure_initialized(&MockLoader::full(), &MockGl::new()))
        })
        .collect::<Vec<_>>();

    let results = threads.into_iter().map(|thread| thread.join().unwrap()).collect::<Vec<_>>();

    for result in results.iter() {
        assert!(Arc::ptr_eq(result, &results[0]));
    }
}

#[test]
fn extension_list_from_string() {
    let mock = MockGl::new().with_extensions(&["GL_ARB_multitexture", "GL_EXT_blend_minmax"]);
    let extensions = ExtensionList::query(&MockLoader::full(), &mock);

    assert!(extensions.len() == 2);
    assert!(extensions.contains("GL_ARB_multitexture"));
    assert!(extensions.contains("GL_EXT_blend_minmax"));
    assert!(!extensions.contains("GL_EXT_framebuffer_object"));
}

#[test]
fn extension_list_from_indexed_query() {
    let mock = MockGl::new()
        .with_integer_version(Some((3, 2)))
        .with_extensions(&["GL_ARB_multitexture", "GL_EXT_framebuffer_object", "GL_EXT_blend_subtract"]);
    let extensions = ExtensionList::query(&MockLoader::full(), &mock);

    assert!(extensions.len() == 3);
    assert!(extensions.contains("GL_EXT_framebuffer_object"));
}

#[test]
fn extension_list_needs_indexed_query_function() {
    let mock = MockGl::new()
        .with_integer_version(Some((3, 2)))
        .with_extensions(&["GL_ARB_multitexture"]);
    let extensions = ExtensionList::query(&MockLoader::full().without_function("glGetStringi"), &mock);

    assert!(extensions.is_empty());
}

#[test]
fn extension_list_parse_ignores_extra_spaces() {
    let extensions = ExtensionList::parse("  GL_A  GL_B GL_C ");

    assert!(extensions.len() == 3);
    assert!(extensions.iter().all(|name| name.starts_with("GL_")));
}

#[test]
fn fixed_profile_has_everything_but_shaders() {
    let capabilities = Capabilities::fixed_profile(&MockLoader::new(&[]));

    assert!(capabilities.version() == GlVersion::new(1, 1));
    assert!(capabilities.multitexture().is_some());
    assert!(capabilities.framebuffer_object().is_some());
    assert!(capabilities.can_select_blend_equation());
    assert!(!capabilities.has_shaders());
}

#[test]
fn fixed_profile_resolves_oes_names() {
    let capabilities = Capabilities::fixed_profile(&MockLoader::new(&[]));
    let framebuffer_object = capabilities.framebuffer_object().unwrap();

    assert!(framebuffer_object.gen_framebuffers.name() == "glGenFramebuffersOES");
    assert!(capabilities.blend_minmax().unwrap().blend_equation.name() == "glBlendEquationOES");
    assert!(capabilities.multitexture().unwrap().active_texture.name() == "glActiveTexture");
}

#[test]
fn fixed_profile_without_a_function_drops_its_group() {
    let loader = MockLoader::new(&[]).without_function("glRenderbufferStorageOES");
    let capabilities = Capabilities::fixed_profile(&loader);

    assert!(capabilities.framebuffer_object().is_none());
    assert!(capabilities.multitexture().is_some());
}

#[test]
fn blend_equation_needs_subtract_as_well_as_minmax() {
    let loader = MockLoader::full().without_extension("GL_EXT_blend_subtract");
    let capabilities = Capabilities::probe(&loader, &MockGl::new());

    assert!(capabilities.blend_minmax().is_some());
    assert!(capabilities.blend_equation_selection().is_none());
    assert!(!capabilities.can_select_blend_equation());
}
