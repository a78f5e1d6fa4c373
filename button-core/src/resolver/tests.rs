//! # Resolver 测试

use super::*;
use crate::glyph::{Glyph, IconConfig};
use crate::options::{Animation, Shape, Variant};

fn resolve(options: &ButtonOptions) -> StyleTokenSet {
    StyleResolver::builtin().resolve(options)
}

fn all_option_grid() -> Vec<ButtonOptions> {
    let mut grid = Vec::new();
    for &variant in Variant::ALL {
        for &size in Size::ALL {
            for &shape in Shape::ALL {
                for &animation in Animation::ALL {
                    for (loading, disabled) in [(false, false), (true, false), (false, true)] {
                        grid.push(
                            ButtonOptions::text("Go")
                                .with_variant(variant)
                                .with_size(size)
                                .with_shape(shape)
                                .with_animation(animation)
                                .with_loading(loading)
                                .with_disabled(disabled),
                        );
                    }
                }
            }
        }
    }
    grid
}

// -------------------------------------------------------------------------
// 具体场景
// -------------------------------------------------------------------------

#[test]
fn test_plain_save_button() {
    let options = ButtonOptions::text("Save")
        .with_variant(Variant::Primary)
        .with_size(Size::Md)
        .with_shape(Shape::Default)
        .with_animation(Animation::None);
    let tokens = resolve(&options);

    insta::assert_snapshot!(
        tokens.to_string(),
        @"relative inline-flex items-center justify-center font-medium transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed select-none overflow-hidden bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500 h-10 px-4 text-sm rounded-md shadow-md hover:shadow-lg"
    );
    assert!(!tokens.contains("cursor-not-allowed"));
}

#[test]
fn test_default_scale_animation_replaces_base_transition() {
    let tokens = resolve(&ButtonOptions::text("Save"));

    insta::assert_snapshot!(
        tokens.to_string(),
        @"relative inline-flex items-center justify-center font-medium duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed select-none overflow-hidden bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500 h-10 px-4 text-sm rounded-md hover:scale-105 active:scale-95 transition-transform shadow-md hover:shadow-lg"
    );
}

#[test]
fn test_loading_with_left_icon() {
    let options = ButtonOptions::default()
        .with_loading(true)
        .with_left_icon("play")
        .with_animation(Animation::Bounce);
    let tokens = resolve(&options);

    assert!(!tokens.contains("hover:animate-bounce"));
    assert!(tokens.contains("cursor-not-allowed"));
    // 无内容 + 有图标 → 仅图标尺寸
    assert!(tokens.contains("w-10"));
    assert!(tokens.contains("p-0"));
    assert_eq!(tokens.iter().last(), Some("cursor-not-allowed"));

    let icon = StyleResolver::builtin().resolve_icon(&options).unwrap();
    assert_eq!(icon.glyph, Glyph::from(crate::glyph::SPINNER_GLYPH));
    assert_eq!(icon.position, IconPosition::Left);
}

#[test]
fn test_caller_override_wins_background() {
    let options = ButtonOptions::text("Delete")
        .with_variant(Variant::Primary)
        .with_classes("bg-red-500");
    let tokens = resolve(&options);

    assert!(tokens.contains("bg-red-500"));
    assert!(!tokens.contains("bg-blue-600"));
    // hover 背景不冲突，保留
    assert!(tokens.contains("hover:bg-blue-700"));
    assert_eq!(tokens.iter().last(), Some("bg-red-500"));
}

#[test]
fn test_caller_font_size_keeps_variant_text_color() {
    for size in ["text-[15px]", "text-lg/7"] {
        let tokens = resolve(&ButtonOptions::text("Save").with_classes(size));

        assert!(tokens.contains("text-white"), "{size}: {tokens}");
        assert!(!tokens.contains("text-sm"), "{size}: {tokens}");
        assert_eq!(tokens.iter().last(), Some(size));
    }
}

#[test]
fn test_caller_shadow_color_keeps_shadow_size() {
    let tokens = resolve(&ButtonOptions::text("Save").with_classes("shadow-[#ff0000]"));
    assert!(tokens.contains("shadow-md"));
    assert!(tokens.contains("shadow-[#ff0000]"));

    let tokens = resolve(&ButtonOptions::text("Save").with_classes("shadow-[0_0_20px_#ff0000]"));
    assert!(!tokens.contains("shadow-md"));
    assert!(tokens.contains("hover:shadow-lg"));
}

#[test]
fn test_caller_tokens_appear_last() {
    let options = ButtonOptions::text("Play").with_classes("h-16 tracking-wide");
    let tokens = resolve(&options);
    let n = tokens.len();
    assert_eq!(&tokens.tokens()[n - 2..], ["h-16", "tracking-wide"]);
    assert!(!tokens.contains("h-10"));
}

#[test]
fn test_glass_overrides_variant_and_shadow() {
    let options = ButtonOptions::text("Glass")
        .with_variant(Variant::Destructive)
        .with_glass(true)
        .with_glow(true);
    let tokens = resolve(&options);

    assert!(tokens.contains("glass"));
    assert!(!tokens.contains("bg-red-600"));
    assert!(!tokens.contains("shadow-md"));
    assert!(tokens.contains("shadow-glow"));
}

#[test]
fn test_shadow_disabled() {
    let tokens = resolve(&ButtonOptions::text("Flat").with_shadow(false));
    assert!(!tokens.contains("shadow-md"));
    assert!(!tokens.contains("hover:shadow-lg"));
}

#[test]
fn test_disabled_blocks_animation() {
    let options = ButtonOptions::text("Off")
        .with_disabled(true)
        .with_animation(Animation::Pulse);
    let tokens = resolve(&options);
    assert!(!tokens.contains("hover:animate-pulse"));
    assert!(tokens.contains("cursor-not-allowed"));
}

// -------------------------------------------------------------------------
// 尺寸
// -------------------------------------------------------------------------

#[test]
fn test_icon_only_size_synthesis() {
    let resolver = StyleResolver::builtin();
    assert_eq!(resolver.size_tokens(Size::Sm, true), "h-8 w-8 p-0");
    assert_eq!(resolver.size_tokens(Size::Md, true), "h-10 w-10 p-0");
    assert_eq!(resolver.size_tokens(Size::Lg, true), "h-11 w-11 p-0");
    assert_eq!(resolver.size_tokens(Size::IconLg, true), "h-11 w-11 p-0");
    // icon-xs / icon-xl 不存在 → icon-md
    assert_eq!(resolver.size_tokens(Size::Xs, true), "h-10 w-10 p-0");
    assert_eq!(resolver.size_tokens(Size::Xl, true), "h-10 w-10 p-0");
}

#[test]
fn test_icon_size_without_icon_uses_plain_lookup() {
    // 非文本子元素 + icon-lg 尺寸，未配置图标
    let options = ButtonOptions {
        content: ButtonContent::Rich,
        ..ButtonOptions::default()
    }
    .with_size(Size::IconLg)
    .with_shape(Shape::Circle);
    let tokens = resolve(&options);
    assert!(tokens.contains("w-11"));
    assert!(tokens.contains("rounded-full"));
}

#[test]
fn test_theme_can_supply_synthesized_icon_size() {
    let table = StyleTable::from_json(r#"{ "sizes": { "icon-xl": "h-12 w-12 p-0" } }"#).unwrap();
    let resolver = StyleResolver::new(&table);
    assert_eq!(resolver.size_tokens(Size::Xl, true), "h-12 w-12 p-0");
    assert_eq!(resolver.size_tokens(Size::Xs, true), "h-10 w-10 p-0");
}

#[test]
fn test_icon_only_detection() {
    let only = ButtonOptions::text("Settings")
        .with_icon(IconConfig::new("settings").with_position(IconPosition::Only));
    let icon = ResolvedIcon::resolve(&only);
    assert!(is_icon_only(icon.as_ref(), &only.content));

    let with_text = ButtonOptions::text("Next").with_right_icon("chevron-right");
    let icon = ResolvedIcon::resolve(&with_text);
    assert!(!is_icon_only(icon.as_ref(), &with_text.content));

    let no_text = ButtonOptions::default().with_right_icon("chevron-right");
    let icon = ResolvedIcon::resolve(&no_text);
    assert!(is_icon_only(icon.as_ref(), &no_text.content));

    assert!(!is_icon_only(None, &ButtonContent::None));
}

// -------------------------------------------------------------------------
// 全组合性质
// -------------------------------------------------------------------------

#[test]
fn test_resolution_is_deterministic() {
    let resolver = StyleResolver::builtin();
    for options in all_option_grid() {
        assert_eq!(resolver.resolve(&options), resolver.resolve(&options.clone()));
    }
}

#[test]
fn test_blocked_state_invariants() {
    let resolver = StyleResolver::builtin();
    for options in all_option_grid() {
        let tokens = resolver.resolve(&options);
        if options.is_blocked() {
            assert!(tokens.contains("cursor-not-allowed"), "{options:?}");
            let without_animation = options.clone().with_animation(Animation::None);
            assert_eq!(tokens, resolver.resolve(&without_animation), "{options:?}");
        } else {
            assert!(!tokens.contains("cursor-not-allowed"), "{options:?}");
        }
    }
}

#[test]
fn test_icon_only_never_uses_text_size() {
    let resolver = StyleResolver::builtin();
    for &size in Size::ALL {
        let options = ButtonOptions::text("Hidden")
            .with_size(size)
            .with_icon(IconConfig::new(Glyph::from("star")).with_position(IconPosition::Only));
        let tokens = resolver.resolve(&options);
        assert!(tokens.contains("p-0"), "{size}");
        assert!(!tokens.iter().any(|t| t.starts_with("px-")), "{size}");
        assert!(
            !tokens
                .iter()
                .any(|t| matches!(t, "text-xs" | "text-sm" | "text-base" | "text-lg")),
            "{size}"
        );
    }
}
