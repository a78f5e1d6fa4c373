//! # Glyphs 模块
//!
//! 内联 SVG 图标注册表（24×24 描边图标）。

use button_core::GlyphRender;
use dioxus::prelude::*;

/// 按名称查找图标路径
pub fn glyph_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "play" => &["M6 3l14 9-14 9V3z"],
        "heart" => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z",
        ],
        "download" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M7 10l5 5 5-5",
            "M12 15V3",
        ],
        "settings" => &[
            "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
            "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        ],
        "trash-2" => &[
            "M3 6h18",
            "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
            "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
            "M10 11v6",
            "M14 11v6",
        ],
        "plus" => &["M5 12h14", "M12 5v14"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "sparkles" => &[
            "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
            "M20 3v4",
            "M22 5h-4",
        ],
        "zap" => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        "star" => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        "loader-2" => &["M21 12a9 9 0 1 1-6.22-8.56"],
        _ => return None,
    };
    Some(paths)
}

/// 渲染一个图标
///
/// 未注册的图标不渲染任何节点。
#[component]
pub fn GlyphIcon(render: GlyphRender) -> Element {
    let Some(paths) = glyph_paths(render.glyph.as_str()) else {
        tracing::warn!(glyph = %render.glyph, "未注册的图标");
        return rsx! {};
    };

    let size = render.size.map(|s| s.to_string());
    let class = render.class_name.clone();

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: size.clone(),
            height: size,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class,
            "aria-hidden": "true",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use button_core::glyph::SPINNER_GLYPH;

    #[test]
    fn test_spinner_is_registered() {
        assert!(glyph_paths(SPINNER_GLYPH).is_some());
    }

    #[test]
    fn test_showcase_glyphs_are_registered() {
        for name in [
            "play",
            "heart",
            "download",
            "settings",
            "trash-2",
            "plus",
            "chevron-right",
            "sparkles",
            "zap",
            "star",
        ] {
            let paths = glyph_paths(name).unwrap_or_else(|| panic!("missing glyph {name}"));
            assert!(!paths.is_empty(), "{name}");
            assert!(paths.iter().all(|d| d.starts_with('M')), "{name}");
        }
    }

    #[test]
    fn test_unknown_glyph() {
        assert_eq!(glyph_paths("unicorn"), None);
    }
}
