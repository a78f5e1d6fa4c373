//! # App 模块
//!
//! 按钮展示页：按分组列出各种配置组合。

use std::time::Duration;

use button_core::{
    Animation, ButtonOptions, ButtonType, Glyph, GlyphCapabilities, GlyphRef, IconConfig,
    IconPosition, OptionValue, PrebuiltGlyph, Shape, Size, Variant,
};
use dioxus::prelude::*;

use crate::components::{Button, ButtonSlots, ConfiguredButton};
use crate::config::DemoConfig;
use crate::platform;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const BUTTON_CSS: &str = include_str!("../assets/button.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Button Showcase" }
        document::Script { src: TAILWIND_CDN }
        document::Style { "{BUTTON_CSS}" }

        main { class: "min-h-screen bg-gradient-to-br from-slate-50 to-slate-200 p-10 space-y-10",
            h1 { class: "text-3xl font-bold text-slate-800", "Button Showcase" }
            VariantSection {}
            SizeSection {}
            ShapeSection {}
            IconSection {}
            AnimationSection {}
            StateSection {}
            EffectSection {}
            PlaygroundSection {}
        }
    }
}

#[component]
fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { class: "space-y-4",
            h2 { class: "text-xl font-semibold text-slate-700", "{title}" }
            div { class: "flex flex-wrap items-center gap-4", {children} }
        }
    }
}

#[component]
fn VariantSection() -> Element {
    rsx! {
        Section { title: "Variants",
            for &variant in Variant::ALL {
                Button { key: "{variant}", variant, label: "{variant}" }
            }
        }
    }
}

#[component]
fn SizeSection() -> Element {
    rsx! {
        Section { title: "Sizes",
            for &size in Size::ALL.iter().filter(|s| !s.is_icon()) {
                Button { key: "{size}", size, label: "{size}" }
            }
            for &size in Size::ALL.iter().filter(|s| s.is_icon()) {
                Button {
                    key: "{size}",
                    size,
                    icon: IconConfig::new("heart").with_position(IconPosition::Only),
                    aria_label: "Like",
                }
            }
        }
    }
}

#[component]
fn ShapeSection() -> Element {
    rsx! {
        Section { title: "Shapes",
            for &shape in Shape::ALL.iter().filter(|s| **s != Shape::Circle) {
                Button { key: "{shape}", shape, label: "{shape}" }
            }
            Button {
                shape: Shape::Circle,
                size: Size::IconLg,
                left_icon: Glyph::from("plus"),
                aria_label: "Add",
            }
        }
    }
}

#[component]
fn IconSection() -> Element {
    // 只允许覆盖尺寸的预构建图标
    let prebuilt = PrebuiltGlyph::new(GlyphRef::new("star"))
        .with_size(20)
        .with_class("text-yellow-300")
        .with_capabilities(GlyphCapabilities {
            supports_sizing: true,
            supports_class_name: false,
        });

    rsx! {
        Section { title: "Icons",
            Button { left_icon: Glyph::from("play"), label: "Play" }
            Button {
                variant: Variant::Secondary,
                right_icon: Glyph::from("chevron-right"),
                label: "Next",
            }
            Button {
                variant: Variant::Outline,
                icon: IconConfig::new("download").with_size(18),
                label: "Download",
            }
            Button {
                variant: Variant::Ghost,
                icon: IconConfig::new("settings").with_position(IconPosition::Only),
                label: "Settings",
            }
            Button {
                variant: Variant::Destructive,
                left_icon: Glyph::from("trash-2"),
                label: "Delete",
            }
            Button { variant: Variant::Warning, left_icon: Glyph::Prebuilt(prebuilt), label: "Favorite" }
        }
    }
}

#[component]
fn AnimationSection() -> Element {
    rsx! {
        Section { title: "Animations",
            for &animation in Animation::ALL {
                Button {
                    key: "{animation}",
                    variant: Variant::Gradient,
                    animation,
                    label: "{animation}",
                }
            }
        }
    }
}

#[component]
fn StateSection() -> Element {
    let config = use_context::<DemoConfig>();
    let loading_ms = config.loading_demo_ms;
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| 0u32);

    let start_save = move |_: MouseEvent| {
        saving.set(true);
        spawn(async move {
            platform::sleep(Duration::from_millis(loading_ms)).await;
            saving.set(false);
            saved += 1;
            tracing::info!(count = saved(), "模拟保存完成");
        });
    };

    let save_label = if saving() { "Saving..." } else { "Save" };

    rsx! {
        Section { title: "States",
            Button {
                variant: Variant::Success,
                loading: saving(),
                left_icon: Glyph::from("download"),
                label: "{save_label}",
                on_click: start_save,
            }
            Button { disabled: true, label: "Disabled" }
            Button { loading: true, label: "Loading" }
            Button { button_type: ButtonType::Submit, variant: Variant::Secondary, label: "Submit" }
            span { class: "text-sm text-slate-500", "saved {saved} times" }
        }
    }
}

#[component]
fn EffectSection() -> Element {
    rsx! {
        Section { title: "Effects",
            div { class: "flex gap-4 rounded-xl bg-gradient-to-r from-purple-500 to-pink-500 p-6",
                Button { glass: true, label: "Glass" }
                Button { glass: true, glow: true, left_icon: Glyph::from("sparkles"), label: "Glass + Glow" }
            }
            Button { variant: Variant::Neon, glow: true, label: "Glow" }
            Button {
                gradient: "linear-gradient(135deg, #f97316 0%, #db2777 100%)",
                class: "text-white",
                label: "Custom Gradient",
            }
            Button { shadow: false, variant: Variant::Outline, label: "No Shadow" }
            Button { class: "bg-red-500 hover:bg-red-600", label: "Override" }
            Button { ripple: false, variant: Variant::Secondary, label: "No Ripple" }
        }
    }
}

#[component]
fn PlaygroundSection() -> Element {
    let config = use_context::<DemoConfig>();
    let mut clicks = use_signal(|| 0u32);
    let mut hovered = use_signal(|| false);

    let slots = ButtonSlots {
        on_click: Some(EventHandler::new(move |_| clicks += 1)),
        on_hover: Some(EventHandler::new(move |_| hovered.set(true))),
        ..ButtonSlots::default()
    };

    // 大尺寸画布，方便观察涟漪的落点与直径
    let canvas = ButtonOptions::text("Click anywhere")
        .with_variant(Variant::Secondary)
        .with_size(Size::Xl)
        .with_animation(Animation::None)
        .with_classes("w-96 h-40");

    rsx! {
        Section { title: "Playground",
            ConfiguredButton { options: config.playground.clone(), slots }
            ConfiguredButton { options: canvas, slots: ButtonSlots::default() }
            span { class: "text-sm text-slate-500",
                "clicks: {clicks}"
                if hovered() {
                    " (hovered)"
                }
            }
        }
    }
}
