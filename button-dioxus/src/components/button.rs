//! # Button 组件
//!
//! 把 `button-core` 的渲染计划与涟漪控制器接到 Dioxus 上。
//!
//! - 渲染：每次渲染由 props 组装 [`ButtonOptions`]，再交给 [`ButtonView::build`]
//! - 点击：同步走 [`dispatch_click`]，使用预先缓存的包围盒；涟漪定时器是作用域内的 task
//! - 卸载：`use_drop` 中 teardown，取消所有未到期的 task

use std::rc::Rc;
use std::time::Duration;

use button_core::view::{
    CONTENT_CLASS, RIPPLE_INK_CLASS, RIPPLE_WRAPPER_CLASS, SHIMMER_CLASS, ripple_style,
};
use button_core::{
    Animation, BoundingBox, ButtonContent, ButtonOptions, ButtonType, ButtonView, ClickOutcome,
    Glyph, IconConfig, IconSlot, OptionValue, PointerPosition, RippleController, RippleEvent,
    RippleId, RippleScheduler, Shape, Size, TimerHandle, Variant, dispatch_click,
};
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::glyphs::GlyphIcon;
use crate::platform;
use crate::theme::use_theme;

/// 涟漪定时器句柄（作用域 task）
#[derive(Debug)]
pub struct TaskHandle(Task);

impl TimerHandle for TaskHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// 以作用域 task 实现的涟漪调度器
struct TaskScheduler {
    ripples: Signal<RippleController<TaskHandle>>,
}

impl RippleScheduler for TaskScheduler {
    type Handle = TaskHandle;

    fn schedule(&mut self, id: RippleId, delay: Duration) -> TaskHandle {
        let mut ripples = self.ripples;
        TaskHandle(spawn(async move {
            platform::sleep(delay).await;
            ripples.write().remove(id);
        }))
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: Variant,
    #[props(default)]
    pub size: Size,
    #[props(default)]
    pub shape: Shape,
    #[props(default)]
    pub animation: Animation,
    /// CSS 动画时长，默认 `200ms`
    pub animation_duration: Option<String>,

    #[props(default)]
    pub loading: bool,
    #[props(default)]
    pub disabled: bool,

    pub icon: Option<IconConfig>,
    pub left_icon: Option<Glyph>,
    pub right_icon: Option<Glyph>,

    #[props(default)]
    pub glass: bool,
    #[props(default)]
    pub glow: bool,
    #[props(default = true)]
    pub shadow: bool,
    /// 原始 CSS background 值
    pub gradient: Option<String>,

    #[props(default = true)]
    pub ripple: bool,
    #[props(default)]
    pub haptic: bool,

    /// 追加的样式 token（冲突时胜出）
    pub class: Option<String>,
    /// 追加的内联样式
    pub style: Option<String>,
    pub aria_label: Option<String>,
    #[props(default)]
    pub button_type: ButtonType,

    /// 纯文本内容（同时作为无障碍标签的后备值）
    pub label: Option<String>,
    /// 非文本内容
    pub content: Option<Element>,

    pub on_click: Option<EventHandler<MouseEvent>>,
    pub on_hover: Option<EventHandler<MouseEvent>>,
    pub on_focus: Option<EventHandler<FocusEvent>>,
    pub on_blur: Option<EventHandler<FocusEvent>>,
}

impl ButtonProps {
    /// 组装核心配置
    pub fn options(&self) -> ButtonOptions {
        let content = content_of(self.label.as_deref(), self.content.is_some());

        let defaults = ButtonOptions::default();
        ButtonOptions {
            variant: self.variant,
            size: self.size,
            shape: self.shape,
            animation: self.animation,
            animation_duration: self
                .animation_duration
                .clone()
                .unwrap_or(defaults.animation_duration),
            loading: self.loading,
            disabled: self.disabled,
            icon: self.icon.clone(),
            left_icon: self.left_icon.clone(),
            right_icon: self.right_icon.clone(),
            glass: self.glass,
            glow: self.glow,
            shadow: self.shadow,
            gradient: self.gradient.clone(),
            ripple_enabled: self.ripple,
            haptic_enabled: self.haptic,
            caller_classes: self.class.clone(),
            caller_style: self.style.clone(),
            aria_label: self.aria_label.clone(),
            button_type: self.button_type,
            content,
        }
    }

    pub fn slots(&self) -> ButtonSlots {
        ButtonSlots {
            content: self.content.clone(),
            on_click: self.on_click,
            on_hover: self.on_hover,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}

/// 按钮的非配置部分：富内容与事件回调
#[derive(Clone, PartialEq, Default)]
pub struct ButtonSlots {
    pub content: Option<Element>,
    pub on_click: Option<EventHandler<MouseEvent>>,
    pub on_hover: Option<EventHandler<MouseEvent>>,
    pub on_focus: Option<EventHandler<FocusEvent>>,
    pub on_blur: Option<EventHandler<FocusEvent>>,
}

/// 文本优先，其次是富内容
fn content_of(label: Option<&str>, has_rich: bool) -> ButtonContent {
    match label {
        Some(label) if !label.is_empty() => ButtonContent::Text(label.to_string()),
        _ if has_rich => ButtonContent::Rich,
        _ => ButtonContent::None,
    }
}

/// 测量按钮的视口包围盒；未挂载或测量失败时为 `None`
async fn measure(mounted: Option<Rc<MountedData>>) -> Option<BoundingBox> {
    let Some(mounted) = mounted else {
        tracing::debug!("按钮尚未挂载，跳过测量");
        return None;
    };
    match mounted.get_client_rect().await {
        Ok(rect) => Some(BoundingBox::new(
            rect.origin.x,
            rect.origin.y,
            rect.size.width,
            rect.size.height,
        )),
        Err(e) => {
            tracing::debug!(error = ?e, "包围盒测量失败");
            None
        }
    }
}

/// 刷新缓存的包围盒（失败时保留旧值）
async fn refresh_bbox(mounted: Option<Rc<MountedData>>, mut bbox: Signal<BoundingBox>) {
    if let Some(rect) = measure(mounted).await {
        bbox.set(rect);
    }
}

/// 处理一次点击：门禁 → 涟漪 → 回调 → 触感反馈，全程同步
fn handle_click<S, E>(
    options: &ButtonOptions,
    ripples: &mut RippleController<S::Handle>,
    scheduler: &mut S,
    pointer: PointerPosition,
    bbox: BoundingBox,
    event: E,
    on_click: Option<impl FnOnce(E)>,
) -> ClickOutcome
where
    S: RippleScheduler,
{
    let outcome = dispatch_click(options, ripples, scheduler, pointer, bbox, event, |event| {
        if let Some(handler) = on_click {
            handler(event);
        }
    });

    if let ClickOutcome::Admitted { haptic: true, .. } = outcome {
        platform::vibrate();
    }
    outcome
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        ConfiguredButton { options: props.options(), slots: props.slots() }
    }
}

/// 以完整配置驱动的按钮（配置文件中的预设走这里）
#[component]
pub fn ConfiguredButton(options: ButtonOptions, slots: ButtonSlots) -> Element {
    let theme = use_theme();
    let view = ButtonView::build(theme.table(), &options);

    let mut ripples = use_signal(RippleController::<TaskHandle>::new);
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    // 点击处理同步执行，包围盒在挂载、尺寸变化与按下时预先测量
    let bbox = use_signal(BoundingBox::default);

    use_drop(move || {
        if let Ok(mut controller) = ripples.try_write() {
            controller.teardown();
        }
    });

    let active: Vec<RippleEvent> = ripples.read().events().copied().collect();
    let class = view.class.to_string();
    let style = view.style.clone();
    let button_type = options.button_type.as_str();
    let aria_disabled = if view.aria_disabled { "true" } else { "false" };

    let label = options.content.text().map(str::to_string);
    let ButtonSlots {
        content,
        on_click,
        on_hover,
        on_focus,
        on_blur,
    } = slots;

    rsx! {
        button {
            r#type: button_type,
            class: "{class}",
            style: "{style}",
            disabled: view.disabled,
            aria_disabled,
            aria_label: view.aria_label.clone(),
            onmounted: move |evt: MountedEvent| {
                let data = evt.data();
                mounted.set(Some(data.clone()));
                refresh_bbox(Some(data), bbox)
            },
            onresize: move |_| refresh_bbox(mounted(), bbox),
            onpointerdown: move |_| refresh_bbox(mounted(), bbox),
            onclick: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                let pointer = PointerPosition::new(point.x, point.y);
                let mut scheduler = TaskScheduler { ripples };
                handle_click(
                    &options,
                    &mut *ripples.write(),
                    &mut scheduler,
                    pointer,
                    bbox(),
                    evt,
                    on_click.map(|handler| move |evt: MouseEvent| handler.call(evt)),
                );
            },
            onmouseenter: move |evt| {
                if let Some(handler) = on_hover {
                    handler.call(evt);
                }
            },
            onfocus: move |evt| {
                if let Some(handler) = on_focus {
                    handler.call(evt);
                }
            },
            onblur: move |evt| {
                if let Some(handler) = on_blur {
                    handler.call(evt);
                }
            },

            if let Some(icon) = view.icon_in(IconSlot::Left) {
                span { class: icon.wrapper_class.unwrap_or_default(),
                    GlyphIcon { render: icon.render.clone() }
                }
            }

            if view.show_content {
                span { class: CONTENT_CLASS,
                    if let Some(label) = label {
                        "{label}"
                    }
                    if let Some(content) = content {
                        {content}
                    }
                }
            }

            if let Some(icon) = view.icon_in(IconSlot::Only) {
                GlyphIcon { render: icon.render.clone() }
            }

            if let Some(icon) = view.icon_in(IconSlot::Right) {
                span { class: icon.wrapper_class.unwrap_or_default(),
                    GlyphIcon { render: icon.render.clone() }
                }
            }

            if view.ripple_enabled {
                for ripple in active {
                    RippleInk { key: "{ripple.id}", ripple }
                }
            }

            if view.show_shimmer {
                span { class: SHIMMER_CLASS }
            }
        }
    }
}

/// 单个涟漪
#[component]
fn RippleInk(ripple: RippleEvent) -> Element {
    rsx! {
        span { class: RIPPLE_WRAPPER_CLASS, style: ripple_style(&ripple),
            span { class: RIPPLE_INK_CLASS }
        }
    }
}
