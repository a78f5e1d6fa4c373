//! Button Showcase - Dioxus 前端
//!
//! 加载配置与主题，初始化日志，启动展示页。

mod app;
mod components;
mod config;
mod glyphs;
mod platform;
mod theme;

use dioxus::prelude::*;

use config::DemoConfig;
use theme::Theme;

fn main() {
    let config = load_config();
    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "配置校验未通过，继续使用当前配置");
    }

    let theme = match config.load_style_table() {
        Ok(table) => Theme::new(table),
        Err(e) => {
            tracing::warn!(error = %e, "主题加载失败，使用内置样式表");
            Theme::default()
        }
    };

    tracing::info!(
        title = %config.window.title,
        theme = ?config.theme_path,
        "启动按钮展示页"
    );

    let builder = LaunchBuilder::new()
        .with_context(config.clone())
        .with_context(theme);

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    let builder = builder.with_cfg(desktop_config(&config.window));

    builder.launch(app::App);
}

#[cfg(not(feature = "web"))]
fn load_config() -> DemoConfig {
    DemoConfig::load("config.json")
}

/// web 端没有文件系统，使用编译期嵌入的配置
#[cfg(feature = "web")]
fn load_config() -> DemoConfig {
    DemoConfig::from_json_or_default(include_str!("../config.json"))
}

#[cfg(not(feature = "web"))]
fn init_tracing(config: &DemoConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        .with_target(false)
        .init();
}

/// web 端不安装 fmt subscriber（浏览器中没有 stdout）
#[cfg(feature = "web")]
fn init_tracing(_config: &DemoConfig) {}

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn desktop_config(window: &config::WindowConfig) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    Config::new().with_window(
        WindowBuilder::new()
            .with_title(window.title.clone())
            .with_inner_size(LogicalSize::new(window.width, window.height)),
    )
}
