//! UI 组件

pub mod button;

pub use button::{Button, ButtonSlots, ConfiguredButton};
