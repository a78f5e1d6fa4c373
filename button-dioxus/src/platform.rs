//! 平台相关的小工具：异步等待与触感反馈。
//!
//! desktop 走 tokio，web 走浏览器的 `setTimeout` / `navigator.vibrate`。

use std::time::Duration;

/// 触感反馈时长（毫秒）
pub const HAPTIC_PULSE_MS: u32 = 10;

/// 异步等待
#[cfg(not(feature = "web"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// 异步等待
#[cfg(feature = "web")]
pub async fn sleep(duration: Duration) {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let millis = duration.as_millis() as f64;
    let promise = Promise::new(&mut |resolve, _reject| {
        let global = js_sys::global();
        let set_timeout = Reflect::get(&global, &JsValue::from_str("setTimeout"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        match set_timeout {
            Some(set_timeout) => {
                if let Err(e) = set_timeout.call2(&global, &resolve, &JsValue::from_f64(millis)) {
                    tracing::warn!(error = ?e, "setTimeout 调用失败");
                    let _ = resolve.call0(&JsValue::NULL);
                }
            }
            None => {
                tracing::warn!("setTimeout 不可用，立即完成");
                let _ = resolve.call0(&JsValue::NULL);
            }
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// 触发一次短振动
///
/// 平台不支持时静默跳过。
#[cfg(feature = "web")]
pub fn vibrate() {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let global = js_sys::global();
    let Ok(navigator) = Reflect::get(&global, &JsValue::from_str("navigator")) else {
        return;
    };
    let vibrate = Reflect::get(&navigator, &JsValue::from_str("vibrate"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());

    match vibrate {
        Some(vibrate) => {
            if let Err(e) = vibrate.call1(&navigator, &JsValue::from(HAPTIC_PULSE_MS)) {
                tracing::debug!(error = ?e, "振动请求失败");
            }
        }
        None => tracing::debug!("navigator.vibrate 不可用"),
    }
}

/// 触发一次短振动
///
/// 桌面端没有振动设备，只记录日志。
#[cfg(not(feature = "web"))]
pub fn vibrate() {
    tracing::debug!(pulse_ms = HAPTIC_PULSE_MS, "触感反馈（桌面端无振动设备）");
}
