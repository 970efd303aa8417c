use std::{fmt::Write as _, panic::PanicHookInfo, sync::Mutex};

use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

/// Reserved up front so that reporting a panic does not need to allocate.
const PANIC_MESSAGE_CAPACITY: usize = 16384;
static PANIC_MESSAGE: Mutex<String> = Mutex::new(String::new());

const ALERT_HEADER: &str = "==[ Panic! ]==\n\
    A catastrophic error occurred and the simulation cannot continue. \
    Opening the console may reveal additional details.\n\n";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = alert)]
    fn alert(message: &str) -> Result<(), JsValue>;
}

pub(crate) fn init_panic_handler() {
    if let Ok(mut message) = PANIC_MESSAGE.lock() {
        message.reserve(PANIC_MESSAGE_CAPACITY);
    }
    std::panic::set_hook(Box::new(handle_panic));
}

fn handle_panic(info: &PanicHookInfo<'_>) {
    let mut message = match PANIC_MESSAGE.lock() {
        Ok(l) => l,
        Err(p) => p.into_inner(),
    };
    message.clear();
    message.push_str(ALERT_HEADER);
    let details_start = message.len();
    write_panic_info(&mut message, info);

    web_sys::console::error_1(&JsValue::from_str(&message[details_start..]));

    if let Err(e) = alert(&message) {
        web_sys::console::error_2(&JsValue::from_str("failed to display panic alert:"), &e);
    }
}

fn write_panic_info(message: &mut String, info: &PanicHookInfo<'_>) {
    message.push_str("panicked at ");
    match info.location() {
        Some(l) => {
            let _ = write!(message, "{}:{}:{}", l.file(), l.line(), l.column());
        }
        None => message.push('?'),
    }

    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        message.push_str(":\n");
        message.push_str(s);
    } else if let Some(s) = payload.downcast_ref::<String>() {
        message.push_str(":\n");
        message.push_str(s);
    }
}
