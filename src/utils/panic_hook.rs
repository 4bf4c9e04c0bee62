use std::any::Any;
use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that forwards to the browser console and adds context
/// for panics caused by touching a disposed reactive owner.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = panic_message(panic_info.payload());
        if is_owner_disposal(&message) {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A dealer view was unmounted while a fetch for it was still running");
            log!("[PANIC] 2. A signal update ran after the view's cleanup");
        }
    }));
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed")
}

/// Call once from the hydrate/csr entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_extraction() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("boom"));
        let borrowed: Box<dyn Any + Send> = Box::new("static boom");
        let other: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(panic_message(&*owned), "boom");
        assert_eq!(panic_message(&*borrowed), "static boom");
        assert_eq!(panic_message(&*other), "Unknown panic");
    }

    #[test]
    fn test_owner_disposal_detection() {
        assert!(is_owner_disposal("tried to access OwnerDisposed(NodeId(3))"));
        assert!(!is_owner_disposal("connection pool disposed"));
        assert!(!is_owner_disposal("index out of bounds"));
    }
}
