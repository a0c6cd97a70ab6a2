use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

pub const GLOBAL_STYLE_ID: &str = "site-global-styles";

const GLOBAL_KEYFRAMES: &str = r#"
    @keyframes floatArrow {
        0%, 100% { transform: translateX(0); }
        50% { transform: translateX(8px); }
    }
    @keyframes floatIcon {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes gradientShift {
        0% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
        100% { background-position: 0% 50%; }
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    .animate-gradient {
        background-size: 200% 200%;
        animation: gradientShift 6s ease infinite;
    }
"#;

/// One-shot registration flag for a process-wide resource.
pub struct StyleRegistry {
    installed: AtomicBool,
}

impl StyleRegistry {
    pub const fn new() -> Self {
        Self {
            installed: AtomicBool::new(false),
        }
    }

    /// True for exactly one caller.
    pub fn claim(&self) -> bool {
        !self.installed.swap(true, Ordering::SeqCst)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_STYLES: StyleRegistry = StyleRegistry::new();

/// Injects the shared keyframes once, at startup.
pub fn install_global_styles() {
    if !GLOBAL_STYLES.claim() {
        return;
    }
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("No document, skipping global styles");
        return;
    };
    if document.get_element_by_id(GLOBAL_STYLE_ID).is_some() {
        debug!("Global styles already present");
        return;
    }

    let Some(head) = document.head() else {
        warn!("Document has no <head>, skipping global styles");
        return;
    };
    let style = match document
        .create_element("style")
        .map(|el| el.unchecked_into::<HtmlElement>())
    {
        Ok(style) => style,
        Err(err) => {
            warn!("Could not create <style>: {:?}", err);
            return;
        }
    };
    style.set_id(GLOBAL_STYLE_ID);
    style.set_text_content(Some(GLOBAL_KEYFRAMES));
    if let Err(err) = head.append_child(&style) {
        warn!("Could not append global styles: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl StyleRegistry {
        fn is_installed(&self) -> bool {
            self.installed.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_claim_succeeds_once() {
        let registry = StyleRegistry::new();
        assert!(!registry.is_installed());
        assert!(registry.claim());
        assert!(registry.is_installed());
        assert!(!registry.claim());
        assert!(!registry.claim());
    }

    #[test]
    fn test_keyframes_cover_shared_animations() {
        for name in ["floatArrow", "floatIcon", "fadeInUp", "gradientShift", "spin"] {
            assert!(
                GLOBAL_KEYFRAMES.contains(&format!("@keyframes {name}")),
                "missing {name}"
            );
        }
    }
}
