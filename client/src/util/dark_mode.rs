//! Theme application on the document root.
//!
//! The session store owns the dark-mode flag and its persistence; this module
//! only mirrors the flag onto `<html>` as the `dark` class plus a
//! `data-theme` attribute so stylesheets can key off either.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only behavior; SSR paths no-op to keep server rendering
//! deterministic, and the shell re-applies the theme after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const DARK_CLASS: &str = "dark";

/// `data-theme` value for the flag.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply or remove the dark theme on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
