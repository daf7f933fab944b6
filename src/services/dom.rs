//! DOM access capabilities for the behavior components.
//!
//! Components never touch `web_sys` directly; they go through the
//! [`ElementRegistry`] and [`ElementHandle`] traits so the state machines can
//! be driven against a fake element tree in unit tests. The `web` module
//! binds the traits to the live document on wasm targets.

/// A handle to one element of the host page.
pub trait ElementHandle: Clone {
    /// Replace the element's content with plain text.
    fn set_text(&self, text: &str);

    /// Replace the element's content with pre-sanitized markup.
    fn set_html(&self, html: &str);

    fn add_class(&self, name: &str);

    fn remove_class(&self, name: &str);

    /// Toggle `name` and report whether the element now carries it.
    fn toggle_class(&self, name: &str) -> bool;

    fn has_class(&self, name: &str) -> bool;

    /// Whether `target` is this element or one of its descendants.
    fn contains(&self, target: &Self) -> bool;

    fn set_attribute(&self, name: &str, value: &str);

    /// Set the inline `display` style. Used to show or hide the approval
    /// form.
    fn set_display(&self, value: &str);

    /// Present the element through the host page's modal mechanism.
    fn show_modal(&self);
}

/// Element lookup over the host page.
pub trait ElementRegistry {
    type Handle: ElementHandle;

    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    fn body(&self) -> Option<Self::Handle>;
}

#[cfg(target_arch = "wasm32")]
pub use web::{WebDom, WebElement};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{ElementHandle, ElementRegistry};

    #[wasm_bindgen]
    extern "C" {
        /// Bootstrap's modal controller, supplied by the host page bundle.
        #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
        type BootstrapModal;

        #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Modal")]
        fn new(target: &web_sys::Element) -> BootstrapModal;

        #[wasm_bindgen(method)]
        fn show(this: &BootstrapModal);
    }

    /// Registry over the live document.
    pub struct WebDom {
        document: web_sys::Document,
    }

    impl WebDom {
        /// Returns `None` outside a browsing context.
        pub fn new() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Some(Self { document })
        }
    }

    impl ElementRegistry for WebDom {
        type Handle = WebElement;

        fn element_by_id(&self, id: &str) -> Option<WebElement> {
            self.document.get_element_by_id(id).map(WebElement::from)
        }

        fn body(&self) -> Option<WebElement> {
            self.document
                .body()
                .map(|body| WebElement::from(web_sys::Element::from(body)))
        }
    }

    /// Handle over a live DOM element.
    #[derive(Clone)]
    pub struct WebElement {
        inner: web_sys::Element,
    }

    impl WebElement {
        pub(crate) fn raw(&self) -> &web_sys::Element {
            &self.inner
        }
    }

    impl From<web_sys::Element> for WebElement {
        fn from(inner: web_sys::Element) -> Self {
            Self { inner }
        }
    }

    impl ElementHandle for WebElement {
        fn set_text(&self, text: &str) {
            self.inner.set_text_content(Some(text));
        }

        fn set_html(&self, html: &str) {
            self.inner.set_inner_html(html);
        }

        fn add_class(&self, name: &str) {
            let _ = self.inner.class_list().add_1(name);
        }

        fn remove_class(&self, name: &str) {
            let _ = self.inner.class_list().remove_1(name);
        }

        fn toggle_class(&self, name: &str) -> bool {
            self.inner.class_list().toggle(name).unwrap_or(false)
        }

        fn has_class(&self, name: &str) -> bool {
            self.inner.class_list().contains(name)
        }

        fn contains(&self, target: &Self) -> bool {
            self.inner.contains(Some(target.inner.as_ref()))
        }

        fn set_attribute(&self, name: &str, value: &str) {
            let _ = self.inner.set_attribute(name, value);
        }

        fn set_display(&self, value: &str) {
            if let Some(element) = self.inner.dyn_ref::<web_sys::HtmlElement>() {
                let _ = element.style().set_property("display", value);
            }
        }

        fn show_modal(&self) {
            BootstrapModal::new(&self.inner).show();
        }
    }
}
