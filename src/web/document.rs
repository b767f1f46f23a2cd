use super::describe;
use crate::ui::Page;
use crate::ui::PageError;
use crate::ui::ProfileView;
use crate::ui::Slot;
use crate::ui::Toggle;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;
use web_sys::HtmlButtonElement;
use web_sys::HtmlElement;
use web_sys::HtmlImageElement;
use web_sys::HtmlInputElement;

const MODAL: &str = "auth-modal";
const PANEL: &str = "profile-panel";
const PANEL_NAME: &str = "profile-name";
const PANEL_CREDITS: &str = "profile-credits";
const PANEL_AVATAR: &str = "profile-avatar";
const LOCKED_CONTROLS: [&str; 3] = ["btn-login", "btn-register", "btn-google"];
const HIDDEN: &str = "hidden";
const ACTIVE: &str = "active";

fn fail(e: JsValue) -> PageError {
    PageError(describe(&e))
}

/// [`Page`] over the live DOM. Absent elements are skipped silently.
#[derive(Debug, Clone)]
pub struct Document(web_sys::Document);

impl Document {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }
    pub fn inner(&self) -> &web_sys::Document {
        &self.0
    }
    fn element(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }
    fn typed<T: JsCast>(&self, id: &str) -> Option<T> {
        self.element(id).and_then(|e| e.dyn_into::<T>().ok())
    }
    fn text(&self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }
}

impl Page for Document {
    fn fill(&self, slot: Slot, html: &str) -> Result<(), PageError> {
        if let Some(element) = self.element(slot.id()) {
            element.set_inner_html(html);
        }
        Ok(())
    }

    fn write(&self, slot: Slot, text: &str) -> Result<(), PageError> {
        self.text(slot.id(), text);
        Ok(())
    }

    fn read(&self, slot: Slot) -> Option<String> {
        let element = self.element(slot.id())?;
        match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => Some(input.value()),
            None => element.text_content(),
        }
    }

    fn modal(&self, open: bool) -> Result<(), PageError> {
        let Some(modal) = self.typed::<HtmlElement>(MODAL) else {
            return Ok(());
        };
        modal
            .style()
            .set_property("display", if open { "flex" } else { "none" })
            .map_err(fail)?;
        modal
            .set_attribute("aria-hidden", if open { "false" } else { "true" })
            .map_err(fail)?;
        if open {
            if let Some(input) = self.typed::<HtmlElement>(Slot::Username.id()) {
                input.focus().map_err(fail)?;
            }
        }
        Ok(())
    }

    fn profile(&self, view: Option<&ProfileView>) -> Result<(), PageError> {
        let Some(panel) = self.element(PANEL) else {
            return Ok(());
        };
        match view {
            None => panel.class_list().add_1(HIDDEN).map_err(fail),
            Some(view) => {
                self.text(PANEL_NAME, &view.name);
                self.text(PANEL_CREDITS, &view.credits);
                if let Some(avatar) = self.typed::<HtmlImageElement>(PANEL_AVATAR) {
                    avatar.set_src(&view.avatar);
                }
                panel.class_list().remove_1(HIDDEN).map_err(fail)
            }
        }
    }

    fn lock(&self, locked: bool) {
        LOCKED_CONTROLS
            .iter()
            .filter_map(|id| self.typed::<HtmlButtonElement>(id))
            .for_each(|button| button.set_disabled(locked));
    }

    fn activate(&self, toggle: Toggle, key: &str) -> Result<(), PageError> {
        let selector = format!(".{} [{}]", toggle.group(), toggle.attribute());
        let buttons = self.0.query_selector_all(&selector).map_err(fail)?;
        for i in 0..buttons.length() {
            let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let selected = button.get_attribute(toggle.attribute()).as_deref() == Some(key);
            button
                .class_list()
                .toggle_with_force(ACTIVE, selected)
                .map_err(fail)?;
        }
        Ok(())
    }

    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show notice: {}", message);
        }
    }

    async fn copy(&self, text: &str) -> Result<(), PageError> {
        let window = web_sys::window().ok_or_else(|| PageError("no window".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise).await.map_err(fail)?;
        Ok(())
    }
}
