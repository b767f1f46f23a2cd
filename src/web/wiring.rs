use super::Portal;
use super::now;
use crate::LOADER_BOOT;
use crate::LOADER_DELAY;
use crate::LOADER_FADE;
use crate::LOADER_FALLBACK;
use crate::LOADER_REMOVE;
use crate::TICK_INTERVAL;
use crate::ui::Action;
use crate::ui::Intent;
use crate::ui::PageError;
use crate::ui::Target;
use crate::ui::Toggle;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use web_sys::Event;
use web_sys::HtmlElement;
use web_sys::MouseEvent;

const FORM: &str = "auth-form";
const LOADER: &str = "page-loader";
/// Elements a click resolves to, nearest first.
const CONTROLS: &str = "button, a, #auth-close";

fn fail(e: JsValue) -> PageError {
    PageError(super::describe(&e))
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Run `f` once after `delay`.
fn later<F: FnOnce() + 'static>(delay: Duration, f: F) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis(delay))
    {
        log::warn!("setTimeout failed: {}", super::describe(&e));
    }
}

fn dispatch(portal: &Rc<Portal>, action: Action) {
    let portal = portal.clone();
    wasm_bindgen_futures::spawn_local(async move { portal.dispatch(action).await });
}

/// What the delegated listener knows about a click.
fn target(event: &Event) -> Option<Target> {
    let clicked = event.target()?.dyn_into::<Element>().ok()?;
    if clicked.id() == "auth-modal" {
        return Some(Target::id("auth-modal"));
    }
    let control = clicked.closest(CONTROLS).ok()??;
    let toggle = [Toggle::Term, Toggle::Window]
        .into_iter()
        .find(|t| matches!(control.closest(&format!(".{}", t.group())), Ok(Some(_))))
        .map(|t| (t, control.get_attribute(t.attribute())));
    Some(Target {
        id: control.id(),
        classes: control
            .class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        toggle,
    })
}

/// Attach the page's listeners and start the countdown.
pub(super) fn install(portal: Rc<Portal>) -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError("no window".into()))?;
    let document = portal.page().inner().clone();

    let clicks = {
        let portal = portal.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(action) = target(&event).as_ref().and_then(Action::resolve) else {
                return;
            };
            event.prevent_default();
            dispatch(&portal, action);
        }) as Box<dyn FnMut(Event)>)
    };
    document
        .add_event_listener_with_callback("click", clicks.as_ref().unchecked_ref())
        .map_err(fail)?;
    clicks.forget();

    if let Some(form) = document.get_element_by_id(FORM) {
        let portal = portal.clone();
        let submit = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            dispatch(&portal, Action::Submit(Intent::Login));
        }) as Box<dyn FnMut(Event)>);
        form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref())
            .map_err(fail)?;
        submit.forget();
    }

    let tick = Closure::wrap(Box::new(move || {
        if let Err(e) = portal.tick(&now()) {
            log::warn!("countdown tick failed: {}", e);
        }
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            millis(TICK_INTERVAL),
        )
        .map_err(fail)?;
    tick.forget();

    pointer(&document)
}

/// Publish the pointer position as `--mx`/`--my` percentages for the
/// button glow styles.
fn pointer(document: &web_sys::Document) -> Result<(), PageError> {
    let Some(root) = document
        .document_element()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let moves = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|w| w.as_f64());
        let height = window.inner_height().ok().and_then(|h| h.as_f64());
        let (Some(width), Some(height)) = (width, height) else {
            return;
        };
        let x = f64::from(event.client_x()) / width * 100.0;
        let y = f64::from(event.client_y()) / height * 100.0;
        let style = root.style();
        let _ = style.set_property("--mx", &format!("{}%", x));
        let _ = style.set_property("--my", &format!("{}%", y));
    }) as Box<dyn FnMut(MouseEvent)>);
    document
        .add_event_listener_with_callback("mousemove", moves.as_ref().unchecked_ref())
        .map_err(fail)?;
    moves.forget();
    Ok(())
}

/// Fade the page loader once the page has loaded and the portal has
/// booted, or after a fallback delay.
pub fn dismiss_loader() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let complete = window
        .document()
        .is_some_and(|d| d.ready_state() == "complete");
    if complete {
        later(LOADER_DELAY, hide);
    } else {
        let loaded = Closure::once_into_js(|| later(LOADER_DELAY, hide));
        if let Err(e) = window.add_event_listener_with_callback("load", loaded.unchecked_ref()) {
            log::warn!("cannot watch load event: {}", super::describe(&e));
        }
    }
    later(LOADER_BOOT, hide);
    later(LOADER_FALLBACK, hide);
}

fn hide() {
    let Some(loader) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(LOADER))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = loader.style();
    let faded = style
        .set_property("transition", &format!("opacity {}ms ease", LOADER_FADE.as_millis()))
        .and_then(|_| style.set_property("opacity", "0"))
        .and_then(|_| style.set_property("pointer-events", "none"));
    if let Err(e) = faded {
        log::warn!("loader fade failed: {}", super::describe(&e));
    }
    later(LOADER_REMOVE, move || loader.remove());
}
