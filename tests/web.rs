#![cfg(target_arch = "wasm32")]

use hcn_portal::auth::AuthProvider;
use hcn_portal::auth::LocalProvider;
use hcn_portal::store::SessionStore;
use hcn_portal::store::Storage;
use hcn_portal::ui::Page;
use hcn_portal::ui::ProfileView;
use hcn_portal::ui::Slot;
use hcn_portal::ui::Toggle;
use hcn_portal::web::Document;
use hcn_portal::web::LocalStorage;
use hcn_portal::web::dismiss_loader;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn dom() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document")
}

fn mount(html: &str) {
    let body = dom().body().expect("body");
    let host = dom().create_element("div").expect("div");
    host.set_inner_html(html);
    body.append_child(&host).expect("append");
}

async fn sleep(millis: i32) {
    let wait = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(resolve.unchecked_ref(), millis)
            .expect("setTimeout");
    });
    JsFuture::from(wait).await.expect("timer");
}

fn storage() -> LocalStorage {
    let storage = LocalStorage::open().expect("localStorage");
    storage.remove(hcn_portal::USERS_KEY).expect("clear users");
    storage.remove(hcn_portal::CURRENT_KEY).expect("clear session");
    storage
}

#[wasm_bindgen_test]
fn local_storage_keeps_values() {
    let storage = storage();
    storage.set("hcn_check", "1").expect("set");
    assert_eq!(storage.get("hcn_check"), Ok(Some("1".to_string())));
    storage.remove("hcn_check").expect("remove");
    assert_eq!(storage.get("hcn_check"), Ok(None));
}

#[wasm_bindgen_test]
async fn local_accounts_survive_a_new_store() {
    let provider = LocalProvider::new(SessionStore::new(storage()));
    let user = provider.register("steve", "diamonds").await.expect("register");
    let reopened = LocalProvider::new(SessionStore::new(storage_without_reset()));
    assert_eq!(reopened.current(), Some(user));
    let raw = storage_without_reset()
        .get(hcn_portal::USERS_KEY)
        .expect("read")
        .expect("registry");
    assert!(!raw.contains("diamonds"));
}

fn storage_without_reset() -> LocalStorage {
    LocalStorage::open().expect("localStorage")
}

#[wasm_bindgen_test]
fn missing_elements_are_skipped() {
    let page = Document::new(dom());
    assert_eq!(page.fill(Slot::RankGrid, "<p>ranks</p>"), Ok(()));
    assert_eq!(page.read(Slot::Address), None);
    assert_eq!(page.modal(true), Ok(()));
    assert_eq!(page.profile(None), Ok(()));
}

#[wasm_bindgen_test]
fn fills_writes_and_reads() {
    mount(r#"<section id="admin-grid"></section><span id="event-timer"></span><input id="auth-username" value="steve">"#);
    let page = Document::new(dom());
    page.fill(Slot::AdminGrid, "<div class=\"admin-card\">Tanber</div>")
        .expect("fill");
    page.write(Slot::Timer, "Event is live!").expect("write");
    let grid = dom().get_element_by_id("admin-grid").expect("grid");
    assert!(grid.inner_html().contains("admin-card"));
    assert_eq!(page.read(Slot::Timer), Some("Event is live!".to_string()));
    assert_eq!(page.read(Slot::Username), Some("steve".to_string()));
}

#[wasm_bindgen_test]
fn activates_one_toggle() {
    mount(r#"<div class="ranking-header"><button data-mode="overall" class="active">Overall</button><button data-mode="weekly">Weekly</button></div>"#);
    let page = Document::new(dom());
    page.activate(Toggle::Window, "weekly").expect("activate");
    let active = dom()
        .query_selector(".ranking-header .active")
        .expect("query")
        .expect("one active");
    assert_eq!(active.get_attribute("data-mode"), Some("weekly".to_string()));
}

#[wasm_bindgen_test]
fn profile_panel_follows_session() {
    mount(r#"<div id="profile-panel" class="hidden"><span id="profile-name"></span><span id="profile-credits"></span><img id="profile-avatar"></div>"#);
    let page = Document::new(dom());
    let view = ProfileView {
        name: "steve".into(),
        credits: "Credits: 50".into(),
        avatar: "assets/myskin.png".into(),
    };
    page.profile(Some(&view)).expect("show");
    let panel = dom().get_element_by_id("profile-panel").expect("panel");
    assert!(!panel.class_list().contains("hidden"));
    let credits = dom().get_element_by_id("profile-credits").expect("credits");
    assert_eq!(credits.text_content(), Some("Credits: 50".to_string()));
    page.profile(None).expect("hide");
    assert!(panel.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
async fn loader_is_removed_without_a_later_load_event() {
    mount(r#"<div id="page-loader">loading</div>"#);
    dismiss_loader();
    sleep(1500).await;
    assert!(dom().get_element_by_id("page-loader").is_none());
}
