use super::describe;
use crate::auth::Federation;
use crate::auth::Identity;
use crate::auth::Profile;
use crate::auth::Rejection;
use crate::auth::RemoteConfig;
use js_sys::Promise;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

// Firebase compat SDK, loaded by the page as the global `firebase`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = firebase, js_name = initializeApp, catch)]
    fn initialize_app(config: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth, catch)]
    fn auth() -> Result<Auth, JsValue>;

    #[derive(Debug, Clone)]
    type Auth;

    #[wasm_bindgen(method, js_name = signInWithEmailAndPassword)]
    fn sign_in_with_email_and_password(this: &Auth, email: &str, password: &str) -> Promise;

    #[wasm_bindgen(method, js_name = createUserWithEmailAndPassword)]
    fn create_user_with_email_and_password(this: &Auth, email: &str, password: &str) -> Promise;

    #[wasm_bindgen(method, js_name = signInWithPopup)]
    fn sign_in_with_popup(this: &Auth, provider: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &Auth) -> Promise;

    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &Auth, observer: &Closure<dyn FnMut(JsValue)>) -> JsValue;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type GoogleAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"], catch)]
    fn new() -> Result<GoogleAuthProvider, JsValue>;
}

fn reject(e: JsValue) -> Rejection {
    Rejection(describe(&e))
}

fn field(object: &JsValue, name: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_string())
}

/// Profile fields of a Firebase `User`, or `None` for null.
fn profile(user: &JsValue) -> Option<Profile> {
    if user.is_null() || user.is_undefined() {
        return None;
    }
    Some(Profile {
        uid: field(user, "uid")?,
        display_name: field(user, "displayName"),
        email: field(user, "email"),
        photo_url: field(user, "photoURL"),
    })
}

/// Profile of the user inside a resolved `UserCredential`.
fn credential(resolved: JsValue) -> Result<Profile, Rejection> {
    Reflect::get(&resolved, &JsValue::from_str("user"))
        .ok()
        .as_ref()
        .and_then(profile)
        .ok_or_else(|| Rejection("provider returned no user".into()))
}

/// [`Identity`] over `firebase.auth()`.
#[derive(Debug, Clone)]
pub struct Firebase(Auth);

impl Firebase {
    /// Initializes the default app. Fails when the SDK is not loaded or
    /// rejects the config.
    pub fn connect(config: &RemoteConfig) -> Result<Self, Rejection> {
        let json = serde_json::to_string(config).map_err(|e| Rejection(e.to_string()))?;
        let options = js_sys::JSON::parse(&json).map_err(reject)?;
        initialize_app(&options).map_err(reject)?;
        log::info!("firebase initialized for {}", config.project_id);
        auth().map(Self).map_err(reject)
    }
    async fn settle(promise: Promise) -> Result<JsValue, Rejection> {
        JsFuture::from(promise).await.map_err(reject)
    }
}

impl Identity for Firebase {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, Rejection> {
        credential(Self::settle(self.0.sign_in_with_email_and_password(email, password)).await?)
    }
    async fn sign_up(&self, email: &str, password: &str) -> Result<Profile, Rejection> {
        credential(Self::settle(self.0.create_user_with_email_and_password(email, password)).await?)
    }
    async fn sign_in_federated(&self, federation: Federation) -> Result<Profile, Rejection> {
        let provider: JsValue = match federation {
            Federation::Google => GoogleAuthProvider::new().map_err(reject)?.into(),
        };
        credential(Self::settle(self.0.sign_in_with_popup(&provider)).await?)
    }
    async fn sign_out(&self) -> Result<(), Rejection> {
        Self::settle(self.0.sign_out()).await.map(|_| ())
    }
    fn subscribe(&self, listener: Box<dyn Fn(Option<Profile>)>) {
        let observer = Closure::wrap(Box::new(move |user: JsValue| listener(profile(&user)))
            as Box<dyn FnMut(JsValue)>);
        self.0.on_auth_state_changed(&observer);
        observer.forget();
    }
}
