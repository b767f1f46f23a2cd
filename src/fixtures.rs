//! Test doubles for the identity service and the page surface.
use crate::auth::Federation;
use crate::auth::Identity;
use crate::auth::Profile;
use crate::auth::Rejection;
use crate::ui::Page;
use crate::ui::PageError;
use crate::ui::ProfileView;
use crate::ui::Slot;
use crate::ui::Toggle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;
use std::task::Poll;
use std::task::Waker;

/// Manually opened barrier for holding provider calls in flight.
#[derive(Clone, Default)]
pub struct Gate(Rc<RefCell<(bool, Option<Waker>)>>);

impl Gate {
    pub fn open(&self) {
        let waker = {
            let mut inner = self.0.borrow_mut();
            inner.0 = true;
            inner.1.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
    pub async fn wait(&self) {
        futures::future::poll_fn(|cx| {
            let mut inner = self.0.borrow_mut();
            if inner.0 {
                Poll::Ready(())
            } else {
                inner.1 = Some(cx.waker().clone());
                Poll::Pending
            }
        })
        .await
    }
}

#[derive(Default)]
struct Script {
    calls: Vec<String>,
    rejection: Option<String>,
    profile: Option<Profile>,
    gate: Option<Gate>,
    listeners: Vec<Rc<dyn Fn(Option<Profile>)>>,
}

/// Identity service answering from a script. Clones share the script.
#[derive(Clone, Default)]
pub struct Scripted(Rc<RefCell<Script>>);

impl Scripted {
    /// Fail every following call with `message`.
    pub fn reject(&self, message: &str) {
        self.0.borrow_mut().rejection = Some(message.to_string());
    }
    /// Answer sign-ins with `profile` instead of one derived from the email.
    pub fn profile(&self, profile: Profile) {
        self.0.borrow_mut().profile = Some(profile);
    }
    /// Keep calls pending until `gate` opens.
    pub fn hold(&self, gate: Gate) {
        self.0.borrow_mut().gate = Some(gate);
    }
    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }
    /// Deliver an auth-state change to every subscriber.
    pub fn emit(&self, profile: Option<Profile>) {
        let listeners = self.0.borrow().listeners.clone();
        for listener in listeners {
            listener(profile.clone());
        }
    }

    async fn answer(&self, call: String, email: Option<&str>) -> Result<Profile, Rejection> {
        let gate = {
            let mut script = self.0.borrow_mut();
            script.calls.push(call);
            script.gate.clone()
        };
        if let Some(gate) = gate {
            gate.wait().await;
        }
        let script = self.0.borrow();
        if let Some(ref message) = script.rejection {
            return Err(Rejection(message.clone()));
        }
        Ok(script.profile.clone().unwrap_or_else(|| Profile {
            uid: format!("uid-{}", email.unwrap_or("federated")),
            email: email.map(str::to_string),
            ..Profile::default()
        }))
    }
}

impl Identity for Scripted {
    async fn sign_in(&self, email: &str, _: &str) -> Result<Profile, Rejection> {
        self.answer(format!("sign_in {}", email), Some(email)).await
    }
    async fn sign_up(&self, email: &str, _: &str) -> Result<Profile, Rejection> {
        self.answer(format!("sign_up {}", email), Some(email)).await
    }
    async fn sign_in_federated(&self, federation: Federation) -> Result<Profile, Rejection> {
        self.answer(format!("sign_in_federated {}", federation), None)
            .await
    }
    async fn sign_out(&self) -> Result<(), Rejection> {
        self.answer("sign_out".to_string(), None).await.map(|_| ())
    }
    fn subscribe(&self, listener: Box<dyn Fn(Option<Profile>)>) {
        self.0.borrow_mut().listeners.push(Rc::from(listener));
    }
}

#[derive(Default)]
struct Surface {
    filled: HashMap<Slot, String>,
    written: HashMap<Slot, String>,
    inputs: HashMap<Slot, String>,
    active: HashMap<Toggle, String>,
    broken: HashSet<Slot>,
    modal: bool,
    locked: bool,
    profile: Option<ProfileView>,
    notices: Vec<String>,
    clipboard: Option<String>,
    clipboard_broken: bool,
}

/// Page that records what the controller did to it.
#[derive(Default)]
pub struct Recorder(RefCell<Surface>);

impl Recorder {
    pub fn type_in(&self, slot: Slot, text: &str) {
        self.0.borrow_mut().inputs.insert(slot, text.to_string());
    }
    /// Make every write to `slot` fail.
    pub fn break_slot(&self, slot: Slot) {
        self.0.borrow_mut().broken.insert(slot);
    }
    pub fn break_clipboard(&self) {
        self.0.borrow_mut().clipboard_broken = true;
    }
    pub fn filled(&self, slot: Slot) -> Option<String> {
        self.0.borrow().filled.get(&slot).cloned()
    }
    pub fn written(&self, slot: Slot) -> Option<String> {
        self.0.borrow().written.get(&slot).cloned()
    }
    pub fn active(&self, toggle: Toggle) -> Option<String> {
        self.0.borrow().active.get(&toggle).cloned()
    }
    pub fn modal_open(&self) -> bool {
        self.0.borrow().modal
    }
    pub fn locked(&self) -> bool {
        self.0.borrow().locked
    }
    pub fn profile_shown(&self) -> Option<ProfileView> {
        self.0.borrow().profile.clone()
    }
    pub fn last_notice(&self) -> Option<String> {
        self.0.borrow().notices.last().cloned()
    }
    pub fn clipboard(&self) -> Option<String> {
        self.0.borrow().clipboard.clone()
    }

    fn check(&self, slot: Slot) -> Result<(), PageError> {
        match self.0.borrow().broken.contains(&slot) {
            true => Err(PageError(format!("#{} rejected the update", slot.id()))),
            false => Ok(()),
        }
    }
}

impl Page for Recorder {
    fn fill(&self, slot: Slot, html: &str) -> Result<(), PageError> {
        self.check(slot)?;
        self.0.borrow_mut().filled.insert(slot, html.to_string());
        Ok(())
    }
    fn write(&self, slot: Slot, text: &str) -> Result<(), PageError> {
        self.check(slot)?;
        self.0.borrow_mut().written.insert(slot, text.to_string());
        Ok(())
    }
    fn read(&self, slot: Slot) -> Option<String> {
        self.0.borrow().inputs.get(&slot).cloned()
    }
    fn modal(&self, open: bool) -> Result<(), PageError> {
        self.0.borrow_mut().modal = open;
        Ok(())
    }
    fn profile(&self, view: Option<&ProfileView>) -> Result<(), PageError> {
        self.0.borrow_mut().profile = view.cloned();
        Ok(())
    }
    fn lock(&self, locked: bool) {
        self.0.borrow_mut().locked = locked;
    }
    fn activate(&self, toggle: Toggle, key: &str) -> Result<(), PageError> {
        self.0.borrow_mut().active.insert(toggle, key.to_string());
        Ok(())
    }
    fn notify(&self, message: &str) {
        self.0.borrow_mut().notices.push(message.to_string());
    }
    async fn copy(&self, text: &str) -> Result<(), PageError> {
        let mut surface = self.0.borrow_mut();
        if surface.clipboard_broken {
            return Err(PageError("clipboard permission denied".to_string()));
        }
        surface.clipboard = Some(text.to_string());
        Ok(())
    }
}
