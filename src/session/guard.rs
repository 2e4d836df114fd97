//! The session gate: a decorator that only lets a view render when a session
//! credential is stored, and otherwise redirects to the login route.

use super::store::SessionStore;
use crate::paths;
use std::marker::PhantomData;

/// Anything that renders an output from a set of props.
pub trait View {
    type Props;
    type Output;

    fn render(&self, props: Self::Props) -> Self::Output;
}

/// Client-side navigation.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Adapts a closure into a [`View`].
pub struct ViewFn<F, P> {
    render: F,
    _props: PhantomData<fn(P)>,
}

pub fn view_fn<F, P, O>(render: F) -> ViewFn<F, P>
where
    F: Fn(P) -> O,
{
    ViewFn {
        render,
        _props: PhantomData,
    }
}

impl<F, P, O> View for ViewFn<F, P>
where
    F: Fn(P) -> O,
{
    type Props = P;
    type Output = O;

    fn render(&self, props: P) -> O {
        (self.render)(props)
    }
}

/// Result of one credential check.
///
/// `Unknown` is the state before the store has been read; the other two are
/// terminal for the mount that produced them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GuardState::Unknown)
    }
}

/// What a guarded view produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate<O> {
    /// Neutral placeholder shown while the redirect takes effect.
    Placeholder,
    Allowed(O),
}

/// Reads the store once and redirects when no credential is present.
///
/// Absence of a credential is the ordinary logged-out path, not an error.
pub fn check_session<S, N>(store: &S, navigator: &N, login_path: &str) -> GuardState
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if store.get().is_some() {
        GuardState::Authenticated
    } else {
        log::debug!("no session credential, redirecting to {login_path}");
        navigator.navigate(login_path);
        GuardState::Unauthenticated
    }
}

/// A view wrapped by [`guard`].
pub struct Guarded<V, S, N> {
    view: V,
    store: S,
    navigator: N,
    login_path: String,
}

/// Wraps `view` so it only renders while `store` holds a credential.
///
/// The result is itself a [`View`] with the same props, so guards compose over
/// any renderable.
pub fn guard<V, S, N>(view: V, store: S, navigator: N) -> Guarded<V, S, N>
where
    V: View,
    S: SessionStore,
    N: Navigator,
{
    Guarded {
        view,
        store,
        navigator,
        login_path: paths::LOGIN.to_string(),
    }
}

impl<V, S, N> Guarded<V, S, N> {
    /// Overrides the redirect target (defaults to `/login`).
    #[must_use]
    pub fn redirect_to(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }
}

impl<V, S, N> Guarded<V, S, N>
where
    S: SessionStore,
    N: Navigator,
{
    /// Runs the credential check for a fresh mount.
    pub fn mount(&self) -> GuardState {
        check_session(&self.store, &self.navigator, &self.login_path)
    }
}

impl<V, S, N> View for Guarded<V, S, N>
where
    V: View,
    S: SessionStore,
    N: Navigator,
{
    type Props = V::Props;
    type Output = Gate<V::Output>;

    fn render(&self, props: V::Props) -> Gate<V::Output> {
        match self.mount() {
            GuardState::Authenticated => Gate::Allowed(self.view.render(props)),
            GuardState::Unknown | GuardState::Unauthenticated => Gate::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, SessionCredential};
    use std::cell::{Cell, RefCell};

    fn signed_in_store() -> MemorySessionStore {
        MemorySessionStore::with_credential(SessionCredential::new("abc.def.ghi").expect("token"))
    }

    #[test]
    fn missing_credential_redirects_without_rendering() {
        let rendered = Cell::new(0);
        let visited = RefCell::new(Vec::new());
        let store = MemorySessionStore::new();

        let guarded = guard(
            view_fn(|name: &str| {
                rendered.set(rendered.get() + 1);
                format!("hello {name}")
            }),
            &store,
            |path: &str| visited.borrow_mut().push(path.to_string()),
        );

        assert_eq!(guarded.render("recruiter"), Gate::Placeholder);
        assert_eq!(rendered.get(), 0);
        assert_eq!(*visited.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn stored_credential_renders_with_props_unchanged() {
        let visited = RefCell::new(Vec::new());
        let store = signed_in_store();

        let guarded = guard(
            view_fn(|props: (u32, String)| props),
            &store,
            |path: &str| visited.borrow_mut().push(path.to_string()),
        );

        assert_eq!(
            guarded.render((7, "jobs".to_string())),
            Gate::Allowed((7, "jobs".to_string()))
        );
        assert!(visited.borrow().is_empty());
    }

    #[test]
    fn each_render_is_a_fresh_mount() {
        let visited = RefCell::new(Vec::new());
        let store = signed_in_store();
        let guarded = guard(view_fn(|()| "dashboard"), &store, |path: &str| {
            visited.borrow_mut().push(path.to_string());
        });

        assert_eq!(guarded.render(()), Gate::Allowed("dashboard"));
        store.clear();
        assert_eq!(guarded.render(()), Gate::Placeholder);
        assert_eq!(visited.borrow().len(), 1);
    }

    #[test]
    fn redirect_target_can_be_overridden() {
        let visited = RefCell::new(Vec::new());
        let store = MemorySessionStore::new();
        let guarded = guard(view_fn(|()| ()), &store, |path: &str| {
            visited.borrow_mut().push(path.to_string());
        })
        .redirect_to("/signin");

        assert_eq!(guarded.mount(), GuardState::Unauthenticated);
        assert_eq!(*visited.borrow(), vec!["/signin".to_string()]);
    }

    #[test]
    fn guards_compose() {
        let store = signed_in_store();
        let noop = |_: &str| {};
        let inner = guard(view_fn(|n: u8| n * 2), &store, noop);
        let outer = guard(inner, &store, noop);

        assert_eq!(outer.render(21), Gate::Allowed(Gate::Allowed(42)));
    }

    #[test]
    fn only_unknown_is_non_terminal() {
        assert!(!GuardState::default().is_terminal());
        assert!(GuardState::Authenticated.is_terminal());
        assert!(GuardState::Unauthenticated.is_terminal());
    }
}
