use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::executor::block_on;
use hireboard::AppError;
use hireboard::paths;
use hireboard::session::{
    Gate, GuardState, Identity, IdentityProvider, MemorySessionStore, RejectReason,
    SessionCredential, SessionStore, Verification, View, end_session, establish_session, guard,
    interpret_login_response, verify_session, view_fn,
};
use std::cell::{Cell, RefCell};

fn token_for(user_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"userId":"{user_id}","exp":4102444800}}"#));
    format!("{header}.{payload}.signature")
}

struct FixedIdentity(Result<Identity, AppError>);

impl IdentityProvider for FixedIdentity {
    async fn fetch_identity(
        &self,
        _user_id: &str,
        _credential: &SessionCredential,
    ) -> Result<Identity, AppError> {
        self.0.clone()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct DashboardProps {
    greeting: String,
    page: u32,
}

#[test]
fn anonymous_visit_shows_placeholder_and_redirects() {
    let store = MemorySessionStore::new();
    let invoked = Cell::new(false);
    let visited = RefCell::new(Vec::<String>::new());

    let dashboard = guard(
        view_fn(|props: DashboardProps| {
            invoked.set(true);
            props
        }),
        &store,
        |path: &str| visited.borrow_mut().push(path.to_string()),
    );

    let output = dashboard.render(DashboardProps {
        greeting: "hi".to_string(),
        page: 1,
    });

    assert_eq!(output, Gate::Placeholder);
    assert!(!invoked.get());
    assert_eq!(*visited.borrow(), vec![paths::LOGIN.to_string()]);
}

#[test]
fn signed_in_visit_renders_with_original_props() {
    let store = MemorySessionStore::new();
    let visited = RefCell::new(Vec::<String>::new());
    let navigator = |path: &str| visited.borrow_mut().push(path.to_string());
    let body = format!(r#"{{"token":"{}"}}"#, token_for("u-7"));
    let token = interpret_login_response(201, &body).expect("login succeeds");
    establish_session(&store, &token).expect("stored");

    let identity = Identity {
        id: "u-7".to_string(),
        username: "recruiter".to_string(),
        role: None,
    };
    let outcome = block_on(verify_session(
        &store,
        &FixedIdentity(Ok(identity.clone())),
        &navigator,
        paths::LOGIN,
    ));
    assert_eq!(outcome.identity(), Some(&identity));

    let props = DashboardProps {
        greeting: format!("Welcome, {}", identity.username),
        page: 2,
    };
    let dashboard = guard(view_fn(|props: DashboardProps| props), &store, &navigator);
    assert_eq!(dashboard.render(props.clone()), Gate::Allowed(props));
    assert!(visited.borrow().is_empty());
}

#[test]
fn failed_identity_check_clears_credential_and_redirects() {
    let store = MemorySessionStore::new();
    establish_session(&store, &token_for("u-7")).expect("stored");
    let visited = RefCell::new(Vec::<String>::new());
    let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

    let outcome = block_on(verify_session(
        &store,
        &FixedIdentity(Err(AppError::Http {
            status: 404,
            message: "User not found".to_string(),
        })),
        &navigator,
        paths::LOGIN,
    ));

    assert_eq!(outcome, Verification::Unauthenticated(RejectReason::Rejected));
    assert_eq!(store.get(), None);
    assert_eq!(*visited.borrow(), vec![paths::LOGIN.to_string()]);

    let dashboard = guard(view_fn(|()| "dashboard"), &store, &navigator);
    assert_eq!(dashboard.mount(), GuardState::Unauthenticated);
    assert_eq!(visited.borrow().len(), 2);
}

#[test]
fn logout_then_remount_takes_unauthenticated_path() {
    let store = MemorySessionStore::new();
    establish_session(&store, &token_for("u-7")).expect("stored");
    let visited = RefCell::new(Vec::<String>::new());
    let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

    let dashboard = guard(view_fn(|()| "dashboard"), &store, &navigator);
    assert_eq!(dashboard.mount(), GuardState::Authenticated);
    assert!(visited.borrow().is_empty());

    end_session(&store, &navigator, paths::LOGIN);
    assert_eq!(dashboard.mount(), GuardState::Unauthenticated);
    assert_eq!(
        *visited.borrow(),
        vec![paths::LOGIN.to_string(), paths::LOGIN.to_string()]
    );
}
