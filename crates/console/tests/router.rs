mod common;

use catalog_console::{
    router::{Navigation, Router, View},
    session::{AccessPolicy, ROLE_KEY, SessionContext, TOKEN_KEY, USER_KEY},
    store::MemoryStore,
};
use common::{MockTransport, app_state};
use shared::{abstract_trait::DynKeyValueStore, domain::requests::LoginRequest};
use std::sync::Arc;

const USER: &str = r#"{"id":1,"email":"a","nombre":"A","apellido":"B","activo":true}"#;

fn session(entries: &[(&str, &str)]) -> SessionContext {
    let store: DynKeyValueStore = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    SessionContext::new(store)
}

fn logged_in(role: Option<&str>) -> SessionContext {
    let mut entries = vec![(TOKEN_KEY, "tok"), (USER_KEY, USER)];
    if let Some(role) = role {
        entries.push((ROLE_KEY, role));
    }
    session(&entries)
}

fn enter(path: &str, view: View) -> Navigation {
    Navigation::Enter {
        path: path.to_string(),
        view,
    }
}

#[test]
fn anonymous_users_are_sent_to_login() {
    let router = Router::new(AccessPolicy::Unrestricted);
    let anonymous = session(&[]);

    assert_eq!(router.navigate(&anonymous, "/categorias"), enter("/auth/login", View::Login));
    assert_eq!(router.navigate(&anonymous, ""), enter("/auth/login", View::Login));
    assert_eq!(
        router.navigate(&anonymous, "/auth/register"),
        enter("/auth/register", View::Register)
    );
}

#[test]
fn empty_and_unknown_paths_land_on_dashboard() {
    let router = Router::new(AccessPolicy::Unrestricted);
    let user = logged_in(None);

    assert_eq!(router.navigate(&user, ""), enter("/dashboard", View::Dashboard));
    assert_eq!(router.navigate(&user, "/"), enter("/dashboard", View::Dashboard));
    assert_eq!(router.navigate(&user, "/nada"), enter("/dashboard", View::Dashboard));
    assert_eq!(
        router.navigate(&user, "/notifications"),
        enter("/dashboard", View::Dashboard)
    );
}

#[test]
fn login_page_redirects_authenticated_users() {
    let router = Router::new(AccessPolicy::Unrestricted);
    let user = logged_in(None);

    assert_eq!(router.navigate(&user, "/auth/login"), enter("/dashboard", View::Dashboard));
    assert_eq!(
        router.navigate(&user, "/auth/register"),
        enter("/dashboard", View::Dashboard)
    );
}

#[test]
fn unrestricted_policy_ignores_missing_role() {
    let router = Router::new(AccessPolicy::Unrestricted);
    let user = logged_in(None);

    assert_eq!(router.navigate(&user, "/usuarios"), enter("/usuarios", View::Users));
    assert_eq!(
        router.navigate(&user, "/productos/4?tab=1"),
        enter("/productos", View::Products)
    );
}

#[test]
fn consumer_is_kept_to_products_and_dashboard() {
    let router = Router::new(AccessPolicy::RoleBased);
    let consumer = logged_in(Some("consumidor"));

    assert_eq!(router.navigate(&consumer, "/productos"), enter("/productos", View::Products));
    assert_eq!(router.navigate(&consumer, "/dashboard"), enter("/dashboard", View::Dashboard));
    assert_eq!(router.navigate(&consumer, "/categorias"), enter("/dashboard", View::Dashboard));
    assert_eq!(router.navigate(&consumer, "/usuarios"), enter("/dashboard", View::Dashboard));
}

#[test]
fn admin_opens_every_page() {
    let router = Router::new(AccessPolicy::RoleBased);
    let admin = logged_in(Some("admin"));

    assert_eq!(router.navigate(&admin, "/categorias"), enter("/categorias", View::Categories));
    assert_eq!(router.navigate(&admin, "/usuarios"), enter("/usuarios", View::Users));
}

#[test]
fn role_less_session_under_role_policy_is_blocked() {
    let router = Router::new(AccessPolicy::RoleBased);
    let user = logged_in(None);

    assert_eq!(
        router.navigate(&user, "/categorias"),
        Navigation::Blocked {
            path: "/categorias".to_string()
        }
    );
}

#[tokio::test]
async fn state_router_follows_fake_login() {
    let transport = MockTransport::new();
    let (state, _store) = app_state("fake", &transport);

    assert_eq!(state.navigate("/productos"), enter("/auth/login", View::Login));

    state
        .login(&LoginRequest::new("consumidor", "consumidor123"))
        .await
        .unwrap();
    assert_eq!(state.navigate("/productos"), enter("/productos", View::Products));
    assert_eq!(state.navigate("/usuarios"), enter("/dashboard", View::Dashboard));

    state.logout().unwrap();
    assert_eq!(state.navigate("/productos"), enter("/auth/login", View::Login));
}
