//! Session flow against a shared medium.

use storefront_db::domain::Role;
use storefront_db::{InMemoryMedium, Medium, NewUser, Store, SESSION_KEY};

#[test]
fn session_survives_a_second_store_on_the_same_medium() {
    let medium = InMemoryMedium::new();
    let first = Store::open(medium.clone()).unwrap();
    first
        .sessions()
        .register(NewUser {
            username: "admin".into(),
            password: "s3cret".into(),
            name: "Site Admin".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
        })
        .unwrap();
    let session = first.sessions().login("admin", "s3cret").unwrap().unwrap();
    assert_eq!(session.name, "Site Admin");

    let second = Store::open(medium.clone()).unwrap();
    assert!(second.sessions().is_logged_in());
    assert!(second.sessions().is_admin());

    second.sessions().logout().unwrap();
    assert!(!first.sessions().is_logged_in());
    assert!(medium.get_item(SESSION_KEY).unwrap().is_none());
}

#[test]
fn plaintext_passwords_in_storage_never_log_in() {
    let store = Store::open(InMemoryMedium::new()).unwrap();
    store
        .medium()
        .set_item(
            "users",
            r#"[{"id":"u1","username":"legacy","passwordHash":"pw","active":true}]"#,
        )
        .unwrap();
    assert!(store.sessions().login("legacy", "pw").unwrap().is_none());
}

#[test]
fn login_with_unknown_user_is_none() {
    let store = Store::open(InMemoryMedium::new()).unwrap();
    assert!(store.sessions().login("ghost", "pw").unwrap().is_none());
    assert!(store.sessions().current().is_none());
}
