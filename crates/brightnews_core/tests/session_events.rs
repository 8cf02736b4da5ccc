use brightnews_core::{
    AuthService, MemorySessionRepository, PreferencesPatch, SessionEvent,
};

fn service() -> AuthService<MemorySessionRepository> {
    AuthService::new(MemorySessionRepository::new())
}

#[test]
fn full_lifecycle_publishes_events_in_order() {
    let mut auth = service();
    let events = auth.subscribe();

    let user = auth.sign_up("alice@example.com", "secret", "Alice").unwrap();
    let updated = auth
        .update_preferences(&PreferencesPatch {
            email_notifications: Some(false),
            ..PreferencesPatch::default()
        })
        .unwrap();
    auth.sign_out();
    let back = auth.sign_in("alice@example.com", "secret").unwrap();

    assert_eq!(events.recv().unwrap(), SessionEvent::SignedIn(user));
    assert_eq!(events.recv().unwrap(), SessionEvent::PreferencesUpdated(updated));
    assert_eq!(events.recv().unwrap(), SessionEvent::SignedOut);
    assert_eq!(events.recv().unwrap(), SessionEvent::SignedIn(back));
    assert!(events.try_recv().is_err());
}

#[test]
fn every_subscriber_receives_every_event() {
    let mut auth = service();
    let first = auth.subscribe();
    let second = auth.subscribe();

    auth.sign_up("alice@example.com", "secret", "Alice").unwrap();
    auth.sign_out();

    for events in [&first, &second] {
        assert!(matches!(events.recv().unwrap(), SessionEvent::SignedIn(_)));
        assert_eq!(events.recv().unwrap(), SessionEvent::SignedOut);
    }
}

#[test]
fn failed_operations_publish_no_events() {
    let mut auth = service();
    auth.sign_up("alice@example.com", "secret", "Alice").unwrap();
    let events = auth.subscribe();

    auth.sign_up("alice@example.com", "secret", "Alice Again")
        .unwrap_err();
    auth.sign_in("nobody@example.com", "secret").unwrap_err();

    assert!(events.try_recv().is_err());
}

#[test]
fn signed_in_event_reflects_authentication_flag() {
    let mut auth = service();
    let events = auth.subscribe();

    auth.sign_up("alice@example.com", "secret", "Alice").unwrap();
    match events.recv().unwrap() {
        SessionEvent::SignedIn(user) => {
            assert_eq!(Some(user.id), auth.current_user().map(|current| current.id));
            assert!(auth.is_authenticated());
        }
        other => panic!("expected SignedIn, got {other:?}"),
    }

    auth.sign_out();
    assert_eq!(events.recv().unwrap(), SessionEvent::SignedOut);
    assert!(!auth.is_authenticated());
}
