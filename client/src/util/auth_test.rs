use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        authenticated: true,
        loading: false,
        user: Some(User {
            id: 9,
            username: "kim".to_owned(),
            email: None,
            created_at: None,
            profile_completed: true,
        }),
    }
}

fn anonymous() -> AuthState {
    AuthState { authenticated: false, loading: false, user: None }
}

#[test]
fn protection_disabled_always_renders() {
    for state in [AuthState::default(), anonymous(), signed_in()] {
        assert_eq!(guard_decision(false, Access::Required, &state), GuardDecision::Render);
    }
}

#[test]
fn public_and_optional_pages_always_render() {
    for access in [Access::Public, Access::Optional] {
        assert_eq!(guard_decision(true, access, &anonymous()), GuardDecision::Render);
        assert_eq!(guard_decision(true, access, &AuthState::default()), GuardDecision::Render);
    }
}

#[test]
fn required_page_waits_while_loading() {
    assert_eq!(guard_decision(true, Access::Required, &AuthState::default()), GuardDecision::Wait);
}

#[test]
fn required_page_redirects_anonymous_visitor() {
    assert_eq!(guard_decision(true, Access::Required, &anonymous()), GuardDecision::RedirectToLogin);
}

#[test]
fn required_page_renders_for_signed_in_user() {
    assert_eq!(guard_decision(true, Access::Required, &signed_in()), GuardDecision::Render);
}
