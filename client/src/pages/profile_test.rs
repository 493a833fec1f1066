use super::*;

#[test]
fn caption_names_the_viewed_climber() {
    assert_eq!(profile_caption(Some("alex")), "Viewing profile for alex");
}

#[test]
fn caption_without_username_is_own_profile() {
    assert_eq!(profile_caption(None), "Your profile");
}

#[test]
fn blank_username_is_own_profile() {
    assert_eq!(profile_caption(Some("   ")), "Your profile");
}
