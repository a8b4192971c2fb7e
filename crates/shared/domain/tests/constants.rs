use salute_domain::constants::{ENV_PREFIX, GREETING_TAG, PROD_PROFILE};
use salute_domain::marker::HideInProduction;

#[test]
fn constants_match_expected_strings() {
    assert_eq!(PROD_PROFILE, "prod");
    assert_eq!(GREETING_TAG, "Greeting");
    assert_eq!(ENV_PREFIX, "SALUTE");
}

#[test]
fn marker_reason_is_optional() {
    assert_eq!(HideInProduction::new().reason(), None);
    assert_eq!(HideInProduction::because("internal only").reason(), Some("internal only"));
}
