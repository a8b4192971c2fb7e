use salute_kernel::prelude::*;
use utoipa::openapi::path::{HttpMethod, OperationBuilder, PathItem};
use utoipa::openapi::{OpenApi, OpenApiBuilder, PathsBuilder};

fn operation(id: &str) -> utoipa::openapi::path::Operation {
    OperationBuilder::new().operation_id(Some(id)).build()
}

fn greeting_document() -> OpenApi {
    let mut shared = PathItem::new(HttpMethod::Get, operation("read_item"));
    shared.post = Some(operation("write_item"));

    let paths = PathsBuilder::new()
        .path("/hello", PathItem::new(HttpMethod::Get, operation("say_hello")))
        .path("/hi", PathItem::new(HttpMethod::Get, operation("say_hi")))
        .path("/bye", PathItem::new(HttpMethod::Get, operation("say_bye")))
        .path("/goodbye", PathItem::new(HttpMethod::Get, operation("say_goodbye")))
        .path("/item", shared)
        .build();

    OpenApiBuilder::new().paths(paths).build()
}

fn registry() -> VisibilityRegistry {
    let group = RouteGroup::new("Greeting");
    VisibilityRegistry::new()
        .operation(&group, Verb::Get, "/hello", Some(HideInProduction::because("sensitive")))
        .operation(&group, Verb::Get, "/hi", None)
        .operation(&group, Verb::Get, "/bye", None)
        .operation(&group, Verb::Get, "/goodbye", None)
}

fn json(api: &OpenApi) -> serde_json::Value {
    serde_json::to_value(api).expect("document serializes")
}

fn paths(api: &OpenApi) -> Vec<&str> {
    api.paths.paths.keys().map(String::as_str).collect()
}

#[test]
fn non_prod_profiles_keep_everything() {
    for profiles in [
        ActiveProfiles::default(),
        ActiveProfiles::parse("dev"),
        ActiveProfiles::parse("staging,local"),
        ActiveProfiles::parse("PROD"),
    ] {
        let mut api = greeting_document();
        let hidden = hide_operations(&mut api, &profiles, &registry());

        assert!(hidden.is_empty(), "nothing hidden for {profiles:?}");
        assert_eq!(json(&api), json(&greeting_document()));
    }
}

#[test]
fn prod_profile_hides_marked_handler_only() {
    let mut api = greeting_document();
    let hidden = hide_operations(&mut api, &ActiveProfiles::parse("eu,prod"), &registry());

    assert_eq!(hidden, vec![OperationKey::new(Verb::Get, "/hello")]);
    let remaining = paths(&api);
    assert!(!remaining.contains(&"/hello"));
    for path in ["/hi", "/bye", "/goodbye", "/item"] {
        assert!(remaining.contains(&path), "{path} should stay documented");
    }
}

#[test]
fn group_marker_hides_only_that_verb_entry() {
    let internal = RouteGroup::new("Internal").hide_in_production(HideInProduction::new());
    let registry = registry().operation(&internal, Verb::Post, "/item", None);

    let mut api = greeting_document();
    let hidden = hide_operations(&mut api, &ActiveProfiles::parse("prod"), &registry);

    assert_eq!(
        hidden,
        vec![OperationKey::new(Verb::Get, "/hello"), OperationKey::new(Verb::Post, "/item")]
    );

    let item = api.paths.paths.get("/item").expect("path with a visible GET stays");
    assert!(item.get.is_some());
    assert!(item.post.is_none());
}

#[test]
fn filtering_is_idempotent() {
    let profiles = ActiveProfiles::parse("prod");
    let mut once = greeting_document();
    hide_operations(&mut once, &profiles, &registry());

    let mut twice = once.clone();
    let hidden_again = hide_operations(&mut twice, &profiles, &registry());

    assert!(hidden_again.is_empty());
    assert_eq!(json(&once), json(&twice));
}

#[test]
fn registry_order_does_not_matter() {
    let group = RouteGroup::new("Greeting");
    let reversed = VisibilityRegistry::new()
        .operation(&group, Verb::Get, "/goodbye", None)
        .operation(&group, Verb::Get, "/bye", None)
        .operation(&group, Verb::Get, "/hi", None)
        .operation(&group, Verb::Get, "/hello", Some(HideInProduction::new()));

    let profiles = ActiveProfiles::parse("prod");
    let mut a = greeting_document();
    let mut b = greeting_document();
    hide_operations(&mut a, &profiles, &registry());
    hide_operations(&mut b, &profiles, &reversed);

    assert_eq!(json(&a), json(&b));
}
