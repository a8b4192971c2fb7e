use salute_domain::constants::GREETING_TAG;

#[utoipa::path(
    get,
    path = "/hello",
    tag = GREETING_TAG,
    summary = "Get a hello greeting",
    description = "Returns a simple hello message",
    responses(
        (status = OK, description = "Successful operation", body = String, content_type = "text/plain")
    ),
)]
pub(crate) async fn say_hello() -> &'static str {
    "Hello"
}

#[utoipa::path(
    get,
    path = "/hi",
    tag = GREETING_TAG,
    summary = "Get a hi greeting",
    description = "Returns a simple hi message",
    responses(
        (status = OK, description = "Successful operation", body = String, content_type = "text/plain")
    ),
)]
pub(crate) async fn say_hi() -> &'static str {
    "Hi"
}

#[utoipa::path(
    get,
    path = "/bye",
    tag = GREETING_TAG,
    summary = "Get a bye farewell",
    description = "Returns a simple bye message",
    responses(
        (status = OK, description = "Successful operation", body = String, content_type = "text/plain")
    ),
)]
pub(crate) async fn say_bye() -> &'static str {
    "Bye"
}

#[utoipa::path(
    get,
    path = "/goodbye",
    tag = GREETING_TAG,
    summary = "Get a goodbye farewell",
    description = "Returns a simple goodbye message",
    responses(
        (status = OK, description = "Successful operation", body = String, content_type = "text/plain")
    ),
)]
pub(crate) async fn say_goodbye() -> &'static str {
    "Goodbye"
}
