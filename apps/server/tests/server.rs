use salute_kernel::domain::config::{ApiConfig, SslConfig};
use salute_server::Server;

#[test]
fn builder_applies_port_override() {
    let server = Server::builder().port(8081).build().expect("default config builds");
    assert_eq!(server.config().server.port, 8081);
}

#[test]
fn missing_certificate_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = ApiConfig::default();
    cfg.server.ssl =
        Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().expect_err("ssl files are absent");
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn relative_docs_path_is_rejected() {
    let mut cfg = ApiConfig::default();
    cfg.docs.openapi_path = "openapi.json".to_owned();

    let err = Server::builder().config(cfg).build().expect_err("path must be absolute");
    assert!(err.to_string().contains("docs.openapi_path"));
}

#[test]
fn disabled_docs_skip_path_validation() {
    let mut cfg = ApiConfig::default();
    cfg.docs.enabled = false;
    cfg.docs.ui_path = String::new();

    assert!(Server::builder().config(cfg).build().is_ok());
}

#[test]
fn docs_path_on_api_route_is_rejected() {
    let mut cfg = ApiConfig::default();
    cfg.docs.ui_path = "/hello".to_owned();

    let err = Server::builder().config(cfg).build().expect_err("/hello is a greeting route");
    assert!(err.to_string().contains("docs.ui_path collides with an API route"));

    let mut cfg = ApiConfig::default();
    cfg.docs.openapi_path = "/goodbye".to_owned();
    assert!(Server::builder().config(cfg).build().is_err());
}
