use salute_domain::config::ApiInfo;
use utoipa::openapi::{ContactBuilder, InfoBuilder, LicenseBuilder, OpenApi, OpenApiBuilder};

/// Base document carrying the configured `info` block and no paths.
#[must_use]
pub fn base_document(info: &ApiInfo) -> OpenApi {
    let contact = ContactBuilder::new()
        .name(Some(info.contact.name.clone()))
        .email(Some(info.contact.email.clone()))
        .url(Some(info.contact.url.clone()))
        .build();

    let license =
        LicenseBuilder::new().name(info.license.name.clone()).url(Some(info.license.url.clone())).build();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(info.title.clone())
                .description(Some(info.description.clone()))
                .version(info.version.clone())
                .contact(Some(contact))
                .license(Some(license))
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_document_carries_configured_info() {
        let api = base_document(&ApiInfo::default());

        assert_eq!(api.info.title, "Greeting API");
        assert_eq!(api.info.version, "v1.0.0");
        assert_eq!(api.info.description.as_deref(), Some("REST API for greeting messages"));
        assert_eq!(api.info.license.as_ref().map(|l| l.name.as_str()), Some("Apache 2.0"));
        assert_eq!(
            api.info.contact.as_ref().and_then(|c| c.email.as_deref()),
            Some("example@example.com")
        );
        assert!(api.paths.paths.is_empty());
    }
}
