use crate::constants::{
    ACCEPT, CONTENT_TYPE, LOCALE, LOCALE_FIELD, SUPPORTED_CATEGORY, VALUE_FIELD,
};
use crate::context::Credentials;
use crate::error::SyncError;
use std::path::Path;

pub const METHOD: &str = "PUT";

/// a fully formed admin API call for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub method: &'static str,
    pub headers: Vec<(&'static str, String)>,
    /// url-encoded form body
    pub body: String,
}

/// build the request that replaces the remote copy of `path` with `content`
///
/// the parent directory names the admin category and the file stem names the item,
/// so `site_texts/faq.md` becomes `<admin_root>/site_texts/faq`
pub fn build(
    admin_root: &str,
    credentials: &Credentials,
    path: &str,
    content: &str,
) -> Result<OutboundRequest, SyncError> {
    let file = Path::new(path);
    let category = file
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();
    if category != SUPPORTED_CATEGORY {
        return Err(SyncError::UnsupportedCategory { category });
    }
    let key = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let body = form_urlencoded::Serializer::new(String::new())
        .append_pair(VALUE_FIELD, content)
        .append_pair(LOCALE_FIELD, LOCALE)
        .finish();

    Ok(OutboundRequest {
        url: format!("{admin_root}/{category}/{key}"),
        method: METHOD,
        headers: vec![
            ("Content-Type", CONTENT_TYPE.to_string()),
            ("Accept", ACCEPT.to_string()),
            ("Api-Key", credentials.api_key.clone()),
            ("Api-Username", credentials.api_user.clone()),
        ],
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "https://forum.example.org/admin/customize";

    fn credentials() -> Credentials {
        Credentials {
            api_key: "secret".to_string(),
            api_user: "system".to_string(),
        }
    }

    fn decode(body: &str) -> Vec<(String, String)> {
        form_urlencoded::parse(body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_build_request() {
        let request = build(ROOT, &credentials(), "site_texts/faq.md", "FAQ body").unwrap();

        assert_eq!(request.url, format!("{ROOT}/site_texts/faq"));
        assert_eq!(request.method, "PUT");
        assert_eq!(
            request.headers,
            vec![
                (
                    "Content-Type",
                    "application/x-www-form-urlencoded; charset=UTF-8".to_string()
                ),
                ("Accept", "*/*".to_string()),
                ("Api-Key", "secret".to_string()),
                ("Api-Username", "system".to_string()),
            ]
        );
        assert_eq!(
            request.body,
            "site_text%5Bvalue%5D=FAQ+body&site_text%5Blocale%5D=en"
        );
    }

    #[test]
    fn test_body_decodes_to_original_content() {
        let request = build(
            ROOT,
            &credentials(),
            "site_texts/welcome.txt",
            "Hello <b>world</b>",
        )
        .unwrap();

        assert_eq!(
            decode(&request.body),
            vec![
                ("site_text[value]".to_string(), "Hello <b>world</b>".to_string()),
                ("site_text[locale]".to_string(), "en".to_string()),
            ]
        );
        assert!(!request.body.contains('<'));
    }

    #[test]
    fn test_body_escapes_form_delimiters() {
        let content = "a=1&b=2\nsecond line, 100% + more";
        let request = build(ROOT, &credentials(), "site_texts/tricky.md", content).unwrap();

        assert_eq!(decode(&request.body)[0].1, content);
        assert_eq!(request.body.matches('&').count(), 1);
    }

    #[test]
    fn test_key_drops_only_last_extension() {
        let request = build(ROOT, &credentials(), "site_texts/login.required.md", "x").unwrap();
        assert_eq!(request.url, format!("{ROOT}/site_texts/login.required"));

        let request = build(ROOT, &credentials(), "site_texts/no_extension", "x").unwrap();
        assert_eq!(request.url, format!("{ROOT}/site_texts/no_extension"));
    }

    #[test]
    fn test_unsupported_category() {
        let err = build(ROOT, &credentials(), "themes/dark.css", "body {}").unwrap_err();
        assert!(matches!(
            &err,
            SyncError::UnsupportedCategory { category } if category == "themes"
        ));
        assert_eq!(
            err.to_string(),
            "the admin config /themes/ is not currently supported"
        );
    }

    #[test]
    fn test_nested_directory_is_unsupported() {
        let err = build(ROOT, &credentials(), "site_texts/nested/faq.md", "x").unwrap_err();
        assert!(matches!(
            err,
            SyncError::UnsupportedCategory { category } if category == "site_texts/nested"
        ));
    }

    #[test]
    fn test_empty_credentials_still_build() {
        let request = build(ROOT, &Credentials::default(), "site_texts/faq.md", "x").unwrap();
        assert!(request.headers.contains(&("Api-Key", String::new())));
    }
}
