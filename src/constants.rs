// destination
pub const SUPPORTED_CATEGORY: &str = "site_texts";
pub const DEFAULT_ADMIN_ROOT: &str = "https://discourse.julialang.org/admin/customize";
pub const LOCALE: &str = "en";

// request
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
pub const ACCEPT: &str = "*/*";
pub const VALUE_FIELD: &str = "site_text[value]";
pub const LOCALE_FIELD: &str = "site_text[locale]";

// mode
pub const LIVE_EVENT: &str = "push";
pub const REQUIRED_COMMITS: usize = 1;
