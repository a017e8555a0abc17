/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const VCARD_ROUTE_COMPONENT: &str = "vcard";
pub const VCARD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", VCARD_ROUTE_COMPONENT);

/// Media type sent with every serialized card.
pub const VCARD_CONTENT_TYPE: &str = "text/vcard; charset=utf-8";

pub const VCARD_FILE_EXTENSION: &str = ".vcf";
pub const DEFAULT_VCARD_FILENAME: &str = const_str::concat!("contact", VCARD_FILE_EXTENSION);
pub const DEFAULT_CONTENT_DISPOSITION: &str = "attachment";
