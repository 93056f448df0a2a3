/// The default endpoint for the LocalEats mobile API
pub const DEFAULT_API_ENDPOINT: &str = "http://apiv2.localeats.com/Mobile/";

/// The query parameter used to send API keys in requests
pub const API_KEY_PARAM: &str = "skey";

/// Environment variable holding the API key
pub const API_KEY_ENV_VAR: &str = "LOCALEATS_API_KEY";

/// Environment variable overriding the API endpoint
pub const ENDPOINT_ENV_VAR: &str = "LOCALEATS_ENDPOINT";

/// The CDN URL format for restaurant images
pub const IMAGE_URL_FORMAT: &str = "http://cdn.localeats.com/media/images/$file?dummy=dummy40";
pub const IMAGE_URL_REPLACE_TOKEN: &str = "$file";

/// Award id the upstream uses for editor's picks (formerly "Top 100")
pub const EDITORS_PICK_AWARD_ID: &str = "1";
pub const EDITORS_PICK_LABEL: &str = "Editors Pick";

/// Number of restaurants requested per page unless told otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 25;
