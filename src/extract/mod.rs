/*!
 * Token extraction
 *
 * Responsibility:
 * - Locate an authentication token in a request: query parameter, then header, then cookie
 * - Verification of the token is NOT done here (that is the auth layer's job)
 *
 * Public API:
 * - ExtractOptions / KeySetting (configuration)
 * - RequestView (what the extractor reads)
 * - TokenExtractor / extract_token (the extraction itself)
 * - parse_cookies
 */

mod cookie;
mod core;
mod key;
mod options;
mod request;

pub use self::cookie::parse_cookies;
pub use self::core::{ExtractError, TokenExtractor, TokenSource, extract_token};
pub use key::KeySetting;
pub use options::{DEFAULT_COOKIE_KEY, DEFAULT_HEADER_KEY, DEFAULT_URL_KEY, ExtractOptions};
pub use request::RequestView;
