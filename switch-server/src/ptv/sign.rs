//! Request signing for the PTV Timetable API.
//!
//! Every request carries the caller's developer id as `devid` and an
//! HMAC-SHA1 of the path and query (including `devid`) as `signature`,
//! hex-encoded in upper case. The digest is computed over the path only;
//! the base URL is prefixed afterwards.

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Append `devid` and `signature` to a request path.
///
/// `path` is the path plus any query string, e.g.
/// `/v3/departures/route_type/2/stop/19051?max_results=10`.
///
/// # Examples
///
/// ```
/// use switch_server::ptv::sign_path;
///
/// let signed = sign_path("/v3/routes", "1234", "secret");
/// assert!(signed.starts_with("/v3/routes?devid=1234&signature="));
/// ```
pub fn sign_path(path: &str, dev_id: &str, key: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    let unsigned = format!("{path}{separator}devid={dev_id}");
    let signature = hmac_sha1_upper_hex(key.as_bytes(), unsigned.as_bytes());
    format!("{unsigned}&signature={signature}")
}

/// HMAC-SHA1 of `message` under `key`, as upper-case hex.
pub fn hmac_sha1_upper_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    hex::encode_upper(mac.finalize().into_bytes())
}
