//! Apply link synthesis.

/// Base URL used when the plugin configuration does not set `apply_base_url`.
pub const DEFAULT_APPLY_BASE_URL: &str = "https://apply.remoteok.io";

/// Builds `<base>/job/<id>?email=<encoded email>`.
///
/// A trailing slash on `base_url` is not doubled.
///
/// ```
/// use jobdeck::registration::apply_link;
///
/// assert_eq!(
///     apply_link("https://apply.remoteok.io/", "7", "a+b@c.io"),
///     "https://apply.remoteok.io/job/7?email=a%2Bb%40c.io"
/// );
/// ```
#[must_use]
pub fn apply_link(base_url: &str, job_id: &str, email: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/job/{job_id}?email={}", encode_uri_component(email))
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Multi-byte characters are encoded byte by byte from their UTF-8 form.
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(hex_digit(byte >> 4));
            out.push(hex_digit(byte & 0x0F));
        }
    }
    out
}

const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn hex_digit(nibble: u8) -> char {
    char::from(b"0123456789ABCDEF"[usize::from(nibble & 0x0F)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_uri_component("a b+c@d.e"), "a%20b%2Bc%40d.e");
        assert_eq!(encode_uri_component("it's(ok)!~*"), "it's(ok)!~*");
        assert_eq!(encode_uri_component("x/y?z=1&w#"), "x%2Fy%3Fz%3D1%26w%23");
    }

    #[test]
    fn encodes_utf8_bytes() {
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn builds_link_without_double_slash() {
        assert_eq!(
            apply_link(DEFAULT_APPLY_BASE_URL, "12", "me@x.io"),
            "https://apply.remoteok.io/job/12?email=me%40x.io"
        );
        assert_eq!(
            apply_link("http://localhost:8080//", "3", "q@w.e"),
            "http://localhost:8080/job/3?email=q%40w.e"
        );
        assert_eq!(
            apply_link("https://jobs.example.com", "12", "first last@x.io"),
            "https://jobs.example.com/job/12?email=first%20last%40x.io"
        );
    }
}
