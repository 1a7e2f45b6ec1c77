use std::borrow::Cow;

pub fn sanitize_database_url(raw: &str) -> Cow<'_, str> {
    // Regex-free sanitization: find "://user:pass@" or "://user@" patterns
    // and redact the credentials portion.
    let Some(scheme_end) = raw.find("://") else {
        // Bare paths (sqlite files, ":memory:") carry no credentials.
        return Cow::Borrowed(raw);
    };
    let rest = &raw[scheme_end + 3..];

    // Find the host portion (ends at / or end of string)
    let host_end = rest.find('/').unwrap_or(rest.len());
    let authority = &rest[..host_end];

    if let Some(at_pos) = authority.rfind('@') {
        let scheme = &raw[..scheme_end + 3];
        let host_and_rest = &rest[at_pos + 1..];
        let mut result = String::with_capacity(scheme.len() + 10 + host_and_rest.len());
        result.push_str(scheme);
        result.push_str("****:****@");
        result.push_str(host_and_rest);
        Cow::Owned(result)
    } else {
        Cow::Borrowed(raw)
    }
}
