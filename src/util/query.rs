//! Query-string lookups (`?booking=42&tab=history`).

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Value of the first `name` parameter in `search`, form-url-decoded.
///
/// `search` may include the leading `?`. A key with no `=` yields `""`.
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Look `name` up in the current page URL.
pub fn current_query_param(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        query_param(&search, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
