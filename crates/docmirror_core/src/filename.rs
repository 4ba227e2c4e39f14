use percent_encoding::percent_decode_str;
use url::Url;

/// Appended when the derived name carries no extension: the body is kept as fetched markup.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Filesystem-safe, deterministic filename for `url`.
///
/// Uses the last path segment; a URL ending in `/` gets a name built from the whole
/// path (`/a/b/` -> `a_b`), and a bare host gets its host name. Names without a `.`
/// receive [`DEFAULT_EXTENSION`]. Segments are percent-decoded before forbidden
/// characters are replaced. Distinct URLs may map to the same name.
pub fn derive_filename(url: &str) -> String {
    let (host, path) = split_url(url);

    let segment = path.rsplit('/').next().unwrap_or_default();
    let mut name = if segment.is_empty() {
        synthesize_from_path(&path)
    } else {
        decode(segment)
    };
    if name.is_empty() {
        name = host
            .filter(|h| !h.is_empty())
            .map(|h| h.replace('.', "_"))
            .unwrap_or_else(|| "index".to_string());
    }

    let mut name = sanitize(&name);
    if !name.contains('.') {
        name.push_str(DEFAULT_EXTENSION);
    }
    name
}

/// Returns `(host, path)`; unparseable input is treated as a bare path.
fn split_url(url: &str) -> (Option<String>, String) {
    match Url::parse(url) {
        Ok(parsed) => (
            parsed.host_str().map(ToOwned::to_owned),
            parsed.path().to_string(),
        ),
        Err(_) => {
            let without_suffix = url.split(['?', '#']).next().unwrap_or(url);
            let path = match without_suffix.split_once("://") {
                Some((_, rest)) => rest.find('/').map_or("", |idx| &rest[idx..]),
                None => without_suffix,
            };
            (None, path.to_string())
        }
    }
}

fn synthesize_from_path(path: &str) -> String {
    path.split('/')
        .map(decode)
        .collect::<Vec<_>>()
        .join("_")
        .trim_matches('_')
        .to_string()
}

/// Undoes the percent-encoding `Url` applies, so `%20` becomes a space again.
fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn sanitize(input: &str) -> String {
    let mut cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    if is_reserved_windows_name(&cleaned) {
        cleaned.push('_');
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
