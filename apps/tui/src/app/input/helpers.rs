use std::path::PathBuf;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Path carried by a drag-and-drop paste. Terminals quote or escape the
/// path and some prefix it with `file://`; only the first line counts.
pub fn dropped_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;

    let unquoted = ['\'', '"']
        .iter()
        .find_map(|quote| {
            line.strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(line);

    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let path = path.replace("\\ ", " ");

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
