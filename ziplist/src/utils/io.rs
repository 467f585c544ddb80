//! Path matching and display helpers

/// Shorten a path for display, keeping its tail
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
    // Prefer cutting at a directory boundary
    match tail.find('/') {
        Some(pos) if pos + 1 < tail.len() => format!("...{}", &tail[pos..]),
        _ => format!("...{tail}"),
    }
}

/// Case-insensitive wildcard match over the whole text.
///
/// `*` matches any run of characters and `?` matches exactly one. An empty
/// pattern matches everything.
pub fn matches_pattern(text: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }

    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();

    let (mut t, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(&'*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                t += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    t = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
