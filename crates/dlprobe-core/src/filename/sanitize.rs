//! Filename sanitization to a lowercase `[a-z0-9_]` token plus extension.

/// Substrings purged from the sanitized body. They appear when a `.pdf` or
/// `.zip` inside the name is turned into `_pdf`/`_zip` by substitution.
const PURGED_SUBSTRINGS: [&str; 2] = ["_pdf", "_zip"];

/// Sanitizes a candidate filename.
///
/// - Lowercases and keeps only the final `/`-separated component
/// - Records the extension (last `.` to end) if it is `.[a-z0-9]+`
/// - Replaces everything outside `[a-z0-9]` with `_`, collapses runs, trims
/// - Removes every `_pdf`, then every `_zip`
/// - Re-appends the recorded extension
///
/// Only `_pdf`/`_zip` are purged: any other extension also survives in the
/// body, so `setup.exe` becomes `setup_exe.exe`.
pub fn sanitize(candidate: &str) -> String {
    let lower = lowercase(candidate);
    let base = final_component(&lower);
    let ext = extension(base);

    let mut out = String::with_capacity(base.len() + ext.len());
    let mut prev_underscore = false;
    for c in base.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            prev_underscore = false;
        } else {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        }
    }

    let mut safe = purge(out.trim_matches('_'));
    if !safe.ends_with(ext) {
        safe.push_str(ext);
    }
    safe
}

/// Last path component, ignoring trailing separators.
fn final_component(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Extension including the dot, or `""` when absent or not `.[a-z0-9]+`.
fn extension(name: &str) -> &str {
    let Some(i) = name.rfind('.') else {
        return "";
    };
    let ext = &name[i..];
    let valid = ext.len() > 1
        && ext[1..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if valid {
        ext
    } else {
        ""
    }
}

/// Lowercases with the one-to-one mapping per char. `İ` maps to `i`,
/// not to `i` plus a combining dot.
fn lowercase(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Removes each purged substring in one pass, in order. A `_pdf` joined by
/// the later `_zip` removal stays (`a_p_zipdf` → `a_pdf`).
fn purge(s: &str) -> String {
    PURGED_SUBSTRINGS
        .iter()
        .fold(s.to_string(), |out, needle| out.replace(needle, ""))
}
