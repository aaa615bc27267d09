//! Getter naming shared by validation and synthesis.
//!
//! Both sides must agree on the canonical name, so everything that derives an
//! accessor name goes through here.

const GETTER_PREFIX: &str = "get";
const BOOLEAN_GETTER_PREFIX: &str = "is";

/// Upper-cases the first character of `name` and leaves the rest untouched.
///
/// Names that do not start with a lowercase letter are returned as-is, so `aURL`
/// becomes `AURL` and `URL` stays `URL`. The first character is only replaced when
/// it has a single-character upper case: `ßeta` stays `ßeta`, not `SSeta`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next().filter(|c| c.is_lowercase()) else {
        return name.to_string();
    };
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => std::iter::once(single).chain(chars).collect(),
        _ => name.to_string(),
    }
}

fn build_name(prefix: &str, suffix: &str) -> String {
    format!("{prefix}{}", capitalize(suffix))
}

/// Canonical getter name: `isX` for boolean-shaped fields, `getX` otherwise.
pub fn getter_name(field_name: &str, is_boolean: bool) -> String {
    let prefix = if is_boolean { BOOLEAN_GETTER_PREFIX } else { GETTER_PREFIX };
    build_name(prefix, field_name)
}

/// Base name of a boolean field spelled like `isRunning`, i.e. `Running`.
fn strip_boolean_prefix(field_name: &str) -> Option<&str> {
    let rest = field_name.strip_prefix(BOOLEAN_GETTER_PREFIX)?;
    match rest.chars().next() {
        Some(next) if !next.is_lowercase() => Some(rest),
        _ => None,
    }
}

/// Every name a getter for this field could plausibly carry, canonical name included.
///
/// Non-boolean fields yield only the canonical name. Boolean fields yield both the
/// `get` and `is` forms, plus the same pair for the base name when the field is
/// itself spelled `isX`. Order is stable and duplicates are dropped.
pub fn all_getter_names(field_name: &str, is_boolean: bool) -> Vec<String> {
    if !is_boolean {
        return vec![getter_name(field_name, false)];
    }

    let mut bases = vec![field_name];
    bases.extend(strip_boolean_prefix(field_name));

    let mut names: Vec<String> = Vec::with_capacity(bases.len() * 2);
    for base in bases {
        for prefix in [GETTER_PREFIX, BOOLEAN_GETTER_PREFIX] {
            let candidate = build_name(prefix, base);
            if !names.contains(&candidate) {
                names.push(candidate);
            }
        }
    }
    names
}
