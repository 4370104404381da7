//! Source-level augmentation sweep.
//!
//! A safety net, not a truth source: after the tokenized pass, the raw
//! source is scanned for declaration names the parser may have missed
//! (derailed clauses, exotic vendor constructs) and empty placeholders are
//! inserted, so consumers can always enumerate every named declaration.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Module, NotificationType, ObjectIdentity, ObjectType};

macro_rules! sweep_regex {
    ($pattern:literal) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).expect("static sweep pattern"))
    }};
}

/// Names the line-anchored patterns can match without naming a declaration.
fn is_reserved(name: &str) -> bool {
    matches!(name, "BEGIN" | "END" | "DEFINITIONS" | "IMPORTS")
}

/// Scan `source` for declaration heads and insert empty-OID placeholders
/// for any name missing from the corresponding index of `module`.
pub(crate) fn augment_from_source(source: &str, module: &mut Module) {
    let clean = strip_line_comments(source);
    let clean = blank_quoted_strings(&clean);
    let clean = remove_imports_block(&clean);

    let obj_id = sweep_regex!(r"(?m)^\s*([A-Za-z][A-Za-z0-9-]*)\s+OBJECT\s+IDENTIFIER\s+::=");
    for caps in obj_id.captures_iter(&clean) {
        let name = &caps[1];
        if is_reserved(name) {
            continue;
        }
        module.nodes.entry(name.to_string()).or_default();
    }

    let obj_type = sweep_regex!(r"(?m)^\s*([A-Za-z][A-Za-z0-9-]*)\s+OBJECT-TYPE\b");
    for caps in obj_type.captures_iter(&clean) {
        let name = &caps[1];
        if is_reserved(name) {
            continue;
        }
        if !module.objects.contains_key(name) {
            module
                .objects
                .insert(name.to_string(), ObjectType::new(name));
        }
        module.nodes.entry(name.to_string()).or_default();
    }

    let obj_identity = sweep_regex!(r"(?m)^\s*([A-Za-z][A-Za-z0-9-]*)\s+OBJECT-IDENTITY\b");
    for caps in obj_identity.captures_iter(&clean) {
        let name = &caps[1];
        if is_reserved(name) {
            continue;
        }
        if !module.object_identities.contains_key(name) {
            module
                .object_identities
                .insert(name.to_string(), ObjectIdentity::new(name));
        }
        module.nodes.entry(name.to_string()).or_default();
    }

    let notification = sweep_regex!(r"(?m)^\s*([A-Za-z][A-Za-z0-9-]*)\s+NOTIFICATION-TYPE\b");
    for caps in notification.captures_iter(&clean) {
        let name = &caps[1];
        if is_reserved(name) {
            continue;
        }
        if !module.notification_types.contains_key(name) {
            module
                .notification_types
                .insert(name.to_string(), NotificationType::new(name));
        }
        module.nodes.entry(name.to_string()).or_default();
    }
}

/// Drop everything from `--` to end of line, per line.
fn strip_line_comments(source: &str) -> String {
    source
        .lines()
        .map(|line| line.split_once("--").map_or(line, |(head, _)| head))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Blank the contents of double-quoted strings, preserving newlines so
/// line anchors keep working on the cleaned text.
fn blank_quoted_strings(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_string = false;
    for c in source.chars() {
        if c == '"' {
            in_string = !in_string;
            out.push(' ');
        } else if in_string {
            if c == '\n' || c == '\r' {
                out.push(c);
            } else {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove everything between a line beginning with `IMPORTS` and the
/// terminating semicolon, inclusive.
fn remove_imports_block(source: &str) -> String {
    let mut out = Vec::new();
    let mut skipping = false;
    for line in source.lines() {
        if skipping {
            if line.contains(';') {
                skipping = false;
            }
            continue;
        }
        if line.trim_start().starts_with("IMPORTS") {
            if !line.contains(';') {
                skipping = true;
            }
            continue;
        }
        out.push(line);
    }
    out.join("\n")
}
