use std::io::{self, Write};

use crate::board::{Searcher, MAX_SEARCH_PLY};

/// Print identification and the supported options, ending with `c4ok`.
pub fn print_options<W: Write>(out: &mut W, searcher: &Searcher) -> io::Result<()> {
    let params = searcher.params();
    writeln!(out, "id name connect_four_engine {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        out,
        "option name Ply type spin default {} min 1 max {}",
        params.max_ply, MAX_SEARCH_PLY
    )?;
    writeln!(
        out,
        "option name PersistentCache type check default {}",
        params.persistent_cache
    )?;
    writeln!(out, "c4ok")
}

/// Apply a `setoption` to the searcher. Unknown names and bad values are
/// logged and otherwise ignored.
pub fn apply_setoption(searcher: &mut Searcher, name: &str, value: Option<&str>) {
    let normalized = name.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "ply" => match value.and_then(|v| v.trim().parse::<u32>().ok()) {
            Some(ply) => {
                if let Err(e) = searcher.set_max_ply(ply) {
                    log::warn!("ignoring Ply {ply}: {e}");
                }
            }
            None => log::warn!("Ply needs a positive integer value"),
        },
        "persistentcache" => match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if matches!(v.as_str(), "true" | "1") => searcher.set_persistent_cache(true),
            Some(v) if matches!(v.as_str(), "false" | "0") => searcher.set_persistent_cache(false),
            _ => log::warn!("PersistentCache needs true or false"),
        },
        _ => log::warn!("unknown option '{name}'"),
    }
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = None;

    for part in parts.iter().skip(1) {
        match *part {
            "name" => in_value = Some(false),
            "value" => in_value = Some(true),
            _ => match in_value {
                Some(false) => name_parts.push(part),
                Some(true) => value_parts.push(part),
                None => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
