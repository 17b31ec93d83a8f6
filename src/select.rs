use crate::constants::{SEED_QUERY_KEY, SKETCH_QUERY_KEY};
use sketch_core::SketchKind;

/// What the page asked for through its query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub kind: SketchKind,
    pub seed: Option<u64>,
}

/// Split `?a=1&b=2` into pairs. Keys without `=` get an empty value.
pub fn query_pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|kv| !kv.is_empty())
        .map(|kv| kv.split_once('=').unwrap_or((kv, "")))
}

/// Unknown or missing sketch names fall back to the default sketch.
pub fn parse_query(search: &str) -> Selection {
    let mut selection = Selection {
        kind: SketchKind::default(),
        seed: None,
    };
    for (key, value) in query_pairs(search) {
        if key == SKETCH_QUERY_KEY {
            match value.parse::<SketchKind>() {
                Ok(kind) => selection.kind = kind,
                Err(e) => log::warn!("[select] {}, using {}", e, selection.kind),
            }
        } else if key == SEED_QUERY_KEY {
            selection.seed = value.parse().ok();
        }
    }
    selection
}
