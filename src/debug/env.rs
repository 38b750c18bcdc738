use std::{env, path::PathBuf};

use crate::debug::svg::SvgOutputLevel;

/// Reads `CONVEX_DECOMPOSE_SVG_<name>`
fn svg_var(name: &str) -> Option<String> {
    env::var(format!("CONVEX_DECOMPOSE_SVG_{}", name)).ok()
}

/// Directory the stage snapshots are written to. Nothing is recorded without one.
pub(crate) fn svg_output_path() -> Option<PathBuf> {
    svg_var("OUTPUT_PATH").map(PathBuf::from)
}

/// `2` records every stage, `1` only the result
pub(crate) fn svg_output_level() -> SvgOutputLevel {
    match svg_var("OUTPUT_LEVEL").as_deref().map(str::trim) {
        Some("2") => SvgOutputLevel::AllStages,
        Some("1") => SvgOutputLevel::ResultOnly,
        _ => SvgOutputLevel::None,
    }
}

/// Labels are drawn unless `HIDE_LABELS` is set to anything
pub(crate) fn svg_labels() -> bool {
    svg_var("HIDE_LABELS").is_none()
}
