use crate::engine::search::mate_distance;
use crate::engine::SearchInfo;

/// `cp <n>` or `mate <n>` for a side-to-move relative score.
#[must_use]
pub fn format_score(score: i32) -> String {
    match mate_distance(score) {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {score}"),
    }
}

#[must_use]
pub fn format_info(info: &SearchInfo) -> String {
    format!(
        "info depth {} score {} nodes {} time {} hashfull {} pv {}",
        info.depth,
        format_score(info.score),
        info.nodes,
        info.elapsed.as_millis(),
        info.hashfull,
        info.best_move
    )
}
