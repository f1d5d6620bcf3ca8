/// Circuit search system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of columns every dataset row must carry: id, hierarchy path, display name.
pub const DATASET_FIELD_COUNT: usize = 3;

/// Control token that pops the undo stack.
pub const CONTROL_BACK: &str = "/back";

/// Control token that clears the session.
pub const CONTROL_RESET: &str = "/reset";

/// Separator between hierarchy path segments in the dataset.
pub const PATH_SEPARATOR: &str = "->";

/// Prefix of the synthetic "more results" option.
pub const MORE_OPTION_PREFIX: &str = "其他";

/// Label of the synthetic "more results" option for `remaining` unseen candidates.
pub fn more_option_label(remaining: usize) -> String {
    format!("{MORE_OPTION_PREFIX}（还有{remaining}个结果）")
}
