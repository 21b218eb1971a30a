/// Rows and columns on the board. Coordinates run `1..=BOARD_SIZE`.
pub const BOARD_SIZE: usize = 3;

/// Glyph joining the cells of one rendered row.
pub const CELL_JOINER: &str = "-";

/// Separator lines drawn below row 0 and row 1. Row 2 has none.
pub const ROW_SEPARATORS: [&str; BOARD_SIZE - 1] = ["|\\|/|", "|/|\\|"];

pub const PLAYER_1_NAME_PROMPT: &str = "Player 1 please enter your name: ";
pub const PLAYER_2_NAME_PROMPT: &str = "Player 2 please enter your name: ";
/// Appended to the first player's name once both names are known.
pub const FIRST_MOVE_PROMPT: &str = " goes first, place your first piece: ";

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "MORRIS_LOG";
