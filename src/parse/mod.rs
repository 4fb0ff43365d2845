pub mod line;

pub use line::{
    CHECKBOX_PREFIX, OPEN_CHECKBOX, char_index_of, char_len, checkbox_state, count_indent,
    is_blank, is_task_line, split_indent,
};
