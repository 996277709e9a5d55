//! Application constants and configuration

pub const APP_NAME: &str = "Number Group Generator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "number-group-generator.log";
pub const DEFAULT_LOG_FILTER: &str = "info,number_group_generator=debug";

/// Environment variable pointing at a CJK-capable font file
pub const FONT_ENV_VAR: &str = "NUMBER_GROUP_FONT";

// Window geometry
pub const WINDOW_SIZE: [f32; 2] = [420.0, 260.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 180.0];

// Labels
pub const LABEL_INPUT: &str = "输入";
pub const LABEL_OUTPUT: &str = "输出";
pub const HINT_INPUT: &str = "输入多行数字...";
pub const HINT_OUTPUT: &str = "输出";
pub const LABEL_GROUP_SIZE: &str = "每组行数:";
pub const LABEL_GENERATE: &str = "生成";
pub const LABEL_COPY: &str = "复制";
pub const LABEL_CLEAR: &str = "清除";
pub const LABEL_CUT: &str = "剪切";
pub const LABEL_PASTE: &str = "粘贴";
pub const LABEL_SELECT_ALL: &str = "全选";

// Messages
pub const MSG_ENTER_GROUP_SIZE: &str = "请输入每组行数";
pub const MSG_COPIED: &str = "已复制";
pub const MSG_COPIED_EMPTY: &str = "输出为空";

/// Toast timings in seconds
pub const TOAST_VISIBLE_SECS: f32 = 1.5;
pub const TOAST_FADE_SECS: f32 = 0.4;
