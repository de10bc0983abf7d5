pub mod config_cmd;
pub mod estimate_cmd;
pub mod output;
pub mod platforms_cmd;
pub mod renderer;
pub mod selector;
