mod args;

pub(crate) use args::{CliArgs, Command, parse_cli};
