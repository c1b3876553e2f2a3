// SPDX-License-Identifier: MPL-2.0
use pedit::app::{self, Flags};
use pedit::logging;

const HELP: &str = "\
PEdit

USAGE:
  pedit [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = name, "{err}");
            None
        }
    }
}
