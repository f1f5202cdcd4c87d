// SPDX-License-Identifier: MPL-2.0
use pinch_lens::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
pinch_lens

USAGE:
  pinch_lens [OPTIONS]

OPTIONS:
  -h, --help            Print this help
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --page <ID>           Page to show first (1-based)
  --config <FILE>       Settings file to use instead of the per-user one
  --pages <DIR>         Directory holding the page images
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        page: args.opt_value_from_str("--page")?,
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        pages_dir: args.opt_value_from_os_str("--pages", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    log::info!("Starting with {flags:?}");
    app::run(flags)?;
    Ok(())
}
