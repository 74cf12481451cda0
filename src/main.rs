// SPDX-License-Identifier: MPL-2.0
use artwork_picker::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Artwork Picker

USAGE:
  artwork_picker [OPTIONS]

OPTIONS:
  -h, --help                 Print this help and exit
  --lang <LOCALE>            Interface language (e.g. en-US, fr)
  --config-dir <DIR>         Directory holding settings.toml
  --api-base-url <URL>       Catalog API root (default: https://api.artic.edu/api/v1)

ENVIRONMENT:
  ARTWORK_PICKER_CONFIG_DIR  Config directory when --config-dir is not given
  RUST_LOG                   Log filter (default: artwork_picker=info)
";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artwork_picker=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_base_url: args.opt_value_from_str("--api-base-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting artwork picker");
    app::run(flags)
}
