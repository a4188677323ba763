// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use tryon_studio::app::{self, Flags};

const HELP: &str = "\
Try-On Studio

USAGE:
  tryon_studio [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --backend-url <URL>      Try-on service base URL
  --diagnostics <FILE>     Write session diagnostics as JSON on exit
";

/// Environment variable holding the tracing filter directives.
const LOG_ENV: &str = "TRYON_STUDIO_LOG";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("tryon_studio=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --config-dir");
            None
        }),
        backend_url: args.opt_value_from_str("--backend-url").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --backend-url");
            None
        }),
        diagnostics: args.opt_value_from_str("--diagnostics").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --diagnostics");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}
