mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let opts = cli::get_args();
    setup_logger(opts.verbose());
    log::trace!("Args: {:?}", opts);

    opts.run().await.map_err(|error| {
        log::error!("{:#}", error);
        anyhow::anyhow!("{} request failed", clap::crate_name!())
    })
}

pub(crate) fn setup_logger(level: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();

    let log_level = match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(log_level);

    // Transport internals drown out per-request logging at -vvv.
    for module in ["hyper_util", "h2", "rustls", "reqwest"] {
        builder.filter_module(module, log_level.min(log::LevelFilter::Info));
    }
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.format_timestamp_millis();
    builder.init();
}
