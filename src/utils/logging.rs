use std::path::Path;

/// Installs the global logger, writing to stderr and, optionally, to `log_file`.
pub fn init_logger(
    min_level: log::LevelFilter, log_file: Option<&Path>,
) -> Result<(), fern::InitError> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            // Note we aren't using local time since it only works on single-threaded processes.
            let offset = time::OffsetDateTime::now_utc();
            let timestamp = offset
                .format(&time::macros::format_description!(
                    // The weird "[[[" is because we need to escape a bracket ("[[") to show one "[".
                    // See https://time-rs.github.io/book/api/format-description.html
                    "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:9]]"
                ))
                .unwrap_or_default();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                timestamp,
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(std::io::stderr());

    let dispatch = match log_file {
        Some(log_file) => dispatch.chain(fern::log_file(log_file)?),
        None => dispatch,
    };

    dispatch.apply()?;

    Ok(())
}
