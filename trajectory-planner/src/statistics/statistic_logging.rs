use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// The options for statistic logging containing the statistic prefix, the (optional) line which is
/// printed after the statistics, and the (optional) casing of the statistics.
struct StatisticOptions {
    /// Printed in front of every statistic, which is written as `{PREFIX} {NAME}={VALUE}`.
    statistic_prefix: &'static str,
    /// A closing line which is printed after all of the statistics have been printed.
    after_statistics: Option<&'static str>,
    /// The casing of the name of the statistic.
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Configures the logging of the statistics.
///
/// Statistics are only written once this has been called; only the first call has an effect.
/// When no writer is given, statistics are written to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Runs `write` against the configured options; does nothing when statistic logging has not
/// been configured.
fn with_options(write: impl FnOnce(&mut StatisticOptions) -> std::io::Result<()>) {
    let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut statistic_options) = statistic_options_lock.write() else {
        return;
    };

    if let Err(e) = write(&mut statistic_options) {
        debug!("Could not write statistic: {e}");
    }
}

/// Logs the provided statistic with name `name` and value `value`, in the format
/// `STATISTIC_PREFIX NAME=VALUE`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = match options.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        writeln!(
            options.statistics_writer,
            "{} {name}={value}",
            options.statistic_prefix
        )
    });
}

/// Logs the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    with_options(|options| match options.after_statistics {
        Some(postfix) => writeln!(options.statistics_writer, "{postfix}"),
        None => Ok(()),
    });
}

/// Returns whether statistics are logged, i.e. whether [`configure_statistic_logging`] has been
/// called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
