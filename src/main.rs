use timehorizon::{spacing_ladder, Report};

fn main() -> timehorizon::Result<()> {
    env_logger::builder()
        .filter_module("timehorizon", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let report = Report::new()?;

    if log::log_enabled!(log::Level::Trace) {
        let ladder = spacing_ladder::<f64>(report.horizon.max_seconds);
        log::trace!("checked spacing at {} powers of two", ladder.len());
    }

    log::info!(
        "{} s ({:#}) at {} s spacing",
        report.horizon.max_seconds,
        report.breakdown,
        report.horizon.observed_spacing,
    );

    report.write_to(std::io::stdout().lock())
}
