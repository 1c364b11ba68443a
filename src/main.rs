use anyhow::Result;
use bumpy::{arguments::Arguments, config::Config, engine::Engine, ui};
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let config = Config::load(&args.config)?;
    let engine = Engine::load(&config.files_to_bump)?;
    ui::print_warnings(engine.warnings());

    if args.version {
        ui::print_current_versions(engine.records());
        if let Some(requested) = ui::prompt_new_version()? {
            let report = engine.apply_explicit(&requested)?;
            ui::print_report(&report);
        }
    } else if args.is_display_only() {
        ui::print_current_versions(engine.records());
    } else {
        let report = engine.bump(args.major, args.minor, args.patch);
        ui::print_report(&report);
    }

    Ok(())
}
