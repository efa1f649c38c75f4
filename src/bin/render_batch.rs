//! Render a saved calculate response as a batch sheet
//! Usage: cargo run --bin render_batch -- <response.json> [ml|oz] [--simplified]

use freezer_door::config::Settings;
use freezer_door::measure::Unit;
use freezer_door::models::CalculateResponse;
use freezer_door::tools::results::CalculationView;
use freezer_door::FreezerError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("Usage: render_batch <response.json> [ml|oz] [--simplified]");
        std::process::exit(2);
    };

    let settings = Settings::from_env();
    let mut view = CalculationView::new(settings.default_unit, settings.simplified);
    for arg in &args[1..] {
        if arg == "--simplified" {
            view.simplified = true;
        } else {
            let unit = Unit::from_str(arg).ok_or_else(|| FreezerError::UnknownUnit(arg.clone()))?;
            view.set_unit(unit);
        }
    }

    let body = std::fs::read_to_string(path).map_err(FreezerError::from)?;
    let results = CalculateResponse::from_http(200, &body)?;

    print!("{}", view.render(&results).to_text());
    Ok(())
}
