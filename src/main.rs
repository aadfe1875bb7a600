use clap::Parser;
use svgprint::cli::{run, Args};
use svgprint::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json)?;

    tracing::info!("SVGPrint v{} (built {})", VERSION, BUILD_DATE);

    run(&args)?;
    Ok(())
}
