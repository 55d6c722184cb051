use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hpi_rs::models::{self, SourceFormat};
use hpi_rs::parser::{self, LoadedData};
use hpi_rs::{extremes, ranking, report, stats, storage, timeline, trend};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hpi",
    version,
    about = "Rank, trend & timeline regional house price index data"
)]
struct Cli {
    /// Directory that data file names are resolved against.
    #[arg(long, env = "HPI_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,
    /// Source layout; inferred from the file name when omitted.
    #[arg(long, value_enum, global = true)]
    source: Option<SourceArg>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print highs, lows and the annual listing for regions.
    Range(RangeArgs),
    /// Rank every region for one year (or quarter).
    Rank(RankArgs),
    /// Rank regions by compound annual growth between two years.
    Trend(TrendArgs),
    /// Print gap-filled series and distribution summaries for regions.
    Timeline(TimelineArgs),
    /// Save the parsed data as CSV or JSON.
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SourceArg {
    State,
    Zip,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// Data file name inside the data directory
    #[arg(short, long)]
    file: String,
    /// Region codes separated by comma or semicolon (e.g., VT,NH)
    #[arg(short, long)]
    regions: String,
}

#[derive(Args, Debug)]
struct RankArgs {
    #[arg(short, long)]
    file: String,
    #[arg(short, long)]
    year: i32,
    /// Rank a single quarter instead of the annual mean (state files only).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    quarter: Option<u8>,
}

#[derive(Args, Debug)]
struct TrendArgs {
    #[arg(short, long)]
    file: String,
    #[arg(long)]
    start: i32,
    #[arg(long)]
    end: i32,
}

#[derive(Args, Debug)]
struct TimelineArgs {
    #[arg(short, long)]
    file: String,
    #[arg(long)]
    start: i32,
    #[arg(long)]
    end: i32,
    #[arg(short, long)]
    regions: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(short, long)]
    file: String,
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Export raw quarterly records instead of annual means (state files only).
    #[arg(long, default_value_t = false)]
    quarterly: bool,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let ctx = Context {
        data_dir: cli.data_dir,
        source: cli.source,
    };
    match cli.cmd {
        Command::Range(args) => cmd_range(&ctx, args),
        Command::Rank(args) => cmd_rank(&ctx, args),
        Command::Trend(args) => cmd_trend(&ctx, args),
        Command::Timeline(args) => cmd_timeline(&ctx, args),
        Command::Export(args) => cmd_export(&ctx, args),
    }
}

struct Context {
    data_dir: PathBuf,
    source: Option<SourceArg>,
}

impl Context {
    fn load(&self, file: &str) -> Result<LoadedData> {
        let path = self.data_dir.join(file);
        let format = match self.source {
            Some(SourceArg::State) => SourceFormat::State,
            Some(SourceArg::Zip) => SourceFormat::Zip,
            None => SourceFormat::detect(&path),
        };
        Ok(parser::load(&path, format)?)
    }
}

fn cmd_range(ctx: &Context, args: RangeArgs) -> Result<()> {
    let data = ctx.load(&args.file)?;
    let regions = parse_list(&args.regions);
    if regions.is_empty() {
        anyhow::bail!("no regions given");
    }

    for region in &regions {
        println!("{}", "=".repeat(40));
        if let Some(quarterly) = &data.quarterly {
            let (high, low) = extremes::extremes(quarterly, region)?;
            print!("{}", report::format_range(region, high, low));
        }
        let (high, low) = extremes::extremes(&data.annual, region)?;
        print!("{}", report::format_range(region, high, low));
        println!("Annualized Index Values for {region}");
        print!("{}", report::format_annual_listing(&data.annual[region]));
    }
    Ok(())
}

fn cmd_rank(ctx: &Context, args: RankArgs) -> Result<()> {
    let data = ctx.load(&args.file)?;
    let (ranked, heading) = match (args.quarter, &data.quarterly) {
        (Some(q), Some(quarterly)) => (
            ranking::quarter_ranking(quarterly, args.year, q),
            format!("{} Q{} Ranking", args.year, q),
        ),
        (Some(_), None) => anyhow::bail!("--quarter needs a quarterly (state) source"),
        (None, _) => (
            ranking::annual_ranking(&data.annual, args.year),
            format!("{} Annual Ranking", args.year),
        ),
    };
    if ranked.is_empty() {
        anyhow::bail!("no region has data for {}", args.year);
    }
    print!("{}", report::format_ranking(ranked.entries(), &heading));
    Ok(())
}

fn cmd_trend(ctx: &Context, args: TrendArgs) -> Result<()> {
    let data = ctx.load(&args.file)?;
    let trends = trend::calculate_trends(&data.annual, args.start, args.end)?;
    print!(
        "{}",
        report::format_trends(trends.entries(), args.start, args.end)
    );
    Ok(())
}

fn cmd_timeline(ctx: &Context, args: TimelineArgs) -> Result<()> {
    let data = ctx.load(&args.file)?;
    let regions = parse_list(&args.regions);
    if regions.is_empty() {
        anyhow::bail!("no regions given");
    }

    if let Some(quarterly) = &data.quarterly {
        for region in &regions {
            let (high, low) = extremes::extremes(quarterly, region)?;
            print!("{}", report::format_range(region, high, low));
        }
    }

    let selected = timeline::select_regions(&data.annual, &regions)?;
    let filtered = timeline::filter_years(selected, args.start, args.end)?;
    let Some((lo, hi)) = timeline::year_span(&filtered) else {
        anyhow::bail!("no data between {} and {}", args.start, args.end);
    };
    println!("Home Price Indexes: {lo}-{hi}");
    let axis = timeline::year_axis(lo, hi);
    for region in &regions {
        let series = timeline::build_gap_filled_series(&axis, &filtered[region]);
        print!("{}", report::format_gap_filled(region, &series));
    }

    for s in stats::region_summary(&filtered, &regions)? {
        println!(
            "{}  count={}  min={}  q1={}  median={}  q3={}  max={}  mean={}",
            s.region,
            s.count,
            fmt_opt(s.min),
            fmt_opt(s.q1),
            fmt_opt(s.median),
            fmt_opt(s.q3),
            fmt_opt(s.max),
            fmt_opt(s.mean)
        );
    }
    Ok(())
}

fn cmd_export(ctx: &Context, args: ExportArgs) -> Result<()> {
    let data = ctx.load(&args.file)?;
    let rows = if args.quarterly {
        match &data.quarterly {
            Some(q) => models::flatten(q),
            None => anyhow::bail!("--quarterly needs a quarterly (state) source"),
        }
    } else {
        models::flatten(&data.annual)
    };

    let path = &args.out;
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(&rows, path)?,
        "json" => storage::save_json(&rows, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}
