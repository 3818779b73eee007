use std::path::PathBuf;
use anyhow::Context;
use clap::{ Parser, Subcommand };
use env_logger::Env;
use log::info;
use qwell::{
    hamiltonian::Heterostructure,
    plot::{ self, PlotStyle },
    sweep::{ Sweep, WidthScan },
    units::{ self, UnitSystem },
};

const Y_BOUNDS: (f64, f64) = (0.0, 0.4); // eV

#[derive(Parser, Debug)]
#[command(name = "eigenvalues", version)]
#[command(about = "Lowest subband energies of an AlGaAs/GaAs/AlGaAs quantum well")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output image path
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Number of worker threads; 0 runs serially
    #[arg(long, global = true, default_value_t = 0)]
    threads: usize,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Upper bound of the wavevector sweep (1/Å)
    #[arg(long, default_value_t = 0.05)]
    k_max: f64,

    /// Number of wavevector samples
    #[arg(long, default_value_t = 100)]
    samples: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep the well width at fixed wavevector instead
    WidthScan {
        /// Wavevector (1/Å)
        #[arg(long, default_value_t = 0.0)]
        k: f64,

        /// Smallest well width (Å)
        #[arg(long, default_value_t = 6.0)]
        min: f64,

        /// Largest well width (Å)
        #[arg(long, default_value_t = 150.0)]
        max: f64,

        /// Number of widths
        #[arg(long, default_value_t = 49)]
        samples: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .init();

    let uu: &UnitSystem
        = UnitSystem::new(units::STANDARD_SCALES)?
        .install()?;
    let hs = Heterostructure::reference(uu)
        .context("invalid heterostructure")?;
    info!(
        "{} sites: {} barrier + {} well + {} barrier",
        hs.site_count(), hs.barrier_sites(), hs.well_sites(), hs.barrier_sites(),
    );

    match cli.command {
        None => {
            let sweep = Sweep::new(0.0, cli.k_max, cli.samples)?
                .with_threads(cli.threads);
            let disp = sweep.run(&hs, uu)
                .context("wavevector sweep failed")?;
            let output
                = cli.output.unwrap_or_else(|| "figures/EigenValues.png".into());
            let style = PlotStyle::new("k (1/Å)", "Energy (eV)", Y_BOUNDS);
            plot::render(&disp, &style, &output)
                .with_context(|| format!("could not write {}", output.display()))?;
        },
        Some(Command::WidthScan { k, min, max, samples }) => {
            let scan = WidthScan::linspace(k, min, max, samples)?
                .with_threads(cli.threads);
            let disp = scan.run(&hs, uu)
                .context("well width scan failed")?;
            let output
                = cli.output.unwrap_or_else(|| "figures/WidthScan.png".into());
            let style = PlotStyle::new("Width (Å)", "Energy (eV)", Y_BOUNDS);
            plot::render(&disp, &style, &output)
                .with_context(|| format!("could not write {}", output.display()))?;
        },
    }
    Ok(())
}
