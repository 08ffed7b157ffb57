use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indexspace::api::{compute_with, Domain, DomainSpec, RenderOutput};
use indexspace::hull::{HullCfg, TraceObserver, OFFSET_SCALE};
use indexspace::special;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "indexspace")]
#[command(about = "Vertices and boundary polylines of a domain of computation")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute vertices and closed polylines from a JSON constraint set
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        opts: HullOpts,
    },
    /// Print the constraint set transposed, one line per index variable
    Show {
        #[arg(long)]
        input: PathBuf,
    },
    /// Run one of the canonical domains
    Demo {
        #[arg(long, value_enum, default_value_t = DemoDomain::Cube)]
        domain: DemoDomain,
        #[arg(long, default_value_t = 5.0)]
        n: f64,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        opts: HullOpts,
    },
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct HullOpts {
    /// Polyline offset along each constraint row, in unit cells
    #[arg(long, default_value_t = OFFSET_SCALE)]
    offset: f64,
    /// Keep full-rank intersections that lie outside the domain
    #[arg(long)]
    keep_infeasible: bool,
    /// Fail instead of warning when a boundary chain breaks
    #[arg(long)]
    strict: bool,
}

impl HullOpts {
    fn cfg(&self) -> HullCfg {
        HullCfg {
            offset_scale: self.offset,
            drop_infeasible: !self.keep_infeasible,
            ..HullCfg::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DemoDomain {
    Cube,
    Simplex,
    Triangular,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out, opts } => {
            let domain = load_domain(&input)?;
            let params = serde_json::json!({
                "input": input.to_string_lossy(),
                "offset": opts.offset,
                "keep_infeasible": opts.keep_infeasible,
            });
            let render = hull(&domain, opts)?;
            emit(&render, out.as_deref(), params)
        }
        Action::Show { input } => {
            let domain = load_domain(&input)?;
            print!("{}", domain.constraints);
            Ok(())
        }
        Action::Demo {
            domain,
            n,
            out,
            opts,
        } => {
            let dom = demo_domain(domain, n)?;
            let params = serde_json::json!({
                "demo": format!("{:?}", domain).to_lowercase(),
                "n": n,
                "offset": opts.offset,
            });
            let render = hull(&dom, opts)?;
            emit(&render, out.as_deref(), params)
        }
    }
}

fn load_domain(path: &Path) -> Result<Domain> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let spec: DomainSpec = serde_json::from_str(&text)
        .with_context(|| format!("parsing constraint set {}", path.display()))?;
    let domain = Domain::try_from(&spec)
        .with_context(|| format!("ingesting constraint set {}", path.display()))?;
    tracing::info!(
        constraints = domain.constraints.size(),
        dimensionality = domain.dimensionality(),
        "ingested"
    );
    Ok(domain)
}

fn demo_domain(which: DemoDomain, n: f64) -> Result<Domain> {
    let dom = match which {
        DemoDomain::Cube => special::cube(n)?,
        DemoDomain::Simplex => {
            if n <= 3.0 {
                bail!("simplex demo needs n > 3, got {n}");
            }
            special::corner_simplex(3, n)?
        }
        DemoDomain::Triangular => special::lower_triangular(n)?,
    };
    Ok(dom)
}

fn hull(domain: &Domain, opts: HullOpts) -> Result<RenderOutput> {
    let analysis = compute_with(domain, &opts.cfg(), &mut TraceObserver)?;
    if opts.strict {
        analysis.require_closed_chains()?;
    }
    let render = analysis.render();
    tracing::info!(
        vertices = render.vertices.len(),
        polylines = render.polylines.len(),
        breaks = render.diagnostics.len(),
        "computed"
    );
    Ok(render)
}

fn emit(render: &RenderOutput, out: Option<&Path>, params: serde_json::Value) -> Result<()> {
    let body = serde_json::to_vec_pretty(render)?;
    match out {
        None => {
            println!("{}", String::from_utf8_lossy(&body));
        }
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, &body).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = provenance::write_sidecar(path, params)?;
            tracing::info!(out = %path.display(), provenance = %sidecar.display(), "written");
        }
    }
    Ok(())
}
