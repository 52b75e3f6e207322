use std::fmt::{Debug, Display};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use collision::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = run(args)?;
    println!("{report}");

    Ok(())
}

/// Arguments to [`run`].
#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "Check whether two axis-aligned shapes collide and compute their overlap"
)]
pub struct Args {
    #[command(subcommand)]
    shape: ShapeArgs,
}

/// The kind of shape to query, with the bounds of both shapes.
#[derive(Subcommand)]
pub enum ShapeArgs {
    /// Compare two ranges, each given as `from,to`.
    Range {
        /// The first range.
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// The second range.
        #[arg(allow_hyphen_values = true)]
        second: String,
        /// A value to test for containment in the first range.
        #[arg(short, long, allow_hyphen_values = true)]
        point: Option<String>,
    },
    /// Compare two rectangles, each given as `x,y,width,height`.
    Rectangle {
        /// The first rectangle.
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// The second rectangle.
        #[arg(allow_hyphen_values = true)]
        second: String,
        /// A point `x,y` to test for containment in the first rectangle.
        #[arg(short, long, allow_hyphen_values = true)]
        point: Option<String>,
    },
    /// Compare two cuboids, each given as `x,y,z,width,height,depth`.
    Cuboid {
        /// The first cuboid.
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// The second cuboid.
        #[arg(allow_hyphen_values = true)]
        second: String,
        /// A point `x,y,z` to test for containment in the first cuboid.
        #[arg(short, long, allow_hyphen_values = true)]
        point: Option<String>,
    },
}

/// The outcome of comparing two shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    collide: bool,
    overlap: Option<String>,
    contains: Option<bool>,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "collide: {}", self.collide)?;
        match self.overlap {
            Some(ref overlap) => write!(f, "overlap: {overlap}")?,
            None => write!(f, "overlap: none")?,
        }
        if let Some(contains) = self.contains {
            write!(f, "\ncontains: {contains}")?;
        }
        Ok(())
    }
}

/// Parses exactly `N` comma-separated numbers.
fn parse_bounds<const N: usize>(input: &str) -> anyhow::Result<[f64; N]> {
    let values = input
        .split(',')
        .map(|value| {
            let value = value.trim();
            value
                .parse::<f64>()
                .with_context(|| format!("invalid number `{value}`"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let found = values.len();
    values
        .try_into()
        .map_err(|_| anyhow!("expected {N} comma-separated values, found {found}"))
}

fn parse_point<const N: usize>(point: Option<&str>) -> anyhow::Result<Option<[f64; N]>> {
    point
        .map(|point| parse_bounds::<N>(point).context("failed to parse point"))
        .transpose()
}

fn query<S, P>(first: S, second: S, point: Option<P>) -> Report
where
    S: Overlap<Output = S> + Contains<P> + Debug,
{
    let overlap = first.try_overlap(&second);
    tracing::info!(?first, ?second, collide = overlap.is_some(), "compared shapes");
    Report {
        collide: first.collide(&second),
        overlap: overlap.map(|overlap| format!("{overlap:?}")),
        contains: point.map(|point| first.contains(&point)),
    }
}

/// Builds the shapes described by `args` and compares them.
pub fn run(args: Args) -> anyhow::Result<Report> {
    let report = match args.shape {
        ShapeArgs::Range {
            first,
            second,
            point,
        } => {
            let [a0, a1] = parse_bounds::<2>(&first).context("failed to parse first range")?;
            let [b0, b1] = parse_bounds::<2>(&second).context("failed to parse second range")?;
            let point = parse_point::<1>(point.as_deref())?.map(|[v]| v);
            query(Range::new(a0, a1), Range::new(b0, b1), point)
        }
        ShapeArgs::Rectangle {
            first,
            second,
            point,
        } => {
            let [ax, ay, aw, ah] =
                parse_bounds::<4>(&first).context("failed to parse first rectangle")?;
            let [bx, by, bw, bh] =
                parse_bounds::<4>(&second).context("failed to parse second rectangle")?;
            let point = parse_point::<2>(point.as_deref())?.map(|[x, y]| (x, y));
            query(
                Rectangle::new(ax, ay, aw, ah),
                Rectangle::new(bx, by, bw, bh),
                point,
            )
        }
        ShapeArgs::Cuboid {
            first,
            second,
            point,
        } => {
            let [ax, ay, az, aw, ah, ad] =
                parse_bounds::<6>(&first).context("failed to parse first cuboid")?;
            let [bx, by, bz, bw, bh, bd] =
                parse_bounds::<6>(&second).context("failed to parse second cuboid")?;
            let point = parse_point::<3>(point.as_deref())?.map(|[x, y, z]| (x, y, z));
            query(
                Cuboid::new(ax, ay, az, aw, ah, ad),
                Cuboid::new(bx, by, bz, bw, bh, bd),
                point,
            )
        }
    };

    Ok(report)
}
