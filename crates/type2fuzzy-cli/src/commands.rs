//! Subcommand implementations

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use type2fuzzy_reduce::{
    centroid, interval_midpoint, zslice_centroid, Hagras, KarnikMendel, MendelJohn,
    PartialCentroid, ReductionConfig, TypeReducer,
};
use type2fuzzy_sets::{
    AlphaCutType1FuzzySet, CrispSet, GeneralType2FuzzySet, IntervalType2FuzzySet, Type1FuzzySet,
};

use crate::cli::{OutputFormat, ReductionMethod};
use crate::output::{print_field, print_header, print_json, print_set};

/// Options shared by the subcommands once configuration and flags are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub reduction: ReductionConfig,
    pub output_format: OutputFormat,
    pub slices: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IntervalEntry {
    pub x: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MembershipEntry {
    pub x: f64,
    pub membership: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CutEntry {
    pub z: f64,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// Reduced centroid in one of the three shapes the reducers produce.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Centroid {
    Interval {
        left: Option<f64>,
        right: Option<f64>,
    },
    Type1 {
        points: Vec<MembershipEntry>,
    },
    AlphaCut {
        cuts: Vec<CutEntry>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ReductionReport {
    pub method: &'static str,
    pub precision: u32,
    pub centroid: Centroid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defuzzified: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntervalReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    pub intervals: Vec<IntervalEntry>,
}

fn read_set_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn read_general(path: &Path) -> Result<GeneralType2FuzzySet> {
    read_set_file(path)?
        .parse()
        .with_context(|| format!("Failed to parse general type-2 set: {}", path.display()))
}

fn read_interval(path: &Path) -> Result<IntervalType2FuzzySet> {
    read_set_file(path)?
        .parse()
        .with_context(|| format!("Failed to parse interval type-2 set: {}", path.display()))
}

fn interval_entries<'a>(intervals: impl Iterator<Item = (f64, &'a CrispSet)>) -> Vec<IntervalEntry> {
    intervals
        .map(|(x, interval)| IntervalEntry {
            x,
            lower: interval.left(),
            upper: interval.right(),
        })
        .collect()
}

impl Centroid {
    fn interval(centroid: &CrispSet) -> Self {
        Centroid::Interval {
            left: centroid.left(),
            right: centroid.right(),
        }
    }

    fn type1(centroid: &Type1FuzzySet) -> Self {
        Centroid::Type1 {
            points: centroid
                .iter()
                .map(|(x, membership)| MembershipEntry { x, membership })
                .collect(),
        }
    }

    fn alpha_cut(centroid: &AlphaCutType1FuzzySet) -> Self {
        Centroid::AlphaCut {
            cuts: centroid
                .iter()
                .map(|(z, cut)| CutEntry {
                    z,
                    left: cut.left(),
                    right: cut.right(),
                })
                .collect(),
        }
    }
}

/// Options of the `reduce` subcommand.
#[derive(Debug, Clone, Copy)]
pub struct ReduceOptions {
    pub method: ReductionMethod,
    pub slices: Option<usize>,
    pub defuzzify: bool,
    pub interval: bool,
}

/// Reduce the set in `path` and print the centroid.
pub fn reduce(path: &Path, options: ReduceOptions, settings: &Settings) -> Result<()> {
    let config = settings.reduction.clone();
    config.validate()?;
    if options.interval && options.method != ReductionMethod::KarnikMendel {
        bail!(
            "--interval input is only accepted by karnik-mendel, not {}",
            options.method.name()
        );
    }

    let (text, centroid, defuzzified) = match options.method {
        ReductionMethod::KarnikMendel => {
            let set = if options.interval {
                read_interval(path)?
            } else {
                read_general(path)?.z_slice(0.0)?
            };
            let result = KarnikMendel::new(config.clone()).reduce(&set)?;
            let crisp = if options.defuzzify {
                Some(interval_midpoint(&result)?)
            } else {
                None
            };
            (result.to_string(), Centroid::interval(&result), crisp)
        }
        ReductionMethod::MendelJohn | ReductionMethod::PartialCentroid => {
            let set = read_general(path)?;
            let result = if options.method == ReductionMethod::MendelJohn {
                MendelJohn::new(config.clone()).reduce(&set)?
            } else {
                PartialCentroid::new(config.clone()).reduce(&set)?
            };
            let crisp = if options.defuzzify {
                Some(centroid(&result)?)
            } else {
                None
            };
            (
                format!("{:.*}", config.precision as usize, result),
                Centroid::type1(&result),
                crisp,
            )
        }
        ReductionMethod::Hagras => {
            let set = read_general(path)?;
            let slices = options.slices.unwrap_or(settings.slices);
            let result = Hagras::new(config.clone()).reduce_general(&set, slices)?;
            let crisp = if options.defuzzify {
                Some(zslice_centroid(&result)?)
            } else {
                None
            };
            (result.to_string(), Centroid::alpha_cut(&result), crisp)
        }
    };

    match settings.output_format {
        OutputFormat::Json => print_json(&ReductionReport {
            method: options.method.name(),
            precision: config.precision,
            centroid,
            defuzzified,
        }),
        OutputFormat::Text => {
            print_header(&format!("Centroid ({})", options.method.name()));
            print_set(&text, text.is_empty(), "empty centroid");
            if let Some(value) = defuzzified {
                println!();
                print_field("Defuzzified", format!("{:.*}", config.precision as usize, value));
            }
            Ok(())
        }
    }
}

/// Print the footprint of uncertainty of the set in `path`.
pub fn fou(path: &Path, settings: &Settings) -> Result<()> {
    let set = read_general(path)?;
    let footprint = set.footprint_of_uncertainty();

    match settings.output_format {
        OutputFormat::Json => print_json(&IntervalReport {
            z: None,
            intervals: interval_entries(footprint.iter().map(|(x, interval)| (*x, interval))),
        }),
        OutputFormat::Text => {
            print_header("Footprint of uncertainty");
            for (x, interval) in &footprint {
                print_field(&format!("{:.4}", x), interval);
            }
            Ok(())
        }
    }
}

/// Print the interval type-2 set at level `z` of the set in `path`.
pub fn zslice(path: &Path, z: f64, settings: &Settings) -> Result<()> {
    let set = read_general(path)?;
    let slice = set
        .z_slice(z)
        .with_context(|| format!("Failed to slice at z = {}", z))?;

    match settings.output_format {
        OutputFormat::Json => print_json(&IntervalReport {
            z: Some(z),
            intervals: interval_entries(slice.iter()),
        }),
        OutputFormat::Text => {
            print_header(&format!("z-slice at {:.4}", z));
            print_set(&slice, slice.is_empty(), "no primary value reaches this level");
            Ok(())
        }
    }
}
