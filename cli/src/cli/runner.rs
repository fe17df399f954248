use anyhow::{Context, Result};
use chromakit::{most_distinct, ChromaPoint, Lab, Srgb};
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use super::args::{Cli, Commands, ConvertArgs, DiffArgs, PickArgs};

pub fn run_cli(args: Cli) -> Result<()> {
    match args.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Diff(args) => run_diff(args),
        Commands::Pick(args) => run_pick(args),
    }
}

fn parse_colors(inputs: &[String]) -> Result<Vec<(String, Lab)>> {
    inputs
        .iter()
        .map(|input| {
            let srgb =
                Srgb::from_hex(input).with_context(|| format!("parsing color '{}'", input))?;
            Ok((srgb.to_hex(), srgb.to_lab()))
        })
        .collect()
}

#[derive(Tabled)]
struct ConvertRow {
    #[tabled(rename = "Hex")]
    hex: String,
    #[tabled(rename = "Linear RGB")]
    rgb: String,
    #[tabled(rename = "XYZ")]
    xyz: String,
    #[tabled(rename = "LAB")]
    lab: String,
    #[tabled(rename = "Chroma")]
    chroma: String,
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let mut rows = Vec::with_capacity(args.colors.len());
    for input in &args.colors {
        let srgb = Srgb::from_hex(input).with_context(|| format!("parsing color '{}'", input))?;
        let rgb = srgb.to_rgb();
        let xyz = rgb.to_xyz();
        let lab = xyz.to_lab();
        rows.push(ConvertRow {
            hex: srgb.to_hex(),
            rgb: format!("{:.4}, {:.4}, {:.4}", rgb.r(), rgb.g(), rgb.b()),
            xyz: format!("{:.4}, {:.4}, {:.4}", xyz.x(), xyz.y(), xyz.z()),
            lab: format!("{:.4}, {:.4}, {:.4}", lab.l(), lab.a(), lab.b()),
            chroma: format!("{:.4}", lab.distance_to_gray()),
        });
    }

    println!("{}", Table::new(rows));
    Ok(())
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let colors = parse_colors(&args.colors)?;

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(colors.iter().map(|(hex, _)| hex.clone()));
    builder.push_record(header);

    for (hex, lab) in &colors {
        let mut record = vec![hex.clone()];
        record.extend(
            colors
                .iter()
                .map(|(_, other)| format!("{:.4}", lab.distance_to(other))),
        );
        builder.push_record(record);
    }

    println!("{}", builder.build());
    Ok(())
}

fn run_pick(args: PickArgs) -> Result<()> {
    let pool = parse_colors(&args.pool)?;
    let taken = parse_colors(&args.taken)?;

    let pool_labs: Vec<Lab> = pool.iter().map(|(_, lab)| *lab).collect();
    let taken_labs: Vec<Lab> = taken.iter().map(|(_, lab)| *lab).collect();

    let index = most_distinct(&pool_labs, &taken_labs)?;
    let (hex, lab) = &pool[index];

    log::debug!("Picked pool[{}] = {}", index, lab);
    println!("{}", hex);
    Ok(())
}
