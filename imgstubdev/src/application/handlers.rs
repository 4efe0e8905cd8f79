use std::path::{Path, PathBuf};

use imgstub_core::catalog::{self, Selection};
use imgstub_core::config::load_config;
use imgstub_core::error::Result;
use imgstub_core::provision::{ProvisionOptions, provision};
use imgstub_core::stats::Stats;
use imgstub_core::status::status;

use crate::presentation::cli::{ScanPick, SeedPick};

fn debug_banner(base: &Path, counts: &[(&str, usize)], total: usize) {
    println!("=== DEBUG ===");
    println!("imgstubdev {}", env!("CARGO_PKG_VERSION"));
    if let Ok(cwd) = std::env::current_dir() {
        println!("CWD: {}", cwd.display());
    }
    match std::path::absolute(base) {
        Ok(p) => println!("Base dir: {}", p.display()),
        Err(_) => println!("Base dir: {}", base.display()),
    }
    for (name, n) in counts {
        println!("{name}: {n}");
    }
    println!("Cantidad de archivos a crear: {total}");
    println!("=============\n");
}

fn print_summary(stats: &Stats) {
    println!(
        "\nListo. Creados: {} | Ya existían: {} | Errores: {}",
        stats.created, stats.existed, stats.errored
    );
}

pub fn handle_seed(only: SeedPick, base_dir: PathBuf, debug: bool) -> Result<()> {
    let sel = match only {
        SeedPick::Frames => Selection::Frames,
        SeedPick::Finals => Selection::Finals,
        SeedPick::Both => Selection::All,
    };
    let targets = catalog::select(sel);

    if debug {
        debug_banner(
            &base_dir,
            &[
                ("frames", catalog::FRAMES.len()),
                ("finals", catalog::FINALS.len()),
            ],
            targets.len(),
        );
    }

    let stats = provision(&targets, &ProvisionOptions { base_dir, debug });
    print_summary(&stats);
    Ok(())
}

pub fn handle_scan(config: PathBuf, only: ScanPick, base_dir: PathBuf, debug: bool) -> Result<()> {
    let cfg = load_config(&config)?;
    let sel = match only {
        ScanPick::Posters => Selection::Posters,
        ScanPick::Frames => Selection::Frames,
        ScanPick::Finals => Selection::Finals,
        ScanPick::All => Selection::All,
    };
    let targets = cfg.select(sel);

    if debug {
        debug_banner(
            &base_dir,
            &[
                ("posters", cfg.posters.len()),
                ("frames", cfg.frames.len()),
                ("finals", cfg.finals.len()),
            ],
            targets.len(),
        );
    }

    let stats = provision(&targets, &ProvisionOptions { base_dir, debug });
    print_summary(&stats);
    Ok(())
}

pub fn handle_status(config: Option<PathBuf>, base_dir: PathBuf) -> Result<()> {
    let targets: Vec<String> = match config {
        Some(path) => load_config(&path)?.select(Selection::All),
        None => catalog::select(Selection::All)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let report = status(&targets, &base_dir);
    println!(
        "\nEstado. Listos: {} | Pendientes: {} | Faltan: {} | Extra: {}",
        report.filled, report.pending, report.missing, report.orphaned
    );
    Ok(())
}
