//! A sparse Game of Life simulator.
//!
//! Loads a BMP snapshot, runs a number of generations, and dumps the
//! world back to `image<i>.bmp` files in the output directory.

mod args;

use args::Args;
use log::{debug, error, info, warn};
use sparselife_lib::{load_bmp, save_bmp, Game};
use std::fs;
use std::process::exit;

fn main() {
    env_logger::init();
    // Missing arguments print usage and exit 0, like the original tool.
    let Some(args) = Args::parse() else {
        return;
    };
    if let Err(e) = run(&args) {
        error!("{e}");
        exit(1);
    }
}

fn run(args: &Args) -> Result<(), sparselife_lib::Error> {
    let mut game = Game::with_cells(load_bmp(&args.input)?);
    info!(
        "loaded {} live cells from {}",
        game.cell_count(),
        args.input.display()
    );
    fs::create_dir_all(&args.output)?;

    for i in 0..args.max_iter {
        if args.dump_freq == 0 || i % args.dump_freq == 0 {
            if game.cell_count() == 0 {
                warn!("generation {i}: world is empty, skipping dump");
            } else {
                let path = args.output.join(format!("image{i}.bmp"));
                save_bmp(&game, &path)?;
                info!(
                    "generation {i}: dumped {} live cells to {}",
                    game.cell_count(),
                    path.display()
                );
            }
        }
        if log::log_enabled!(log::Level::Debug) {
            debug!("generation {i} cells:\n{}", game.dump_cells());
        }
        game.tick();
    }
    Ok(())
}
