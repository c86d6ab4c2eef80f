use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use maze_walker::{route, CLIArgs, Walker};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    init_logger(args.verbose);

    let maze = maze_walker::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;
    if !args.skip_validation {
        maze.validate().with_context(|| {
            format!(
                "Given maze({}) can't be walked through.",
                args.input_path.display()
            )
        })?;
    }

    debug!(
        "Read {}x{} maze, exit at {:?}.",
        maze.width(),
        maze.height(),
        maze.exit_pos()
    );

    let mut walker = Walker::new(&maze);
    if let Some(max_steps) = args.max_steps {
        walker = walker.with_step_limit(max_steps);
    }
    let walk = walker.walk()?;

    if args.raw {
        println!(
            "The walker took {} step(s){}:",
            walk.path().len() - 1,
            if route::has_revisits(walk.path()) {
                ", going back over some of them"
            } else {
                ""
            }
        );
        for pos in walk.path() {
            println!("{}", pos);
        }
    }

    if let Some(solution) = walk.solution() {
        println!(
            "Found a route of {} step(s) from {} to {}.",
            solution.len() - 1,
            solution[0],
            solution[solution.len() - 1]
        );
        for pos in &solution {
            println!("{}", pos);
        }
        if args.render {
            print!("{}", maze.render_route(&solution));
        }
    } else {
        eprintln!(
            "There's no route through the given maze, the walker {}.",
            walk.end()
        );
    }

    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::new()
        .filter_or("MAZE_LOG", level)
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);
}
