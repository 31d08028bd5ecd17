extern crate fav;

use flatarc::mem_index::MemoryIndex;
use flatarc::model::LazyTreeModel;

use fav::debug_eprintln;
use fav::error::Error;

fn main() -> Result<(), Error> {
    let matches = fav::cli::parse_flags();

    fav::utils::initialize_debug_from_args(&matches);

    let manifest_path = matches.value_of("archive").ok_or_else(|| {
        Error::CliInputError("An archive manifest is required (-a/--archive).".to_string())
    })?;

    debug_eprintln!("loading archive manifest from {}", manifest_path);
    let index = MemoryIndex::from_manifest_file(manifest_path)?;
    let mut model = LazyTreeModel::new(index)?;

    match matches.subcommand() {
        ("show", Some(cmd)) => match cmd.subcommand() {
            ("dirs", Some(c)) => {
                fav::browse::show_dirs(&mut model, c.value_of("path").unwrap_or(""))?
            }
            ("files", Some(c)) => {
                fav::browse::show_files(&mut model, c.value_of("path").unwrap_or(""))?
            }
            ("tree", Some(c)) => {
                let depth = match c.value_of("depth") {
                    Some(depth) => depth.parse::<usize>().map_err(|_| {
                        Error::CliInputError(format!("--depth must be a number, got '{}'", depth))
                    })?,
                    None => 2,
                };
                fav::browse::show_tree(&mut model, c.value_of("path").unwrap_or(""), depth)?
            }
            _ => println!("Invalid 'show' subcommand. Use --help for details."),
        },
        ("first-file", Some(cmd)) => {
            fav::browse::first_file(&mut model, cmd.value_of("path").unwrap())?
        }
        ("walk", Some(cmd)) => fav::browse::walk_listing(&model, cmd.value_of("path").unwrap_or(""))?,
        _ => {
            println!("No command specified or unknown command. Use --help for available commands.");
        }
    }
    Ok(())
}
