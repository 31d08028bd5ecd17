use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("fav")
        .version(clap::crate_version!())
        .about("Browse a flat path-keyed archive as a directory tree")
        .arg(
            clap::Arg::from_usage("-d --debug 'Enable debug output'")
                .global(true)
        )
        .arg(
            clap::Arg::from_usage("-a, --archive [manifest] 'Path to the archive manifest (JSON)'")
                .global(true),
        )
        .subcommand(
            clap::SubCommand::with_name("show")
                .about("Display parts of the archive namespace")
                .subcommand(
                    clap::SubCommand::with_name("dirs")
                        .about("List immediate subdirectories with aggregate size and entry count")
                        .arg(clap::Arg::from_usage("--path [path] 'Directory within the archive (default: root)'")),
                )
                .subcommand(
                    clap::SubCommand::with_name("files")
                        .about("List immediate files of a directory with their sizes")
                        .arg(clap::Arg::from_usage("--path [path] 'Directory within the archive (default: root)'")),
                )
                .subcommand(
                    clap::SubCommand::with_name("tree")
                        .about("Render the directory tree, expanding lazily down to a depth")
                        .arg(clap::Arg::from_usage("--path [path] 'Directory within the archive (default: root)'"))
                        .arg(clap::Arg::from_usage("--depth [depth] 'Levels to expand below the starting directory (default: 2)'")),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("first-file")
                .about("Show the first file under a directory, descending into subdirectories if needed")
                .arg(clap::Arg::from_usage("--path <path> 'Directory within the archive'").required(true)),
        )
        .subcommand(
            clap::SubCommand::with_name("walk")
                .about("Depth-first listing of every directory and file under a path")
                .arg(clap::Arg::from_usage("--path [path] 'Directory within the archive (default: root)'")),
        )
        .get_matches()
}
