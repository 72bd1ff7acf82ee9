//! Render command implementation

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::Result;
use crate::renderer::render;
use crate::scanner::{
    scan_directory, scan_directory_parallel, DirEntry, DisplayOptions, ScanOptions, SortOrder,
};

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let options = scan_options(&args, config)?;
    let parallel = args.parallel || config.scan.parallel;

    tracing::info!(path = %args.path.display(), parallel, "Scanning directory");
    tracing::debug!(?options, "Scan options");

    let entry = if parallel {
        scan_directory_parallel(&args.path, &options)?
    } else {
        scan_directory(&args.path, &options)?
    };

    print!("{}", format_output(&entry, !args.no_report));
    Ok(())
}

/// Command line flags win over the configuration file
pub fn scan_options(args: &RenderArgs, config: &Config) -> Result<ScanOptions> {
    let sort: SortOrder = args
        .sort
        .as_deref()
        .unwrap_or(&config.scan.sort)
        .parse()?;

    let mut options = ScanOptions::new()
        .with_hidden(args.all || config.scan.include_hidden)
        .with_follow_symlinks(args.follow_symlinks || config.scan.follow_symlinks)
        .with_sort(sort)
        .with_dirs_first(args.dirs_first || config.scan.dirs_first)
        .with_display(DisplayOptions {
            show_size: args.size || config.display.show_size,
            classify: args.classify || config.display.classify,
        });

    if let Some(depth) = args.max_depth.or(config.scan.max_depth) {
        options = options.with_max_depth(depth);
    }

    Ok(options)
}

/// The diagram, optionally followed by a blank line and the totals
pub fn format_output(entry: &DirEntry, report: bool) -> String {
    let mut output = render(entry);
    if report {
        output.push('\n');
        output.push_str(&summary(entry));
        output.push('\n');
    }
    output
}

fn summary(entry: &DirEntry) -> String {
    format!(
        "{} {}, {} {}",
        entry.dir_count,
        if entry.dir_count == 1 { "directory" } else { "directories" },
        entry.file_count,
        if entry.file_count == 1 { "file" } else { "files" },
    )
}
