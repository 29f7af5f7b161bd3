//! The `inspect` command: probe a media file and print its report as
//! a single-line JSON object.

use crate::cli::InspectArgs;
use anyhow::{Context, Result};
use vidutils_core::inspect::{inspect, InspectOptions};

pub fn run(args: InspectArgs) -> Result<()> {
    let mut options = InspectOptions::new(&args.src);
    options.extract_thumbnail = args.thumbnail;
    options.thumbnail_time_offset = args.thumbnail_time_offset;
    options.thumbnail_width = args.thumbnail_width;
    options.thumbnail_height = args.thumbnail_height;

    let report = inspect(&options)
        .with_context(|| format!("failed to inspect '{}'", args.src.display()))?;

    println!("{}", report.to_json()?);
    Ok(())
}
