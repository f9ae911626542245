use clap::Parser;
use std::path::PathBuf;
use tileboard::config::PageGeometry;
use tileboard::imaging::CaptionFont;
use tileboard::{collect, output, render};

#[derive(Parser)]
#[command(name = "tileboard")]
#[command(about = "Lay out a directory of images as captioned contact-sheet pages")]
#[command(long_about = "\
Lay out a directory of images as captioned contact-sheet pages

Every .png, .jpg, .jpeg and .gif under the input directory (recursively,
in file-name order) becomes a framed tile captioned with its file name.
Tiles fill a 612x792 page row by row and each page is written as a
lossless PNG:

  output/
  ├── board-0.png
  ├── board-1.png
  └── board-2.png      # last page, possibly partial

Captions too wide for their tile are set at a smaller size and wrapped
onto several lines.")]
#[command(version)]
struct Cli {
    /// Directory to collect images from
    #[arg(long, default_value = ".")]
    input: PathBuf,

    /// Directory the pages are written to (created if missing)
    #[arg(long, default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let geometry = PageGeometry::default();
    geometry.validate()?;
    let font = CaptionFont::load(geometry.dpi)?;

    println!("==> Collecting {}", cli.input.display());
    let entries = collect::collect(&cli.input)?;
    output::print_collect_output(&entries, &cli.input);

    println!("==> Rendering → {}", cli.output.display());
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for report in rx {
            for line in output::format_page_report(&report) {
                println!("{}", line);
            }
        }
    });
    let result = render::render(&entries, &cli.output, &geometry, &font, Some(tx));
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;
    let summary = result?;
    output::print_render_summary(&summary);

    Ok(())
}
