use std::{cell::RefCell, path::PathBuf, rc::Rc};

use clap::{Parser, Subcommand, ValueEnum};
use event_showcase_core::{
    content, AppConfig, AssetViewport, CaptionViewport, Catalog, NavbarState, Section, Showcase,
    ShowcaseError,
};
use tracing_subscriber::EnvFilter;

fn main() -> event_showcase_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { catalog, section } => run_list(catalog.as_ref(), section),
        Commands::Browse {
            catalog,
            config,
            start,
            steps,
        } => run_browse(catalog, config.as_ref(), start, &steps),
        Commands::Scroll { config, offsets } => run_scroll(config.as_ref(), &offsets),
        Commands::Validate { path } => run_validate(&path),
    }
}

fn run_list(catalog: Option<&PathBuf>, section: ListSection) -> event_showcase_core::Result<()> {
    let catalog = match catalog {
        Some(path) => Catalog::load(path)?,
        None => section.catalog()?,
    };

    println!("#{}", section.anchor());
    for (position, item) in catalog.iter().enumerate() {
        println!("{:>2}. {} ({}) - {}", position + 1, item.title, item.id, item.description);
    }
    Ok(())
}

fn run_browse(
    catalog_path: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    start: Option<isize>,
    steps: &[String],
) -> event_showcase_core::Result<()> {
    let config = load_config(config_path)?;
    let catalog_path = catalog_path.or_else(|| config.carousel.catalog_path.map(PathBuf::from));
    let custom_catalog = catalog_path.is_some();
    let catalog = match catalog_path {
        Some(path) => Catalog::load(&path)?,
        None => content::event_assets()?,
    };

    let initial = start.map_or(config.carousel.initial_index, |slide| slide.saturating_sub(1));
    tracing::info!(items = catalog.len(), initial, "starting carousel");

    let mut showcase = Showcase::new(catalog, initial)?;
    let caption = Rc::new(RefCell::new(CaptionViewport::new()));
    showcase.attach(Rc::clone(&caption))?;
    // Custom catalogs carry their own visual keys, which the built-in
    // registry knows nothing about.
    let model = if custom_catalog {
        None
    } else {
        let model = Rc::new(RefCell::new(AssetViewport::new(content::asset_visuals()?)));
        showcase.attach(Rc::clone(&model))?;
        Some(model)
    };

    print_slide(&caption.borrow(), model.as_ref().map(|model| model.borrow()).as_deref());
    for raw in steps {
        let step = Step::parse(raw)?;
        let outcome = match step {
            Step::Next => showcase.advance().map(|_| ()),
            Step::Previous => showcase.retreat().map(|_| ()),
            Step::Slide(slide) => showcase.jump_to(slide.saturating_sub(1)).map(|_| ()),
        };

        match outcome {
            Ok(()) => {}
            Err(err @ ShowcaseError::OutOfRangeIndex { .. }) => {
                println!("  ! {err}; staying on slide {}", showcase.controller().current_index() + 1);
                continue;
            }
            Err(err) => return Err(err),
        }

        for failure in showcase.take_failures() {
            tracing::warn!(error = %failure, "viewport could not follow the carousel");
        }
        print_slide(&caption.borrow(), model.as_ref().map(|model| model.borrow()).as_deref());
    }
    Ok(())
}

fn print_slide(caption: &CaptionViewport, model: Option<&AssetViewport>) {
    if let Some(caption) = caption.caption() {
        match model.and_then(AssetViewport::current) {
            Some(visual) => println!("{caption}  <{} {:?}>", visual.color, visual.scale),
            None => println!("{caption}"),
        }
    }
}

fn run_scroll(config_path: Option<&PathBuf>, offsets: &[f32]) -> event_showcase_core::Result<()> {
    let config = load_config(config_path)?;
    let mut navbar = NavbarState::new(config.navbar.scroll_threshold);

    for offset in offsets {
        if navbar.on_scroll(*offset) {
            let form = if navbar.is_detached() { "detached" } else { "attached" };
            println!("{offset:>8.1}: navbar {form}");
        }
    }
    Ok(())
}

fn run_validate(path: &PathBuf) -> event_showcase_core::Result<()> {
    let catalog = Catalog::load(path)?;
    tracing::info!(?path, items = catalog.len(), "catalog is valid");
    println!("{}: {} items", path.display(), catalog.len());
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> event_showcase_core::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// One user interaction with the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Previous,
    /// One-based slide number, as shown on the dot indicators.
    Slide(isize),
}

impl Step {
    fn parse(raw: &str) -> event_showcase_core::Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" | "p" => Ok(Self::Previous),
            other => other
                .parse()
                .map(Self::Slide)
                .map_err(|_| ShowcaseError::InvalidStep(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListSection {
    Assets,
    Services,
    Gallery,
}

impl ListSection {
    fn catalog(self) -> event_showcase_core::Result<Catalog> {
        match self {
            Self::Assets => content::event_assets(),
            Self::Services => content::services(),
            Self::Gallery => content::gallery(),
        }
    }

    fn anchor(self) -> &'static str {
        let section = match self {
            Self::Assets => Section::Assets,
            Self::Services => Section::Services,
            Self::Gallery => Section::Gallery,
        };
        section.anchor()
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Event showcase carousel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the items of one of the page's catalogs.
    List {
        /// Catalog file to print instead of a built-in section.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Built-in section to print.
        #[arg(short, long, value_enum, default_value = "assets")]
        section: ListSection,
    },
    /// Drive the asset carousel with a sequence of steps.
    Browse {
        /// Catalog file to browse instead of the built-in event assets.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// One-based slide to start on; clamped into range.
        #[arg(short, long, allow_negative_numbers = true)]
        start: Option<isize>,
        /// `next`, `prev` or a one-based slide number.
        #[arg(allow_negative_numbers = true)]
        steps: Vec<String>,
    },
    /// Replay scroll offsets against the navigation bar.
    Scroll {
        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Vertical scroll offsets in pixels.
        #[arg(allow_negative_numbers = true)]
        offsets: Vec<f32>,
    },
    /// Check that a catalog file is well formed.
    Validate {
        /// Path to the catalog JSON file.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_steps() {
        assert_eq!(Step::parse("next").unwrap(), Step::Next);
        assert_eq!(Step::parse("P").unwrap(), Step::Previous);
        assert_eq!(Step::parse("3").unwrap(), Step::Slide(3));
        assert_eq!(Step::parse("-1").unwrap(), Step::Slide(-1));
    }

    #[test]
    fn rejects_unknown_steps() {
        let err = Step::parse("sideways").unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidStep(step) if step == "sideways"));
    }

    #[test]
    fn cli_accepts_browse_steps() {
        let cli = Cli::try_parse_from(["showcase", "browse", "--start", "2", "next", "9", "prev"])
            .unwrap();
        match cli.command {
            Commands::Browse { start, steps, .. } => {
                assert_eq!(start, Some(2));
                assert_eq!(steps, ["next", "9", "prev"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn list_sections_map_to_page_anchors() {
        assert_eq!(ListSection::Gallery.anchor(), "gallery");
        assert_eq!(ListSection::Services.catalog().unwrap().len(), 3);
    }
}
