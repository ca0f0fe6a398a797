use anyhow::Result;
use book_geometry::{
    Binding, Dimensions, EditorSettings, FormatCatalog, GuideLayout, PrintSpecification, Rect,
    Template,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "bookt", about = "Book format and template tools", version)]
struct Cli {
    /// Editor settings JSON; flags override its values
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog of trim sizes
    Formats,

    /// Show the print specification for a format
    Spec {
        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show guide rectangles in device units
    Guides {
        #[command(flatten)]
        format: FormatArgs,

        /// Device units per inch
        #[arg(long)]
        dpi: Option<f64>,

        /// Hide the gutter band
        #[arg(long)]
        no_gutter: bool,

        /// Hide the spine band
        #[arg(long)]
        no_spine: bool,
    },

    /// Write a blank template document
    New {
        #[command(flatten)]
        format: FormatArgs,

        /// Template name
        #[arg(short, long)]
        name: Option<String>,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Import a template document and summarise it
    Inspect {
        /// Template JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Import a template document and export it again
    Normalize {
        /// Template JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct FormatArgs {
    /// Catalog format id (see `bookt formats`)
    #[arg(short, long)]
    format: Option<String>,

    /// Custom trim width in inches
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Custom trim height in inches
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Use the cover spread variant
    #[arg(long, conflicts_with = "single")]
    spread: bool,

    /// Use the single-page variant
    #[arg(long)]
    single: bool,

    /// Interior page count
    #[arg(short, long)]
    pages: Option<u32>,

    /// Binding method
    #[arg(long, value_enum)]
    binding: Option<BindingArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    Paperback,
    Hardcover,
}

impl From<BindingArg> for Binding {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Paperback => Self::Paperback,
            BindingArg::Hardcover => Self::Hardcover,
        }
    }
}

impl FormatArgs {
    fn apply(&self, settings: &mut EditorSettings) -> Result<()> {
        if let Some(format) = &self.format {
            settings.format_id = format.clone();
            settings.custom_size = None;
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            settings.custom_size = Some(Dimensions::validated_custom(width, height)?);
        }
        if self.spread {
            settings.is_spread = Some(true);
        } else if self.single {
            settings.is_spread = Some(false);
        }
        if self.pages.is_some() {
            settings.page_count = self.pages;
        }
        if let Some(binding) = self.binding {
            settings.binding = binding.into();
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::from_verbosity(cli.verbose).init()?;

    let mut settings = match &cli.settings {
        Some(path) => EditorSettings::load(path).await?,
        None => EditorSettings::default(),
    };
    let catalog = FormatCatalog::standard();

    match cli.command {
        Commands::Formats => {
            println!("{:<18} {:<18} {:>16} {:>16}  Companion", "Id", "Name", "Trim (in)", "Bleed (in)");
            for entry in catalog.iter() {
                let format = &entry.format;
                println!(
                    "{:<18} {:<18} {:>16} {:>16}  {}",
                    format.id(),
                    format.name(),
                    size(format.no_bleed()),
                    size(format.with_bleed()),
                    entry.companion.as_deref().unwrap_or("-")
                );
            }
        }

        Commands::Spec { format } => {
            format.apply(&mut settings)?;
            let resolved = settings.resolve(&catalog)?;
            print_specification(&book_geometry::calculate_specification(
                &resolved,
                settings.binding,
            ));
        }

        Commands::Guides {
            format,
            dpi,
            no_gutter,
            no_spine,
        } => {
            format.apply(&mut settings)?;
            if let Some(dpi) = dpi {
                settings.pixels_per_inch = dpi;
            }
            settings.show_gutter &= !no_gutter;
            settings.show_spine &= !no_spine;

            let resolved = settings.resolve(&catalog)?;
            let guides =
                book_geometry::compute_guides(&resolved, settings.scale(), settings.guide_options());
            println!(
                "Guides for {} at {} units/in:",
                resolved.name(),
                settings.scale().per_inch()
            );
            print_guides(&guides);
        }

        Commands::New {
            format,
            name,
            output,
        } => {
            format.apply(&mut settings)?;
            if let Some(name) = name {
                settings.template_name = name;
            }
            let template = settings.new_template(&catalog)?;
            template.save(&output).await?;
            println!("Created template {} → {}", template.name(), output.display());
        }

        Commands::Inspect { input } => {
            let template = Template::load(&input).await?;
            print_template(&template, &settings);
        }

        Commands::Normalize { input, output } => {
            let template = Template::load(&input).await?;
            template.save(&output).await?;
            println!("Normalized {} → {}", input.display(), output.display());
        }
    }

    Ok(())
}

fn size(dimensions: Dimensions) -> String {
    format!("{} × {}", dimensions.width, dimensions.height)
}

fn print_specification(spec: &PrintSpecification) {
    println!("Print Specification: {} ({})", spec.format_name, spec.format_id);
    println!("  Trim size: {} in", size(spec.trim));
    println!("  With bleed: {} in", size(spec.bled));
    println!("  Bleed: {} in per edge", spec.bleed_in);
    println!("  Safety margin: {} in", spec.safety_in);
    println!("  Live area: {} in", size(spec.live_area));
    println!("  Gutter: {} in", spec.gutter_in);
    if spec.is_spread {
        match spec.spine_in {
            Some(spine) => println!("  Spine ({}): {:.3} in", spec.binding.name(), spine),
            None => println!("  Spine: set a page count to size the spine"),
        }
    }
    match spec.page_count {
        Some(pages) => println!("  Pages: {}", pages),
        None => println!("  Pages: not set"),
    }
}

fn rect(label: &str, rect: &Rect) {
    println!(
        "  {:<7} x={:.2} y={:.2} w={:.2} h={:.2}",
        label, rect.x, rect.y, rect.width, rect.height
    );
}

fn print_guides(guides: &GuideLayout) {
    rect("page", &guides.page);
    rect("trim", &guides.trim);
    rect("safety", &guides.safety);
    if let Some(gutter) = &guides.gutter {
        rect("gutter", gutter);
    }
    if let Some(spine) = &guides.spine {
        rect("spine", spine);
    }
}

fn print_template(template: &Template, settings: &EditorSettings) {
    let format = template.format();
    println!("Template: {} ({})", template.name(), template.id());
    println!("  Format: {} ({})", format.name(), format.id());
    println!("  Trim size: {} in", size(format.no_bleed()));
    println!("  Elements: {}", template.elements().len());
    println!("  Placeholders: {}", template.placeholders().count());

    let outside = book_geometry::elements_outside_safety(template, settings.scale());
    if !outside.is_empty() {
        println!("  Outside safety area: {}", outside.join(", "));
    }
}
