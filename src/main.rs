//! Bouquet Studio CLI
//!
//! Usage:
//!   bouquet-studio [OPTIONS]
//!
//! Options:
//!   -f, --flower <SPEC>    Add flowers as species:color:count (repeatable)
//!   -p, --pattern <NAME>   Arrangement pattern: compact, asymmetric, cascade
//!   -s, --seed <SEED>      Reproducible layout seed
//!   -o, --output <FILE>    Write SVG to a file instead of stdout
//!   -c, --catalog <FILE>   Custom flower catalog (TOML format)
//!   -h, --help             Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bouquet_studio::{
    demo_selection, layout, render_circles, render_scheme, Catalog, Composer, FlowerRole, Gallery,
    Pattern, PhotoClient, Scheme, Selection, SvgConfig,
};

#[derive(Parser)]
#[command(name = "bouquet-studio")]
#[command(about = "Procedural flower bouquet composer")]
struct Cli {
    /// Flowers to include, as species:color:count (repeatable)
    #[arg(short, long = "flower", value_name = "SPEC")]
    flowers: Vec<String>,

    /// Arrangement pattern: compact, asymmetric, or cascade
    #[arg(short, long, default_value = "compact")]
    pattern: String,

    /// Seed for reproducible layouts (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Flower catalog file (TOML format)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Compose a ready-made demo selection
    #[arg(long)]
    demo: bool,

    /// Render a curated gallery bouquet as a mini preview
    #[arg(long, value_name = "ID")]
    gallery: Option<u32>,

    /// Compose one scheme per pattern, writing one file each
    #[arg(long)]
    all_patterns: bool,

    /// Request a photorealistic render from this endpoint after composing
    #[arg(long, value_name = "URL")]
    photo_endpoint: Option<String>,

    /// List catalog flowers by role
    #[arg(long)]
    list_flowers: bool,

    /// List color palettes
    #[arg(long)]
    list_palettes: bool,

    /// List curated gallery bouquets
    #[arg(long)]
    list_gallery: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle listing flags first
    if cli.list_flowers || cli.list_palettes {
        let catalog = load_catalog(cli.catalog.as_deref());
        if cli.list_flowers {
            print_flowers(&catalog);
        }
        if cli.list_palettes {
            print_palettes(&catalog);
        }
        return;
    }

    if cli.list_gallery {
        print_gallery(&Gallery::default());
        return;
    }

    // Gallery previews carry their own selection and mini sizing
    if let Some(id) = cli.gallery {
        run_gallery(id, cli.seed, cli.output.as_deref());
        return;
    }

    let catalog = load_catalog(cli.catalog.as_deref());

    let selection = if cli.demo {
        demo_selection()
    } else {
        build_selection(&catalog, &cli.flowers)
    };

    if selection.is_empty() {
        print_intro();
        return;
    }

    let pattern = match Pattern::parse(&cli.pattern) {
        Some(pattern) => pattern,
        None => {
            eprintln!(
                "Warning: unknown pattern '{}', using {}",
                cli.pattern,
                Pattern::Compact
            );
            Pattern::Compact
        }
    };

    if cli.all_patterns {
        run_all_patterns(
            &selection,
            cli.output.as_deref(),
            cli.photo_endpoint.as_deref(),
        );
        return;
    }

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let circles = layout::layout(selection.entries(), pattern, seed);
    let svg = render_circles(&circles, selection.entries(), &SvgConfig::default());
    write_output(cli.output.as_deref(), &svg);

    if let Some(endpoint) = &cli.photo_endpoint {
        let scheme = Scheme::new(0, pattern, circles, selection.entries().to_vec());
        request_photo(endpoint, &scheme, cli.output.is_some());
    }
}

/// Compose all three pattern schemes and write one SVG per pattern
fn run_all_patterns(selection: &Selection, output: Option<&Path>, photo_endpoint: Option<&str>) {
    let mut composer = Composer::with_selection(selection.clone());
    let schemes = match composer.generate() {
        Ok(schemes) => schemes.to_vec(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for scheme in &schemes {
        let svg = render_scheme(scheme, &SvgConfig::default());
        let path = pattern_output_path(output, scheme.pattern);
        write_output(Some(&path), &svg);
    }

    if let Some(endpoint) = photo_endpoint {
        if let Some(scheme) = composer.selected() {
            request_photo(endpoint, scheme, true);
        }
    }
}

/// Render a curated gallery bouquet at mini-preview scale
fn run_gallery(id: u32, seed: Option<u64>, output: Option<&Path>) {
    let gallery = Gallery::default();
    let bouquet = match gallery.bouquet(id) {
        Some(bouquet) => bouquet,
        None => {
            eprintln!(
                "Error: no gallery bouquet with id {} (run --list-gallery)",
                id
            );
            std::process::exit(1);
        }
    };

    let circles = match seed {
        Some(seed) => bouquet.mini_layout(&mut StdRng::seed_from_u64(seed)),
        None => bouquet.mini_layout(&mut rand::rng()),
    };

    let selection = bouquet.selection();
    let config = SvgConfig::default().with_view_size(bouquet.mini_config().canvas_size);
    let svg = render_circles(&circles, selection.entries(), &config);
    write_output(output, &svg);
}

fn load_catalog(path: Option<&Path>) -> Catalog {
    match path {
        Some(path) => match Catalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Catalog::default(),
    }
}

fn build_selection(catalog: &Catalog, specs: &[String]) -> Selection {
    let mut selection = Selection::new();
    for spec in specs {
        let (species, color, count) = match parse_flower_spec(spec) {
            Ok(parts) => parts,
            Err(message) => {
                eprintln!("Error in flower spec '{}': {}", spec, message);
                std::process::exit(1);
            }
        };
        let flower = match catalog.resolve(species, color) {
            Ok(flower) => flower,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        let key = selection.add(&flower.species, flower.role, &flower.color, &flower.display_name);
        selection.set_count(&key, count);
    }
    selection
}

/// Parse a `species:color` or `species:color:count` flower spec
fn parse_flower_spec(spec: &str) -> Result<(&str, &str, i32), String> {
    let mut parts = spec.splitn(3, ':');
    let species = parts.next().unwrap_or_default();
    let color = parts.next().unwrap_or_default();
    if species.is_empty() || color.is_empty() {
        return Err("expected species:color or species:color:count".to_string());
    }
    let count = match parts.next() {
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| format!("count '{}' is not a number", raw))?,
        None => 1,
    };
    if count < 1 {
        return Err("count must be at least 1".to_string());
    }
    Ok((species, color, count))
}

fn pattern_output_path(output: Option<&Path>, pattern: Pattern) -> PathBuf {
    let base = output.unwrap_or_else(|| Path::new("bouquet.svg"));
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("bouquet");
    base.with_file_name(format!("{}-{}.svg", stem, pattern))
}

fn write_output(path: Option<&Path>, svg: &str) {
    match path {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", svg),
    }
}

fn request_photo(endpoint: &str, scheme: &Scheme, url_to_stdout: bool) {
    let client = match PhotoClient::new(endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error requesting photo: {}", e);
            std::process::exit(1);
        }
    };
    match client.generate(scheme) {
        Ok(result) => {
            if url_to_stdout {
                println!("{}", result.image_url);
            } else {
                eprintln!("Photo: {}", result.image_url);
            }
        }
        Err(e) => {
            eprintln!("Error requesting photo: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Bouquet Studio - procedural flower bouquet composer

USAGE:
    bouquet-studio [OPTIONS]
    bouquet-studio -f rose:red:3 -f gypsophila:white:5 > bouquet.svg

OPTIONS:
    -f, --flower <SPEC>       Add flowers as species:color:count (repeatable)
    -p, --pattern <NAME>      Arrangement pattern: compact, asymmetric, cascade
    -s, --seed <SEED>         Reproducible layout seed
    -o, --output <FILE>       Write SVG to a file instead of stdout
    -c, --catalog <FILE>      Custom flower catalog (TOML file)
    --demo                    Compose a ready-made demo selection
    --gallery <ID>            Render a curated bouquet as a mini preview
    --all-patterns            Compose one scheme per pattern
    --photo-endpoint <URL>    Request a photorealistic render after composing
    --list-flowers            List catalog flowers by role
    --list-palettes           List color palettes
    --list-gallery            List curated gallery bouquets
    -h, --help                Print help

QUICK START:
    bouquet-studio -f rose:red:3 -f chrysanthemum:yellow:2 -p cascade > bouquet.svg

Colors accept catalog names (red) or hex values (#DC143C).
Run --list-flowers to see every species and its colors."#
    );
}

fn print_flowers(catalog: &Catalog) {
    println!("AVAILABLE FLOWERS");
    println!("=================");
    for role in FlowerRole::ALL {
        println!();
        println!("{}:", role_heading(role));
        for spec in catalog.species(role) {
            let colors = spec
                .colors
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!("    {:<14} {}", spec.id, colors);
        }
    }
}

fn role_heading(role: FlowerRole) -> &'static str {
    match role {
        FlowerRole::Focal => "Focal flowers",
        FlowerRole::Secondary => "Secondary flowers",
        FlowerRole::Filler => "Greenery and fillers",
    }
}

fn print_palettes(catalog: &Catalog) {
    println!("COLOR PALETTES");
    println!("==============");
    for palette in catalog.palettes() {
        println!();
        println!("{} - {}", palette.id, palette.name);
        println!("    {}", palette.description);
        println!("    {}", palette.colors.join("  "));
    }
}

fn print_gallery(gallery: &Gallery) {
    println!("CURATED GALLERY");
    println!("===============");
    for bouquet in gallery.bouquets() {
        println!();
        println!("{} - {}", bouquet.id, bouquet.name);
        println!(
            "    {} focal, {} secondary, {} filler",
            bouquet.focal_count, bouquet.secondary_count, bouquet.filler_count
        );
        println!("    {}", bouquet.colors.join("  "));
    }
}
