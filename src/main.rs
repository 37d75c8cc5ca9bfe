use anyhow::{Context, Result};
use clap::Parser;
use log2::*;
use logger::spinner::Spinner;
use std::{path::Path, process};
use url::Url;

use rusty_gallery::{
    component::{Component, Renderable},
    gallery::{build_containers, load_database, render_gallery, resolve_links, write_gallery},
    template::TemplateRegistry,
};

mod logger;

/// Renders the images found by the crawler as an HTML results page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ProgramArgs {
    /// The image database written by the crawler
    #[arg(short, long, default_value_t = String::from("images/database.json"))]
    database: String,

    /// The HTML file to write the gallery to
    #[arg(short, long, default_value_t = String::from("gallery.html"))]
    output: String,

    /// Resolve relative image and page links against this URL
    #[arg(short, long)]
    base_url: Option<String>,

    /// Max images
    #[arg(long, default_value_t = 100)]
    max_images: usize,

    /// The title of the results page
    #[arg(short, long, default_value_t = String::from("Image results"))]
    title: String,

    /// Write each image container's template and context
    /// as JSON instead of rendering HTML
    #[arg(long, default_value_t = false)]
    dump_context: bool,
}

const BUILD_STEPS: usize = 4;

async fn build_gallery(args: &ProgramArgs, spinner: &Spinner) -> Result<()> {
    spinner.start_step("loading image database");
    let mut database = load_database(Path::new(&args.database)).await?;
    spinner.finish_step(format!("loaded {} images from {}", database.len(), args.database));

    spinner.start_step("resolving links");
    if let Some(base_url) = &args.base_url {
        let base = Url::parse(base_url).with_context(|| format!("invalid base url {}", base_url))?;
        resolve_links(&mut database, &base);
    }
    spinner.finish_step("resolved links");

    spinner.start_step("building image containers");
    let containers = build_containers(&database, args.max_images);
    info!("{} of {} images kept", containers.len(), database.len());
    spinner.finish_step(format!("built {} image containers", containers.len()));

    spinner.start_step(format!("writing {}", args.output));
    let output = if args.dump_context {
        let renderables: Vec<Renderable> = containers.iter().map(Component::render).collect();
        serde_json::to_string_pretty(&renderables)?
    } else {
        render_gallery(&TemplateRegistry::new()?, &args.title, &containers)?
    };
    write_gallery(Path::new(&args.output), &output).await?;
    spinner.finish_step(format!("wrote {}", args.output));

    Ok(())
}

async fn try_main(args: ProgramArgs) -> Result<()> {
    let spinner = Spinner::new(BUILD_STEPS);
    let result = build_gallery(&args, &spinner).await;

    if let Err(e) = &result {
        spinner.fail_step(format!("{:#}", e));
    }
    spinner.finish();

    result
}

fn pretty_print_args(args: &ProgramArgs) {
    println!(
        "{}",
        console::style("GALLERY INPUT ARGUMENTS").white().on_black()
    );
    println!(
        "{}  Image database: {}",
        console::Emoji("📁", ""),
        console::style(&args.database).bold().cyan()
    );
    println!(
        "{}  Base URL: {}",
        console::Emoji("🌐", ""),
        console::style(args.base_url.as_deref().unwrap_or("-")).bold().cyan()
    );
    println!(
        "{}  Maximum number of images: {}",
        console::Emoji("🖼️", ""),
        console::style(&args.max_images).bold().cyan()
    );
    println!(
        "{}  Page title: {}",
        console::Emoji("📝", ""),
        console::style(&args.title).bold().cyan()
    );
    println!(
        "{}  Output path: {}",
        console::Emoji("📝", ""),
        console::style(&args.output).bold().cyan()
    );
    println!()
}

#[tokio::main]
async fn main() {
    let _log2 = log2::open("log.txt").start();

    // Print the arguments passed in nicely
    let args = ProgramArgs::parse();
    pretty_print_args(&args);

    match try_main(args).await {
        Ok(_) => {
            println!(
                "{} {}",
                console::Emoji("✅", ""),
                console::style("Finished!").green()
            );
        }
        Err(e) => {
            error!("Error: {:?}", e);
            eprintln!("Error: {:#}", e);
            process::exit(-1);
        }
    }
}
