use anyhow::Context;
use clap::{Parser, Subcommand};
use folio::platform::{AccessibilityProvider, DocumentAccessibility};
use folio::rendering::{digest_html, render_document};
use folio::{Content, Portfolio, SectionRevealController, SiteConfig, ThemeMode, Viewport};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Render and simulate the portfolio site
#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render the portfolio page and simulate scroll-triggered reveals")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Inputs {
    /// Site content as JSON (defaults to the built-in content)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Site configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Inputs {
    fn load(&self) -> anyhow::Result<(Content, SiteConfig)> {
        let content = match &self.content {
            Some(p) => Content::from_path(p).with_context(|| format!("loading content from {}", p.display()))?,
            None => Content::default(),
        };
        let config = match &self.config {
            Some(p) => SiteConfig::from_path(p).with_context(|| format!("loading config from {}", p.display()))?,
            None => SiteConfig::default(),
        };
        Ok((content, config))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the page as HTML
    Render {
        #[command(flatten)]
        inputs: Inputs,

        /// Initial theme (light, dark, system)
        #[arg(long)]
        theme: Option<ThemeMode>,

        /// Render every section in its visible state
        #[arg(long)]
        reveal_all: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Scroll the page top to bottom and print each reveal
    Simulate {
        #[command(flatten)]
        inputs: Inputs,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Scroll increment in px
        #[arg(long, default_value_t = 120.0)]
        step: f64,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the accessibility tree as JSON
    A11y {
        #[command(flatten)]
        inputs: Inputs,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { inputs, theme, reveal_all, out } => {
            let (content, mut config) = inputs.load()?;
            if let Some(t) = theme {
                config.theme.default_theme = t;
            }
            config.reveal_all |= reveal_all;
            config.validate()?;
            content.validate()?;

            let page = render_document(&content, &SectionRevealController::new(config.reveal_threshold), &config)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &page.html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("wrote {} ({} bytes, sha256 {})", path.display(), page.html.len(), page.digest());
                }
                None => {
                    print!("{}", page.html);
                    log::info!("rendered {} bytes, sha256 {}", page.html.len(), digest_html(&page.html));
                }
            }
        }
        Commands::Simulate { inputs, width, height, step, json } => {
            let (content, mut config) = inputs.load()?;
            config.viewport = Viewport {
                width: width.unwrap_or(config.viewport.width),
                height: height.unwrap_or(config.viewport.height),
            };
            let mut page = Portfolio::mount(content, config)?;
            let events = page.run_scroll_session(step)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for b in &page.layout().sections {
                    println!("{:<9} top={:>7.1} height={:>7.1}", b.id.anchor(), b.rect.y, b.rect.height);
                }
                for e in &events {
                    println!("scroll_y={:>7.1} revealed {}", e.scroll_y, e.section);
                }
            }
            let hidden: Vec<_> = folio::SectionId::ALL
                .into_iter()
                .filter(|id| !page.is_revealed(*id))
                .collect();
            if !hidden.is_empty() {
                log::warn!("sections never revealed: {:?}", hidden);
            }
        }
        Commands::A11y { inputs } => {
            let (content, config) = inputs.load()?;
            let page = render_document(&content, &SectionRevealController::new(config.reveal_threshold), &config)?;
            let tree = DocumentAccessibility::new(page.html).with_layout(page.layout).export_tree();
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }
    Ok(())
}
