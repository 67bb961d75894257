use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orthic::{Encoding, OrthicConfig, Transcriber};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orthic")]
#[command(about = "Transcribe English text into Orthic shorthand")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Glyph directory (overrides the config file)
    #[arg(long, global = true)]
    glyphs: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Single word to encode for quick testing
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: encode each line read from stdin
    Repl,
    /// Print the token sequence of each word
    Encode {
        words: Vec<String>,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render text into PNG pages
    Render {
        /// Text to render; read from --file or stdin when absent
        text: Option<String>,
        /// Read text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Output path prefix; pages are written as <prefix>-<n>.png
        #[arg(short, long, default_value = "orthic")]
        output: PathBuf,
        /// Use the e-reader page preset
        #[arg(long)]
        kindle: bool,
        #[arg(long)]
        line_width: Option<u32>,
        #[arg(long)]
        line_height: Option<u32>,
        #[arg(long)]
        lines_per_page: Option<usize>,
        #[arg(long)]
        spacing: Option<u32>,
    },
    /// Render one word into a PNG file
    Word {
        word: String,
        #[arg(short, long, default_value = "word.png")]
        output: PathBuf,
    },
    /// Print the effective configuration as TOML
    ShowConfig,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<OrthicConfig> {
    let mut config = match &cli.config {
        Some(path) => OrthicConfig::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => OrthicConfig::default(),
    };
    if let Some(dir) = &cli.glyphs {
        config.glyph_dir = dir.clone();
    }
    Ok(config)
}

fn load_transcriber(config: &OrthicConfig) -> Result<Transcriber> {
    Transcriber::from_config(config)
        .with_context(|| format!("loading glyphs from {}", config.glyph_dir.display()))
}

fn print_encoding(enc: &Encoding) {
    let symbols: Vec<String> = enc
        .tokens
        .iter()
        .map(|t| {
            let mut s = t.symbol.clone();
            if t.capital {
                s.push('^');
            }
            if t.double {
                s.push_str("×2");
            }
            s
        })
        .collect();
    println!("{} -> [{}]", enc.word, symbols.join(", "));
    if enc.unknown > 0 {
        println!("   {} unknown character(s)", enc.unknown);
    }
}

fn run_repl(transcriber: &Transcriber) -> Result<()> {
    println!("orthic encoder: type text and press Enter");
    println!("Ctrl-D to exit.");
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        for enc in transcriber.encode_text(&line) {
            print_encoding(&enc);
        }
    }
    Ok(())
}

fn handle_encode(transcriber: &Transcriber, words: &[String], json: bool) -> Result<()> {
    let encodings: Vec<Encoding> = words
        .iter()
        .flat_map(|w| transcriber.encode_text(w))
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&encodings)?);
    } else {
        encodings.iter().for_each(print_encoding);
    }
    Ok(())
}

fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("reading stdin")?;
    Ok(buf)
}

fn page_path(prefix: &Path, index: usize) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("-{}.png", index + 1));
    PathBuf::from(name)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Repl) => run_repl(&load_transcriber(&config)?),
        Some(Commands::Encode { words, json }) => {
            handle_encode(&load_transcriber(&config)?, &words, json)
        }
        Some(Commands::Render {
            text,
            file,
            output,
            kindle,
            line_width,
            line_height,
            lines_per_page,
            spacing,
        }) => {
            if kindle {
                config.base = orthic::Config::kindle();
            }
            let base = config.base_mut();
            if let Some(w) = line_width {
                base.line_width = w;
            }
            if let Some(h) = line_height {
                base.line_height = h;
            }
            if let Some(n) = lines_per_page {
                base.set_lines_per_page(Some(n));
            }
            if let Some(s) = spacing {
                base.word_spacing = s;
            }
            config.base.validate()?;

            let transcriber = load_transcriber(&config)?;
            let text = read_text(text, file.as_deref())?;
            let pages = transcriber.render_text(&text)?;
            for (i, page) in pages.iter().enumerate() {
                let path = page_path(&output, i);
                page.save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("wrote {}", path.display());
            }
            Ok(())
        }
        Some(Commands::Word { word, output }) => {
            let image = load_transcriber(&config)?.render_word(&word)?;
            image
                .save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("wrote {}", output.display());
            Ok(())
        }
        Some(Commands::ShowConfig) => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        None => {
            let transcriber = load_transcriber(&config)?;
            match cli.input {
                Some(input) => handle_encode(&transcriber, &[input], false),
                None => run_repl(&transcriber),
            }
        }
    }
}
