use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use figweave_api::Client;
use figweave_schema::{File, Node};

#[derive(Parser)]
#[command(name = "figweave")]
#[command(about = "figweave — Figma frame to HTML + CSS generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate index.html + styles.css for one frame of a file
    Build {
        /// Figma file key (falls back to the FIGMA_FILE_KEY env var)
        #[arg(long)]
        file_key: Option<String>,

        /// Frame name to render (falls back to FRAME_NAME, then to the
        /// first top-level frame)
        #[arg(long)]
        frame: Option<String>,

        /// Read the file JSON from disk instead of the API
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "output")]
        out: PathBuf,
    },

    /// List the top-level frames of a file
    Frames {
        /// Figma file key (falls back to the FIGMA_FILE_KEY env var)
        #[arg(long)]
        file_key: Option<String>,

        /// Read the file JSON from disk instead of the API
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            file_key,
            frame,
            input,
            out,
        } => cmd_build(file_key.as_deref(), frame, input.as_deref(), &out),
        Command::Frames { file_key, input } => cmd_frames(file_key.as_deref(), input.as_deref()),
    }
}

/// Obtain a file either from a local JSON dump or from the API.
fn load_file(input: Option<&Path>, file_key: Option<&str>) -> File {
    if let Some(path) = input {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                std::process::exit(1);
            }
        };
        match serde_json::from_str(&source) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error parsing {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    } else {
        let token = match std::env::var("FIGMA_TOKEN") {
            Ok(token) => token,
            Err(_) => {
                eprintln!("Error: set the FIGMA_TOKEN env var (and optionally FIGMA_FILE_KEY).");
                std::process::exit(1);
            }
        };
        let key = match file_key
            .map(str::to_string)
            .or_else(|| std::env::var("FIGMA_FILE_KEY").ok())
        {
            Some(key) => key,
            None => {
                eprintln!("Error: pass --file-key or set FIGMA_FILE_KEY.");
                std::process::exit(1);
            }
        };
        match Client::new(token).file(&key) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Fetch error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn cmd_build(file_key: Option<&str>, frame: Option<String>, input: Option<&Path>, out: &Path) {
    let file = load_file(input, file_key);

    let frames = file.top_frames();
    if frames.is_empty() {
        eprintln!("Error: no top-level frames in this file.");
        std::process::exit(1);
    }

    // Named frame if requested and found, first frame otherwise.
    let wanted = frame.or_else(|| std::env::var("FRAME_NAME").ok());
    let target = match wanted.as_deref() {
        Some(name) => frames
            .iter()
            .find(|f| f.name == name)
            .unwrap_or(&frames[0])
            .node,
        None => frames[0].node,
    };

    let (width, height) = frame_size(target);
    let output = figweave_codegen::render(target);

    if let Err(e) = std::fs::create_dir_all(out) {
        eprintln!("Error creating {}: {e}", out.display());
        std::process::exit(1);
    }

    let html_path = out.join("index.html");
    let css_path = out.join("styles.css");

    if let Err(e) = std::fs::write(&html_path, boilerplate(&output.html, width, height)) {
        eprintln!("Error writing {}: {e}", html_path.display());
        std::process::exit(1);
    }
    if let Err(e) = std::fs::write(&css_path, output.stylesheet()) {
        eprintln!("Error writing {}: {e}", css_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {} and {}", html_path.display(), css_path.display());
}

fn cmd_frames(file_key: Option<&str>, input: Option<&Path>) {
    let file = load_file(input, file_key);

    let frames = file.top_frames();
    if frames.is_empty() {
        eprintln!("Error: no top-level frames in this file.");
        std::process::exit(1);
    }

    for frame in frames {
        println!("{} / {} ({})", frame.page, frame.name, frame.id);
    }
}

/// Artboard dimensions from the root's bounding box, with a phone-sized
/// fallback when the box is absent.
fn frame_size(node: &Node) -> (i64, i64) {
    match node.absolute_bounding_box {
        Some(bb) => (bb.width.round() as i64, bb.height.round() as i64),
        None => (390, 844),
    }
}

/// Wrap the generated markup in a standalone page: font links, the
/// stylesheet link, and an artboard that scales to fit the viewport.
fn boilerplate(body: &str, width: i64, height: i64) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>figweave</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
  <link rel="stylesheet" href="./styles.css" />
  <style>
    html,body{{margin:0;padding:0}}
    *,*::before,*::after{{box-sizing:border-box}}
    p{{margin:0}}
    body{{display:flex;justify-content:center;align-items:center;background:#ffffff;min-height:100vh}}
    .artboard{{width:{width}px;height:{height}px;transform-origin:top center}}
  </style>
</head>
<body>
  <div class="artboard" data-frame-w="{width}" data-frame-h="{height}">
{body}
  </div>
  <script>
    (function fitArtboard(){{
      const el = document.querySelector('.artboard');
      function fit(){{
        const fw = Number(el.getAttribute('data-frame-w')) || el.offsetWidth;
        const fh = Number(el.getAttribute('data-frame-h')) || el.offsetHeight;
        const scale = Math.min(window.innerWidth / fw, window.innerHeight / fh);
        el.style.transform = 'scale(' + scale + ')';
      }}
      window.addEventListener('resize', fit);
      fit();
    }})();
  </script>
</body>
</html>"#
    )
}
