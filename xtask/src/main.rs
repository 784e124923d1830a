//! Build automation tasks for the escape room
//!
//! Usage:
//!   cargo xtask build-web [--dev]          # wasm32 build staged in dist/web
//!   cargo xtask package-itch [--no-build]  # zip dist/web for itch.io
//!   cargo xtask clean                      # remove dist/

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// macroquad's JS loader, pinned to the version the game links against
const MQ_JS_BUNDLE_URL: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const WASM_NAME: &str = "escape-room.wasm";
const ITCH_ZIP: &str = "escape-room-itch.zip";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the escape room")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the browser version into dist/web
    BuildWeb {
        /// Tag the page title and loading text with DEV
        #[arg(long)]
        dev: bool,
    },
    /// Zip dist/web for an itch.io HTML upload
    PackageItch {
        /// Zip whatever is already in dist/web
        #[arg(long)]
        no_build: bool,
    },
    /// Delete dist/
    Clean,
}

fn main() -> Result<()> {
    let root = workspace_root()?;

    match Cli::parse().command {
        Task::BuildWeb { dev } => WebDist::new(&root).build(dev),
        Task::PackageItch { no_build } => {
            let web = WebDist::new(&root);
            if !no_build {
                web.build(false)?;
            }
            web.package_itch()
        }
        Task::Clean => clean(&root),
    }
}

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run to completion, failing on a non-zero exit
fn run(cmd: &mut Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let status = cmd
        .status()
        .with_context(|| format!("could not start {}", program))?;
    if !status.success() {
        bail!("{} exited with {}", program, status);
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).with_context(|| format!("copying {}", from.display()))?;
        }
    }
    Ok(())
}

fn clean(root: &Path) -> Result<()> {
    let dist = root.join("dist");
    if dist.exists() {
        fs::remove_dir_all(&dist).context("removing dist/")?;
        println!("Removed {}", dist.display());
    }
    Ok(())
}

/// The staged browser build under dist/web
struct WebDist {
    root: PathBuf,
    dir: PathBuf,
}

impl WebDist {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            dir: root.join("dist").join("web"),
        }
    }

    fn build(&self, dev: bool) -> Result<()> {
        self.compile()?;
        self.reset_dir()?;
        self.stage_wasm()?;
        self.stage_page(dev)?;
        self.fetch_js_bundle()?;
        copy_tree(&self.root.join("assets"), &self.dir.join("assets"))?;

        println!("Web build staged in {}", self.dir.display());
        Ok(())
    }

    fn compile(&self) -> Result<()> {
        println!("Compiling for {}...", WASM_TARGET);
        run(Command::new("cargo")
            .current_dir(&self.root)
            .args(["build", "--release", "--bin", "escape-room", "--target", WASM_TARGET]))
    }

    fn reset_dir(&self) -> Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn stage_wasm(&self) -> Result<()> {
        let built = self
            .root
            .join("target")
            .join(WASM_TARGET)
            .join("release")
            .join(WASM_NAME);
        fs::copy(&built, self.dir.join(WASM_NAME))
            .with_context(|| format!("{} missing after build", built.display()))?;
        Ok(())
    }

    /// Canvas page; dev builds get a tagged title so the tabs are told apart
    fn stage_page(&self, dev: bool) -> Result<()> {
        let page = fs::read_to_string(self.root.join("web").join("index.html"))
            .context("reading web/index.html")?;
        let page = if dev {
            page.replace("<title>Escape Room", "<title>[DEV] Escape Room")
                .replace("Loading Escape Room...", "Loading Escape Room (DEV)...")
        } else {
            page
        };
        fs::write(self.dir.join("index.html"), page)?;
        Ok(())
    }

    fn fetch_js_bundle(&self) -> Result<()> {
        let dest = self.dir.join("mq_js_bundle.js");
        println!("Fetching {}", MQ_JS_BUNDLE_URL);
        run(Command::new("curl")
            .args(["--fail", "--location", "--silent", "--show-error", "--output"])
            .arg(&dest)
            .arg(MQ_JS_BUNDLE_URL))
    }

    fn package_itch(&self) -> Result<()> {
        if !self.dir.join(WASM_NAME).exists() {
            bail!("{} has no build; run `cargo xtask build-web` first", self.dir.display());
        }

        let zip = self.root.join("dist").join(ITCH_ZIP);
        if zip.exists() {
            fs::remove_file(&zip)?;
        }

        // itch.io wants index.html at the top of the archive
        run(Command::new("zip")
            .current_dir(&self.dir)
            .arg("-r")
            .arg(&zip)
            .arg("."))?;

        println!("itch.io archive: {}", zip.display());
        Ok(())
    }
}
