use crate::screen::Disease;
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="pedscreen",
          version=&**FULL_VERSION,
          about="Screens a couple's and their parents' genetic sequences for heritable disorder markers",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Family Disease Marker Screen")]
    Screen(ScreenArgs),
    #[clap(about = "Reverse Complement Utility")]
    Complement(ComplementArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("screen")))]
#[command(arg_required_else_help(true))]
pub struct ScreenArgs {
    #[clap(required = true)]
    #[clap(short = 'd')]
    #[clap(long = "disease")]
    #[clap(help = "Disease to screen for (huntington, sickle-cell, or dmd)")]
    #[clap(value_name = "DISEASE")]
    pub disease: Disease,

    #[clap(required = true)]
    #[clap(long = "father")]
    #[clap(help = "File with the father's genetic sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub father_path: PathBuf,

    #[clap(required = true)]
    #[clap(long = "mother")]
    #[clap(help = "File with the mother's genetic sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub mother_path: PathBuf,

    #[clap(required = true)]
    #[clap(long = "paternal-grandfather")]
    #[clap(help = "File with the paternal grandfather's genetic sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub paternal_grandfather_path: PathBuf,

    #[clap(required = true)]
    #[clap(long = "paternal-grandmother")]
    #[clap(help = "File with the paternal grandmother's genetic sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub paternal_grandmother_path: PathBuf,

    #[clap(required = true)]
    #[clap(long = "maternal-grandfather")]
    #[clap(help = "File with the maternal grandfather's genetic sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub maternal_grandfather_path: PathBuf,

    #[clap(required = true)]
    #[clap(long = "maternal-grandmother")]
    #[clap(help = "File with the maternal grandmother's genetic sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub maternal_grandmother_path: PathBuf,

    #[clap(long = "history")]
    #[clap(help = "CSV file to append this run to")]
    #[clap(value_name = "HISTORY")]
    #[arg(value_parser = check_prefix_path)]
    pub history_path: Option<PathBuf>,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Write the report to a file instead of stdout")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("complement")))]
#[command(arg_required_else_help(true))]
pub struct ComplementArgs {
    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "sequence")]
    #[clap(help = "File with the genetic sequence to complement")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub sequence_path: PathBuf,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_prefix_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}
