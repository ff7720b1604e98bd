//! resume-extract CLI - résumé PDF to structured JSON

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resume_extract::parser::sections;
use resume_extract::render::{self, RAW_FILE, RECORD_FILE};
use resume_extract::{
    detect_format_from_path, ExtractorChain, JsonFormat, OutputPaths, ParseOptions, ResumeParser,
};

const DEFAULT_INPUT: &str = "resume.pdf";

#[derive(Parser)]
#[command(name = "resume-extract")]
#[command(version)]
#[command(about = "Extract a structured résumé record from a PDF", long_about = None)]
struct Cli {
    /// Input résumé (PDF or extracted text)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    parse: ParseArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write resume.json and resume_raw.json
    Convert {
        /// Input résumé (PDF or extracted text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Print the structured record as JSON
    Json {
        /// Input résumé (PDF or extracted text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print the raw text record instead
        #[arg(long)]
        raw: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Print the normalized text
    Text {
        /// Input résumé (PDF or extracted text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show detected section headers
    Sections {
        /// Input résumé (PDF or extracted text)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Record defaults that are not part of the document.
#[derive(Args, Clone, Default)]
struct ParseArgs {
    /// Subtitle written into the record
    #[arg(long, env = "RESUME_SUBTITLE")]
    subtitle: Option<String>,

    /// GitHub URL used when the contact line has none
    #[arg(long, env = "RESUME_GITHUB")]
    github: Option<String>,

    /// Relative link to the résumé file
    #[arg(long, env = "RESUME_URL")]
    resume_url: Option<String>,

    /// Maximum number of projects
    #[arg(long)]
    max_projects: Option<usize>,

    /// Maximum number of education entries
    #[arg(long)]
    max_education: Option<usize>,

    /// Split a name whose space was lost ("JaneDoe" → "Jane Doe")
    #[arg(long)]
    split_name: bool,
}

impl ParseArgs {
    fn to_options(&self, input: &Path) -> ParseOptions {
        let mut options = ParseOptions::new().with_split_joined_name(self.split_name);

        if let Some(name) = input.file_name() {
            options = options.with_source(name.to_string_lossy());
        }
        if let Some(ref subtitle) = self.subtitle {
            options = options.with_subtitle(subtitle);
        }
        if let Some(ref github) = self.github {
            options = options.with_default_github(github);
        }
        if let Some(ref url) = self.resume_url {
            options = options.with_resume_url(url);
        }
        if self.max_projects.is_some() {
            options = options.with_max_projects(self.max_projects);
        }
        if self.max_education.is_some() {
            options = options.with_max_education(self.max_education);
        }
        log::debug!("Parse options: {:?}", options);
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            parse,
        }) => cmd_convert(&input, output.as_deref(), &parse),
        Some(Commands::Json {
            input,
            output,
            compact,
            raw,
            parse,
        }) => cmd_json(&input, output.as_deref(), compact, raw, &parse),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Sections { input }) => cmd_sections(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert ./resume.pdf next to itself
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            cmd_convert(&input, cli.output.as_deref(), &cli.parse)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .or_else(|| input.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting text...");
    let extraction = ExtractorChain::with_defaults().extract_file(input)?;
    pb.inc(1);

    pb.set_message("Parsing résumé...");
    let parser = ResumeParser::with_options(parse.to_options(input));
    let parsed = parser.parse(&extraction.text);
    pb.inc(1);

    pb.set_message("Writing JSON...");
    render::write_outputs(&parsed, &OutputPaths::in_dir(&output_dir), JsonFormat::Pretty)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    let record = &parsed.record;
    println!("\n{}", "Extracted:".green().bold());
    println!("  {} name: {}", "├─".dimmed(), record.name);
    println!("  {} education: {}", "├─".dimmed(), record.education.len());
    println!("  {} projects: {}", "├─".dimmed(), record.projects.len());
    println!(
        "  {} skills: {}",
        "└─".dimmed(),
        record.skills.languages.len() + record.skills.frameworks.len() + record.skills.tools.len()
    );
    println!("\n{} (via {})", "Output files:".green().bold(), extraction.extractor);
    println!("  {} {}", "├─".dimmed(), output_dir.join(RECORD_FILE).display());
    println!("  {} {}", "└─".dimmed(), output_dir.join(RAW_FILE).display());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    raw: bool,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = ResumeParser::with_options(parse.to_options(input)).parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if raw {
        render::to_json(&parsed.raw, format)?
    } else {
        render::to_json(&parsed.record, format)?
    };

    write_or_print(output, &json)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = ResumeParser::new().parse_file(input)?;
    write_or_print(output, &parsed.raw.text)
}

fn cmd_sections(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = ExtractorChain::with_defaults().extract_file(input)?;
    let format = detect_format_from_path(input)?;
    let lines = ResumeParser::new().lines(&extraction.text);

    println!("{}", "Document Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Extractor".bold(), extraction.extractor);
    println!("{}: {}", "Lines".bold(), lines.len());
    println!();

    let spans = sections::outline(lines.as_slice());
    if spans.is_empty() {
        println!("{}", "No section headers found".yellow());
    }
    for span in spans {
        println!(
            "{:>4}  {:<18} {} lines",
            span.start,
            span.header.name().bold(),
            span.len
        );
    }

    Ok(())
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "resume-extract".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Résumé PDF to structured JSON");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args_to_options() {
        let args = ParseArgs {
            subtitle: Some("Engineer".into()),
            github: Some("https://github.com/jane".into()),
            max_projects: Some(4),
            split_name: true,
            ..Default::default()
        };
        let options = args.to_options(Path::new("docs/cv.pdf"));
        assert_eq!(options.source, "cv.pdf");
        assert_eq!(options.subtitle, "Engineer");
        assert_eq!(options.default_github, "https://github.com/jane");
        assert_eq!(options.max_projects, Some(4));
        assert_eq!(options.max_education, Some(2));
        assert!(options.split_joined_name);
    }

    #[test]
    fn test_sections_command_on_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "Jane\nEDUCATION\nUSC\nMS\n").unwrap();
        assert!(cmd_sections(&path).is_ok());
    }
}
