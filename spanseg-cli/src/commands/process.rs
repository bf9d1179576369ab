//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Preprocessor};
use crate::language_source::LanguageSource;
use crate::output::{DirectoryWriter, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use spanseg_api::{CharTokenizer, Config, Segmentation, Segmenter, Tokenizer};
use spanseg_core::RuleRegistry;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Directory for `<name>.json` span files (default: stdout)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language code, name or alias [default: en]
    #[arg(short, long, value_name = "LANG", env = "SPANSEG_LANGUAGE")]
    pub language: Option<String>,

    /// Maximum number of tokens per segment [default: 2000]
    #[arg(short, long, value_name = "TOKENS")]
    pub max_segment_size: Option<usize>,

    /// External language rule file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the code declared in the external rule file
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// Fail on unknown languages instead of falling back to English
    #[arg(long)]
    pub strict_language: bool,

    /// Remove line breaks before tokenizing
    #[arg(long)]
    pub join_lines: bool,

    /// Delete this exact text from the input before tokenizing (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub remove: Vec<String>,

    /// Segment input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// HuggingFace tokenizer.json to tokenize with instead of characters
    #[cfg(feature = "hf-tokenizer")]
    #[arg(long, value_name = "FILE")]
    pub tokenizer: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Display text, one segment per line
    Text,
    /// Character spans as JSON
    Json,
}

impl OutputFormat {
    /// All formats with a one-line description
    pub fn descriptions() -> [(&'static str, &'static str); 2] {
        [
            ("text", "Display text; with -o also <name>.json span files"),
            ("json", "Character spans per file as JSON"),
        ]
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let language = self
            .language
            .clone()
            .unwrap_or_else(|| cli_config.processing.default_language.clone());
        let source = LanguageSource::from_args(
            &language,
            self.language_config.clone(),
            self.language_code.clone(),
        )?;
        log::info!("Language source: {}", source.display_name());
        let loaded = source.load()?;

        let config = Config::builder()
            .language(loaded.language)
            .max_segment_size(
                self.max_segment_size
                    .unwrap_or(cli_config.processing.max_segment_size),
            )
            .rendering(cli_config.rendering())
            .strict_language(self.strict_language)
            .build()?;

        self.dispatch(Arc::new(loaded.registry), config, &cli_config)
    }

    #[cfg(feature = "hf-tokenizer")]
    fn dispatch(
        &self,
        registry: Arc<RuleRegistry>,
        config: Config,
        cli_config: &CliConfig,
    ) -> Result<()> {
        match &self.tokenizer {
            Some(path) => {
                let tokenizer = spanseg_api::HfTokenizer::from_file(path)?;
                self.run(&Segmenter::from_parts(registry, tokenizer, config), cli_config)
            }
            None => self.run(
                &Segmenter::from_parts(registry, CharTokenizer, config),
                cli_config,
            ),
        }
    }

    #[cfg(not(feature = "hf-tokenizer"))]
    fn dispatch(
        &self,
        registry: Arc<RuleRegistry>,
        config: Config,
        cli_config: &CliConfig,
    ) -> Result<()> {
        self.run(
            &Segmenter::from_parts(registry, CharTokenizer, config),
            cli_config,
        )
    }

    fn run<T>(&self, segmenter: &Segmenter<T>, cli_config: &CliConfig) -> Result<()>
    where
        T: Tokenizer + Sync,
    {
        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s)", files.len());

        let preprocessor = Preprocessor::new(
            self.join_lines || cli_config.processing.join_lines,
            self.remove.clone(),
        );
        if !preprocessor.is_identity() {
            log::debug!("Preprocessing input: {:?}", preprocessor);
        }
        let progress = ProgressReporter::new(self.quiet, files.len() as u64);

        let segment_file = |path: &PathBuf| -> Result<Segmentation> {
            let text = FileReader::read_text(path)?;
            let text = preprocessor.apply(&text);
            let segmentation =
                segmenter
                    .segment(&text)
                    .map_err(|err| CliError::ProcessingError {
                        file: path.display().to_string(),
                        message: err.to_string(),
                    })?;
            progress.file_completed(&path.display().to_string());
            Ok(segmentation)
        };

        let results: Result<Vec<Segmentation>> = if self.parallel && files.len() > 1 {
            let threads = self
                .threads
                .unwrap_or(cli_config.performance.worker_threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(segment_file).collect())
        } else {
            files.iter().map(segment_file).collect()
        };
        progress.finish();
        let results = results?;

        let mut formatter = self.formatter();
        for (path, segmentation) in files.iter().zip(&results) {
            log::debug!(
                "{}: {} segment(s), {} -> {} tokens",
                path.display(),
                segmentation.len(),
                segmentation.token_count,
                segmentation.merged_token_count
            );
            formatter.write_file(path, segmentation)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn formatter(&self) -> Box<dyn OutputFormatter> {
        match (&self.output, self.format) {
            (Some(dir), format) => {
                Box::new(DirectoryWriter::new(dir, format == OutputFormat::Text))
            }
            (None, OutputFormat::Text) => Box::new(TextFormatter::stdout()),
            (None, OutputFormat::Json) => Box::new(JsonFormatter::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Already initialized when several commands run in one process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ProcessArgs,
    }

    fn parse(args: &[&str]) -> ProcessArgs {
        TestCli::try_parse_from(std::iter::once("process").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["-i", "a.txt"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.max_segment_size, None);
        assert!(!args.join_lines);
        assert!(args.remove.is_empty());
    }

    #[test]
    fn test_language_code_requires_config() {
        let result = TestCli::try_parse_from(["process", "-i", "a.txt", "--language-code", "xx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_writes_output_dir() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("heart.txt");
        fs::write(&input, "ཀ་ཁ།\nག་ང༔\n").unwrap();
        let out = dir.path().join("out");

        let args = parse(&[
            "-i",
            input.to_str().unwrap(),
            "-l",
            "bo",
            "-m",
            "4",
            "--join-lines",
            "-o",
            out.to_str().unwrap(),
            "-q",
        ]);
        args.execute().unwrap();

        let json = fs::read_to_string(out.join("heart.json")).unwrap();
        assert!(json.contains("\"end\": 4"));
        assert_eq!(
            fs::read_to_string(out.join("heart.txt")).unwrap(),
            "ཀ་ཁ།\nག་ང༔\n"
        );
    }

    #[test]
    fn test_execute_reports_failing_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("open.txt");
        fs::write(&input, "no delimiter here").unwrap();

        let args = parse(&["-i", input.to_str().unwrap(), "-q", "-f", "json"]);
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError { .. })
        ));
    }
}
