use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::process::ExitCode;
use toolbelt::areas::toolbox::Toolbox;
use toolbelt::artifacts::core::pager::PagedOutput;
use toolbelt::artifacts::diff::{ChangeFilter, DiffOptions};
use toolbelt::artifacts::encoding::digest::{DigestAlgorithm, Representation};
use toolbelt::artifacts::formatting::Syntax;
use toolbelt::artifacts::validation::NationalId;
use toolbelt::commands::compress::CompressionCodec;
use toolbelt::commands::diff::DiffCommandOptions;
use toolbelt::commands::encode::Codec;
use toolbelt::commands::{read_input, read_source};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "toolbelt",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A belt of small text tools",
    long_about = "Line diffs, encodings, digests, compression, JSON/YAML formatting \
    and Brazilian ID validation from the command line. \
    Text inputs are read from the positional argument, or from stdin when it is absent or '-'.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show line changes between two files",
        long_about = "This command diffs two files line by line. \
        Removed lines are prefixed with '-', added lines with '+'. Use '-' to read one side from stdin."
    )]
    Diff {
        #[arg(index = 1, help = "The old file")]
        old: String,
        #[arg(index = 2, help = "The new file")]
        new: String,
        #[arg(short = 'w', long, help = "Ignore whitespace around each line")]
        ignore_whitespace: bool,
        #[arg(long, help = "Compare line terminators as separate tokens")]
        newline_is_token: bool,
        #[arg(long, help = "Ignore a missing newline at the end of file")]
        ignore_newline_at_eof: bool,
        #[arg(long, help = "Treat CRLF line endings as LF")]
        strip_trailing_cr: bool,
        #[arg(long, help = "Always ignore whitespace around each line")]
        trimmed: bool,
        #[arg(
            long,
            value_parser = parse_change_filter,
            help = "Only show runs of the given kinds: (A)dded, (R)emoved, (U)nchanged"
        )]
        filter: Option<ChangeFilter>,
        #[arg(long, help = "Print a summary of added and removed lines")]
        stat: bool,
        #[arg(long, help = "Do not page the output")]
        no_pager: bool,
    },
    #[command(name = "encode", about = "Encode text as Base64 or basE91")]
    Encode {
        #[arg(short, long, value_enum, default_value_t = Codec::Base64)]
        codec: Codec,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(name = "decode", about = "Decode Base64 or basE91 text")]
    Decode {
        #[arg(short, long, value_enum, default_value_t = Codec::Base64)]
        codec: Codec,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(name = "digest", about = "Hash text with SHA-256 or SHA-1")]
    Digest {
        #[arg(short, long, value_enum, default_value_t = DigestAlgorithm::Sha256)]
        algorithm: DigestAlgorithm,
        #[arg(short, long, value_enum, default_value_t = Representation::Hex)]
        representation: Representation,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(
        name = "compress",
        about = "Compress text, printing the result as Base64",
        long_about = "This command compresses text with GZIP or Zstandard. \
        The compressed bytes are printed as Base64 so they can be copied around as text."
    )]
    Compress {
        #[arg(short, long, value_enum, default_value_t = CompressionCodec::Gzip)]
        codec: CompressionCodec,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(name = "decompress", about = "Decompress Base64 text produced by compress")]
    Decompress {
        #[arg(short, long, value_enum, default_value_t = CompressionCodec::Gzip)]
        codec: CompressionCodec,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(name = "format", about = "Pretty-print JSON or YAML")]
    Format {
        #[arg(short, long, value_enum)]
        syntax: Syntax,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(name = "check", about = "Check whether text is valid JSON or YAML")]
    Check {
        #[arg(short, long, value_enum)]
        syntax: Syntax,
        #[arg(index = 1)]
        text: Option<String>,
    },
    #[command(
        name = "validate-id",
        about = "Validate a CPF or CNPJ",
        long_about = "This command checks the verification digits of a Brazilian CPF or CNPJ. \
        The kind is detected from the number of digits unless --kind is given."
    )]
    ValidateId {
        #[arg(short, long, value_enum)]
        kind: Option<NationalId>,
        #[arg(index = 1)]
        id: String,
    },
}

fn parse_change_filter(s: &str) -> Result<ChangeFilter, String> {
    ChangeFilter::try_parse(s).ok_or_else(|| format!("invalid change filter: {s}"))
}

fn should_page(no_pager: bool) -> bool {
    !no_pager && std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}

fn main() -> Result<ExitCode> {
    // logs go to stderr so tool output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let paged = match &cli.command {
        Commands::Diff { no_pager, .. } if should_page(*no_pager) => {
            Some(PagedOutput::new(Pager::new()))
        }
        _ => None,
    };
    let writer = match &paged {
        Some(output) => output.writer(),
        None => Box::new(std::io::stdout()),
    };
    let toolbox = Toolbox::new(writer);

    match cli.command {
        Commands::Diff {
            old,
            new,
            ignore_whitespace,
            newline_is_token,
            ignore_newline_at_eof,
            strip_trailing_cr,
            trimmed,
            filter,
            stat,
            no_pager: _,
        } => {
            let opts = DiffCommandOptions {
                options: DiffOptions {
                    ignore_whitespace,
                    newline_is_token,
                    ignore_newline_at_eof,
                    strip_trailing_cr,
                },
                trimmed,
                filter: filter.unwrap_or_default(),
                stat,
            };

            toolbox.diff(&read_source(&old)?, &read_source(&new)?, &opts)?
        }
        Commands::Encode { codec, text } => toolbox.encode(codec, &read_input(text)?)?,
        Commands::Decode { codec, text } => toolbox.decode(codec, &read_input(text)?)?,
        Commands::Digest {
            algorithm,
            representation,
            text,
        } => toolbox.digest(&read_input(text)?, algorithm, representation)?,
        Commands::Compress { codec, text } => toolbox.compress(codec, &read_input(text)?)?,
        Commands::Decompress { codec, text } => toolbox.decompress(codec, &read_input(text)?)?,
        Commands::Format { syntax, text } => toolbox.format(syntax, &read_input(text)?)?,
        Commands::Check { syntax, text } => toolbox.check(syntax, &read_input(text)?)?,
        Commands::ValidateId { kind, id } => toolbox.validate_id(&id, kind)?,
    }

    toolbox.writer().flush()?;
    let failed = toolbox.failed();
    drop(toolbox);

    if let Some(output) = paged {
        output.show()?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
