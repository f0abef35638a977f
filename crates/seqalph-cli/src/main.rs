use clap::{Parser, Subcommand};
use seqalph_lib::rank::min_viable_bits;
use seqalph_lib::validate::{assign_chars, assign_chars_strictly, to_string};
use seqalph_lib::{
    dispatch_on_alphabet, dispatch_on_quality, Alphabet, AlphabetKind, BatchValidator,
    CodecConfiguration, Masked, MixedRadix, Qualified, QualityAlphabet, Semialphabet,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "seqalph")]
#[command(version = "0.1.0")]
#[command(about = "seqalph: compact rank encodings for sequence alphabets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registered alphabets
    Alphabets,

    /// Show the conversion tables of an alphabet
    Inspect {
        /// Alphabet name (e.g. dna4, aa20, phred42)
        #[arg(short, long)]
        alphabet: AlphabetKind,
    },

    /// Print the ranks of a sequence
    Encode {
        /// Alphabet name
        #[arg(short, long)]
        alphabet: AlphabetKind,

        /// Treat lower case letters as masked
        #[arg(long, default_value = "false")]
        masked: bool,

        /// Convert invalid characters instead of rejecting them
        #[arg(long, default_value = "false")]
        lenient: bool,

        /// The sequence
        sequence: String,
    },

    /// Validate sequences, one per line
    Validate {
        /// Alphabet name
        #[arg(short, long)]
        alphabet: AlphabetKind,

        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Number of threads (0 = all available cores)
        #[arg(short = 't', long, default_value = "0")]
        threads: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Pack a sequence and its quality string into qualified values
    Pack {
        /// Sequence alphabet
        #[arg(short, long)]
        alphabet: AlphabetKind,

        /// Quality alphabet
        #[arg(short, long, default_value = "phred42")]
        quality: AlphabetKind,

        /// The sequence
        #[arg(short, long)]
        sequence: String,

        /// The quality string (same length as the sequence)
        #[arg(long)]
        qualities: String,

        /// Treat lower case letters as masked
        #[arg(long, default_value = "false")]
        masked: bool,

        /// Convert invalid characters instead of rejecting them
        #[arg(long, default_value = "false")]
        lenient: bool,
    },

    /// Show the mixed-radix layout of a composite
    Layout {
        /// Component alphabets, least significant first
        #[arg(short, long, value_delimiter = ',', required = true)]
        alphabets: Vec<AlphabetKind>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing: use RUST_LOG if set, otherwise default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Alphabets => alphabets_command(),
        Commands::Inspect { alphabet } => inspect_command(alphabet),
        Commands::Encode { alphabet, masked, lenient, sequence } => {
            encode_command(alphabet, masked, lenient, &sequence)?;
        }
        Commands::Validate { alphabet, input, threads, verbose } => {
            validate_command(alphabet, input, threads, verbose)?;
        }
        Commands::Pack { alphabet, quality, sequence, qualities, masked, lenient } => {
            pack_command(alphabet, quality, &sequence, &qualities, masked, lenient)?;
        }
        Commands::Layout { alphabets } => {
            layout_command(&alphabets)?;
        }
    }

    Ok(())
}

/// List alphabets with their sizes and table fingerprints
fn alphabets_command() {
    println!("{:<14} {:>5} {:>5}  {:<18} fingerprint", "name", "size", "bits", "symbols");
    for kind in AlphabetKind::ALL {
        let descriptor = kind.descriptor();
        let symbols = String::from_utf8_lossy(&descriptor.rank_to_char).into_owned();
        let symbols = if symbols.len() > 18 {
            format!("{}...", &symbols[..15])
        } else {
            symbols
        };
        println!(
            "{:<14} {:>5} {:>5}  {:<18} {:016x}",
            kind.name(),
            descriptor.size,
            min_viable_bits(descriptor.size as u64),
            symbols,
            descriptor.fingerprint()
        );
    }
}

/// Print canonical symbols and every printable fallback
fn inspect_command(alphabet: AlphabetKind) {
    let descriptor = alphabet.descriptor();
    info!("Inspecting {}", alphabet);

    println!("alphabet: {}", descriptor.name);
    println!("size: {}", descriptor.size);
    println!("valid characters: {}", descriptor.num_valid_chars());
    println!("\nrank  char");
    for (rank, &c) in descriptor.rank_to_char.iter().enumerate() {
        println!("{:>4}  {}", rank, char::from(c));
    }

    let mut printable = Vec::new();
    let mut num_other = 0usize;
    for (from, to) in descriptor.fallbacks() {
        if from.is_ascii_graphic() {
            printable.push((from, to));
        } else {
            num_other += 1;
        }
    }

    println!("\nfallbacks:");
    for (from, to) in printable {
        println!("  {} -> {}", char::from(from), char::from(to));
    }
    println!("  ({} non-printable bytes converted as well)", num_other);

    let violations = descriptor.verify();
    if !violations.is_empty() {
        warn!("{} bytes do not convert to a valid character", violations.len());
    }
}

/// Encode one sequence and print its ranks
fn encode_command(alphabet: AlphabetKind, masked: bool, lenient: bool, sequence: &str) -> anyhow::Result<()> {
    let config = CodecConfiguration {
        alphabet,
        masked,
        strict: !lenient,
        ..CodecConfiguration::default()
    };
    config.validate()?;
    debug!("Encoding {} characters as {}", sequence.len(), alphabet);

    if masked {
        dispatch_on_alphabet!(alphabet, A => encode_with::<Masked<A>>(sequence.as_bytes(), config.strict))
    } else {
        dispatch_on_alphabet!(alphabet, A => encode_with::<A>(sequence.as_bytes(), config.strict))
    }
}

fn encode_with<A: Alphabet>(sequence: &[u8], strict: bool) -> anyhow::Result<()> {
    let values: Vec<A> = if strict {
        assign_chars_strictly(sequence)?
    } else {
        assign_chars(sequence)
    };

    let ranks: Vec<String> = values.iter().map(|v| v.to_rank().to_string()).collect();
    println!("{}", to_string(&values));
    println!("{}", ranks.join(" "));
    Ok(())
}

/// Validate sequences from a file or stdin in parallel
fn validate_command(alphabet: AlphabetKind, input: Option<String>, threads: usize, verbose: bool) -> anyhow::Result<()> {
    let config = CodecConfiguration {
        alphabet,
        num_threads: threads,
        verbose,
        ..CodecConfiguration::default()
    };
    if verbose {
        config.print();
    }
    let validator = BatchValidator::new(&config)?;

    let records = match &input {
        Some(path) => {
            info!("Reading sequences from {}", path);
            read_lines(BufReader::new(File::open(path)?))?
        }
        None => {
            info!("Reading sequences from stdin");
            read_lines(io::stdin().lock())?
        }
    };
    info!("  Loaded {} sequences", records.len());

    let (num_valid, errors) = dispatch_on_alphabet!(alphabet, A => {
        let outcome = validator.run::<A, _>(&records);
        let errors: Vec<String> = outcome
            .errors()
            .map(|(line, err)| format!("line {}: {}", line + 1, err))
            .collect();
        (outcome.num_valid, errors)
    });

    println!("\n=== Validation Results ===");
    println!("  Alphabet: {}", alphabet);
    println!("  Valid: {}", num_valid);
    println!("  Invalid: {}", errors.len());

    if errors.is_empty() {
        println!("\n✓ ALL SEQUENCES VALID");
        Ok(())
    } else {
        let shown = errors.len().min(10);
        println!("\nFirst {} errors:", shown);
        for err in &errors[..shown] {
            println!("  {}", err);
        }
        anyhow::bail!("{} of {} sequences are invalid", errors.len(), records.len())
    }
}

/// Pack a sequence with its qualities and print every composite value
fn pack_command(
    alphabet: AlphabetKind,
    quality: AlphabetKind,
    sequence: &str,
    qualities: &str,
    masked: bool,
    lenient: bool,
) -> anyhow::Result<()> {
    let config = CodecConfiguration {
        alphabet,
        quality: Some(quality),
        masked,
        strict: !lenient,
        ..CodecConfiguration::default()
    };
    config.validate()?;
    if sequence.len() != qualities.len() {
        anyhow::bail!(
            "sequence and quality string differ in length ({} vs {})",
            sequence.len(),
            qualities.len()
        );
    }

    let layout = config.layout()?;
    info!("Composite layout: sizes {:?}, size {}", layout.sizes(), layout.size());

    let (sequence, qualities) = (sequence.as_bytes(), qualities.as_bytes());
    dispatch_on_quality!(quality, Q => if masked {
        dispatch_on_alphabet!(alphabet, A => pack_with::<Masked<A>, Q>(sequence, qualities, config.strict))
    } else {
        dispatch_on_alphabet!(alphabet, A => pack_with::<A, Q>(sequence, qualities, config.strict))
    }, _ => anyhow::bail!("{} is not a quality alphabet", quality))
}

fn pack_with<S: Alphabet, Q: QualityAlphabet>(sequence: &[u8], qualities: &[u8], strict: bool) -> anyhow::Result<()> {
    let (letters, scores): (Vec<S>, Vec<Q>) = if strict {
        (assign_chars_strictly(sequence)?, assign_chars_strictly(qualities)?)
    } else {
        (assign_chars(sequence), assign_chars(qualities))
    };

    println!("{:>4}  {:>4}  {:>5}  {:>6}  {:>12}", "pos", "char", "phred", "rank", "ranks");
    for (pos, (&letter, &score)) in letters.iter().zip(&scores).enumerate() {
        let value = Qualified::<S, Q, u32>::new(letter, score);
        println!(
            "{:>4}  {:>4}  {:>5}  {:>6}  {:>12}",
            pos,
            char::from(value.to_char()),
            value.to_phred(),
            value.to_rank(),
            format!("{}+{}", value.sequence().to_rank_usize(), value.quality().to_rank_usize())
        );
    }
    Ok(())
}

/// Print the mixed-radix layout of a list of alphabets
fn layout_command(alphabets: &[AlphabetKind]) -> anyhow::Result<()> {
    let sizes: Vec<usize> = alphabets.iter().map(|kind| kind.size()).collect();
    let layout = MixedRadix::for_rank::<u64>(&sizes)?;

    println!("{:>3}  {:<14} {:>5} {:>12}", "i", "alphabet", "size", "factor");
    for (i, kind) in alphabets.iter().enumerate() {
        println!(
            "{:>3}  {:<14} {:>5} {:>12}",
            i,
            kind.name(),
            layout.sizes()[i],
            layout.cumulative_factors()[i]
        );
    }

    let bits = min_viable_bits(layout.size());
    println!("\ncombined size: {}", layout.size());
    println!("rank bits: {}", bits);
    let storage = match bits {
        0..=8 => "u8",
        9..=16 => "u16",
        17..=32 => "u32",
        _ => "u64",
    };
    println!("smallest rank type: {}", storage);
    Ok(())
}

/// Read non-empty, trimmed lines
fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
