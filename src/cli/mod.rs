mod elements;
mod sample;
mod verify;

use std::io::{self, BufRead};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use combinadic::binomial_table::BinomialTable;
use combinadic::{CombinationCodec, PermutationCodec, Rank, Ranking, VariationCodec};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Size of the universe `[0, n)` the objects are drawn from.
    #[arg(short, long, default_value_t = 10, global = true)]
    n: usize,
    /// Size of the objects.
    #[arg(short, long, default_value_t = 3, global = true)]
    k: usize,
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
    /// Log codec construction and other details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table of binomial coefficients `C(m, i)` for `m <= n`, `i <= k`.
    Binom,
    /// Print the number of objects of a kind.
    Count { kind: Kind },
    /// Rank an object given as a list of elements, e.g. `4,2,5,3,1,0`.
    ///
    /// The size of a permutation is the length of the list, `-k` is ignored.
    Encode { kind: Kind, elements: String },
    /// Turn a rank back into its object.
    Decode { kind: Kind, rank: Rank },
    /// Check that every rank of a kind survives a decode/encode round trip.
    Verify { kind: Kind },
    /// Reservoir-sample lines from stdin.
    Sample {
        /// Number of lines to keep.
        #[arg(short, long, default_value_t = 5)]
        size: usize,
        /// Seed for a reproducible sample.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Unordered selection of `k` out of `n`.
    Combination,
    /// Ordering of `[0, k)`.
    Permutation,
    /// Ordered selection of `k` out of `n`.
    Variation,
}

impl Kind {
    fn codec(self, n: usize, k: usize) -> Result<Box<dyn Ranking + Send + Sync>> {
        let codec: Box<dyn Ranking + Send + Sync> = match self {
            Kind::Combination => Box::new(CombinationCodec::new(n, k)?),
            Kind::Permutation => Box::new(PermutationCodec::new(k)),
            Kind::Variation => Box::new(VariationCodec::new(n, k)?),
        };
        Ok(codec)
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Combination => "combination",
            Kind::Permutation => "permutation",
            Kind::Variation => "variation",
        }
    }
}

/// Parse CLI arguments and execute the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(n = cli.n, k = cli.k, "parameters");

    let output = execute(cli, io::stdin().lock())?;
    println!("{output}");
    Ok(())
}

/// Run a parsed command and return what it prints. `input` feeds `sample`.
fn execute(cli: Cli, input: impl BufRead) -> Result<String> {
    let output = match cli.command {
        Commands::Binom => {
            let table = BinomialTable::build(cli.n, cli.k)?;
            let table = &table;
            let rows = (0..=cli.n).map(move |m| table.row(m).iter().map(|c| c.to_string()));
            if cli.json {
                let rows: Vec<Vec<String>> = rows.map(|row| row.collect()).collect();
                serde_json::to_string(&rows)?
            } else {
                rows.map(|row| row.format(" ").to_string()).join("\n")
            }
        }
        Commands::Count { kind } => {
            let codec = kind.codec(cli.n, cli.k)?;
            if cli.json {
                json!({ "kind": kind.name(), "count": codec.count().to_string() }).to_string()
            } else {
                codec.count().to_string()
            }
        }
        Commands::Encode { kind, elements } => {
            let elements = elements::parse_elements(&elements)?;
            let k = match kind {
                Kind::Permutation => elements.len(),
                _ => cli.k,
            };
            let rank = kind.codec(cli.n, k)?.encode(&elements)?;
            if cli.json {
                json!({ "kind": kind.name(), "rank": rank.to_string() }).to_string()
            } else {
                rank.to_string()
            }
        }
        Commands::Decode { kind, rank } => {
            let elements = kind.codec(cli.n, cli.k)?.decode(&rank)?;
            if cli.json {
                json!({
                    "kind": kind.name(),
                    "rank": rank.to_string(),
                    "elements": elements,
                })
                .to_string()
            } else {
                elements.iter().format(",").to_string()
            }
        }
        Commands::Verify { kind } => {
            let codec = kind.codec(cli.n, cli.k)?;
            let verified = verify::run_verify(codec.as_ref())?;
            format!(
                "Verified {verified} {}s (n={}, k={}).",
                kind.name(),
                cli.n,
                cli.k
            )
        }
        Commands::Sample { size, seed } => sample::run_sample(input, size, seed, cli.json)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn exec(args: &[&str]) -> Result<String> {
        exec_with_input(args, "")
    }

    fn exec_with_input(args: &[&str], input: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("combinadic").chain(args.iter().copied()))?;
        execute(cli, input.as_bytes())
    }

    fn exec_json(args: &[&str]) -> Value {
        serde_json::from_str(&exec(args).unwrap()).unwrap()
    }

    #[test]
    fn binomial_table_rows() {
        assert_eq!(
            exec(&["-n", "4", "-k", "2", "binom"]).unwrap(),
            "1 0 0\n1 1 0\n1 2 1\n1 3 3\n1 4 6"
        );
        assert_eq!(
            exec_json(&["-n", "2", "-k", "1", "--json", "binom"]),
            json!([["1", "0"], ["1", "1"], ["1", "2"]])
        );
    }

    #[test]
    fn counts() {
        assert_eq!(exec(&["count", "combination"]).unwrap(), "120");
        assert_eq!(exec(&["-n", "5", "count", "variation"]).unwrap(), "60");
        assert_eq!(
            exec_json(&["-k", "5", "--json", "count", "permutation"]),
            json!({ "kind": "permutation", "count": "120" })
        );
    }

    #[test]
    fn permutation_size_comes_from_the_list() {
        assert_eq!(
            exec(&["-k", "3", "encode", "permutation", "4,2,5,3,1,0"]).unwrap(),
            "551"
        );
        assert_eq!(exec(&["encode", "permutation", "[]"]).unwrap(), "0");
        // Other kinds still use `-k`.
        assert!(exec(&["-k", "3", "encode", "combination", "4,2,5,3"]).is_err());
    }

    #[test]
    fn encode_and_decode() {
        assert_eq!(exec(&["encode", "combination", "8 3 9"]).unwrap(), "115");
        assert_eq!(exec(&["decode", "combination", "115"]).unwrap(), "3,8,9");
        assert_eq!(exec(&["-n", "3", "-k", "2", "decode", "variation", "5"]).unwrap(), "2,1");
    }

    #[test]
    fn json_fields() {
        assert_eq!(
            exec_json(&["--json", "encode", "combination", "[8, 3, 9]"]),
            json!({ "kind": "combination", "rank": "115" })
        );
        assert_eq!(
            exec_json(&["-n", "3", "-k", "2", "--json", "decode", "variation", "5"]),
            json!({ "kind": "variation", "rank": "5", "elements": [2, 1] })
        );
    }

    #[test]
    fn ranks_beyond_a_machine_word() {
        let rank = "18446744073709551616";
        let decoded = exec(&["-n", "200", "-k", "20", "decode", "variation", rank]).unwrap();
        assert_eq!(
            exec(&["-n", "200", "-k", "20", "encode", "variation", decoded.as_str()]).unwrap(),
            rank
        );
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert!(exec(&["decode", "combination", "120"]).is_err());
        assert!(exec(&["encode", "combination", "1,1,2"]).is_err());
        assert!(exec(&["-n", "2", "-k", "3", "count", "combination"]).is_err());
        assert!(exec(&["encode", "combination", "1;2;3"]).is_err());
    }

    #[test]
    fn verify_reports_the_count() {
        assert_eq!(
            exec(&["-n", "5", "-k", "3", "verify", "variation"]).unwrap(),
            "Verified 60 variations (n=5, k=3)."
        );
    }

    #[test]
    fn sample_output() {
        assert_eq!(
            exec_with_input(&["sample", "--size", "5"], "x\n y \n").unwrap(),
            "Sample:\nx\ny"
        );

        let args = ["sample", "-s", "2", "--seed", "7"];
        let output = exec_with_input(&args, "a\nb\nc\nd\n").unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Sample:"));
        let kept: Vec<&str> = lines.collect();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|line| ["a", "b", "c", "d"].contains(line)));

        let output = exec_with_input(&["--json", "sample"], "a\nb\n").unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json, json!(["a", "b"]));
    }
}
