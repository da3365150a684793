//! Command-line interface for newmm-rs
//!
//! Usage:
//!   newmm [OPTIONS] <TEXT>
//!   echo "ฉันไปโรงเรียน" | newmm

use newmm_rs::{Dictionary, SegmentOptions, Segmenter};
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_help() {
    eprintln!(
        r#"newmm - Thai word segmentation

USAGE:
    newmm [OPTIONS] [TEXT]...
    echo "ฉันไปโรงเรียน" | newmm

OPTIONS:
    -d, --dict <FILE>      Dictionary file, one word per line
                           (default: $NEWMM_DICT, then the built-in list)
        --strict           Fail if the dictionary file can't be read
        --no-whitespace    Drop whitespace-only tokens
        --max-tokens <N>   Stop after N tokens
    -l, --lines            Print one token per line
    -j, --json             Output tokens as JSON
    -h, --help             Show this help message

ENVIRONMENT:
    NEWMM_DICT             Dictionary file used when --dict is not given
    RUST_LOG               Log filter, e.g. RUST_LOG=newmm_rs=debug

EXAMPLES:
    newmm "ฉันไปโรงเรียน"
    newmm -d thai_words.txt "วันนี้อากาศดีมาก"
    echo "hello world" | newmm -j
"#
    );
}

/// Render tokens the way a Python list of strings prints
fn python_list(tokens: &[&str]) -> String {
    let items: Vec<String> = tokens
        .iter()
        .map(|t| format!("'{}'", t.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", items.join(", "))
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newmm_rs=warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut dict_path: Option<PathBuf> = None;
    let mut strict = false;
    let mut json_output = false;
    let mut line_output = false;
    let mut options = SegmentOptions::default();
    let mut words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-j" | "--json" => json_output = true,
            "-l" | "--lines" => line_output = true,
            "--strict" => strict = true,
            "--no-whitespace" => options.keep_whitespace = false,
            "-d" | "--dict" => {
                i += 1;
                match args.get(i) {
                    Some(path) => dict_path = Some(PathBuf::from(path)),
                    None => fail("--dict requires a file path"),
                }
            }
            "--max-tokens" => {
                i += 1;
                match args.get(i).map(|n| n.parse::<usize>()) {
                    Some(Ok(n)) => options.max_tokens = Some(n),
                    _ => fail("--max-tokens requires a number"),
                }
            }
            arg if !arg.starts_with('-') => words.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Read from stdin if no text provided
    let input_text = if words.is_empty() {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(&format!("reading stdin: {}", e));
        }
        buf.trim_end_matches(&['\n', '\r'][..]).to_string()
    } else {
        words.join(" ")
    };

    let dict_path = dict_path.or_else(|| env::var_os("NEWMM_DICT").map(PathBuf::from));
    let dict = match (&dict_path, strict) {
        (Some(path), true) => Dictionary::open(path),
        (path, false) => Dictionary::load(path.as_deref()),
        (None, true) => Dictionary::builtin(),
    };
    let dict = match dict {
        Ok(d) => d,
        Err(e) => fail(&e.to_string()),
    };

    let segmenter = Segmenter::with_options(dict, options);

    if json_output {
        let tokens = segmenter.tokenize(&input_text);
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("serializing to JSON: {}", e)),
        }
    } else if line_output {
        for token in segmenter.segment(&input_text) {
            println!("{}", token);
        }
    } else {
        println!("{}", python_list(&segmenter.segment(&input_text)));
    }
}
