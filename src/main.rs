use std::env;

use transposition_cipher::transposition::cli::{CliArgs, Command, USAGE};
use transposition_cipher::{
    is_letter, normalize_az, transpose_decrypt, transpose_encrypt, Grid, TranspositionOptions,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let opts = &cli.options;
    let output = match cli.command {
        Command::Encrypt => transpose_encrypt(&cli.text, opts),
        Command::Decrypt => transpose_decrypt(&cli.text, opts),
    };

    if cli.show_grid {
        let plaintext = match cli.command {
            Command::Encrypt => &cli.text,
            Command::Decrypt => &output,
        };
        print_grid(&grid_input(plaintext, opts), opts);
    }

    println!("{}", output);
}

/// Text as it is laid into the first-stage grid.
fn grid_input(plaintext: &str, opts: &TranspositionOptions) -> String {
    if opts.normalize {
        normalize_az(plaintext)
    } else if opts.letters_only {
        plaintext.chars().filter(|c| is_letter(*c)).collect()
    } else {
        plaintext.to_string()
    }
}

fn print_grid(text: &str, opts: &TranspositionOptions) {
    let grid = Grid::filled(text, &opts.key1, opts.fill_mode, opts.pad_char);
    eprintln!(
        "Grid {}x{} (key {:?}, fill {}, read {})",
        grid.rows(),
        grid.cols(),
        opts.key1,
        opts.fill_mode,
        opts.read_mode
    );
    eprintln!("{}", "=".repeat(40));
    eprintln!("{}", grid);
}
