#![crate_name = "redplane_cli"]
mod error;
use crate::error::{Error, Result};

use clap::{Parser, Subcommand};
use redplane_core::{
    codec::{self, DecodeMode},
    image_io,
    utilities::file_utils,
};
use simple_logger::SimpleLogger;

/// Hide a bright-red message image inside the blue channel of a carrier PNG
#[derive(Parser)]
#[command(name = "redplane")]
#[command(about = "Hide a bright-red message image inside the blue channel of a carrier PNG", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable verbose output.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message image into a carrier image.
    #[command(visible_alias = "e")]
    Encode {
        /// Path to the image whose bright-red pixels form the message.
        #[arg(value_name = "MESSAGE_IMAGE")]
        message_image: String,
        /// Path to the image the message will be hidden in.
        #[arg(value_name = "CARRIER_IMAGE")]
        carrier_image: String,
    },
    /// Decode the message hidden in an image.
    #[command(visible_alias = "d")]
    Decode {
        /// Path to the image that carries the hidden message.
        #[arg(value_name = "IMAGE")]
        image: String,
        /// Rendering mode: "black" (or "b") for the message on a black
        /// background, "original" (or "t") for the message on top of the
        /// carried image.
        #[arg(short, long, default_value = "black")]
        mode: String,
    },
    /// List every pixel that currently carries a set parity bit.
    #[command(visible_alias = "i")]
    Inspect {
        /// Path to the image to inspect.
        #[arg(value_name = "IMAGE")]
        image: String,
    },
    /// Create an all-black copy of an image, for use as a message canvas.
    #[command(visible_alias = "b")]
    Black {
        /// Path to the image whose dimensions the canvas should match.
        #[arg(value_name = "IMAGE")]
        image: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init().unwrap();

    let result = match cli.command {
        Commands::Encode {
            message_image,
            carrier_image,
        } => handle_encode(&message_image, &carrier_image),
        Commands::Decode { image, mode } => handle_decode(&image, &mode),
        Commands::Inspect { image } => handle_inspect(&image),
        Commands::Black { image } => handle_black(&image),
    };

    if let Err(e) = result {
        show_abort_message(e);
    }
}

/// Handle the encode command.
fn handle_encode(message_path: &str, carrier_path: &str) -> Result<()> {
    let message = image_io::load_from_file(message_path)
        .map_err(|e| Error::Encoding(format!("Failed to load the message image: {e}")))?;
    let carrier = image_io::load_from_file(carrier_path)
        .map_err(|e| Error::Encoding(format!("Failed to load the carrier image: {e}")))?;

    // The codec requires both inputs in their flattened forms.
    let message = codec::flatten_message(&message);
    let carrier = codec::flatten_carrier(&carrier);

    let encoded = codec::encode(&message, &carrier).map_err(|e| Error::Encoding(e.to_string()))?;

    let out_path = file_utils::prefixed_output_path(carrier_path, "encoded")
        .map_err(|e| Error::Encoding(e.to_string()))?;
    image_io::save_to_file(&out_path, &encoded)
        .map_err(|e| Error::Encoding(format!("Failed to save the encoded image: {e}")))?;

    println!("Your image has been encoded! The new file is {out_path}.");
    Ok(())
}

/// Handle the decode command.
fn handle_decode(image_path: &str, mode: &str) -> Result<()> {
    let mode = DecodeMode::try_from(mode).map_err(|e| Error::Decoding(e.to_string()))?;

    let image = image_io::load_from_file(image_path)
        .map_err(|e| Error::Decoding(format!("Failed to load the image: {e}")))?;

    let decoded = codec::decode(&image, mode);

    let out_path = file_utils::prefixed_output_path(image_path, "decoded")
        .map_err(|e| Error::Decoding(e.to_string()))?;
    image_io::save_to_file(&out_path, &decoded)
        .map_err(|e| Error::Decoding(format!("Failed to save the decoded image: {e}")))?;

    println!("Your image has been decoded! The new file is {out_path}.");
    Ok(())
}

/// Handle the inspect command.
fn handle_inspect(image_path: &str) -> Result<()> {
    let image = image_io::load_from_file(image_path)
        .map_err(|e| Error::Inspection(format!("Failed to load the image: {e}")))?;

    let mut total = 0usize;
    for ((x, y), pix) in codec::inspect(&image) {
        println!(
            "({}, {}, {}, {}) at ({x}, {y})",
            pix.red, pix.green, pix.blue, pix.alpha
        );
        total += 1;
    }

    println!("{total} pixel(s) carry a set parity bit.");
    Ok(())
}

/// Handle the black-copy command.
fn handle_black(image_path: &str) -> Result<()> {
    let image = image_io::load_from_file(image_path)
        .map_err(|e| Error::BlackCopy(format!("Failed to load the image: {e}")))?;

    let black = codec::black_copy(&image);

    let out_path = file_utils::prefixed_output_path(image_path, "black")
        .map_err(|e| Error::BlackCopy(e.to_string()))?;
    image_io::save_to_file(&out_path, &black)
        .map_err(|e| Error::BlackCopy(format!("Failed to save the black image: {e}")))?;

    println!("Your black image has been created! The new file is {out_path}.");
    Ok(())
}

/// Display an error message and terminate the process.
fn show_abort_message(error: Error) {
    eprintln!("Error: {error}");
    std::process::exit(1);
}
