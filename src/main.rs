use hl7_reader::{Hl7Error, Hl7Reader};
use log::info;
use std::env;
use std::fs::File;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-hl7-file> [--segments]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let show_segments = args.iter().skip(2).any(|arg| arg == "--segments");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("ERROR: Failed to open {}", path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    info!("Reading HL7 file: {}", path);
    let reader = Hl7Reader::new(file);
    let mut count = 0usize;

    let result = reader.each_message(|message| -> Result<(), Hl7Error> {
        count += 1;
        println!("Found a message! ({} bytes)", message.len());
        if show_segments {
            for segment in message.segments() {
                println!("  {}", segment?.segment_type());
            }
        }
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("\nERROR: Failed to read HL7 file");
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    println!("{}", "=".repeat(60));
    println!("{} message(s) read", count);
}
