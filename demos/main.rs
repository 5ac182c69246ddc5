use label_maker::label_maker;
use std::env;

/// Builds a label sequence from the command line.
///
/// Each argument is either a label text or, when prefixed with `@`, a JSON
/// options payload applied to the label that follows it.
///
/// Usage: cargo run --example main -- @'"+"' foo bar @'{"delimiter":"-","includeTrailingDelimiter":true}' baz
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} [@<options json>] <label>...", args[0]);
        std::process::exit(1);
    }

    let mut labels = label_maker();
    let mut pending = serde_json::Value::Null;

    for arg in &args[1..] {
        if let Some(payload) = arg.strip_prefix('@') {
            pending = serde_json::from_str(payload).unwrap_or_else(|err| {
                eprintln!("Options \"{}\" are not valid JSON: {}", payload, err);
                std::process::exit(1);
            });
            continue;
        }

        labels = labels.try_push(arg.as_str(), &pending).unwrap_or_else(|err| {
            eprintln!("Cannot add label \"{}\": {}", arg, err);
            std::process::exit(1);
        });
        pending = serde_json::Value::Null;
    }

    println!("{}", labels);

    println!("\n=== Labels ===");
    for (i, label) in labels.iter().enumerate() {
        let json = serde_json::to_string(label).expect("labels always serialize");
        println!("{}: {}", i, json);
    }
}
