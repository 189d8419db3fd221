//! Declarative field registry example.
//!
//! Run with: `RUST_LOG=trace cargo run --example registry --features json`

use format_mask::{FieldRegistry, Formatter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIELDS: &str = r####"{
    "rg": {
        "plain": { "kind": "template", "pattern": "##.###.###-#", "options": { "only_numbers": true } },
        "secret": { "mask_then_format": { "start": 2, "end": 1 } }
    },
    "plate": {
        "plain": { "kind": "template", "pattern": "###-####", "options": { "uppercase": true } },
        "secret": { "mask_then_format": { "start": 0, "end": 2 } }
    },
    "usd": {
        "plain": { "kind": "currency", "code": "USD" },
        "secret": { "format_then_mask": { "start": 1, "end": 3 } }
    },
    "login": {
        "secret": {
            "segmented": { "start": [2, 1], "end": 0, "special_characters": ["@", "."] }
        }
    }
}"####;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = match FieldRegistry::from_json_str(FIELDS) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Failed to load fields: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded fields: {:?}\n", registry.names().collect::<Vec<_>>());

    let mut formatter = Formatter::builder().locale("en-US").registry(registry).build();

    let samples = [
        ("rg", "123456789"),
        ("plate", "abc1d23"),
        ("usd", "123456"),
        ("login", "jane.doe@example.com"),
    ];

    for (name, value) in samples {
        println!("{}", name);
        println!("  Plain:    {}", formatter.plain(name, value));
        println!("  Secret:   {}", formatter.secret_field(name, value));
        println!("  Original: {}", formatter.original_value(name));
    }

    // Invalid definitions are rejected at load time
    println!();
    match FieldRegistry::from_json_str(r#"[{ "name": "broken" }]"#) {
        Ok(_) => println!("Unexpectedly loaded a field with no rules"),
        Err(e) => println!("Rejected: {}", e),
    }

    match formatter.registry().to_json() {
        Ok(json) => println!("\nRegistry as JSON:\n{}", json),
        Err(e) => println!("\nFailed to write registry: {}", e),
    }
}
