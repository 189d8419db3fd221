//! Built-in field formatting and masking example.
//!
//! Run with: `RUST_LOG=debug cargo run --example fields`

use format_mask::Formatter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type FieldCall = fn(&mut Formatter, &str) -> String;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Built-in Fields ===\n");

    let mut formatter = Formatter::new();

    let samples: [(&str, &str, FieldCall, FieldCall); 8] = [
        ("cpf", "12345678909", Formatter::cpf, Formatter::secret_cpf),
        ("cnpj", "12345678000195", Formatter::cnpj, Formatter::secret_cnpj),
        ("phone", "12934567890", Formatter::phone, Formatter::secret_phone),
        ("cep", "12345678", Formatter::cep, Formatter::secret_cep),
        ("real_currency", "123456", Formatter::real_currency, Formatter::secret_real_currency),
        ("percent", "123", Formatter::percent, Formatter::secret_percent),
        ("card_number", "1234567812345678", Formatter::card_number, Formatter::secret_card_number),
        ("oab", "123456", Formatter::oab, Formatter::secret_oab),
    ];

    for (name, value, plain, secret) in samples {
        println!("{}", name);
        println!("  Plain:    {}", plain(&mut formatter, value));
        println!("  Secret:   {}", secret(&mut formatter, value));
        println!("  Original: {}", formatter.original_value(name));
    }

    println!("email");
    println!("  Secret:   {}", formatter.secret_email("example@example.com"));
    println!("  Original: {}", formatter.original_value("email"));
    println!();

    // Locale only affects currency and percentages
    println!("=== Locales ===\n");
    for locale in ["pt-BR", "en-US", "de-DE", "fr-FR"] {
        formatter.set_locale(locale);
        println!(
            "  {:6} {:>14} {:>8}",
            locale,
            formatter.real_currency("123456"),
            formatter.percent("123")
        );
    }
    println!();

    // Unknown fields degrade to the raw value (see RUST_LOG=debug)
    println!("=== Unknown Fields ===\n");
    println!("  plain(\"rg\"):  {}", formatter.plain("rg", "123456789"));
    match formatter.try_plain("rg", "123456789") {
        Ok(formatted) => println!("  try_plain:    {}", formatted),
        Err(e) => println!("  try_plain:    error: {}", e),
    }

    println!("\nStore: {:?}", formatter.store());
}
