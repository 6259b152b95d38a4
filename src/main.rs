use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use customer_bank::{AccountView, Bank, Config, CustomerView, DEFAULT_LOG_FILTER};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Invalid BANK_* environment")?;
    let mut bank = Bank::seeded(config.sync_policy).context("Failed to seed bank")?;

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("customers") => {
            bank.assign_accounts_to_customers();
            let views = CustomerView::render_all(&bank);
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Some("accounts") => {
            let views = AccountView::render_all(&bank);
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Some("demo") | None => run_demo(&mut bank)?,
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: customer-bank [demo|customers|accounts]");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Seeded walkthrough: deposit, refused withdrawal, transfer
fn run_demo(bank: &mut Bank) -> Result<()> {
    println!("🏦 Customer Bank - walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Attach seeded accounts
    let attached = bank.assign_accounts_to_customers();
    println!("\n🔗 Attached {} seeded accounts to their customers", attached);

    let alice = bank.get_customer(2)?;
    let john = bank.get_customer(1)?;
    let alice_number = alice
        .accounts
        .first()
        .cloned()
        .context("Alice has no account")?;
    let john_number = john
        .accounts
        .first()
        .cloned()
        .context("John has no account")?;

    // 2. Deposit
    let account = bank.deposit(&alice_number, 100.0)?;
    println!(
        "\n💰 Deposit 100 → {} balance {} {}",
        alice.name, account.balance, account.currency
    );

    // 3. Withdrawal above balance
    let ok = bank.withdraw(&alice_number, 150.0)?;
    let balance = bank.find_account_by_number(&alice_number)?.balance;
    println!(
        "\n🚫 Withdraw 150 → {} (balance stays {})",
        if ok { "accepted" } else { "refused" },
        balance
    );

    // 4. Transfer
    let before = bank.total_balance();
    bank.transfer(&alice_number, &john_number, 100.0)?;
    println!(
        "\n🔁 Transfer 100 {} → {}: {} now {}, {} now {}",
        alice.name,
        john.name,
        alice.name,
        bank.find_account_by_number(&alice_number)?.balance,
        john.name,
        bank.find_account_by_number(&john_number)?.balance
    );

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✓ Total balance conserved: {} → {}",
        before,
        bank.total_balance()
    );

    Ok(())
}
