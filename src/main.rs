use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use vendo::application::machine::VendingMachine;
use vendo::currency;
use vendo::domain::coin_stack::CoinStack;
use vendo::domain::inventory::Inventory;
use vendo::interfaces::csv::op_reader::{OpKind, OpReader, OpRecord};
use vendo::interfaces::csv::report_writer::ReportWriter;
use vendo::interfaces::csv::stock_reader::{FloatReader, StockReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session script CSV (op,value rows: insert/purchase/eject/balance)
    ops: PathBuf,

    /// Product stock CSV (name,price,count)
    #[arg(long)]
    stock: PathBuf,

    /// Coin float CSV (denomination,count). The float starts empty if omitted.
    #[arg(long)]
    float: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stock = File::open(&cli.stock).into_diagnostic()?;
    let mut products = Vec::new();
    for product in StockReader::new(stock).products() {
        products.push(product.into_diagnostic()?);
    }
    let inventory = Inventory::new(products);

    let coin_stack = match &cli.float {
        Some(path) => {
            let float = File::open(path).into_diagnostic()?;
            let mut seed = Vec::new();
            for record in FloatReader::new(float).coins() {
                let record = record.into_diagnostic()?;
                seed.push((record.denomination, record.count));
            }
            CoinStack::seeded(seed)
        }
        None => CoinStack::new(),
    };

    let mut machine = VendingMachine::new(inventory, coin_stack);

    // Replay the session script. Bad rows are reported and skipped; the
    // session keeps running.
    let ops = File::open(&cli.ops).into_diagnostic()?;
    for record in OpReader::new(ops).ops() {
        match record {
            Ok(op) => {
                if let Err(e) = apply(&mut machine, &op) {
                    eprintln!("Error applying op: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading op: {e}");
            }
        }
    }

    // Final machine state
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_float(machine.coin_stack()).into_diagnostic()?;
    println!();
    writer.write_stock(machine.inventory()).into_diagnostic()?;

    Ok(())
}

fn apply(machine: &mut VendingMachine, op: &OpRecord) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match op.op {
        OpKind::Insert => {
            let value: u32 = op
                .value
                .as_deref()
                .ok_or("insert requires a pence value")?
                .parse()?;
            machine.insert_coin(value)?;
        }
        OpKind::Purchase => {
            let name = op
                .value
                .as_deref()
                .ok_or("purchase requires a product name")?;
            machine.purchase(name)?;
        }
        OpKind::Eject => {
            let coins = machine.eject_coins()?;
            let total: u32 = coins.iter().map(|d| d.pence()).sum();
            let listing: Vec<String> = coins.iter().map(|d| d.to_string()).collect();
            println!("Ejected {}: {}", currency::pounds(total), listing.join(" "));
        }
        OpKind::Balance => {
            println!("Machine balance: {}", currency::pounds(machine.balance()));
        }
    }
    Ok(())
}
