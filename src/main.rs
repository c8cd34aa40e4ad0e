use clap::Parser;
use env_logger::Env;
use log::error;
use miette::{IntoDiagnostic, Result};
use paybridge::application::processor::PaymentProcessor;
use paybridge::domain::amount::Amount;
use paybridge::domain::payment::PaymentRoute;
use paybridge::domain::ports::PaymentHandlerBox;
use paybridge::infrastructure::legacy::{ConsoleLegacySystem, LegacyPaymentAdapter};
use paybridge::infrastructure::modern::ModernPaymentGateway;
use paybridge::interfaces::csv::payment_reader::PaymentReader;
use rust_decimal_macros::dec;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (route,amount). Runs the built-in
    /// demonstration when omitted.
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let processor = PaymentProcessor::new();

    // Create boxed instances for each side of the capability
    let modern: PaymentHandlerBox = Box::new(ModernPaymentGateway::new());
    let legacy: PaymentHandlerBox =
        Box::new(LegacyPaymentAdapter::new(Box::new(ConsoleLegacySystem::new())));

    match cli.input {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let reader = PaymentReader::new(file);
            for result in reader.instructions() {
                match result {
                    Ok(instruction) => {
                        let handler = match instruction.route {
                            PaymentRoute::Modern => modern.as_ref(),
                            PaymentRoute::Legacy => legacy.as_ref(),
                        };
                        match Amount::new(instruction.amount) {
                            Ok(amount) => {
                                if let Err(e) = processor.process_payment(handler, amount).await {
                                    error!("Error processing payment: {e}");
                                }
                            }
                            Err(e) => {
                                error!("Error processing payment: {e}");
                            }
                        }
                    }
                    Err(e) => {
                        error!("Error reading payment: {e}");
                    }
                }
            }
        }
        None => {
            // Demonstration: the same processor drives a native handler and
            // the adapter wrapping the legacy backend.
            processor
                .process_payment(
                    modern.as_ref(),
                    Amount::new(dec!(150.00)).into_diagnostic()?,
                )
                .await
                .into_diagnostic()?;

            processor
                .process_payment(
                    legacy.as_ref(),
                    Amount::new(dec!(200.00)).into_diagnostic()?,
                )
                .await
                .into_diagnostic()?;
        }
    }

    Ok(())
}
