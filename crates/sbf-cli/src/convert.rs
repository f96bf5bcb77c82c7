//! # `sbf convert` — convert between barcode representations

use sbf_core::SangerBarcode;

/// Arguments for the `convert` subcommand.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// A barcode in any format: human (`PR1234K`), human without its
    /// checksum (`PR1234`), or machine (`4500001234757`).
    pub input: String,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse free-form input and print both representations.
pub fn run(args: &ConvertArgs) -> anyhow::Result<()> {
    tracing::debug!(input = %args.input, "converting barcode");

    let barcode = SangerBarcode::from_user_input(&args.input);
    let (Some(human), Ok(machine)) = (barcode.human_barcode(), barcode.machine_barcode()) else {
        anyhow::bail!("{:?} is not a valid barcode in any recognised format", args.input);
    };

    if args.json {
        let output = serde_json::json!({
            "human_barcode": human,
            "machine_barcode": machine,
        });
        println!("{output}");
    } else {
        println!("human:   {human}");
        println!("machine: {machine}");
    }
    Ok(())
}
