//! # `sbf split` — break a barcode into its components

use sbf_core::SangerBarcode;

/// Arguments for the `split` subcommand.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// A barcode in any format.
    pub input: String,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Print the prefix (both forms), number, and internal checksum.
pub fn run(args: &SplitArgs) -> anyhow::Result<()> {
    tracing::debug!(input = %args.input, "splitting barcode");

    let barcode = SangerBarcode::from_user_input(&args.input);
    let (Some(prefix), Some(number), Some(checksum)) =
        (barcode.prefix(), barcode.number(), barcode.checksum())
    else {
        anyhow::bail!("{:?} is not a parseable barcode", args.input);
    };

    if args.json {
        let output = serde_json::json!({
            "prefix": prefix.human(),
            "machine_prefix": prefix.machine_s(),
            "number": number,
            "checksum": checksum.human().to_string(),
            "valid": barcode.valid(),
        });
        println!("{output}");
    } else {
        println!("prefix:   {} ({})", prefix.human(), prefix.machine_s());
        println!("number:   {number}");
        println!("checksum: {checksum}");
        println!("valid:    {}", barcode.valid());
    }
    Ok(())
}
